pub mod greeting;
pub mod math;
