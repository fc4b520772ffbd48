#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::RosterConfig;
pub use self::core::{
    greeting::{greet, GREETING_COMPLETED},
    math::add,
};
pub use domain::model::{Person, PersonDetails, ADULT_AGE};
pub use utils::error::{GreeterError, Result};
