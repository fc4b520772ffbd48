use crate::domain::ports::{LineSink, StdoutSink};
use crate::utils::error::Result;

pub const GREETING_COMPLETED: &str = "Greeting completed";

pub fn greeting_line(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Prints `Hello, {name}!` to stdout and returns `GREETING_COMPLETED`.
///
/// The name is not validated. A failed stdout write is logged and the
/// status text is still returned.
pub fn greet(name: &str) -> &'static str {
    match greet_to(&mut StdoutSink, name) {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!("Failed to write greeting for {}: {}", name, e);
            GREETING_COMPLETED
        }
    }
}

pub fn greet_to<S: LineSink + ?Sized>(sink: &mut S, name: &str) -> Result<&'static str> {
    tracing::debug!(name, "greet");
    sink.write_line(&greeting_line(name))?;
    Ok(GREETING_COMPLETED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GreeterError;

    struct BrokenSink;

    impl LineSink for BrokenSink {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    #[test]
    fn test_greet_to_writes_line_and_returns_status() {
        let mut lines: Vec<String> = Vec::new();
        let status = greet_to(&mut lines, "World").unwrap();

        assert_eq!(status, "Greeting completed");
        assert_eq!(lines, vec!["Hello, World!".to_string()]);
    }

    #[test]
    fn test_greet_accepts_any_text() {
        let mut lines: Vec<String> = Vec::new();
        for name in ["", "  ", "Zoë", "Alice and Bob"] {
            assert_eq!(greet_to(&mut lines, name).unwrap(), GREETING_COMPLETED);
        }
        assert_eq!(lines[0], "Hello, !");
        assert_eq!(lines[2], "Hello, Zoë!");
        assert_eq!(lines[3], "Hello, Alice and Bob!");
    }

    #[test]
    fn test_greet_returns_status() {
        assert_eq!(greet("stdout"), GREETING_COMPLETED);
    }

    #[test]
    fn test_greet_to_surfaces_write_failure() {
        let result = greet_to(&mut BrokenSink, "World");
        assert!(matches!(result, Err(GreeterError::IoError(_))));
    }
}
