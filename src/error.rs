//! Application error type.
//!
//! Scoring code never fails: missing data and degenerate thresholds degrade to
//! documented fallback values. Only configuration loading and file I/O surface
//! an `AppError`, which carries the process exit code the binary should use.

/// Invalid user input or configuration (bad file, bad JSON, failed validation).
pub const EXIT_INPUT: u8 = 2;
/// Input was readable but contained nothing usable.
pub const EXIT_NO_DATA: u8 = 3;
/// Internal failure (export write, evaluator fault surfaced to the caller).
pub const EXIT_INTERNAL: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(EXIT_NO_DATA, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EXIT_INTERNAL, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_exit_codes() {
        assert_eq!(AppError::input("x").exit_code(), EXIT_INPUT);
        assert_eq!(AppError::no_data("x").exit_code(), EXIT_NO_DATA);
        assert_eq!(AppError::internal("boom").to_string(), "boom");
    }
}
