use super::{AnalyticsError, ConfigError, FlashcardError, OutputError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for AnalyticsError {
    fn from(message: &'static str) -> Self {
        AnalyticsError::TestExpectation { message }
    }
}

impl From<String> for AnalyticsError {
    fn from(value: String) -> Self {
        AnalyticsError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for OutputError {
    fn from(message: &'static str) -> Self {
        OutputError::TestExpectation { message }
    }
}

impl From<String> for OutputError {
    fn from(value: String) -> Self {
        OutputError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for FlashcardError {
    fn from(message: &'static str) -> Self {
        FlashcardError::TestExpectation { message }
    }
}

impl From<String> for FlashcardError {
    fn from(value: String) -> Self {
        FlashcardError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
