use std::fmt;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_EMAIL: &str = "Invalid email address";

/// User-correctable input problem, reported back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub fields: Vec<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            message: message.into(),
            fields,
        }
    }

    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::new(MISSING_REQUIRED_FIELDS, fields)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(value: validator::ValidationErrors) -> Self {
        let field_errors = value.field_errors();

        let mut missing = Vec::new();
        let mut malformed = Vec::new();

        for (field, errors) in field_errors {
            if errors
                .iter()
                .any(|e| e.code == "length" || e.code == "required")
            {
                missing.push(field.to_string());
            } else {
                malformed.push(field.to_string());
            }
        }

        missing.sort();
        malformed.sort();

        if !missing.is_empty() {
            return Self::missing_fields(missing);
        }

        let message = if malformed.iter().any(|f| f == "email") {
            INVALID_EMAIL
        } else {
            "Invalid input"
        };

        Self::new(message, malformed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationError),

    #[error("{0}")]
    Delivery(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validate(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Input {
        #[validate(length(min = 1))]
        name: String,
        #[validate(length(min = 1), email)]
        email: String,
    }

    #[test]
    fn test_missing_fields_take_priority_over_format() {
        let input = Input {
            name: String::new(),
            email: String::new(),
        };

        let err: ValidationError = input.validate().unwrap_err().into();
        assert_eq!(err.message, MISSING_REQUIRED_FIELDS);
        assert_eq!(err.fields, vec!["email".to_owned(), "name".to_owned()]);
    }

    #[test]
    fn test_malformed_email() {
        let input = Input {
            name: "Jane".to_owned(),
            email: "not-an-email".to_owned(),
        };

        let err: ValidationError = input.validate().unwrap_err().into();
        assert_eq!(err.message, INVALID_EMAIL);
        assert_eq!(err.fields, vec!["email".to_owned()]);
    }

    #[test]
    fn test_bail_builds_server_error() {
        fn fails() -> Result<()> {
            bail!("provider {} unreachable", "resend");
        }

        match fails() {
            Err(Error::Server(msg)) => assert_eq!(msg, "provider resend unreachable"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
