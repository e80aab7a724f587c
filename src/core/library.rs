use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_create_validation_error() {
        let err = LibraryError::validation("test", Some("year".to_string()));
        assert!(matches!(err, LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_runtime_error() {
        let err = LibraryError::runtime("test", None);
        assert!(matches!(err, LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = LibraryError::from(std::io::Error::new(ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, LibraryError::Runtime{ reason_code: Some(_), .. }));
    }

    #[test]
    fn test_should_format_error() {
        assert_eq!("broken Some(\"io\")", LibraryError::runtime("broken", Some("io".to_string())).to_string());
        assert_eq!("bad None", LibraryError::validation("bad", None).to_string());
    }
}
