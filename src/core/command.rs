use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

// Command runs one catalog action against a service; implementations stay synchronous.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
    }

    #[test]
    fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::validation("year", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("io", None)), CommandError::Runtime { .. }));
    }
}
