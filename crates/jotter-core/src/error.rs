//! Error taxonomy shared by the API service and the persistence adapter.

/// Common result type for note operations
pub type NotesResult<T> = Result<T, NotesError>;

/// Note operation errors
///
/// `Validation` and `NotFound` are the client's fault and carry the message
/// returned to the caller verbatim. `Store` and `Config` are the server's
/// fault; their detail is logged but never leaks past the API boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotesError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotesError {
    /// True for errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, NotesError::Validation(_) | NotesError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_display_their_message_verbatim() {
        let err = NotesError::Validation("Title and content are required".to_string());
        assert_eq!(err.to_string(), "Title and content are required");
        assert!(err.is_client_error());

        let err = NotesError::NotFound("Note not found".to_string());
        assert_eq!(err.to_string(), "Note not found");
        assert!(err.is_client_error());
    }

    #[test]
    fn server_errors_are_not_client_errors() {
        assert!(!NotesError::Store("connection reset".to_string()).is_client_error());
        assert!(!NotesError::Config("missing variable".to_string()).is_client_error());
    }
}
