use thiserror::Error;

/// Errors related to session lookup.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session id: '{0}'")]
    InvalidId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::InvalidId("not-a-uuid".to_string());
        assert_eq!(err.to_string(), "invalid session id: 'not-a-uuid'");
    }
}
