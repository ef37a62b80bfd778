//! Errors surfaced by the client
//!
//! Failures from the daemon itself arrive as `Daemon { code, .. }` carrying
//! the daemon's application error code (4000 validation, 4001 not found,
//! 5000 internal, 5002 system). Everything below the JSON-RPC layer folds
//! into `Connect` or `Transport`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SdkError>;

#[derive(Debug, Error)]
pub enum SdkError {
    /// The HTTP client could not be built or needs to be rebuilt
    #[error("failed to connect to daemon: {0}")]
    Connect(String),

    /// The daemon answered with a JSON-RPC error object
    #[error("daemon error {code}: {message}")]
    Daemon { code: i32, message: String },

    /// The request never produced a well-formed response
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("response decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl SdkError {
    /// Application error code reported by the daemon, if any
    pub fn daemon_code(&self) -> Option<i32> {
        match self {
            SdkError::Daemon { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        use jsonrpsee::core::ClientError;

        match e {
            ClientError::Call(err) => SdkError::Daemon {
                code: err.code(),
                message: err.message().to_string(),
            },
            ClientError::RestartNeeded(e) => SdkError::Connect(e.to_string()),
            other => SdkError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::ClientError;
    use jsonrpsee::types::ErrorObjectOwned;

    #[test]
    fn test_call_errors_keep_the_daemon_code() {
        let call = ClientError::Call(ErrorObjectOwned::owned(5002, "spawn failed", None::<()>));
        let err = SdkError::from(call);

        assert_eq!(err.daemon_code(), Some(5002));
        assert_eq!(err.to_string(), "daemon error 5002: spawn failed");
    }

    #[test]
    fn test_non_call_errors_have_no_daemon_code() {
        let err = SdkError::Transport("socket closed".into());
        assert_eq!(err.daemon_code(), None);
    }
}
