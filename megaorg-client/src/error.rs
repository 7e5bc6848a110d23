/// Client error type
///
/// All store operations return `Result<T, ClientError>`. The variants map
/// to the failure taxonomy the UI reacts to: transport problems, non-2xx
/// statuses (with the server's `{message}` body when it sent one), and
/// envelopes the server marked unsuccessful.

use thiserror::Error;

/// Unified client error
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure status
    #[error("server returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose envelope carried `success: false`
    #[error("server rejected the operation")]
    Rejected { message: Option<String> },

    /// Envelope `data` did not have the expected shape
    #[error("could not decode response data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope `data` did not contain the expected record
    #[error("response carried no record")]
    EmptyData,

    /// Local file access failed (avatar upload)
    #[error("could not read attachment: {0}")]
    Attachment(#[from] std::io::Error),
}

impl ClientError {
    /// The server-provided message, when one exists
    ///
    /// Used by the notification layer, which prefers the server's wording
    /// over the generic failure text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => message.as_deref(),
            ClientError::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ClientError::Status {
            status: 409,
            message: Some("El usuario ya existe".to_string()),
        };
        assert_eq!(err.server_message(), Some("El usuario ya existe"));

        let err = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.server_message(), None);

        let err = ClientError::EmptyData;
        assert_eq!(err.server_message(), None);
    }
}
