use thiserror::Error;

/// Every way a classification attempt can fail. Each request terminates in
/// exactly one of these or a successful prediction, never both.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to encode snapshot as JPEG: {0}")]
    Encoding(String),

    #[error("predict request failed")]
    Transport(#[from] reqwest::Error),

    #[error("could not parse prediction from response: {0}")]
    ResponseFormat(String),

    #[error("no data received from server")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_displays_detail() {
        let error = ClassifyError::Encoding("buffer length mismatch".to_string());
        assert_eq!(
            format!("{}", error),
            "failed to encode snapshot as JPEG: buffer length mismatch"
        );
    }

    #[test]
    fn test_empty_response_display() {
        let error = ClassifyError::EmptyResponse;
        assert_eq!(format!("{}", error), "no data received from server");
    }
}
