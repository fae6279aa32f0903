//! Errors that can occur when talking to the Plaid API.
//!
//! Responses are only considered to be errors if they fall outside of the expected user flow. By
//! that definition, all non 2XX HTTP response codes are errors, while an MFA challenge or a
//! product that isn't enabled are regular [`Response`](crate::Response)s.

use reqwest::StatusCode;
use thiserror::Error;

/// Represents every failure of a request, from encoding the payload to decoding the response.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a status code outside of the 2XX range.
    #[error("Received unsuccessful status code {status}: {body}")]
    UnsuccessfulResponse {
        /// The status code of the response.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// The response body did not match any of the shapes expected for the product.
    #[error("Could not decode {product} response ({source}): {body}")]
    InvalidResponse {
        /// Description of the product the response was decoded for.
        product: &'static str,
        /// The raw response body.
        body: String,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be delivered, e.g. connection refused, TLS failure or timeout.
    #[error(transparent)]
    Http(#[from] reqwest_middleware::Error),

    /// Reading or writing the request or response bytes failed locally.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The payload breaks its contract, e.g. an MFA answer that does not fit the challenge. Nothing
    /// was sent.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Something is wrong with `plaid-api` itself rather than with the caller or the API.
    #[error("`plaid-api` internal error: {0}")]
    InternalError(String),
}

impl Error {
    /// Returns `true` when the failure came from the remote service or the network, in which case
    /// trying again later or with other input may succeed. Payload and internal errors are
    /// programming errors and will fail the same way every time.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnsuccessfulResponse { .. } | Error::Http(_) | Error::Io(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(reqwest_middleware::Error::Reqwest(e))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn io_error_keeps_its_cause() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof").into();

        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_response_exposes_source_and_body() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = Error::InvalidResponse {
            product: "Connect",
            body: "\"nope\"".to_string(),
            source,
        };

        assert!(err.source().is_some());
        let message = err.to_string();
        assert!(message.contains("Connect"));
        assert!(message.contains("\"nope\""));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn unsuccessful_response_display() {
        let err = Error::UnsuccessfulResponse {
            status: StatusCode::UNAUTHORIZED,
            body: "{}".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Received unsuccessful status code 401 Unauthorized: {}"
        );
    }
}
