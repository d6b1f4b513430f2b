//! Shared HTTP helpers for both API clients.
//!
//! Centralizes client construction from [`TransportConfig`] and the
//! non-success → [`ClientError::Api`] check so the API modules stay focused on
//! request construction and response mapping.

use fb_config::TransportConfig;

use crate::error::ClientError;

/// Build the `reqwest` client shared by both APIs.
///
/// # Errors
///
/// Returns [`ClientError::Http`] if the TLS backend cannot be initialized.
pub fn build_client(transport: &TransportConfig) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder().user_agent(transport.user_agent.clone());
    if let Some(timeout) = transport.timeout() {
        builder = builder.timeout(timeout);
    }
    if transport.accept_invalid_certs {
        tracing::warn!("TLS certificate validation is disabled for all API calls");
        builder = builder.danger_accept_invalid_certs(true);
    }
    Ok(builder.build()?)
}

/// Return the response unchanged on success, otherwise
/// [`ClientError::Api`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_owned())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_carries_status_and_body() {
        let resp = mock_response(403, "session expired");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 403, .. }));
        assert_eq!(err.to_string(), "API error (403): session expired");
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(502, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, .. }));
    }

    #[test]
    fn builds_with_insecure_transport() {
        let transport = TransportConfig {
            accept_invalid_certs: true,
            timeout_secs: 0,
            ..TransportConfig::default()
        };
        assert!(build_client(&transport).is_ok());
    }
}
