//! Request and status handling shared by every Stats API endpoint.
//!
//! Status mapping:
//! - 404 → [`StatsError::NotFound`] (unknown team or person id)
//! - 429 → [`StatsError::RateLimited`], honouring `Retry-After` (60 s default)
//! - any other non-success → [`StatsError::Api`] with the body as message

use serde::de::DeserializeOwned;

use crate::StatsClient;
use crate::error::StatsError;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

impl StatsClient {
    /// GET `{base_url}{path}` and decode the JSON body.
    ///
    /// `path` carries its own query string; every parameter the client sends
    /// is numeric or a fixed literal, so nothing needs encoding.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StatsError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "stats api request");
        let resp = self.http.get(&url).send().await?;
        let resp = check_response(resp, path).await?;
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| StatsError::Parse(format!("{path}: {e}")))
    }
}

/// Map error statuses onto [`StatsError`], passing successes through.
pub async fn check_response(
    resp: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, StatsError> {
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(StatsError::NotFound(resource.to_string()));
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(StatsError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(StatsError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn rate_limited(retry_after: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", retry_after)
                .body("")
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let err = check_response(mock_response(404, ""), "/people/-1")
            .await
            .unwrap_err();
        assert!(matches!(err, StatsError::NotFound(ref r) if r == "/people/-1"));
    }

    #[tokio::test]
    async fn rate_limit_reads_header() {
        let err = check_response(rate_limited(" 15 "), "/teams").await.unwrap_err();
        assert!(matches!(err, StatsError::RateLimited { retry_after_secs: 15 }));
    }

    #[tokio::test]
    async fn rate_limit_defaults_when_header_unusable() {
        let err = check_response(rate_limited("soon"), "/teams").await.unwrap_err();
        assert!(matches!(err, StatsError::RateLimited { retry_after_secs: 60 }));
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let err = check_response(mock_response(503, "maintenance"), "/teams")
            .await
            .unwrap_err();
        assert!(
            matches!(err, StatsError::Api { status: 503, ref message } if message == "maintenance")
        );
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}"), "/teams").await.is_ok());
    }
}
