use crate::models::{chart_data::ChartData, error::AppError};
use reqwest::{StatusCode, Url};

/// HTTP client for chart data documents.
pub struct DataClient {
    http: reqwest::Client,
}

impl DataClient {
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Fetches and parses a chart data document.
    pub async fn fetch(&self, url: Url) -> Result<ChartData, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse chart data: {e}")))
    }
}

/// Fetches chart data from `url` once.
///
/// Relative URLs are resolved against the current page. A 429 surfaces as
/// [`AppError::RateLimited`] for the caller to report.
pub async fn fetch_chart_data(url: &str) -> Result<ChartData, AppError> {
    let url = page_relative_url(url)?;
    DataClient::new()?.fetch(url).await
}

fn page_relative_url(url: &str) -> Result<Url, AppError> {
    if let Ok(absolute) = Url::parse(url) {
        return Ok(absolute);
    }

    let base = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| {
            AppError::ConfigError(format!("Cannot resolve {url} outside a browser page"))
        })?;

    resolve_url(&base, url)
}

/// Joins `url` onto `base` the way a browser resolves a link.
pub fn resolve_url(base: &str, url: &str) -> Result<Url, AppError> {
    Url::parse(base)
        .and_then(|base| base.join(url))
        .map_err(|e| AppError::ConfigError(format!("Invalid data URL {url}: {e}")))
}

fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        429 => AppError::RateLimited,
        404 => AppError::NotFound(format!("Chart data not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_url() {
        let url = resolve_url("https://example.com/dash/index.html", "data/sample.json").unwrap();
        assert_eq!(url.as_str(), "https://example.com/dash/data/sample.json");
    }

    #[test]
    fn test_resolve_root_relative_url() {
        let url = resolve_url("https://example.com/dash/", "/data.json").unwrap();
        assert_eq!(url.as_str(), "https://example.com/data.json");
    }

    #[test]
    fn test_resolve_url_bad_base() {
        assert!(matches!(
            resolve_url("not a url", "data.json"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_absolute_url_skips_page_lookup() {
        let url = page_relative_url("https://example.com/data.json").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        ));
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, "missing"),
            AppError::NotFound(_)
        ));
        let err = error_for_status(StatusCode::BAD_GATEWAY, "upstream");
        assert!(err.to_string().contains("Server error"));
    }
}
