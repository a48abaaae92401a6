use std::fmt::Formatter;

use actix_web::{HttpResponse, ResponseError};
use actix_web::http::StatusCode;

#[derive(Debug)]
pub enum LookupError {
    InvalidUrl(String),
    Client(reqwest::Error),
    Timeout(reqwest::Error),
    Unreachable(reqwest::Error),
    UpstreamStatus(reqwest::StatusCode),
    InvalidBody(serde_json::Error)
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            LookupError::InvalidUrl(url) => {
                format!("Invalid upstream url: {}", url)
            },
            LookupError::Client(inner) => {
                format!("Could not build http client: {}", inner)
            },
            LookupError::Timeout(inner) => {
                format!("Upstream timed out: {}", inner)
            },
            LookupError::Unreachable(inner) => {
                format!("Upstream unreachable: {}", inner)
            },
            LookupError::UpstreamStatus(status) => {
                format!("Upstream answered {}", status)
            },
            LookupError::InvalidBody(inner) => {
                format!("Invalid address data: {}", inner)
            }
        };
        write!(f, "Lookup error: {}", msg)
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LookupError::Timeout(error)
        } else if error.is_builder() {
            LookupError::Client(error)
        } else {
            match error.status() {
                Some(status) => LookupError::UpstreamStatus(status),
                None => LookupError::Unreachable(error),
            }
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::InvalidBody(error)
    }
}

impl ResponseError for LookupError {
    fn status_code(&self) -> StatusCode {
        match self {
            LookupError::InvalidUrl(_) | LookupError::Client(_) =>
                StatusCode::INTERNAL_SERVER_ERROR,
            LookupError::Timeout(_) =>
                StatusCode::GATEWAY_TIMEOUT,
            LookupError::Unreachable(_)
            | LookupError::UpstreamStatus(_)
            | LookupError::InvalidBody(_) =>
                StatusCode::BAD_GATEWAY,
        }
    }

    // The cause is logged by the handler, callers only get the status.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    use super::LookupError;

    #[test]
    fn test_status_codes() {
        let invalid_url = LookupError::InvalidUrl("mailto:x".into());
        assert_eq!(invalid_url.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = LookupError::UpstreamStatus(reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);

        let body = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(LookupError::from(body).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[actix_rt::test]
    async fn test_error_response_has_no_body() {
        let err = LookupError::UpstreamStatus(reqwest::StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("404"));

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        assert!(body.is_empty());
    }
}
