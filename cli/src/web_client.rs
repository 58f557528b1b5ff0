use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    header::{COOKIE, SET_COOKIE},
    StatusCode,
};
use serde::{Deserialize, Serialize};
use storefront_core::{FilterRequest, PageResult};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP 401; the saved session is no longer valid
    #[error("{0}")]
    Unauthorized(String),
    #[error("Something went wrong (HTTP {0})")]
    RequestFailed(StatusCode),
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),
    #[error("Unexpected response from server")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
}

/// HTTP client that attaches the session cookie to every request.
///
/// Each call is a single attempt; failures are classified and returned as-is.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Option<String>) -> Result<Self, FetchError> {
        let http = Client::builder().build().map_err(FetchError::Network)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let request = match &self.session {
            Some(session) => request.header(COOKIE, format!("{}={}", SESSION_COOKIE, session)),
            None => request,
        };

        let response = request.send().map_err(FetchError::Network)?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().map_err(FetchError::Network)?;
        Err(classify(status, &body))
    }

    /// Log in and return the new session id
    pub fn login(&self, username: &str, password: &str) -> Result<String, FetchError> {
        let response = self.send(
            self.http
                .post(self.url("/api/login"))
                .json(&LoginRequest { username, password }),
        )?;

        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(session_from_set_cookie)
            .ok_or(FetchError::RequestFailed(response.status()))
    }

    pub fn logout(&self) -> Result<(), FetchError> {
        self.send(self.http.post(self.url("/api/logout")))?;
        Ok(())
    }

    pub fn account(&self) -> Result<Account, FetchError> {
        self.send(self.http.get(self.url("/api/account")))?
            .json()
            .map_err(FetchError::Decode)
    }

    pub fn products(&self) -> Result<PageResult, FetchError> {
        self.send(self.http.get(self.url("/api/products")))?
            .json()
            .map_err(FetchError::Decode)
    }

    pub fn filter_products(&self, filters: &FilterRequest) -> Result<PageResult, FetchError> {
        self.send(self.http.post(self.url("/api/products/filter")).json(filters))?
            .json()
            .map_err(FetchError::Decode)
    }
}

/// Map a non-2xx response onto a [`FetchError`]
pub fn classify(status: StatusCode, body: &[u8]) -> FetchError {
    if status == StatusCode::UNAUTHORIZED {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "Unauthorized".to_string());
        return FetchError::Unauthorized(message);
    }

    FetchError::RequestFailed(status)
}

/// Pull the session id out of a `Set-Cookie` header value.
///
/// An empty value (the server clearing the cookie) yields `None`.
pub fn session_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;

    if name.trim() == SESSION_COOKIE && !value.trim().is_empty() {
        Some(value.trim().to_string())
    } else {
        None
    }
}
