use std::collections::HashMap;
use std::time::Duration;

use web_sys::RequestCredentials;

/// Paths of the backend endpoints the client talks to.
pub mod endpoints {
    use crate::id::MemberId;

    pub const LOGIN: &str = "/api/login";
    pub const LOGOUT: &str = "/api/logout";
    pub const VALIDATE_SESSION: &str = "/api/validateSession";
    pub const CHECK_ADMIN: &str = "/api/checkAdmin";
    pub const MEMBERS: &str = "/api/members";

    /// ```
    /// use portal::{api::endpoints, id::MemberId};
    ///
    /// let id = MemberId::from("m-7");
    /// assert_eq!(endpoints::member_qualifications(&id), "/api/member/m-7/qualifications");
    /// ```
    pub fn member_qualifications(id: &MemberId) -> String {
        format!("/api/member/{id}/qualifications")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(serde_json::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
    #[error("{0:?} requests cannot carry a body")]
    BodyNotAllowed(HttpMethod),
    #[error("No response within {0:?}")]
    TimedOut(Duration),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A fully read HTTP response: status plus the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Maps a status code onto the error taxonomy, passing 2xx through.
pub fn check_status(status: u16, endpoint: &str) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        400 => Err(ApiError::BadRequest(format!("Bad request to {endpoint}"))),
        401 => Err(ApiError::UnauthorizedAccess),
        403 => Err(ApiError::ForbiddenAccess),
        404 => Err(ApiError::NotFound(format!("{endpoint} not found"))),
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

fn parse_json_response<T>(response: &ApiResponse) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(&response.body).map_err(ApiError::ParseError)
}

// Combined function for the common pattern
fn handle_json_response<T>(response: ApiResponse, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    check_status(response.status, endpoint)?;
    parse_json_response(&response)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    // Core request methods
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<ApiResponse>;

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<ApiResponse>
    where
        B: serde::Serialize;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response, endpoint)
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_json_response(response, endpoint)
    }

    /// GET where only the status matters; the body is ignored.
    async fn get_status(&self, endpoint: &str) -> ApiResult<()> {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        check_status(response.status, endpoint)
    }

    /// POST where only the status matters; the body is ignored.
    async fn post_status<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        check_status(response.status, endpoint)
    }
}

/// [`ApiClient`] backed by the browser's `fetch`, always sending cookies.
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url.trim_end_matches('/'), endpoint)
    }
}

async fn read_response(response: gloo_net::http::Response) -> ApiResult<ApiResponse> {
    let status = response.status();
    let body = response.text().await.map_err(ApiError::NetworkError)?;
    Ok(ApiResponse { status, body })
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<ApiResponse> {
        let url = self.url(endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
        };

        let response = request
            .headers(self.headers.clone().into())
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        read_response(response).await
    }

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<ApiResponse>
    where
        B: serde::Serialize,
    {
        let url = self.url(endpoint);

        let request = match method {
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Get => return Err(ApiError::BodyNotAllowed(method)),
        };

        let response = request
            .headers(self.headers.clone().into())
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        read_response(response).await
    }
}
