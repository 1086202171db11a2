//! HTTP client for the task service.

use serde_json::Value;

use super::error::{ApiError, ApiErrorKind, ApiResult, payload_field};
use super::types::{
    LoginRequest, LoginResponse, RegisterRequest, TodoCreateRequest, TodoRecord, TodoUpdateRequest,
};
use crate::session::Session;

/// Fallback shown when a login failure carries no usable message.
const LOGIN_FALLBACK: &str = "Invalid credentials or server error.";
/// Fallback shown when a registration failure carries no usable message.
const REGISTER_FALLBACK: &str = "Could not create the account.";

/// Client for the task service API.
///
/// Holds the HTTP connection pool and the session whose bearer token is
/// attached to every authenticated call.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Creates a new client. `base_url` is expected to be validated upstream
    /// (see `Config::resolve_base_url`) and carries no trailing slash.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Authenticates against the fixed login endpoint and returns the bearer
    /// token. The caller is responsible for storing it via
    /// [`Session::set_token`].
    ///
    /// Failure message chain: payload `message` field, then a fixed fallback.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let url = format!("{}/login_check", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|source| ApiError::network(LOGIN_FALLBACK, source.to_string()))?;

        let status = response.status();
        let body = read_body(response).await?;
        if !status.is_success() {
            let message = payload_field(&body, "message")
                .unwrap_or_else(|| LOGIN_FALLBACK.to_string());
            return Err(ApiError::new(ApiErrorKind::Http, message).with_details(body));
        }

        let parsed: LoginResponse = serde_json::from_str(&body)
            .map_err(|source| ApiError::parse(LOGIN_FALLBACK, source.to_string()))?;
        tracing::debug!("login succeeded");
        Ok(parsed.token)
    }

    /// Creates an account and returns the created-account payload.
    ///
    /// Failure message chain, most specific first: payload `error` field,
    /// payload `message` field, the transport error's own message, the
    /// stringified payload, then a fixed fallback. Callers display whichever
    /// string this yields.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<Value> {
        let url = format!("{}/register", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await
            .map_err(|source| {
                // No response payload to probe: the transport error's own
                // message is the most specific string available.
                ApiError::new(ApiErrorKind::Network, source.to_string())
            })?;

        let status = response.status();
        let body = read_body(response).await?;
        if !status.is_success() {
            let message = payload_field(&body, "error")
                .or_else(|| payload_field(&body, "message"))
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        REGISTER_FALLBACK.to_string()
                    } else {
                        body.clone()
                    }
                });
            return Err(ApiError::new(ApiErrorKind::Http, message).with_details(body));
        }

        tracing::debug!("registration succeeded");
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    /// `GET /todos` with bearer authentication.
    pub async fn list_todos(&self) -> ApiResult<Vec<TodoRecord>> {
        let url = format!("{}/todos", self.base_url);
        let request = self.http.get(&url).bearer_auth(self.bearer_token()?);
        let (status, body) = send(request).await?;
        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body)
            .map_err(|source| ApiError::parse("Could not decode the task list.", source.to_string()))
    }

    /// `POST /todos` with bearer authentication; returns the created record
    /// (carrying the server-assigned id).
    pub async fn create_todo(&self, title: &str, description: &str) -> ApiResult<TodoRecord> {
        let url = format!("{}/todos", self.base_url);
        let request = self
            .http
            .post(&url)
            .bearer_auth(self.bearer_token()?)
            .json(&TodoCreateRequest { title, description });
        let (status, body) = send(request).await?;
        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|source| {
            ApiError::parse("Could not decode the created task.", source.to_string())
        })
    }

    /// `PUT /todos/{id}` with bearer authentication. The response body is
    /// ignored; only the status matters.
    pub async fn update_todo(
        &self,
        id: &str,
        title: &str,
        description: &str,
        completed: bool,
    ) -> ApiResult<()> {
        let url = format!("{}/todos/{id}", self.base_url);
        let request = self
            .http
            .put(&url)
            .bearer_auth(self.bearer_token()?)
            .json(&TodoUpdateRequest {
                title,
                description,
                completed,
            });
        let (status, body) = send(request).await?;
        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16(), &body));
        }
        Ok(())
    }

    /// `DELETE /todos/{id}` with bearer authentication.
    pub async fn delete_todo(&self, id: &str) -> ApiResult<()> {
        let url = format!("{}/todos/{id}", self.base_url);
        let request = self.http.delete(&url).bearer_auth(self.bearer_token()?);
        let (status, body) = send(request).await?;
        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16(), &body));
        }
        Ok(())
    }

    fn bearer_token(&self) -> ApiResult<String> {
        self.session.token().ok_or_else(ApiError::not_authenticated)
    }
}

async fn send(request: reqwest::RequestBuilder) -> ApiResult<(reqwest::StatusCode, String)> {
    let response = request
        .send()
        .await
        .map_err(|source| ApiError::network(source.to_string(), source.to_string()))?;
    let status = response.status();
    let body = read_body(response).await?;
    Ok((status, body))
}

async fn read_body(response: reqwest::Response) -> ApiResult<String> {
    response
        .text()
        .await
        .map_err(|source| ApiError::network(source.to_string(), source.to_string()))
}
