//! Client for the news summarizer API.
//!
//! Requests go through the [`HttpClient`] seam so the same [`ApiClient`] drives the
//! browser `fetch` transport in the app and a recording double in tests.

pub mod fetch;
pub mod types;

use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Article;

pub use fetch::FetchClient;
pub use types::{
    rejection_message, ArticlesPayload, ErrorBody, ErrorDetail, LoginOutcome, LoginRequest,
    UserSummary, LOGIN_FAILED_FALLBACK,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Transport-neutral request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send and accept cookies on cross-origin requests
    pub include_credentials: bool,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            include_credentials: false,
        }
    }

    /// `POST` with a JSON body and matching content type.
    pub fn post_json<T: Serialize>(url: impl Into<String>, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Encode)?;
        Ok(Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
            include_credentials: false,
        })
    }

    #[must_use]
    pub fn with_credentials(mut self) -> Self {
        self.include_credentials = true;
        self
    }
}

/// Status and raw body text of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends a request and yields the response, whatever its status.
///
/// `?Send` because browser futures hold `JsValue`s.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Typed operations against the API.
#[derive(Debug, Clone)]
pub struct ApiClient<C = FetchClient> {
    config: AppConfig,
    http: C,
}

impl ApiClient<FetchClient> {
    /// Client backed by the browser `fetch` API.
    pub fn browser(config: AppConfig) -> Self {
        Self::new(config, FetchClient)
    }
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(config: AppConfig, http: C) -> Self {
        Self { config, http }
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &C {
        &self.http
    }

    /// Submit credentials.
    ///
    /// Only transport failures are errors; any response from the server becomes a
    /// [`LoginOutcome`].
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginOutcome, ApiError> {
        let request = HttpRequest::post_json(self.config.login_url(), credentials)?.with_credentials();
        log::debug!("submitting login for {}", credentials.email);

        let response = self.http.send(request).await?;

        if !response.is_success() {
            let message = rejection_message(ErrorBody::parse(&response.body).as_ref());
            log::warn!("login rejected with status {}: {message}", response.status);
            return Ok(LoginOutcome::Rejected {
                status: response.status,
                message,
            });
        }

        let summary = serde_json::from_str::<UserSummary>(&response.body).ok();
        match &summary {
            Some(user) => log::info!("logged in as {}", user.email),
            None => log::info!("login accepted"),
        }
        Ok(LoginOutcome::Accepted(summary))
    }

    /// List the articles of a category.
    pub async fn fetch_articles(&self, category: &str) -> Result<Vec<Article>, ApiError> {
        let response = self
            .http
            .send(HttpRequest::get(self.config.articles_url(category)))
            .await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        let payload: ArticlesPayload = serde_json::from_str(&response.body)?;
        let articles = payload.into_articles();
        log::info!("fetched {} articles for {category:?}", articles.len());
        Ok(articles)
    }
}
