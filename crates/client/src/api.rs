//! HTTP client for the lawyer directory endpoints.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_types::{
    ApiConfig, AppError, ConnectionListResponse, ConnectionRecord, ConsultationRequest,
    LawyerListResponse, LawyerProfile, OutgoingRequest, OutgoingRequestListResponse,
};
use tracing::info;

use crate::error::ClientError;

pub const LAWYER_LIST_PATH: &str = "/api/lawyers/list";
pub const MY_CONNECTIONS_PATH: &str = "/api/lawyers/connections/me";
pub const MY_REQUESTS_PATH: &str = "/api/lawyers/my-requests";
pub const REQUEST_PATH: &str = "/api/lawyers/request";

/// Backend operations the directory page depends on.
///
/// Futures are not `Send` so the same trait serves the browser build.
#[async_trait(?Send)]
pub trait LawyerApi {
    async fn list_lawyers(&self) -> Result<Vec<LawyerProfile>, ClientError>;

    async fn my_connections(&self) -> Result<Vec<ConnectionRecord>, ClientError>;

    async fn my_requests(&self) -> Result<Vec<OutgoingRequest>, ClientError>;

    async fn request_consultation(&self, request: &ConsultationRequest)
        -> Result<(), ClientError>;
}

/// reqwest-backed implementation of [`LawyerApi`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// `base_url` should be like `http://localhost:5000`; a trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_token(config.token.clone())
    }

    /// Attach a bearer token to every request. Blank tokens are ignored.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        let resp = self.authorize(self.client.get(&url)).send().await?;
        let resp = check_status(resp).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Turn a non-success response into [`ClientError::Api`].
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        error: AppError::from_response(status.as_u16(), &body),
    })
}

#[async_trait(?Send)]
impl LawyerApi for HttpClient {
    #[tracing::instrument(skip(self))]
    async fn list_lawyers(&self) -> Result<Vec<LawyerProfile>, ClientError> {
        let resp: LawyerListResponse = self.get_json(LAWYER_LIST_PATH).await?;
        info!(count = resp.lawyers.len(), "fetched lawyer roster");
        Ok(resp.lawyers)
    }

    #[tracing::instrument(skip(self))]
    async fn my_connections(&self) -> Result<Vec<ConnectionRecord>, ClientError> {
        let resp: ConnectionListResponse = self.get_json(MY_CONNECTIONS_PATH).await?;
        info!(count = resp.connections.len(), "fetched connections");
        Ok(resp.connections)
    }

    #[tracing::instrument(skip(self))]
    async fn my_requests(&self) -> Result<Vec<OutgoingRequest>, ClientError> {
        let resp: OutgoingRequestListResponse = self.get_json(MY_REQUESTS_PATH).await?;
        info!(count = resp.requests.len(), "fetched outgoing requests");
        Ok(resp.requests)
    }

    #[tracing::instrument(skip(self, request), fields(to = %request.to))]
    async fn request_consultation(
        &self,
        request: &ConsultationRequest,
    ) -> Result<(), ClientError> {
        let url = self.url(REQUEST_PATH);
        let resp = self
            .authorize(self.client.post(&url))
            .json(request)
            .send()
            .await?;
        check_status(resp).await?;
        info!("consultation request accepted");
        Ok(())
    }
}
