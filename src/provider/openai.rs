//! provider::openai
//!
//! OpenAI provider implementation using the Responses API.
//!
//! # Design
//!
//! A single POST to `{api_base}/v1/responses` with `{model, instructions,
//! input}`; the generated text is the first content block of the first
//! output item. The API base is configurable so tests can point the client
//! at a local mock server and enterprise deployments at a proxy.
//!
//! # Rate Limiting
//!
//! 429 responses surface as `ProviderError::RateLimited`; no automatic
//! retry is performed (caller's responsibility).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{AskRequest, AskResponse, Provider, ProviderError};

/// Default OpenAI API base URL.
const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "comet-cli";

/// OpenAI provider.
pub struct OpenAi {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token for the API
    api_key: String,
    /// API base URL (configurable for proxies and tests)
    api_base: String,
}

// Custom Debug to avoid exposing api_key
impl std::fmt::Debug for OpenAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAi")
            .field("has_api_key", &!self.api_key.is_empty())
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Request body for the Responses API.
#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
}

/// Response body from the Responses API.
#[derive(Debug, Deserialize)]
struct ResponsesBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Error body shape returned by the API, when it is JSON at all.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl OpenAi {
    /// Create a new OpenAI provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a provider with a custom API base URL.
    ///
    /// Used by tests (mock server) and proxy deployments.
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into(),
        }
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| ProviderError::AuthFailed("API key is not a valid header value".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Map a non-success response to a provider error.
    async fn handle_error_response(&self, response: Response) -> ProviderError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or(body),
            Err(e) => e.to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthFailed(message),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
            _ => ProviderError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl Provider for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn ask(&self, request: AskRequest) -> Result<AskResponse, ProviderError> {
        let url = format!("{}/v1/responses", self.api_base);
        let body = ResponsesRequest {
            model: &request.model,
            instructions: &request.instructions,
            input: &request.input,
        };

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let parsed: ResponsesBody =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status: status.as_u16(),
                message: format!("failed to parse response: {}", e),
            })?;

        let text = parsed
            .output
            .first()
            .and_then(|item| item.content.first())
            .map(|block| block.text.clone())
            .unwrap_or_default();

        Ok(AskResponse {
            status: parsed.status,
            text,
        })
    }
}
