//! provider::mock
//!
//! Mock provider implementation for deterministic testing.
//!
//! # Design
//!
//! The mock provider returns canned responses and records every request for
//! verification. Failure scenarios are configurable.
//!
//! # Example
//!
//! ```
//! use comet::provider::mock::MockProvider;
//! use comet::provider::{AskRequest, Provider};
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::returning("feat: add parser");
//!
//! let response = provider
//!     .ask(AskRequest {
//!         model: "gpt-4.1".to_string(),
//!         instructions: "write".to_string(),
//!         input: "diff".to_string(),
//!     })
//!     .await
//!     .unwrap();
//!
//! assert_eq!(response.text, "feat: add parser");
//! assert_eq!(provider.requests().len(), 1);
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{AskRequest, AskResponse, Provider, ProviderError};

/// Mock provider for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockProvider {
    inner: Arc<Mutex<MockProviderInner>>,
}

#[derive(Debug)]
struct MockProviderInner {
    /// Canned response returned by `ask`.
    response: AskResponse,
    /// Error returned instead of the response, if configured.
    fail_with: Option<ProviderError>,
    /// Recorded requests for verification.
    requests: Vec<AskRequest>,
}

impl MockProvider {
    /// Create a mock that completes with the given text.
    pub fn returning(text: impl Into<String>) -> Self {
        Self::with_response(AskResponse {
            status: "completed".to_string(),
            text: text.into(),
        })
    }

    /// Create a mock with a full canned response.
    pub fn with_response(response: AskResponse) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockProviderInner {
                response,
                fail_with: None,
                requests: Vec::new(),
            })),
        }
    }

    /// Configure the mock to fail every request.
    pub fn fail_with(self, error: ProviderError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_with = Some(error);
        }
        self
    }

    /// All recorded requests, in call order.
    pub fn requests(&self) -> Vec<AskRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn ask(&self, request: AskRequest) -> Result<AskResponse, ProviderError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        match &inner.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(inner.response.clone()),
        }
    }
}
