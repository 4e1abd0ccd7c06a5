//! Mock completion provider for testing.
//!
//! Configurable mock implementation of the CompletionProvider port, allowing
//! tests to run without calling the real API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockCompletionProvider::new().with_reading("olá");
//!
//! let completion = provider.complete(request).await?;
//! assert_eq!(completion.text, "olá");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{Completion, CompletionProvider, CompletionRequest, ProviderError};

/// Mock completion provider for testing.
///
/// Clones share the response queue and call history.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionProvider {
    /// Pre-configured results (consumed in order).
    results: Arc<Mutex<VecDeque<Result<String, ProviderError>>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionProvider {
    /// Creates a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful reading to the queue.
    pub fn with_reading(self, text: impl Into<String>) -> Self {
        self.results.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Adds a failure to the queue.
    pub fn with_failure(self, error: ProviderError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError> {
        self.calls.lock().unwrap().push(request);

        match self.results.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Completion {
                text,
                model: "mock-model".to_string(),
            }),
            Some(Err(error)) => Err(error),
            None => Ok(Completion {
                text: "Leitura simulada".to_string(),
                model: "mock-model".to_string(),
            }),
        }
    }
}
