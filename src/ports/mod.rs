//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod completion_provider;

pub use completion_provider::{
    Completion, CompletionProvider, CompletionRequest, Message, MessageRole, ProviderError,
};
