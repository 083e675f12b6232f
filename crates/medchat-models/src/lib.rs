// Models module - data structures shared by the server and the browser UI
pub mod types;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use types::{Message, Role};
pub use requests::{ChatRequest, CompletionMessage, CompletionRequest};
pub use responses::{ChatResponse, Choice, ChoiceMessage, CompletionResponse, Usage};
