pub mod ai;
pub mod config;
pub mod content;
pub mod provider;
pub mod section;
pub mod session;
pub mod state;

// Re-export main types for convenience
pub use ai::{ApiError, CompletionClient, GeminiClient, OllamaClient, SharedClient};
pub use config::Config;
pub use provider::Provider;
pub use section::{active_section, Section, SectionSpan};
pub use session::{ChatSession, SubmitRejection};
pub use state::{ChatTurn, MessageLog, SessionState, Speaker};
