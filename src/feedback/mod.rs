pub mod file;
pub mod store;
pub mod types;

pub use file::{FeedbackFile, LoadOutcome};
pub use store::FeedbackStore;
pub use types::FeedbackEntry;
