pub mod advice;
pub mod planner;
pub mod submit;

pub use advice::{advise, Advice};
pub use planner::{parse_taken, plan, Recommendation};
pub use submit::{submit_feedback, Submission};
