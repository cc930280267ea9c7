//! Session controller
//!
//! Drives the decision procedure for one step-at-a-time presenter:
//! - `start` begins a fresh walk
//! - `submit_answer` records an answer and moves forward
//! - `go_back` / `go_to_question` truncate history and replay
//!
//! Replay is the only way back. The controller keeps no snapshot of the
//! procedure; it re-runs it from an empty history with the retained
//! answers in order. Single writer: callers serialize access.

mod controller;
mod errors;
mod history;
mod state;

pub use controller::SessionController;
pub use errors::{SessionError, SessionResult};
pub use history::{History, HistoryEntry};
pub use state::WalkState;
