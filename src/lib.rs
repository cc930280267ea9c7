//! cnf_checker - does an R&D tax relief claim need a Claim Notification Form?
//!
//! A replayable question-flow engine:
//! - `procedure`: the eligibility rules as a pure step function
//! - `session`: forward/back/jump navigation by replay
//! - `registry`: company profile lookup collaborator
//! - `timeline`: period and deadline arithmetic

pub mod cli;
pub mod observability;
pub mod procedure;
pub mod registry;
pub mod session;
pub mod timeline;
