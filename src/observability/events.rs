//! Observable events
//!
//! Events are explicit and typed; each one carries its own severity.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Walk lifecycle
    /// `start()` began a fresh walk
    WalkStart,
    /// A question is pending
    QuestionEmitted,
    /// An answer was appended to history
    AnswerRecorded,
    /// Navigation truncated history and is replaying
    ReplayBegin,
    /// Replay finished at a question or verdict
    ReplayComplete,
    /// The walk reached a CNF verdict
    VerdictReached,
    /// The walk terminated with an error outcome
    WalkFailed,

    // Protocol
    /// Operation invoked without a pending question
    ProtocolMisuse,

    // Registry
    /// Company profile resolved
    RegistryLookup,
    /// Lookup failed; placeholder profile used
    RegistryFallback,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::WalkStart => "WALK_START",
            Event::QuestionEmitted => "QUESTION_EMITTED",
            Event::AnswerRecorded => "ANSWER_RECORDED",
            Event::ReplayBegin => "REPLAY_BEGIN",
            Event::ReplayComplete => "REPLAY_COMPLETE",
            Event::VerdictReached => "VERDICT_REACHED",
            Event::WalkFailed => "WALK_FAILED",
            Event::ProtocolMisuse => "PROTOCOL_MISUSE",
            Event::RegistryLookup => "REGISTRY_LOOKUP",
            Event::RegistryFallback => "REGISTRY_FALLBACK",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::QuestionEmitted | Event::AnswerRecorded | Event::RegistryLookup => {
                Severity::Trace
            }
            Event::ConfigLoaded
            | Event::WalkStart
            | Event::ReplayBegin
            | Event::ReplayComplete
            | Event::VerdictReached => Severity::Info,
            Event::WalkFailed | Event::ProtocolMisuse | Event::RegistryFallback => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
