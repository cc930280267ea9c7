//! Session requests
//!
//! One request per line, tagged by `op`:
//!
//! ```text
//! {"op":"start"}
//! {"op":"answer","value":true}
//! {"op":"back"}
//! {"op":"goto","question_id":4}
//! {"op":"current"}
//! {"op":"state"}
//! ```

use serde::Deserialize;
use serde_json::{json, Value};

use crate::procedure::{Answer, QuestionId, Step};
use crate::session::{SessionController, SessionResult};
use crate::timeline::Period;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionRequest {
    Start,
    Answer { value: Answer },
    Back,
    Goto { question_id: QuestionId },
    Current,
    State,
}

/// Input of the `evaluate` command
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub answers: Vec<Answer>,
}

/// Input of the `timeline` command
pub type TimelineRequest = Period;

impl SessionRequest {
    /// Apply the request; the returned value becomes the response `data`.
    pub fn apply(self, session: &mut SessionController) -> SessionResult<Value> {
        let data = match self {
            SessionRequest::Start => step_json(Some(session.start())),
            SessionRequest::Answer { value } => step_json(Some(session.submit_answer(value)?)),
            SessionRequest::Back => step_json(session.go_back()),
            SessionRequest::Goto { question_id } => step_json(session.go_to_question(question_id)),
            SessionRequest::Current => step_json(session.current()),
            SessionRequest::State => json!({
                "answers": session.current_state(),
                "history": session.history(),
            }),
        };
        Ok(data)
    }
}

/// `{"question":...}`, `{"result":...}` or `null`
pub fn step_json(step: Option<Step>) -> Value {
    step.map(|s| serde_json::to_value(s).unwrap_or(Value::Null))
        .unwrap_or(Value::Null)
}
