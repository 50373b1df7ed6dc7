use serde::{Deserialize, Serialize};

// Every field defaults to empty so a half-filled form still reaches the
// stage; the text is passed through as the user left it.

/// Input for the questioner (original question) and researcher (rewritten question).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionInput {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyInput {
    /// The rewritten question.
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub research: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanInput {
    #[serde(default)]
    pub research: String,
    /// Verifier feedback.
    #[serde(default)]
    pub feedback: String,
    /// The user's question as first typed; screened for high-risk keywords.
    #[serde(default)]
    pub original_question: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowUpInput {
    /// The (possibly edited) repair plan.
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub follow_up: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplainInput {
    /// Follow-up research notes.
    #[serde(default)]
    pub notes: String,
}
