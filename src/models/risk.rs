use serde::{Deserialize, Serialize};

/// Result of screening text for safety-critical repair areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Escalation note prepended to the planner prompt. Empty when nothing matched.
    pub note: String,
    /// Matched keywords, in keyword-list order.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskInput {
    pub text: String,
}
