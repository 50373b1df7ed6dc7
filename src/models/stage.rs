use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six pipeline stages, in the order the UI presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Questioner,
    Researcher,
    Verifier,
    Planner,
    Assistant,
    Explainer,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Questioner,
        Stage::Researcher,
        Stage::Verifier,
        Stage::Planner,
        Stage::Assistant,
        Stage::Explainer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Questioner => "questioner",
            Stage::Researcher => "researcher",
            Stage::Verifier => "verifier",
            Stage::Planner => "planner",
            Stage::Assistant => "assistant",
            Stage::Explainer => "explainer",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text produced by one stage invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOutput {
    /// Correlates the response with its log lines.
    pub id: Uuid,
    pub stage: Stage,
    /// Trimmed provider text, ready to drop into the next text field.
    pub text: String,
    /// URLs cited by web-search stages.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Planner only: the risk note that was sent along with the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_note: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl StageOutput {
    pub fn new(id: Uuid, stage: Stage, text: impl Into<String>) -> Self {
        Self {
            id,
            stage,
            text: text.into(),
            sources: Vec::new(),
            risk_note: None,
            completed_at: Utc::now(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_risk_note(mut self, note: impl Into<String>) -> Self {
        self.risk_note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serialized_name() {
        for stage in Stage::ALL {
            assert_eq!(serde_json::to_value(stage).unwrap(), stage.to_string());
        }
    }

    #[test]
    fn serializes_stage_in_snake_case() {
        let output = StageOutput::new(Uuid::new_v4(), Stage::Planner, "plan");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["stage"], "planner");
        assert!(json.get("risk_note").is_none());
    }
}
