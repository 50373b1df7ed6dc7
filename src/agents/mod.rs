//! The six repair agents.
//!
//! Each agent is a prompt template plus exactly one provider call. Agents
//! never call each other: the user triggers every stage by hand and feeds it
//! whatever text the previous stage produced, edited or not.

pub mod prompts;

use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;
use uuid::Uuid;

use crate::config::Config;
use crate::llm::{ChatCompletionsClient, ChatModel, LlmError, ResponsesClient, WebSearch};
use crate::models::{Stage, StageOutput};
use crate::risk::risk_screen;

/// Returned instead of calling a provider when the follow-up box is empty.
pub const FOLLOW_UP_REQUIRED: &str = "Please type a follow-up question.";

/// Provider handles shared by every stage. Built once, never mutated.
#[derive(Clone)]
pub struct Agents {
    /// Rewrites questions and scores research (Groq by default).
    triage: Arc<dyn ChatModel>,
    /// Writes plans and explanations (OpenAI by default).
    author: Arc<dyn ChatModel>,
    /// Research and follow-up notes with web search.
    search: Arc<dyn WebSearch>,
}

impl Agents {
    pub fn new(
        triage: Arc<dyn ChatModel>,
        author: Arc<dyn ChatModel>,
        search: Arc<dyn WebSearch>,
    ) -> Self {
        Self {
            triage,
            author,
            search,
        }
    }

    /// Wire the default providers: Groq for triage, OpenAI for everything else.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ChatCompletionsClient::new("groq", &config.groq)),
            Arc::new(ChatCompletionsClient::new("openai", &config.openai)),
            Arc::new(ResponsesClient::new(&config.openai)),
        )
    }

    /// Restate the user's free-text input as a structured question.
    pub async fn questioner(&self, question: &str) -> Result<StageOutput, LlmError> {
        let user = prompts::questioner_prompt(question);
        self.chat(Stage::Questioner, &*self.triage, prompts::QUESTIONER_SYSTEM, &user)
            .await
    }

    /// Gather causes, checks, parts and sources for the rewritten question.
    pub async fn researcher(&self, question: &str) -> Result<StageOutput, LlmError> {
        let user = prompts::researcher_prompt(question);
        self.web_search(Stage::Researcher, prompts::RESEARCHER_SYSTEM, &user)
            .await
    }

    /// Score the research for clarity, safety and fit to the vehicle.
    pub async fn verifier(&self, question: &str, research: &str) -> Result<StageOutput, LlmError> {
        let user = prompts::verifier_prompt(question, research);
        self.chat(Stage::Verifier, &*self.triage, prompts::VERIFIER_SYSTEM, &user)
            .await
    }

    /// Screen the original question, then write the repair plan with the
    /// resulting risk note in front of the prompt.
    pub async fn planner(
        &self,
        research: &str,
        feedback: &str,
        original_question: &str,
    ) -> Result<StageOutput, LlmError> {
        let risk_note = risk_screen(original_question);
        if !risk_note.is_empty() {
            tracing::info!("Risk screen flagged the original question");
        }
        self.plan_with_risk_note(research, feedback, &risk_note).await
    }

    /// Write the repair plan with an explicit risk note (may be empty).
    pub async fn plan_with_risk_note(
        &self,
        research: &str,
        feedback: &str,
        risk_note: &str,
    ) -> Result<StageOutput, LlmError> {
        let user = prompts::planner_prompt(research, feedback, risk_note);
        let output = self
            .chat(Stage::Planner, &*self.author, prompts::PLANNER_SYSTEM, &user)
            .await?;
        Ok(output.with_risk_note(risk_note))
    }

    /// Research a follow-up question about the plan.
    ///
    /// A blank follow-up short-circuits with [`FOLLOW_UP_REQUIRED`] and makes
    /// no provider call.
    pub async fn assistant(&self, plan: &str, follow_up: &str) -> Result<StageOutput, LlmError> {
        if follow_up.trim().is_empty() {
            tracing::debug!("Empty follow-up question, skipping provider call");
            return Ok(StageOutput::new(
                Uuid::new_v4(),
                Stage::Assistant,
                FOLLOW_UP_REQUIRED,
            ));
        }

        let user = prompts::assistant_prompt(plan, follow_up);
        self.web_search(Stage::Assistant, prompts::ASSISTANT_SYSTEM, &user)
            .await
    }

    /// Turn follow-up notes into a beginner-friendly explanation.
    pub async fn explainer(&self, notes: &str) -> Result<StageOutput, LlmError> {
        let user = prompts::explainer_prompt(notes);
        self.chat(Stage::Explainer, &*self.author, prompts::EXPLAINER_SYSTEM, &user)
            .await
    }

    async fn chat(
        &self,
        stage: Stage,
        model: &dyn ChatModel,
        system: &str,
        user: &str,
    ) -> Result<StageOutput, LlmError> {
        let id = Uuid::new_v4();
        let span = tracing::info_span!("stage", %stage, %id, provider = model.name());

        async {
            let start = Instant::now();
            let text = model.complete(system, user).await.inspect_err(|e| {
                tracing::error!(error = %e, "Stage failed");
            })?;
            tracing::info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Stage completed"
            );
            Ok::<_, LlmError>(StageOutput::new(id, stage, text.trim()))
        }
        .instrument(span)
        .await
    }

    async fn web_search(
        &self,
        stage: Stage,
        system: &str,
        user: &str,
    ) -> Result<StageOutput, LlmError> {
        let id = Uuid::new_v4();
        let span = tracing::info_span!("stage", %stage, %id, provider = self.search.name());

        async {
            let start = Instant::now();
            let notes = self.search.search(system, user).await.inspect_err(|e| {
                tracing::error!(error = %e, "Stage failed");
            })?;
            tracing::info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                sources = notes.sources.len(),
                "Stage completed"
            );
            Ok::<_, LlmError>(
                StageOutput::new(id, stage, notes.text.trim()).with_sources(notes.sources),
            )
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::SearchNotes;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ChatModel for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, _system: &str, user: &str) -> Result<String, LlmError> {
            Ok(format!("  {}  ", user))
        }
    }

    #[async_trait]
    impl WebSearch for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn search(&self, _system: &str, user: &str) -> Result<SearchNotes, LlmError> {
            Ok(SearchNotes {
                text: user.to_string(),
                sources: vec!["https://example.com".to_string()],
            })
        }
    }

    fn agents() -> Agents {
        Agents::new(Arc::new(Echo), Arc::new(Echo), Arc::new(Echo))
    }

    #[tokio::test]
    async fn planner_records_the_risk_note_it_sent() {
        let output = agents()
            .planner("research", "feedback", "airbag light on")
            .await
            .unwrap();

        let note = output.risk_note.expect("planner sets risk_note");
        assert!(note.contains("airbag"));
        assert!(output.text.starts_with(note.trim_start()));
    }

    #[tokio::test]
    async fn web_search_stages_carry_sources() {
        let output = agents().researcher("question").await.unwrap();
        assert_eq!(output.stage, Stage::Researcher);
        assert_eq!(output.sources, vec!["https://example.com".to_string()]);
    }

    #[tokio::test]
    async fn blank_follow_up_returns_fixed_message() {
        let output = agents().assistant("plan", " \n\t").await.unwrap();
        assert_eq!(output.text, FOLLOW_UP_REQUIRED);
        assert!(output.sources.is_empty());
    }
}
