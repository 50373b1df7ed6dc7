//! AutoAssist: a human-in-the-loop pipeline that turns a free-text car
//! repair question into a vetted repair plan.
//!
//! Six single-purpose agents run one at a time, each triggered by hand from
//! the web UI (or the HTTP API) and each consuming plain text the user may
//! edit before moving on:
//!
//! 1. [`agents::Agents::questioner`] restates the question.
//! 2. [`agents::Agents::researcher`] gathers notes with web search.
//! 3. [`agents::Agents::verifier`] scores the research.
//! 4. [`agents::Agents::planner`] writes the plan, prefixed with the [`risk`] note.
//! 5. [`agents::Agents::assistant`] researches a follow-up question.
//! 6. [`agents::Agents::explainer`] turns the follow-up notes into plain language.

pub mod agents;
pub mod api;
pub mod config;
pub mod llm;
pub mod models;
pub mod risk;
