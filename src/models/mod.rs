//! Request and response types shared by the pipeline and the HTTP API.
//!
//! Nothing here is persisted. Every value lives for one stage invocation:
//!
//! - [`StageOutput`]: what a stage hands back to the UI text field it fills.
//! - [`Stage`]: which of the six agents produced it.
//! - Stage inputs ([`QuestionInput`], [`VerifyInput`], ...): the fields a stage reads.
//! - [`RiskReport`]: the stand-alone safety screen result.

mod input;
mod risk;
mod stage;

pub use input::*;
pub use risk::*;
pub use stage::*;
