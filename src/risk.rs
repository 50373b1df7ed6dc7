//! Keyword safety screen run over the user's original question.
//!
//! Matching is plain case-insensitive substring containment against a fixed
//! list. There is no tokenizing, so "srs" also fires inside longer words.

use crate::models::RiskReport;

/// Safety-critical areas that trigger an escalation note, in report order.
pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "airbag",
    "srs",
    "brake line",
    "brake fluid leak",
    "fuel leak",
    "gas leak",
    "steering",
    "suspension",
    "timing belt",
    "engine knock",
    "transmission",
    "high voltage",
    "hybrid battery",
    "ev battery",
    "abs module",
];

/// Keywords from [`HIGH_RISK_KEYWORDS`] found in `text`, in list order.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    HIGH_RISK_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// Returns the escalation note for `text`, or an empty string when no
/// high-risk keyword is present.
pub fn risk_screen(text: &str) -> String {
    escalation_note(&matched_keywords(text))
}

/// Runs the screen and keeps the individual hits alongside the note.
pub fn assess(text: &str) -> RiskReport {
    let keywords = matched_keywords(text);
    RiskReport {
        note: escalation_note(&keywords),
        keywords: keywords.into_iter().map(String::from).collect(),
    }
}

fn escalation_note(hits: &[&str]) -> String {
    if hits.is_empty() {
        return String::new();
    }

    format!(
        "⚠️ **Safety Escalation Triggered**\n\n\
         Your request mentions potentially high-risk areas: {}.\n\
         For v1, AutoAssist may still provide high-level guidance, but will recommend professional help \
         for anything involving safety-critical systems.\n",
        hits.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_multiple_hits_in_list_order() {
        let note = risk_screen("Transmission slips and the AIRBAG light is on");
        assert!(note.contains("airbag, transmission."));
    }

    #[test]
    fn assess_reports_keywords_and_note_together() {
        let report = assess("hybrid battery warning");
        assert_eq!(report.keywords, vec!["hybrid battery".to_string()]);
        assert_eq!(report.note, risk_screen("hybrid battery warning"));
    }

    #[test]
    fn assess_is_empty_for_routine_work() {
        let report = assess("oil change on a 2012 Corolla");
        assert!(report.keywords.is_empty());
        assert!(report.note.is_empty());
    }
}
