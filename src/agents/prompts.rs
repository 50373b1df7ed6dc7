//! Prompt templates for the six agents.
//! Each agent gets a fixed system prompt and a user prompt built from the
//! text fields it reads. Nothing here calls a provider.

pub const QUESTIONER_SYSTEM: &str = "You are a Questioner agent for car maintenance.\n\
Rewrite the user's input into a clear, structured question.\n\
Do NOT answer the question. Just rewrite it.\n\
Include vehicle year/make/model if present, and ask for missing key details briefly.";

pub const RESEARCHER_SYSTEM: &str = "You are a Research agent for car maintenance.\n\
Goal: produce factual notes and sources.\n\
Be conservative: if uncertain, say what to verify.";

pub const VERIFIER_SYSTEM: &str = "You are a Verifier agent.\n\
Evaluate research for clarity, safety, and fit to the exact vehicle/question.\n\
Do NOT rewrite the research.";

pub const PLANNER_SYSTEM: &str = "You are a Planner agent (experienced mechanic).\n\
Write a safe, beginner-friendly step-by-step plan.\n\
Use the research + verifier notes. If risk is high, recommend a professional.";

pub const ASSISTANT_SYSTEM: &str = "You are an Assistant Research agent.\n\
Answer follow-up questions about the plan.\n\
Be factual and cite sources when possible.";

pub const EXPLAINER_SYSTEM: &str = "You are an Explainer agent.\n\
Turn research notes into a simple explanation a beginner understands.\n\
Be direct, safe, and helpful.";

pub fn questioner_prompt(question: &str) -> String {
    format!(
        "User input:\n{}\n\n\
         Return ONLY the rewritten question.",
        question
    )
}

pub fn researcher_prompt(question: &str) -> String {
    format!(
        r#"Task: Research the best next steps for:
{}

Return:
1) Likely causes (bullets)
2) Quick checks/diagnostic steps
3) Parts/tools potentially needed
4) Safety warnings
5) Sources/links (bullets)
Keep concise."#,
        question
    )
}

pub fn verifier_prompt(question: &str, research: &str) -> String {
    format!(
        r#"Rewritten question:
{}

Research notes:
{}

Output format:
- Clarity score (1–5) + 2 fixes
- Safety score (1–5) + 2 fixes
- Fit-to-vehicle score (1–5) + 2 fixes
- Any red flags / when to stop DIY (bullets)
"#,
        question, research
    )
}

/// The risk note goes first, verbatim, even when empty.
pub fn planner_prompt(research: &str, feedback: &str, risk_note: &str) -> String {
    format!(
        r#"{}
Research:
{}

Verifier feedback:
{}

Return:
A) Summary (2–3 bullets)
B) Step-by-step plan (numbered)
C) Tools list
D) Parts list
E) Safety checks / stop conditions
F) Time estimate (rough)
"#,
        risk_note, research, feedback
    )
}

pub fn assistant_prompt(plan: &str, follow_up: &str) -> String {
    format!(
        "Instructions:\n{}\n\n\
         User follow-up:\n{}\n\n\
         Return concise notes + sources.",
        plan, follow_up
    )
}

pub fn explainer_prompt(notes: &str) -> String {
    format!(
        "Follow-up research notes:\n{}\n\n\
         Return a clear explanation (short paragraphs + bullets if needed).",
        notes
    )
}
