//! Education extraction — pulls the `## EDUCATION` block out of the source resume
//! so the prompt can restate it verbatim.
//!
//! Matching is deliberately literal: the heading token is case-sensitive and the
//! block ends at the next `\n## ` or `\n# ` (or end of input). Changing this
//! changes what the model is told to keep.

use std::sync::OnceLock;

use regex::Regex;

const EDUCATION_PATTERN: &str = r"## EDUCATION([\s\S]*?)(?:\n## |\n# |$)";

fn education_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EDUCATION_PATTERN).expect("education pattern is valid"))
}

/// Returns the trimmed text following the first `## EDUCATION` heading, or an
/// empty string when the resume has no such heading.
pub fn extract_education_section(resume_text: &str) -> String {
    education_regex()
        .captures(resume_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
