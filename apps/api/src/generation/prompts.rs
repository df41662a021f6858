// Prompt text for the tailoring request.
// The job description is appended by the generator, after the schema is chosen.

/// Fixed instructions, one per line, placed ahead of the resume text.
pub const TAILORING_INSTRUCTIONS: &[&str] = &[
    "You are a resume assistant.",
    "Rewrite the resume to tailor it to the job description.",
    "Only change content that improves fit; leave other content as-is.",
    "Education must remain unchanged and must be included verbatim.",
    "Use only the same section headings and structure already present in the original resume; do not add new sections.",
    "Do not invent or embellish experience, skills, tools, dates, or outcomes. Be truthful to the original resume and only adjust wording to better match the job description.",
    "If a detail is missing (for example, a LinkedIn URL), leave it blank.",
    "Target a single-page resume by keeping content concise.",
    "Output must match the requested JSON schema exactly.",
    "Map sections: Professional Summary -> summary, Education -> education, Technical Skills -> skills, Professional Experience -> experience, Academic Experience -> academicExperience.",
    "Return JSON only.",
];

/// Builds the instruction prompt: fixed instructions, the full resume, then the
/// education block restated so the model keeps it verbatim.
pub fn build_tailoring_prompt(resume_text: &str, education_section: &str) -> String {
    let mut lines: Vec<&str> = TAILORING_INSTRUCTIONS.to_vec();
    lines.extend([
        "",
        "Original resume:",
        resume_text,
        "",
        "Education section to keep verbatim:",
        education_section,
    ]);
    lines.join("\n")
}

/// Appends the job description to the prompt, forming the request `input`.
pub fn build_generation_input(prompt: &str, job_description: &str) -> String {
    format!("{prompt}\n\nJob Description:\n{job_description}")
}
