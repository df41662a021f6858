//! The tailored resume — the contract between generation and rendering.
//!
//! Every field is required and arrays may be empty but must be present.
//! Unknown fields are ignored on deserialisation; the generator enforces the
//! closed shape on model output separately.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredResume {
    pub header: ResumeHeader,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub academic_experience: Vec<AcademicEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeHeader {
    pub name: String,
    pub contact_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub dates: String,
    pub degree: String,
}

/// One "Label: a, b, c" line under Technical Skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub location: String,
    pub dates: String,
    pub title: String,
    pub bullets: Vec<String>,
}

/// `tools` may be empty, in which case the renderer omits the "Tools:" suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicEntry {
    pub title: String,
    pub tools: String,
    pub dates: String,
    pub bullets: Vec<String>,
}
