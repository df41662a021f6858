//! HTML template for a `TailoredResume`.
//!
//! Sections are emitted in a fixed order (header, summary, education, skills,
//! experience, academic experience) and entries in input order. No sorting,
//! filtering or deduplication happens here. Every free-text value passes
//! through `escape_html` exactly once.

use std::fmt::{self, Write};

use crate::models::resume::{
    AcademicEntry, EducationEntry, ExperienceEntry, ResumeHeader, SkillGroup, TailoredResume,
};
use crate::render::escape::escape_html;

/// Print stylesheet: US letter, tight margins, 11pt body.
const STYLESHEET: &str = r#"      @page {
        size: letter;
        margin: 0.2in 0.35in 0.45in 0.35in;
      }
      body {
        font-family: Calibri, Arial, sans-serif;
        color: #000;
        background: #fff;
        margin: 0;
        padding: 0;
        font-size: 11pt;
        line-height: 1.35;
      }
      .page {
        max-width: 8.5in;
        margin: 0 auto;
        padding: 0.2in 0.35in 0.45in;
      }
      .header {
        text-align: center;
        margin-bottom: 0.2in;
      }
      .header h1 {
        margin: 0;
        font-size: 20pt;
        letter-spacing: 0.04em;
        font-weight: 700;
      }
      .contact {
        margin-top: 0.05in;
        font-size: 10.5pt;
      }
      .section + .section {
        margin-top: 0.04in;
      }
      .section-title {
        display: flex;
        align-items: center;
        gap: 0.1in;
        font-size: 10.5pt;
        font-weight: 700;
        letter-spacing: 0.04em;
        text-transform: uppercase;
      }
      .section-title + * {
        margin-top: 0.01in;
      }
      .section-title .rule {
        flex: 1;
        border-bottom: 1px solid #000;
        transform: translateY(1px);
      }
      p {
        margin: 0.02in 0 0;
      }
      .entry {
        margin-top: 0.05in;
      }
      .row {
        display: flex;
        justify-content: space-between;
        gap: 0.2in;
      }
      .bold {
        font-weight: 700;
      }
      .italic {
        font-style: italic;
        margin-top: 0.02in;
      }
      .date {
        white-space: nowrap;
      }
      .subtext {
        margin-top: 0.02in;
      }
      ul {
        margin: 0.03in 0 0.02in 0.15in;
        padding-left: 0.15in;
      }
      li {
        margin-bottom: 0.04in;
      }
      .skills {
        margin-top: 0.05in;
      }
      .skills li {
        margin-bottom: 0.03in;
      }
"#;

/// Renders the full document. The only failure mode is a formatter error,
/// in which case no partial output is returned.
pub fn render_resume(resume: &TailoredResume) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(8 * 1024);

    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n    \
         <title>Resume</title>\n    <style>\n{STYLESHEET}    </style>\n  </head>\n  <body>\n    \
         <div class=\"page\">\n"
    )?;

    write_header(&mut html, &resume.header)?;

    open_section(&mut html, "Professional Summary")?;
    writeln!(html, "        <p>{}</p>", escape_html(&resume.summary))?;
    close_section(&mut html)?;

    open_section(&mut html, "Education")?;
    for entry in &resume.education {
        write_education(&mut html, entry)?;
    }
    close_section(&mut html)?;

    open_section(&mut html, "Technical Skills")?;
    writeln!(html, "        <ul class=\"skills\">")?;
    for group in &resume.skills {
        write_skill(&mut html, group)?;
    }
    writeln!(html, "        </ul>")?;
    close_section(&mut html)?;

    open_section(&mut html, "Professional Experience")?;
    for entry in &resume.experience {
        write_experience(&mut html, entry)?;
    }
    close_section(&mut html)?;

    open_section(&mut html, "Academic Experience")?;
    for entry in &resume.academic_experience {
        write_academic(&mut html, entry)?;
    }
    close_section(&mut html)?;

    write!(html, "    </div>\n  </body>\n</html>")?;

    Ok(html)
}

// ────────────────────────────────────────────────────────────────────────────
// Section writers
// ────────────────────────────────────────────────────────────────────────────

fn write_header(html: &mut String, header: &ResumeHeader) -> fmt::Result {
    writeln!(html, "      <div class=\"header\">")?;
    writeln!(html, "        <h1>{}</h1>", escape_html(&header.name))?;
    writeln!(
        html,
        "        <div class=\"contact\">{}</div>",
        escape_html(&header.contact_line)
    )?;
    writeln!(html, "      </div>")
}

fn open_section(html: &mut String, title: &str) -> fmt::Result {
    writeln!(html, "\n      <section class=\"section\">")?;
    writeln!(html, "        <div class=\"section-title\">")?;
    writeln!(html, "          <span>{title}</span>")?;
    writeln!(html, "          <span class=\"rule\"></span>")?;
    writeln!(html, "        </div>")
}

fn close_section(html: &mut String) -> fmt::Result {
    writeln!(html, "      </section>")
}

/// Two-column row: bold or composite left cell, right-aligned date.
fn write_row(html: &mut String, left: &str, dates: &str) -> fmt::Result {
    writeln!(html, "          <div class=\"row\">")?;
    writeln!(html, "            {left}")?;
    writeln!(
        html,
        "            <div class=\"date\">{}</div>",
        escape_html(dates)
    )?;
    writeln!(html, "          </div>")
}

fn write_bullets(html: &mut String, bullets: &[String]) -> fmt::Result {
    write!(html, "          <ul>")?;
    for bullet in bullets {
        write!(html, "<li>{}</li>", escape_html(bullet))?;
    }
    writeln!(html, "</ul>")
}

fn write_education(html: &mut String, entry: &EducationEntry) -> fmt::Result {
    writeln!(html, "        <div class=\"entry\">")?;
    write_row(
        html,
        &format!("<div class=\"bold\">{}</div>", escape_html(&entry.institution)),
        &entry.dates,
    )?;
    writeln!(
        html,
        "          <div class=\"subtext\">{}</div>",
        escape_html(&entry.degree)
    )?;
    writeln!(html, "        </div>")
}

fn write_skill(html: &mut String, group: &SkillGroup) -> fmt::Result {
    writeln!(
        html,
        "          <li><span class=\"bold\">{}:</span> {}</li>",
        escape_html(&group.label),
        escape_html(&group.items.join(", "))
    )
}

fn write_experience(html: &mut String, entry: &ExperienceEntry) -> fmt::Result {
    let employer = format!("{}, {}", entry.company, entry.location);

    writeln!(html, "        <div class=\"entry\">")?;
    write_row(
        html,
        &format!("<div class=\"bold\">{}</div>", escape_html(employer.trim())),
        &entry.dates,
    )?;
    writeln!(
        html,
        "          <div class=\"italic\">{}</div>",
        escape_html(&entry.title)
    )?;
    write_bullets(html, &entry.bullets)?;
    writeln!(html, "        </div>")
}

fn write_academic(html: &mut String, entry: &AcademicEntry) -> fmt::Result {
    let mut left = format!(
        "<div><span class=\"bold\">{}</span>",
        escape_html(&entry.title)
    );
    if !entry.tools.is_empty() {
        write!(left, " | Tools: {}", escape_html(&entry.tools))?;
    }
    left.push_str("</div>");

    writeln!(html, "        <div class=\"entry\">")?;
    write_row(html, &left, &entry.dates)?;
    write_bullets(html, &entry.bullets)?;
    writeln!(html, "        </div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TailoredResume {
        TailoredResume {
            header: ResumeHeader {
                name: "Jane Doe".to_string(),
                contact_line: "jane@example.com | (555) 010-0000".to_string(),
            },
            summary: "Backend engineer focused on distributed systems.".to_string(),
            education: vec![EducationEntry {
                institution: "MIT".to_string(),
                dates: "2020".to_string(),
                degree: "BS CS".to_string(),
            }],
            skills: vec![
                SkillGroup {
                    label: "Languages".to_string(),
                    items: vec!["Go".to_string(), "Rust".to_string()],
                },
                SkillGroup {
                    label: "Infra".to_string(),
                    items: vec![],
                },
            ],
            experience: vec![
                ExperienceEntry {
                    company: "Acme".to_string(),
                    location: "Remote".to_string(),
                    dates: "2021 - Present".to_string(),
                    title: "Senior Engineer".to_string(),
                    bullets: vec!["Led migration".to_string(), "Cut p99 by 40%".to_string()],
                },
                ExperienceEntry {
                    company: "Initech".to_string(),
                    location: "Austin, TX".to_string(),
                    dates: "2019 - 2021".to_string(),
                    title: "Engineer".to_string(),
                    bullets: vec![],
                },
            ],
            academic_experience: vec![
                AcademicEntry {
                    title: "Raft KV store".to_string(),
                    tools: "Go, gRPC".to_string(),
                    dates: "2019".to_string(),
                    bullets: vec!["Implemented leader election".to_string()],
                },
                AcademicEntry {
                    title: "Thesis".to_string(),
                    tools: String::new(),
                    dates: "2020".to_string(),
                    bullets: vec![],
                },
            ],
        }
    }

    fn section<'a>(html: &'a str, title: &str) -> &'a str {
        let start = html
            .find(&format!("<span>{title}</span>"))
            .unwrap_or_else(|| panic!("missing section {title}"));
        let end = html[start..].find("</section>").unwrap() + start;
        &html[start..end]
    }

    #[test]
    fn test_render_is_deterministic() {
        let resume = sample();
        assert_eq!(render_resume(&resume).unwrap(), render_resume(&resume).unwrap());
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = render_resume(&sample()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("size: letter;"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("src="));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render_resume(&sample()).unwrap();
        let positions: Vec<usize> = [
            "<h1>Jane Doe</h1>",
            "<span>Professional Summary</span>",
            "<span>Education</span>",
            "<span>Technical Skills</span>",
            "<span>Professional Experience</span>",
            "<span>Academic Experience</span>",
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entry_cardinality_matches_input() {
        let resume = sample();
        let html = render_resume(&resume).unwrap();

        assert_eq!(
            section(&html, "Education").matches("class=\"entry\"").count(),
            resume.education.len()
        );
        assert_eq!(
            section(&html, "Professional Experience")
                .matches("class=\"entry\"")
                .count(),
            resume.experience.len()
        );
        assert_eq!(
            section(&html, "Academic Experience")
                .matches("class=\"entry\"")
                .count(),
            resume.academic_experience.len()
        );
        assert_eq!(
            section(&html, "Technical Skills").matches("<li>").count(),
            resume.skills.len()
        );
    }

    #[test]
    fn test_education_block_contents_in_order() {
        let html = render_resume(&sample()).unwrap();
        let education = section(&html, "Education");

        let mit = education.find("MIT").unwrap();
        let year = education.find("2020").unwrap();
        let degree = education.find("BS CS").unwrap();
        assert!(mit < year && year < degree);
    }

    #[test]
    fn test_experience_entries_keep_input_order() {
        let html = render_resume(&sample()).unwrap();
        let experience = section(&html, "Professional Experience");

        let acme = experience.find("Acme, Remote").unwrap();
        let initech = experience.find("Initech, Austin, TX").unwrap();
        assert!(acme < initech);
        assert!(experience.contains("<div class=\"italic\">Senior Engineer</div>"));
        assert!(experience.contains("<li>Led migration</li><li>Cut p99 by 40%</li>"));
    }

    #[test]
    fn test_skills_join_items_with_commas() {
        let html = render_resume(&sample()).unwrap();
        assert!(html.contains("<span class=\"bold\">Languages:</span> Go, Rust</li>"));
        assert!(html.contains("<span class=\"bold\">Infra:</span> </li>"));
    }

    #[test]
    fn test_tools_suffix_only_when_present() {
        let html = render_resume(&sample()).unwrap();
        let academic = section(&html, "Academic Experience");

        assert!(academic.contains("<span class=\"bold\">Raft KV store</span> | Tools: Go, gRPC"));
        assert!(academic.contains("<span class=\"bold\">Thesis</span></div>"));
        assert_eq!(academic.matches("Tools:").count(), 1);
    }

    #[test]
    fn test_employer_line_is_trimmed() {
        let mut resume = sample();
        resume.experience[0].company = "  Acme".to_string();
        resume.experience[0].location = String::new();

        let html = render_resume(&resume).unwrap();
        assert!(html.contains("<div class=\"bold\">Acme,</div>"));
    }

    #[test]
    fn test_metacharacters_escaped_exactly_once() {
        let mut resume = sample();
        resume.header.name = "<script>alert('x')</script>".to_string();
        resume.summary = r#"R&D "lead" <b>"#.to_string();
        resume.experience[0].bullets = vec!["Cut cost <50% & 'more'".to_string()];

        let html = render_resume(&resume).unwrap();

        assert!(html.contains("<h1>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</h1>"));
        assert!(html.contains("<p>R&amp;D &quot;lead&quot; &lt;b&gt;</p>"));
        assert!(html.contains("<li>Cut cost &lt;50% &amp; &#39;more&#39;</li>"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("&amp;amp;"));
        assert!(!html.contains("&amp;lt;"));
    }

    #[test]
    fn test_empty_sections_still_render_headings() {
        let mut resume = sample();
        resume.education.clear();
        resume.skills.clear();
        resume.experience.clear();
        resume.academic_experience.clear();

        let html = render_resume(&resume).unwrap();
        assert_eq!(html.matches("class=\"entry\"").count(), 0);
        assert!(html.contains("<span>Academic Experience</span>"));
    }
}
