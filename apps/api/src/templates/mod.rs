//! Resume Template Renderer — pure mapping from `ResumeData` to one of three
//! HTML layouts. No state, no side effects; identical input renders identical
//! output. Entries missing their required display field are skipped from the
//! output (a display filter, not a data validation rule).

mod classic;
mod ivy_league;
mod modern;

use crate::models::resume::{ResumeData, TemplateId};

pub fn render(data: &ResumeData, template: TemplateId) -> String {
    match template {
        TemplateId::Modern => modern::render(data),
        TemplateId::Classic => classic::render(data),
        TemplateId::IvyLeague => ivy_league::render(data),
    }
}

/// HTML-escapes user-supplied text.
pub(crate) fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// True when an optional field holds visible text.
pub(crate) fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// "start - end" with "Present" standing in for an open end date.
pub(crate) fn date_range(start: &Option<String>, end: &Option<String>) -> String {
    let start = start.as_deref().unwrap_or("");
    let end = end.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or("Present");
    format!("{} - {}", esc(start), esc(end))
}

/// Every non-blank line becomes a bullet (modern template behavior).
pub(crate) fn bullets_all_lines(text: &str) -> String {
    let items: String = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<li>{}</li>", esc(line)))
        .collect();
    format!("<ul>{items}</ul>")
}

/// Only `* ` / `- ` prefixed lines are bullets; anything else renders as one
/// paragraph (classic and ivy-league behavior).
pub(crate) fn bullets_marked(text: &str) -> String {
    let points: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("* ") || line.starts_with("- "))
        .collect();
    if points.is_empty() {
        return format!("<p>{}</p>", esc(text));
    }
    let items: String = points
        .iter()
        .map(|point| format!("<li>{}</li>", esc(point[2..].trim())))
        .collect();
    format!("<ul>{items}</ul>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CustomSectionEntry, EducationEntry, ExperienceEntry, PersonalInfo, SkillEntry, SkillLevel,
    };
    use uuid::Uuid;

    fn experience(job_title: Option<&str>, company: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: Uuid::new_v4(),
            job_title: job_title.map(str::to_string),
            company: Some(company.to_string()),
            location: None,
            start_date: Some("2020-01".to_string()),
            end_date: None,
            description: Some("- Built things\n- Shipped things".to_string()),
        }
    }

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: Some(PersonalInfo {
                full_name: Some("Grace Hopper".to_string()),
                job_title: Some("Rear Admiral".to_string()),
                email: Some("grace@example.com".to_string()),
                ..PersonalInfo::default()
            }),
            summary: Some("Compiler pioneer.".to_string()),
            experience: vec![
                experience(Some("Senior Engineer"), "Navy"),
                experience(None, "Ghost Corp"),
                experience(Some("  "), "Blank Corp"),
            ],
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                degree: Some("PhD Mathematics".to_string()),
                institution: Some("Yale".to_string()),
                location: None,
                graduation_year: Some("1934".to_string()),
                description: None,
            }],
            skills: vec![
                SkillEntry {
                    id: Uuid::new_v4(),
                    name: Some("COBOL".to_string()),
                    level: Some(SkillLevel::Expert),
                },
                SkillEntry {
                    id: Uuid::new_v4(),
                    name: None,
                    level: None,
                },
            ],
            custom_sections: vec![CustomSectionEntry {
                id: Uuid::new_v4(),
                title: Some("Awards".to_string()),
                description: Some("* National Medal of Technology".to_string()),
            }],
        }
    }

    const ALL_TEMPLATES: [TemplateId; 3] =
        [TemplateId::Modern, TemplateId::Classic, TemplateId::IvyLeague];

    #[test]
    fn test_rendering_is_idempotent() {
        let data = sample();
        for template in ALL_TEMPLATES {
            assert_eq!(render(&data, template), render(&data, template));
        }
    }

    #[test]
    fn test_experience_without_job_title_is_skipped() {
        let data = sample();
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            assert!(html.contains("Senior Engineer"));
            assert!(!html.contains("Ghost Corp"), "{template:?} rendered a title-less entry");
            assert!(!html.contains("Blank Corp"), "{template:?} rendered a blank-title entry");
        }
    }

    #[test]
    fn test_skill_without_name_is_skipped() {
        let mut data = sample();
        data.skills.retain(|s| s.name.is_none());
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            assert!(!html.contains("Skills"), "{template:?} rendered an empty skills section");
        }
    }

    #[test]
    fn test_user_text_is_html_escaped() {
        let mut data = sample();
        data.summary = Some("<script>alert('x')</script>".to_string());
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            assert!(!html.contains("<script>"));
            assert!(html.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_empty_data_renders_without_sections() {
        let data = ResumeData::default();
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            assert!(!html.contains("Experience"));
            assert!(!html.contains("Education"));
        }
    }

    #[test]
    fn test_marked_bullets_fall_back_to_paragraph() {
        assert_eq!(bullets_marked("no markers here"), "<p>no markers here</p>");
        assert_eq!(
            bullets_marked("* first\n- second"),
            "<ul><li>first</li><li>second</li></ul>"
        );
    }

    #[test]
    fn test_all_lines_bullets_skip_blank_lines() {
        assert_eq!(
            bullets_all_lines("one\n\n  two  "),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_date_range_defaults_open_end_to_present() {
        assert_eq!(
            date_range(&Some("2020".to_string()), &None),
            "2020 - Present"
        );
        assert_eq!(
            date_range(&Some("2020".to_string()), &Some("2022".to_string())),
            "2020 - 2022"
        );
    }
}
