//! Modern template — two-column layout with a contact/skills sidebar.

use super::{bullets_all_lines, date_range, esc, has_text};
use crate::models::resume::ResumeData;

pub fn render(data: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"resume resume--modern\">");

    // Sidebar: identity, contact, skills
    html.push_str("<aside class=\"resume__sidebar\">");
    if let Some(info) = &data.personal_info {
        if let Some(url) = info.photo_url.as_deref().filter(|u| !u.trim().is_empty()) {
            html.push_str(&format!(
                "<img class=\"resume__photo\" src=\"{}\" alt=\"{}\">",
                esc(url),
                esc(info.full_name.as_deref().unwrap_or("Photo"))
            ));
        }
        if has_text(&info.full_name) {
            html.push_str(&format!(
                "<h1>{}</h1>",
                esc(info.full_name.as_deref().unwrap_or_default())
            ));
        }
        if has_text(&info.job_title) {
            html.push_str(&format!(
                "<p class=\"resume__role\">{}</p>",
                esc(info.job_title.as_deref().unwrap_or_default())
            ));
        }

        let contact_fields = [&info.email, &info.phone, &info.linkedin, &info.portfolio, &info.address];
        if contact_fields.iter().any(|f| has_text(f)) {
            html.push_str("<section class=\"resume__contact\"><h2>Contact</h2><ul>");
            for field in contact_fields {
                if let Some(value) = field.as_deref().filter(|v| !v.trim().is_empty()) {
                    html.push_str(&format!("<li>{}</li>", esc(value)));
                }
            }
            html.push_str("</ul></section>");
        }
    }

    let named_skills: Vec<&str> = data
        .skills
        .iter()
        .filter_map(|s| s.name.as_deref())
        .filter(|n| !n.trim().is_empty())
        .collect();
    if !named_skills.is_empty() {
        html.push_str("<section class=\"resume__skills\"><h2>Skills</h2><ul>");
        for name in named_skills {
            html.push_str(&format!("<li>{}</li>", esc(name)));
        }
        html.push_str("</ul></section>");
    }
    html.push_str("</aside>");

    // Main column: summary, experience, education, custom sections
    html.push_str("<main class=\"resume__main\">");
    if let Some(summary) = data.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        html.push_str(&format!(
            "<section><h2>Summary</h2><p>{}</p></section>",
            esc(summary)
        ));
    }

    let visible_experience: Vec<_> = data
        .experience
        .iter()
        .filter(|e| has_text(&e.job_title))
        .collect();
    if !visible_experience.is_empty() {
        html.push_str("<section><h2>Experience</h2>");
        for entry in visible_experience {
            html.push_str("<article>");
            html.push_str(&format!(
                "<h3>{}</h3>",
                esc(entry.job_title.as_deref().unwrap_or_default())
            ));
            let mut line = esc(entry.company.as_deref().unwrap_or_default());
            if has_text(&entry.location) {
                line.push_str(&format!(", {}", esc(entry.location.as_deref().unwrap_or_default())));
            }
            html.push_str(&format!(
                "<p class=\"resume__meta\">{} <span>{}</span></p>",
                line,
                date_range(&entry.start_date, &entry.end_date)
            ));
            if let Some(description) = entry.description.as_deref().filter(|d| !d.trim().is_empty()) {
                html.push_str(&bullets_all_lines(description));
            }
            html.push_str("</article>");
        }
        html.push_str("</section>");
    }

    let visible_education: Vec<_> = data
        .education
        .iter()
        .filter(|e| has_text(&e.degree))
        .collect();
    if !visible_education.is_empty() {
        html.push_str("<section><h2>Education</h2>");
        for entry in visible_education {
            html.push_str("<article>");
            html.push_str(&format!(
                "<h3>{}</h3>",
                esc(entry.degree.as_deref().unwrap_or_default())
            ));
            let mut line = esc(entry.institution.as_deref().unwrap_or_default());
            if has_text(&entry.location) {
                line.push_str(&format!(", {}", esc(entry.location.as_deref().unwrap_or_default())));
            }
            html.push_str(&format!(
                "<p class=\"resume__meta\">{} <span>{}</span></p>",
                line,
                esc(entry.graduation_year.as_deref().unwrap_or_default())
            ));
            if let Some(description) = entry.description.as_deref().filter(|d| !d.trim().is_empty()) {
                html.push_str(&format!("<p>{}</p>", esc(description)));
            }
            html.push_str("</article>");
        }
        html.push_str("</section>");
    }

    for section in data.custom_sections.iter().filter(|s| has_text(&s.title)) {
        html.push_str(&format!(
            "<section><h2>{}</h2>",
            esc(section.title.as_deref().unwrap_or_default())
        ));
        if let Some(description) = section.description.as_deref().filter(|d| !d.trim().is_empty()) {
            html.push_str(&bullets_all_lines(description));
        }
        html.push_str("</section>");
    }
    html.push_str("</main></div>");

    html
}
