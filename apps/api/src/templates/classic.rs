//! Classic template — serif single column with a centered header.

use super::{bullets_marked, date_range, esc, has_text};
use crate::models::resume::ResumeData;

pub fn render(data: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"resume resume--classic\">");

    if let Some(info) = &data.personal_info {
        html.push_str("<header class=\"resume__header\">");
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
        let contact: Vec<String> = [&info.phone, &info.email, &info.linkedin, &info.portfolio, &info.address]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .filter(|v| !v.trim().is_empty())
            .map(esc)
            .collect();
        if !contact.is_empty() {
            html.push_str(&format!(
                "<p class=\"resume__contact\">{}</p>",
                contact.join(" | ")
            ));
        }
        html.push_str("</header>");
    }

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
                "<h3>{} <span class=\"resume__dates\">{}</span></h3>",
                esc(entry.job_title.as_deref().unwrap_or_default()),
                date_range(&entry.start_date, &entry.end_date)
            ));
            let mut line = esc(entry.company.as_deref().unwrap_or_default());
            if has_text(&entry.location) {
                line.push_str(&format!(", {}", esc(entry.location.as_deref().unwrap_or_default())));
            }
            html.push_str(&format!("<p class=\"resume__meta\">{line}</p>"));
            if let Some(description) = entry.description.as_deref().filter(|d| !d.trim().is_empty()) {
                html.push_str(&bullets_marked(description));
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
                "<h3>{} <span class=\"resume__dates\">{}</span></h3>",
                esc(entry.degree.as_deref().unwrap_or_default()),
                esc(entry.graduation_year.as_deref().unwrap_or_default())
            ));
            let mut line = esc(entry.institution.as_deref().unwrap_or_default());
            if has_text(&entry.location) {
                line.push_str(&format!(", {}", esc(entry.location.as_deref().unwrap_or_default())));
            }
            html.push_str(&format!("<p class=\"resume__meta\">{line}</p>"));
            if let Some(description) = entry.description.as_deref().filter(|d| !d.trim().is_empty()) {
                html.push_str(&format!("<p>{}</p>", esc(description)));
            }
            html.push_str("</article>");
        }
        html.push_str("</section>");
    }

    let named_skills: Vec<String> = data
        .skills
        .iter()
        .filter_map(|s| s.name.as_deref())
        .filter(|n| !n.trim().is_empty())
        .map(esc)
        .collect();
    if !named_skills.is_empty() {
        html.push_str(&format!(
            "<section><h2>Skills</h2><p>{}</p></section>",
            named_skills.join(" &middot; ")
        ));
    }

    for section in data.custom_sections.iter().filter(|s| has_text(&s.title)) {
        html.push_str(&format!(
            "<section><h2>{}</h2>",
            esc(section.title.as_deref().unwrap_or_default())
        ));
        if let Some(description) = section.description.as_deref().filter(|d| !d.trim().is_empty()) {
            html.push_str(&bullets_marked(description));
        }
        html.push_str("</section>");
    }

    html.push_str("</div>");
    html
}
