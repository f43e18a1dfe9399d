//! Deterministic HTML resume used whenever the drafting call is unavailable.
//!
//! Output depends only on the profile and template. Every interpolated value
//! is HTML-escaped.

use crate::resume::profile::StudentProfile;
use crate::resume::templates::ResumeTemplate;

const STYLE: &str = r#"    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 0 auto; padding: 20px; background: #fff; }
        .header { text-align: center; border-bottom: 3px solid #2563eb; padding-bottom: 20px; margin-bottom: 30px; }
        .header h1 { margin: 0; font-size: 2.5em; color: #1e40af; }
        .contact-info { display: flex; justify-content: center; gap: 20px; flex-wrap: wrap; margin-top: 10px; }
        .section { margin-bottom: 25px; }
        .section h2 { color: #1e40af; border-bottom: 2px solid #e5e7eb; padding-bottom: 5px; margin-bottom: 15px; }
        .education-item, .experience-item, .activity-item { margin-bottom: 15px; }
        .item-header { font-weight: bold; color: #374151; }
        .item-subheader { color: #6b7280; font-style: italic; }
        .skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; }
        .skill-category { background: #f3f4f6; padding: 15px; border-radius: 8px; }
        .skill-category h3 { margin: 0 0 10px 0; color: #1f2937; }
        ul { margin: 5px 0; padding-left: 20px; }
        .projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 15px; }
        .project-card { border: 1px solid #e5e7eb; padding: 15px; border-radius: 8px; }
    </style>
"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn skill_list(heading: &str, items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(
        r#"            <div class="skill-category">
                <h3>{heading}</h3>
                <ul>{items}</ul>
            </div>
"#
    )
}

fn item(class: &str, header: &str, subheader: &str, body: &str) -> String {
    format!(
        r#"        <div class="{class}">
            <div class="item-header">{}</div>
            <div class="item-subheader">{}</div>
            <div>{}</div>
        </div>
"#,
        escape_html(header),
        escape_html(subheader),
        escape_html(body),
    )
}

fn section(heading: &str, body: &str) -> String {
    format!("    <div class=\"section\">\n        <h2>{heading}</h2>\n{body}    </div>\n")
}

fn project_card(title: &str, technologies: &str, description: &str, link: Option<&str>) -> String {
    let link = link
        .filter(|s| !s.is_empty())
        .map(|link| {
            format!(
                "            <div><a href=\"{}\" target=\"_blank\">View Project</a></div>\n",
                escape_html(link)
            )
        })
        .unwrap_or_default();
    format!(
        r#"        <div class="project-card">
            <div class="item-header">{}</div>
            <div class="item-subheader">Technologies: {}</div>
            <div>{}</div>
{link}        </div>
"#,
        escape_html(title),
        escape_html(technologies),
        escape_html(description),
    )
}

fn header(profile: &StudentProfile) -> String {
    let info = &profile.personal_info;
    let mut contact: String = [&info.email, &info.phone, &info.location]
        .iter()
        .map(|field| format!("            <span>{}</span>\n", escape_html(field)))
        .collect();
    if let Some(linkedin) = info.linkedin.as_deref().filter(|s| !s.is_empty()) {
        contact.push_str(&format!("            <span>LinkedIn: {}</span>\n", escape_html(linkedin)));
    }
    if let Some(github) = info.github.as_deref().filter(|s| !s.is_empty()) {
        contact.push_str(&format!("            <span>GitHub: {}</span>\n", escape_html(github)));
    }

    format!(
        r#"    <div class="header">
        <h1>{}</h1>
        <div class="contact-info">
{contact}        </div>
    </div>
"#,
        escape_html(&info.name)
    )
}

/// Renders a standalone HTML resume. Experience, projects and certifications
/// are omitted when empty; education, skills and activities always appear.
pub fn render_fallback(profile: &StudentProfile, template: &ResumeTemplate) -> String {
    let edu = &profile.education;
    let mut out = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="resume-template" content="{}">
    <title>{} - Resume</title>
{STYLE}</head>
<body>
"#,
        template.id,
        escape_html(&profile.personal_info.name),
    );
    out.push_str(&header(profile));

    out.push_str(&section(
        "Education",
        &item(
            "education-item",
            &format!("{} in {}", edu.degree, edu.department),
            &format!("{} | {} Year | CGPA: {}", edu.university, edu.year, edu.cgpa),
            &format!("Expected Graduation: {}", edu.graduation_date),
        ),
    ));

    let skills = &profile.skills;
    out.push_str(&section(
        "Skills",
        &format!(
            "        <div class=\"skills-grid\">\n{}{}{}        </div>\n",
            skill_list("Technical Skills", &skills.technical),
            skill_list("Soft Skills", &skills.soft),
            skill_list("Languages", &skills.languages),
        ),
    ));

    if !profile.experience.is_empty() {
        let items: String = profile
            .experience
            .iter()
            .map(|exp| {
                item(
                    "experience-item",
                    &exp.title,
                    &format!("{} | {}", exp.company, exp.duration),
                    &exp.description,
                )
            })
            .collect();
        out.push_str(&section("Experience", &items));
    }

    if !profile.projects.is_empty() {
        let cards: String = profile
            .projects
            .iter()
            .map(|proj| {
                project_card(
                    &proj.title,
                    &proj.technologies.join(", "),
                    &proj.description,
                    proj.link.as_deref(),
                )
            })
            .collect();
        out.push_str(&section(
            "Projects",
            &format!("        <div class=\"projects-grid\">\n{cards}        </div>\n"),
        ));
    }

    let activities: String = profile
        .activities
        .iter()
        .map(|act| {
            item(
                "activity-item",
                &act.title,
                &format!("{} | {} | Points: {}", act.category, act.date, act.points),
                &act.description,
            )
        })
        .collect();
    out.push_str(&section("Activities &amp; Achievements", &activities));

    if !profile.certificates.is_empty() {
        let items: String = profile
            .certificates
            .iter()
            .map(|cert| {
                item(
                    "activity-item",
                    &cert.title,
                    &format!("{} | {}", cert.issuer, cert.date),
                    &cert.description,
                )
            })
            .collect();
        out.push_str(&section("Certifications", &items));
    }

    out.push_str("</body>\n</html>\n");
    out
}
