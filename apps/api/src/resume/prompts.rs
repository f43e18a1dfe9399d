use crate::llm_client::prompts::HTML_ONLY_INSTRUCTION;
use crate::resume::profile::StudentProfile;
use crate::resume::templates::ResumeTemplate;

fn or_not_provided(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "Not provided",
    }
}

fn bullet_lines<T>(items: &[T], line: impl Fn(&T) -> String) -> String {
    items.iter().map(|item| format!("- {}\n", line(item))).collect()
}

/// Builds the drafting prompt. Every profile field is listed so the model
/// never has to invent content.
pub fn build_prompt(profile: &StudentProfile, template: &ResumeTemplate) -> String {
    let info = &profile.personal_info;
    let edu = &profile.education;
    let skills = &profile.skills;

    let experience = bullet_lines(&profile.experience, |exp| {
        format!("{} at {} ({}): {}", exp.title, exp.company, exp.duration, exp.description)
    });
    let activities = bullet_lines(&profile.activities, |act| {
        format!("{} ({}): {} - {}", act.title, act.category, act.description, act.date)
    });
    let certificates = bullet_lines(&profile.certificates, |cert| {
        format!("{} by {} ({}): {}", cert.title, cert.issuer, cert.date, cert.description)
    });
    let projects = bullet_lines(&profile.projects, |proj| {
        format!(
            "{}: {} | Technologies: {}",
            proj.title,
            proj.description,
            proj.technologies.join(", ")
        )
    });

    format!(
        "Generate a professional resume in HTML format for the following student profile. \
         Use the \"{template_name}\" template style ({template_description}).

Student Information:
- Name: {name}
- Email: {email}
- Phone: {phone}
- Location: {location}
- LinkedIn: {linkedin}
- GitHub: {github}

Education:
- University: {university}
- Degree: {degree} in {department}
- Year: {year}
- CGPA: {cgpa}
- Expected Graduation: {graduation}

Technical Skills: {technical}
Soft Skills: {soft}
Languages: {languages}

Experience:
{experience}
Activities and Achievements:
{activities}
Certifications:
{certificates}
Projects:
{projects}
Please create a well-structured, ATS-friendly HTML resume that:
1. Uses modern CSS styling with a {style} design approach
2. Includes proper sections for contact info, education, experience, skills, achievements, and projects
3. Highlights the student's technical skills and academic achievements
4. Uses professional formatting and typography
5. Is optimized for both digital viewing and printing
6. Include CSS styles inline for a complete standalone HTML document

{HTML_ONLY_INSTRUCTION}",
        template_name = template.name,
        template_description = template.description,
        name = info.name,
        email = info.email,
        phone = info.phone,
        location = info.location,
        linkedin = or_not_provided(info.linkedin.as_deref()),
        github = or_not_provided(info.github.as_deref()),
        university = edu.university,
        degree = edu.degree,
        department = edu.department,
        year = edu.year,
        cgpa = edu.cgpa,
        graduation = edu.graduation_date,
        technical = skills.technical.join(", "),
        soft = skills.soft.join(", "),
        languages = skills.languages.join(", "),
        style = template.category.as_str(),
    )
}
