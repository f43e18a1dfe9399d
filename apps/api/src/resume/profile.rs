use serde::{Deserialize, Serialize};

use crate::models::Student;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub university: String,
    pub degree: String,
    pub department: String,
    pub year: u8,
    pub cgpa: f64,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileActivity {
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub points: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCertificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Everything a resume is rendered from, AI-drafted or templated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub personal_info: PersonalInfo,
    pub education: Education,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub activities: Vec<ProfileActivity>,
    #[serde(default)]
    pub certificates: Vec<ProfileCertificate>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Starter profile for the builder. Name, email and department come from the
/// student record; everything else is sample content the student edits.
pub fn mock_profile(student: &Student) -> StudentProfile {
    StudentProfile {
        personal_info: PersonalInfo {
            name: student.name.clone(),
            email: student.email.clone(),
            phone: "+91 9876543210".to_string(),
            location: "Mumbai, India".to_string(),
            linkedin: Some("linkedin.com/in/arjunsharma".to_string()),
            github: Some("github.com/arjunsharma".to_string()),
        },
        education: Education {
            university: "Indian Institute of Technology".to_string(),
            degree: "Bachelor of Technology".to_string(),
            department: student.department.clone(),
            year: 3,
            cgpa: 8.7,
            graduation_date: "May 2025".to_string(),
        },
        experience: vec![Experience {
            title: "Software Development Intern".to_string(),
            company: "Tech Innovators Pvt Ltd".to_string(),
            duration: "Summer 2024".to_string(),
            description: "Developed web applications using React and Node.js, contributing to a 20% improvement in user engagement".to_string(),
        }],
        skills: Skills {
            technical: strings(&[
                "JavaScript", "TypeScript", "React", "Node.js", "Python", "Java", "SQL",
                "MongoDB", "Git", "AWS", "Docker", "Machine Learning",
            ]),
            soft: strings(&[
                "Leadership", "Problem Solving", "Team Collaboration", "Communication",
                "Project Management", "Critical Thinking",
            ]),
            languages: strings(&[
                "English (Fluent)",
                "Hindi (Native)",
                "Marathi (Conversational)",
            ]),
        },
        activities: vec![
            ProfileActivity {
                title: "Won First Prize in Hackathon".to_string(),
                category: "Technical".to_string(),
                description: "Developed an AI-powered study assistant app and won first prize in the university hackathon".to_string(),
                date: "March 2024".to_string(),
                points: 50,
            },
            ProfileActivity {
                title: "Volunteer at Blood Donation Camp".to_string(),
                category: "Social".to_string(),
                description: "Organized and volunteered at the annual blood donation camp, helping coordinate 100+ donations".to_string(),
                date: "February 2024".to_string(),
                points: 30,
            },
        ],
        certificates: vec![
            ProfileCertificate {
                title: "AWS Cloud Practitioner".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "March 2024".to_string(),
                description: "Cloud computing fundamentals and AWS services certification".to_string(),
            },
            ProfileCertificate {
                title: "Google Analytics Certified".to_string(),
                issuer: "Google".to_string(),
                date: "February 2024".to_string(),
                description: "Digital analytics and data analysis certification".to_string(),
            },
        ],
        projects: vec![
            Project {
                title: "Student Management System".to_string(),
                technologies: strings(&["React", "Node.js", "MongoDB", "Express"]),
                description: "Full-stack web application for managing student records and academic activities".to_string(),
                link: Some("github.com/arjunsharma/student-management".to_string()),
            },
            Project {
                title: "Machine Learning Price Predictor".to_string(),
                technologies: strings(&["Python", "Scikit-learn", "Pandas", "Flask"]),
                description: "ML model to predict house prices using regression algorithms with 85% accuracy".to_string(),
                link: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_mock_profile_takes_identity_from_student() {
        let priya = fixtures::students().into_iter().nth(1).unwrap();
        let profile = mock_profile(&priya);
        assert_eq!(profile.personal_info.name, "Priya Patel");
        assert_eq!(profile.personal_info.email, "priya.patel@university.edu");
        assert_eq!(profile.education.department, "Electronics");
        assert_eq!(profile.skills.technical.len(), 12);
    }

    #[test]
    fn test_profile_deserializes_with_missing_lists() {
        let json = r#"{
            "personalInfo": {"name": "A", "email": "a@x.edu", "phone": "", "location": ""},
            "education": {"university": "U", "degree": "B", "department": "D",
                          "year": 1, "cgpa": 7.5, "graduationDate": "2027"}
        }"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert!(profile.projects.is_empty());
        assert!(profile.skills.technical.is_empty());
        assert!(profile.personal_info.linkedin.is_none());
    }
}
