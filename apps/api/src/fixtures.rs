//! Seed collections loaded into the in-memory store at startup.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Activity, Category, Certificate, Role, Status, Student, User};
use crate::results::grades::{Subject, SubjectType};
use crate::stats::analytics::{Analytics, MonthlyTrend};

pub const DEPARTMENTS: [&str; 5] = [
    "Computer Science",
    "Electronics",
    "Mechanical",
    "Civil",
    "Chemical",
];

pub const CURRENT_SEMESTER: &str = "Semester 6";

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    day(y, m, d)
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".to_string(),
            student_id: "CS2021001".to_string(),
            title: "Won First Prize in Hackathon".to_string(),
            description: "Developed an AI-powered study assistant app and won first prize in the university hackathon.".to_string(),
            category: Category::Technical,
            date: day(2024, 3, 15),
            status: Status::Approved,
            documents: vec!["/hackathon-certificate.jpg".to_string()],
            points: 50,
            faculty_remarks: Some("Excellent technical innovation and presentation.".to_string()),
            approved_by: Some("Dr. Priya Patel".to_string()),
            approved_at: Some(midnight(2024, 3, 18)),
            created_at: midnight(2024, 3, 16),
        },
        Activity {
            id: "2".to_string(),
            student_id: "CS2021001".to_string(),
            title: "Volunteer at Blood Donation Camp".to_string(),
            description: "Organized and volunteered at the annual blood donation camp, helping coordinate 100+ donations.".to_string(),
            category: Category::Social,
            date: day(2024, 2, 20),
            status: Status::Pending,
            documents: vec!["/volunteer-certificate.jpg".to_string()],
            points: 30,
            faculty_remarks: None,
            approved_by: None,
            approved_at: None,
            created_at: midnight(2024, 2, 22),
        },
        Activity {
            id: "3".to_string(),
            student_id: "CS2021001".to_string(),
            title: "Research Paper Publication".to_string(),
            description: "Co-authored a research paper on machine learning applications in education, published in IEEE conference.".to_string(),
            category: Category::Academic,
            date: day(2024, 1, 10),
            status: Status::Approved,
            documents: vec!["/research-paper-stack.png".to_string()],
            points: 80,
            faculty_remarks: Some("Outstanding research contribution.".to_string()),
            approved_by: Some("Dr. Priya Patel".to_string()),
            approved_at: Some(midnight(2024, 1, 15)),
            created_at: midnight(2024, 1, 12),
        },
    ]
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "cert1".to_string(),
            student_id: "CS2021001".to_string(),
            title: "AWS Cloud Practitioner Certification".to_string(),
            description: "Successfully completed AWS Cloud Practitioner certification with 90% score".to_string(),
            category: Category::Technical,
            issuer: "Amazon Web Services".to_string(),
            date_issued: day(2024, 3, 10),
            status: Status::Pending,
            certificate_file: "/aws-certificate.pdf".to_string(),
            points: 60,
            faculty_remarks: None,
            approved_by: None,
            approved_at: None,
            created_at: midnight(2024, 3, 12),
        },
        Certificate {
            id: "cert2".to_string(),
            student_id: "CS2021001".to_string(),
            title: "Google Analytics Certified".to_string(),
            description: "Completed Google Analytics Individual Qualification (IQ) certification".to_string(),
            category: Category::Technical,
            issuer: "Google".to_string(),
            date_issued: day(2024, 2, 15),
            status: Status::Approved,
            certificate_file: "/google-analytics-cert.pdf".to_string(),
            points: 40,
            faculty_remarks: Some("Excellent additional skill for data analysis.".to_string()),
            approved_by: Some("Dr. Priya Patel".to_string()),
            approved_at: Some(midnight(2024, 2, 18)),
            created_at: midnight(2024, 2, 16),
        },
        Certificate {
            id: "cert3".to_string(),
            student_id: "EC2021045".to_string(),
            title: "NPTEL Electronics Course Certificate".to_string(),
            description: "Completed Advanced Digital Signal Processing course with Elite grade".to_string(),
            category: Category::Academic,
            issuer: "NPTEL".to_string(),
            date_issued: day(2024, 1, 20),
            status: Status::Approved,
            certificate_file: "/nptel-certificate.pdf".to_string(),
            points: 50,
            faculty_remarks: Some("High-quality academic achievement.".to_string()),
            approved_by: Some("Dr. Priya Patel".to_string()),
            approved_at: Some(midnight(2024, 1, 25)),
            created_at: midnight(2024, 1, 22),
        },
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student {
            id: "CS2021001".to_string(),
            name: "Arjun Sharma".to_string(),
            email: "arjun.sharma@university.edu".to_string(),
            department: "Computer Science".to_string(),
            year: 3,
            cgpa: 8.7,
            total_activities: 12,
            total_points: 340,
            profile_image: Some("/diverse-student-profiles.png".to_string()),
        },
        Student {
            id: "EC2021045".to_string(),
            name: "Priya Patel".to_string(),
            email: "priya.patel@university.edu".to_string(),
            department: "Electronics".to_string(),
            year: 2,
            cgpa: 9.1,
            total_activities: 8,
            total_points: 280,
            profile_image: None,
        },
        Student {
            id: "ME2020123".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: "rajesh.kumar@university.edu".to_string(),
            department: "Mechanical".to_string(),
            year: 4,
            cgpa: 8.3,
            total_activities: 15,
            total_points: 420,
            profile_image: None,
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "student@university.edu".to_string(),
            name: "Arjun Sharma".to_string(),
            role: Role::Student,
            department: Some("Computer Science".to_string()),
            student_id: Some("CS2021001".to_string()),
            designation: None,
            profile_image: Some("/diverse-student-profiles.png".to_string()),
        },
        User {
            id: "2".to_string(),
            email: "faculty@university.edu".to_string(),
            name: "Dr. Priya Patel".to_string(),
            role: Role::Faculty,
            department: Some("Computer Science".to_string()),
            student_id: None,
            designation: Some("Associate Professor".to_string()),
            profile_image: None,
        },
        User {
            id: "3".to_string(),
            email: "admin@university.edu".to_string(),
            name: "Rajesh Kumar".to_string(),
            role: Role::Admin,
            department: None,
            student_id: None,
            designation: None,
            profile_image: None,
        },
    ]
}

pub fn analytics() -> Analytics {
    let department_stats = BTreeMap::from([
        ("Computer Science".to_string(), 890),
        ("Electronics".to_string(), 650),
        ("Mechanical".to_string(), 720),
        ("Civil".to_string(), 580),
        ("Chemical".to_string(), 580),
    ]);

    let category_stats = BTreeMap::from([
        (Category::Academic, 1200),
        (Category::Technical, 850),
        (Category::Extracurricular, 600),
        (Category::Sports, 400),
        (Category::Cultural, 250),
        (Category::Social, 120),
    ]);

    let monthly_trends = [
        ("Jan", 280, 220),
        ("Feb", 320, 250),
        ("Mar", 380, 300),
        ("Apr", 290, 230),
        ("May", 250, 195),
        ("Jun", 310, 245),
    ]
    .into_iter()
    .map(|(month, activities, approvals)| MonthlyTrend {
        month: month.to_string(),
        activities,
        approvals,
    })
    .collect();

    Analytics {
        total_students: 1250,
        total_activities: 3420,
        total_certificates: 245,
        approval_rate: 78.5,
        department_stats,
        category_stats,
        monthly_trends,
    }
}


#[allow(clippy::too_many_arguments)]
fn subject(
    code: &str,
    name: &str,
    faculty: &str,
    credits: u32,
    subject_type: SubjectType,
    marks_obtained: u32,
    grade: &str,
    grade_points: u32,
) -> Subject {
    Subject {
        code: code.to_string(),
        name: name.to_string(),
        faculty: faculty.to_string(),
        credits,
        subject_type,
        marks_obtained,
        total_marks: 100,
        grade: grade.to_string(),
        grade_points,
    }
}

/// Current-semester marks shown on every student's results page.
pub fn semester_subjects() -> Vec<Subject> {
    use SubjectType::{Lab, Project, Theory};

    vec![
        subject("DAA", "Design and Analysis of Algorithms", "Dr. Shailesh Singh Panwar", 4, Theory, 85, "A", 9),
        subject("CD", "Compiler Design", "Mr. Sushil Singh Rauthan", 4, Theory, 78, "B+", 8),
        subject("DBMS", "Database Management System", "Mr. Gajendra Singh Rai", 4, Theory, 92, "A+", 10),
        subject("FL", "Fuzzy Logic", "Dr. Shailesh Singh Panwar", 3, Theory, 82, "A", 9),
        subject("DAA Lab", "Design and Analysis of Algorithms Lab", "Dr. Shailesh Singh Panwar", 2, Lab, 88, "A", 9),
        subject("CD Lab", "Compiler Design Lab", "Mr. Sushil Singh Rauthan", 2, Lab, 85, "A", 9),
        subject("DBMS Lab", "Database Management System Lab", "Mr. Gajendra Singh Rai", 2, Lab, 90, "A+", 10),
        subject("SE", "Software Engineering", "Mr. Abhilaash Maithani", 3, Theory, 79, "B+", 8),
        subject("CSI", "Constitution of India", "Dr. Anshul Singh", 2, Theory, 87, "A", 9),
        subject("MP-II", "Mini Project - II", "Faculty Coordinator", 2, Project, 94, "A+", 10),
    ]
}
