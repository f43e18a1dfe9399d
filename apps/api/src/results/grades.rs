//! Semester results: credit-weighted SGPA, aggregate percentage and grade counts.

use serde::Serialize;

/// Grades charted on the results page, best first.
pub const CHARTED_GRADES: [&str; 4] = ["A+", "A", "B+", "B"];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Theory,
    Lab,
    Project,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub faculty: String,
    pub credits: u32,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub marks_obtained: u32,
    pub total_marks: u32,
    pub grade: String,
    pub grade_points: u32,
}

impl Subject {
    pub fn percentage(&self) -> f64 {
        ratio_percent(self.marks_obtained, self.total_marks)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GradeCount {
    pub grade: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPerformance {
    pub subject: String,
    pub marks: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterResult {
    pub student_id: String,
    pub semester: String,
    pub subjects: Vec<Subject>,
    pub total_credits: u32,
    pub marks_obtained: u32,
    pub total_marks: u32,
    pub sgpa: f64,
    pub percentage: f64,
    pub grade_distribution: Vec<GradeCount>,
    pub performance: Vec<SubjectPerformance>,
}

fn ratio_percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

/// Two decimal places, as shown on the results page.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn total_credits(subjects: &[Subject]) -> u32 {
    subjects.iter().map(|s| s.credits).sum()
}

/// Credit-weighted mean of grade points. 0 when there are no credits.
pub fn sgpa(subjects: &[Subject]) -> f64 {
    let credits = total_credits(subjects);
    if credits == 0 {
        return 0.0;
    }
    let weighted: u32 = subjects.iter().map(|s| s.grade_points * s.credits).sum();
    f64::from(weighted) / f64::from(credits)
}

/// Marks obtained over marks available across every subject.
pub fn percentage(subjects: &[Subject]) -> f64 {
    let obtained = subjects.iter().map(|s| s.marks_obtained).sum();
    let total = subjects.iter().map(|s| s.total_marks).sum();
    ratio_percent(obtained, total)
}

/// Count per charted grade, zeros included. Other grades are not charted.
pub fn grade_distribution(subjects: &[Subject]) -> Vec<GradeCount> {
    CHARTED_GRADES
        .iter()
        .map(|&grade| GradeCount {
            grade,
            count: subjects.iter().filter(|s| s.grade == grade).count(),
        })
        .collect()
}

pub fn semester_result(student_id: &str, semester: &str, subjects: Vec<Subject>) -> SemesterResult {
    let performance = subjects
        .iter()
        .map(|s| SubjectPerformance {
            subject: s.code.clone(),
            marks: s.marks_obtained,
            percentage: round2(s.percentage()),
        })
        .collect();

    SemesterResult {
        student_id: student_id.to_string(),
        semester: semester.to_string(),
        total_credits: total_credits(&subjects),
        marks_obtained: subjects.iter().map(|s| s.marks_obtained).sum(),
        total_marks: subjects.iter().map(|s| s.total_marks).sum(),
        sgpa: round2(sgpa(&subjects)),
        percentage: round2(percentage(&subjects)),
        grade_distribution: grade_distribution(&subjects),
        performance,
        subjects,
    }
}
