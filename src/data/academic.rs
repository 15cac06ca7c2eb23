//! GPA/CPA by semester.

use crate::domain::model::{
    find_by_id, AcademicRecord, ChartSeries, GradeLevel, GradeThresholds, Semester,
};

static SEMESTERS: [Semester; 6] = [
    Semester { id: "20221", gpa: 3.2, cpa: 3.2 },
    Semester { id: "20222", gpa: 2.77, cpa: 2.96 },
    Semester { id: "20231", gpa: 3.24, cpa: 3.16 },
    Semester { id: "20232", gpa: 3.08, cpa: 3.14 },
    Semester { id: "20241", gpa: 2.91, cpa: 3.04 },
    Semester { id: "20242", gpa: 3.45, cpa: 3.12 },
];

/// Thresholds for the grade badges.
pub const THRESHOLDS: GradeThresholds = GradeThresholds {
    high: 3.0,
    medium: 2.5,
};

pub static ACADEMIC: AcademicRecord = AcademicRecord {
    semesters: &SEMESTERS,
    thresholds: THRESHOLDS,
};

pub fn semester_by_id(id: &str) -> Option<&'static Semester> {
    find_by_id(ACADEMIC.semesters, id)
}

pub fn all_semesters() -> &'static [Semester] {
    ACADEMIC.semesters
}

pub fn gpa_chart_data() -> ChartSeries {
    ChartSeries {
        labels: ACADEMIC.semesters.iter().map(|s| s.id.to_string()).collect(),
        values: ACADEMIC.semesters.iter().map(|s| s.gpa).collect(),
    }
}

pub fn grade_level(grade: f64) -> GradeLevel {
    ACADEMIC.thresholds.classify(grade)
}

pub fn average_gpa() -> f64 {
    mean_rounded(ACADEMIC.semesters.iter().map(|s| s.gpa)).unwrap_or(0.0)
}

pub fn average_cpa() -> f64 {
    mean_rounded(ACADEMIC.semesters.iter().map(|s| s.cpa)).unwrap_or(0.0)
}

/// Arithmetic mean rounded to two decimals; `None` for an empty input.
pub fn mean_rounded(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }
    Some((sum / count as f64 * 100.0).round() / 100.0)
}

/// Two-decimal display form used in grade badges and summaries.
pub fn format_grade(grade: f64) -> String {
    format!("{:.2}", grade)
}
