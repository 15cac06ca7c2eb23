use portfolio_site::data::academic::{
    all_semesters, average_cpa, average_gpa, gpa_chart_data, grade_level, semester_by_id,
    THRESHOLDS,
};
use portfolio_site::domain::model::GradeLevel;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_lookup_returns_exact_record_for_every_semester() {
    for semester in all_semesters() {
        let found = semester_by_id(semester.id).expect("semester should be found");
        assert_eq!(found, semester);
    }
}

#[test]
fn test_lookup_unknown_semester_is_none() {
    assert!(semester_by_id("20251").is_none());
    assert!(semester_by_id("").is_none());
}

#[test]
fn test_chart_data_is_parallel_and_ordered() {
    let series = gpa_chart_data();
    let semesters = all_semesters();

    assert_eq!(series.labels.len(), semesters.len());
    assert_eq!(series.values.len(), semesters.len());
    assert_eq!(
        series.labels,
        vec!["20221", "20222", "20231", "20232", "20241", "20242"]
    );
    assert_eq!(series.values, vec![3.2, 2.77, 3.24, 3.08, 2.91, 3.45]);
}

#[test]
fn test_grade_level_classification() {
    assert_eq!(THRESHOLDS.high, 3.0);
    assert_eq!(THRESHOLDS.medium, 2.5);

    assert_eq!(grade_level(3.2), GradeLevel::High);
    assert_eq!(grade_level(2.77), GradeLevel::Medium);
    assert_eq!(grade_level(2.0), GradeLevel::Low);
    assert_eq!(grade_level(3.0), GradeLevel::High);
    assert_eq!(grade_level(2.5), GradeLevel::Medium);
    assert_eq!(grade_level(3.0).to_string(), "high");
}

#[test]
fn test_grade_level_is_monotonic() {
    let mut previous = GradeLevel::Low;
    let rank = |level: GradeLevel| match level {
        GradeLevel::Low => 0,
        GradeLevel::Medium => 1,
        GradeLevel::High => 2,
    };

    for step in 0..=400 {
        let grade = step as f64 / 100.0;
        let level = grade_level(grade);
        assert!(rank(level) >= rank(previous), "level dropped at {}", grade);
        previous = level;
    }
}

#[test]
fn test_averages_round_to_two_decimals() {
    assert_close(average_gpa(), 3.11);
    assert_close(average_cpa(), 3.10);
}
