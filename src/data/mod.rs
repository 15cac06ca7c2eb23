// Constant catalogs shown on the site, with their read-only accessors.

pub mod academic;
pub mod projects;
pub mod skills;

pub use academic::{
    all_semesters, average_cpa, average_gpa, gpa_chart_data, grade_level, semester_by_id,
};
pub use projects::{all_projects, project_by_id, projects_by_tag};
pub use skills::{all_skill_categories, skill_category_by_id};
