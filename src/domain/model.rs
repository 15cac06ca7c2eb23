use serde::Serialize;
use std::fmt;

/// Entries of the static catalogs, addressable by a unique id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Linear scan over a catalog. Absent ids are `None`, not an error.
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Semester {
    pub id: &'static str,
    pub gpa: f64,
    pub cpa: f64,
}

impl Identified for Semester {
    fn id(&self) -> &str {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeLevel {
    High,
    Medium,
    Low,
}

impl GradeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeThresholds {
    pub high: f64,
    pub medium: f64,
}

impl GradeThresholds {
    pub fn classify(&self, grade: f64) -> GradeLevel {
        if grade >= self.high {
            GradeLevel::High
        } else if grade >= self.medium {
            GradeLevel::Medium
        } else {
            GradeLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AcademicRecord {
    pub semesters: &'static [Semester],
    pub thresholds: GradeThresholds,
}

/// Parallel label/value arrays in the shape the chart consumes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechIcon {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technologies {
    pub icons: &'static [TechIcon],
    pub badges: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub gradient: &'static str,
    pub icon: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub result: &'static str,
    pub technologies: Technologies,
}

impl Identified for Project {
    fn id(&self) -> &str {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Icon,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: SkillKind,
}

impl Skill {
    pub const fn icon(name: &'static str, icon: &'static str) -> Self {
        Self {
            name,
            icon: Some(icon),
            kind: SkillKind::Icon,
        }
    }

    pub const fn badge(name: &'static str) -> Self {
        Self {
            name,
            icon: None,
            kind: SkillKind::Badge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    pub fn skills_of_kind(&self, kind: SkillKind) -> impl Iterator<Item = &Skill> + '_ {
        self.skills.iter().filter(move |s| s.kind == kind)
    }
}

impl Identified for SkillCategory {
    fn id(&self) -> &str {
        self.id
    }
}
