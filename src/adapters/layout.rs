//! The site's page structure, built from the static catalogs.
//!
//! Sections are stacked top to bottom with fixed block heights so that
//! scroll offsets are predictable.

use crate::adapters::memory_document::{ElementSpec, MemoryDocument};
use crate::data::{academic, projects, skills};
use crate::domain::ports::ElementId;

pub const HEADER_HEIGHT: f64 = 70.0;
pub const SECTION_HEADING: f64 = 150.0;
pub const CHART_HEIGHT: f64 = 400.0;
pub const SEMESTER_ROW: f64 = 60.0;
pub const PROJECT_CARD: f64 = 450.0;
pub const SKILL_CARD: f64 = 300.0;
pub const CERT_ITEM: f64 = 200.0;
pub const CERTIFICATE_SLOTS: usize = 2;

/// Section ids in document order; every one has a nav link.
pub const SECTIONS: [&str; 6] = [
    "hero",
    "about",
    "academic",
    "projects",
    "skills",
    "certifications",
];

struct Cursor {
    y: f64,
}

impl Cursor {
    fn take(&mut self, height: f64) -> f64 {
        let top = self.y;
        self.y += height;
        top
    }
}

fn with_classes(mut spec: ElementSpec, classes: &str) -> ElementSpec {
    for class in classes.split_whitespace() {
        spec = spec.class(class);
    }
    spec
}

fn section(doc: &mut MemoryDocument, parent: ElementId, id: &str, top: f64, height: f64) -> ElementId {
    doc.append(
        Some(parent),
        ElementSpec::new("section").id(id).at(top).height(height),
    )
}

fn build_header(doc: &mut MemoryDocument) {
    let header = doc.append(None, ElementSpec::new("header").at(0.0).height(HEADER_HEIGHT));
    let nav = doc.append(Some(header), ElementSpec::new("nav"));
    let links = doc.append(Some(nav), ElementSpec::new("ul").class("nav-links"));
    for id in SECTIONS {
        let item = doc.append(Some(links), ElementSpec::new("li"));
        doc.append(Some(item), ElementSpec::new("a").attr("href", &format!("#{}", id)));
    }
}

fn build_academic(doc: &mut MemoryDocument, main: ElementId, cursor: &mut Cursor) {
    let semesters = academic::all_semesters();
    let height = SECTION_HEADING + CHART_HEIGHT + SEMESTER_ROW * semesters.len() as f64;
    let top = cursor.take(height);
    let section = section(doc, main, "academic", top, height);

    let chart_top = top + SECTION_HEADING;
    doc.append(
        Some(section),
        ElementSpec::new("canvas")
            .id("gpaChart")
            .at(chart_top)
            .height(CHART_HEIGHT)
            .canvas(800.0, CHART_HEIGHT),
    );

    let summary = doc.append(Some(section), ElementSpec::new("div").class("grade-summary"));
    doc.append(
        Some(summary),
        ElementSpec::new("span")
            .class("average-gpa")
            .attr("data-value", &academic::format_grade(academic::average_gpa())),
    );
    doc.append(
        Some(summary),
        ElementSpec::new("span")
            .class("average-cpa")
            .attr("data-value", &academic::format_grade(academic::average_cpa())),
    );

    for (row, semester) in semesters.iter().enumerate() {
        let row_top = chart_top + CHART_HEIGHT + SEMESTER_ROW * row as f64;
        let card = doc.append(
            Some(section),
            ElementSpec::new("div")
                .class("semester-row")
                .attr("data-semester", semester.id)
                .at(row_top)
                .height(SEMESTER_ROW),
        );
        for (kind, grade) in [("gpa", semester.gpa), ("cpa", semester.cpa)] {
            doc.append(
                Some(card),
                ElementSpec::new("span")
                    .class("grade-badge")
                    .class(academic::grade_level(grade).as_str())
                    .attr("data-kind", kind)
                    .attr("data-value", &academic::format_grade(grade)),
            );
        }
    }
}

fn build_projects(doc: &mut MemoryDocument, main: ElementId, cursor: &mut Cursor) {
    let catalog = projects::all_projects();
    let height = SECTION_HEADING + PROJECT_CARD * catalog.len() as f64;
    let top = cursor.take(height);
    let section = section(doc, main, "projects", top, height);

    for (index, project) in catalog.iter().enumerate() {
        let card = doc.append(
            Some(section),
            ElementSpec::new("article")
                .class("project-card")
                .attr("data-project", project.id)
                .at(top + SECTION_HEADING + PROJECT_CARD * index as f64)
                .height(PROJECT_CARD),
        );
        doc.append(
            Some(card),
            with_classes(ElementSpec::new("div").class("project-preview"), project.gradient),
        );
        doc.append(Some(card), with_classes(ElementSpec::new("i"), project.icon));
        doc.append(
            Some(card),
            ElementSpec::new("span")
                .class("project-tag")
                .attr("data-tag", project.tag),
        );

        let tech = doc.append(Some(card), ElementSpec::new("div").class("tech-stack"));
        for icon in project.technologies.icons {
            doc.append(
                Some(tech),
                with_classes(ElementSpec::new("i"), icon.icon).attr("title", icon.name),
            );
        }
        for badge in project.technologies.badges {
            doc.append(
                Some(tech),
                ElementSpec::new("span").class("tech-badge").attr("title", badge),
            );
        }
    }
}

fn build_skills(doc: &mut MemoryDocument, main: ElementId, cursor: &mut Cursor) {
    let categories = skills::all_skill_categories();
    let height = SECTION_HEADING + SKILL_CARD * categories.len() as f64;
    let top = cursor.take(height);
    let section = section(doc, main, "skills", top, height);

    for (index, category) in categories.iter().enumerate() {
        let card = doc.append(
            Some(section),
            ElementSpec::new("div")
                .class("skill-category")
                .attr("data-category", category.id)
                .at(top + SECTION_HEADING + SKILL_CARD * index as f64)
                .height(SKILL_CARD),
        );
        for skill in category.skills {
            let spec = match skill.icon {
                Some(icon) => with_classes(ElementSpec::new("i").class("skill-icon"), icon),
                None => ElementSpec::new("span").class("skill-badge"),
            };
            doc.append(Some(card), spec.attr("title", skill.name));
        }
    }
}

/// Appends the whole page to `doc`.
pub fn build_portfolio_page(doc: &mut MemoryDocument) {
    build_header(doc);

    let main = doc.append(None, ElementSpec::new("main"));
    let mut cursor = Cursor { y: 0.0 };

    let hero_top = cursor.take(700.0);
    let hero = section(doc, main, "hero", hero_top, 700.0);
    doc.append(
        Some(hero),
        ElementSpec::new("a").class("btn").attr("href", "#projects"),
    );

    let about_top = cursor.take(500.0);
    section(doc, main, "about", about_top, 500.0);

    build_academic(doc, main, &mut cursor);
    build_projects(doc, main, &mut cursor);
    build_skills(doc, main, &mut cursor);

    let height = SECTION_HEADING + CERT_ITEM * CERTIFICATE_SLOTS as f64;
    let top = cursor.take(height);
    let certs = section(doc, main, "certifications", top, height);
    for slot in 0..CERTIFICATE_SLOTS {
        doc.append(
            Some(certs),
            ElementSpec::new("div")
                .class("cert-item")
                .at(top + SECTION_HEADING + CERT_ITEM * slot as f64)
                .height(CERT_ITEM),
        );
    }

    let footer_top = cursor.take(200.0);
    doc.append(None, ElementSpec::new("footer").at(footer_top).height(200.0));
}

/// A loaded document containing the portfolio page.
pub fn portfolio_page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    build_portfolio_page(&mut doc);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PresentationSurface;
    use crate::domain::selector::Selector;

    fn sel(s: &str) -> Selector {
        s.parse().unwrap()
    }

    #[test]
    fn test_page_contains_catalog_cards() {
        let doc = portfolio_page();
        let cards = doc.query_selector_all(&sel(".project-card"));
        assert_eq!(cards.len(), projects::all_projects().len());
        assert_eq!(
            doc.attribute(cards[0], "data-project").as_deref(),
            Some("student-management")
        );

        let categories = doc.query_selector_all(&sel(".skill-category"));
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_sections_are_stacked_in_order() {
        let doc = portfolio_page();
        let tops: Vec<f64> = SECTIONS
            .iter()
            .map(|id| doc.offset_top(doc.element_by_id(id).unwrap()))
            .collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tops[0], 0.0);
        assert_eq!(tops[1], 700.0);
    }

    #[test]
    fn test_grade_badges_carry_level_class() {
        let doc = portfolio_page();
        let badges = doc.query_selector_all(&sel("[data-semester=\"20222\"] .grade-badge"));
        assert_eq!(badges.len(), 2);
        // 2.77 GPA and 2.96 CPA both fall between the thresholds.
        assert!(badges.iter().all(|&b| doc.has_class(b, "medium")));
    }
}
