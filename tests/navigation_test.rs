use portfolio_site::adapters::{ElementSpec, MemoryDocument};
use portfolio_site::config::NavigationSettings;
use portfolio_site::core::navigation::{
    init_active_nav_highlight, init_header_shadow, init_navigation, init_smooth_scroll,
};
use portfolio_site::domain::ports::{ElementId, EventKind, PresentationSurface, ScrollIntoViewOptions};
use portfolio_site::domain::selector::Selector;
use portfolio_site::portfolio_page;

fn selector(s: &str) -> Selector {
    s.parse().unwrap()
}

fn nav_link(doc: &MemoryDocument, section: &str) -> ElementId {
    doc.query_selector(&selector(&format!(".nav-links a[href=\"#{}\"]", section)))
        .unwrap()
}

fn active_links(doc: &MemoryDocument) -> Vec<String> {
    doc.query_selector_all(&selector(".nav-links a"))
        .into_iter()
        .filter(|&link| doc.has_class(link, "active"))
        .filter_map(|link| doc.attribute(link, "href"))
        .collect()
}

fn header(doc: &MemoryDocument) -> ElementId {
    doc.query_selector(&selector("header")).unwrap()
}

#[test]
fn test_highlight_runs_once_at_setup() {
    let mut doc = portfolio_page();
    init_active_nav_highlight(&mut doc, &NavigationSettings::default()).unwrap();

    assert_eq!(active_links(&doc), vec!["#hero"]);
    assert_eq!(doc.listener_count(EventKind::Scroll), 1);
}

#[test]
fn test_highlight_follows_scroll_with_lookahead() {
    let mut doc = portfolio_page();
    init_active_nav_highlight(&mut doc, &NavigationSettings::default()).unwrap();

    // "about" starts at 700; the 100 unit margin makes it current from 600.
    doc.scroll_to(599.0);
    assert_eq!(active_links(&doc), vec!["#hero"]);

    doc.scroll_to(600.0);
    assert_eq!(active_links(&doc), vec!["#about"]);

    doc.scroll_to(100_000.0);
    assert_eq!(active_links(&doc), vec!["#certifications"]);

    doc.scroll_to(0.0);
    assert_eq!(active_links(&doc), vec!["#hero"]);
}

#[test]
fn test_no_link_active_before_first_section() {
    let mut doc = MemoryDocument::new();
    let nav = doc.append(None, ElementSpec::new("ul").class("nav-links"));
    doc.append(Some(nav), ElementSpec::new("a").attr("href", "#about"));
    doc.append(None, ElementSpec::new("section").id("about").at(900.0).height(400.0));

    init_active_nav_highlight(&mut doc, &NavigationSettings::default()).unwrap();
    assert!(active_links(&doc).is_empty());

    doc.scroll_to(800.0);
    assert_eq!(active_links(&doc), vec!["#about"]);
}

#[test]
fn test_header_shadow_toggles_past_threshold() {
    let mut doc = portfolio_page();
    init_header_shadow(&mut doc, &NavigationSettings::default()).unwrap();
    let header = header(&doc);

    assert!(!doc.has_class(header, "scrolled"));

    doc.scroll_to(10.0);
    assert!(!doc.has_class(header, "scrolled"));

    doc.scroll_to(11.0);
    assert!(doc.has_class(header, "scrolled"));

    doc.scroll_to(0.0);
    assert!(!doc.has_class(header, "scrolled"));
}

#[test]
fn test_header_shadow_applies_current_position_at_setup() {
    let mut doc = portfolio_page();
    doc.scroll_to(300.0);

    init_header_shadow(&mut doc, &NavigationSettings::default()).unwrap();

    assert!(doc.has_class(header(&doc), "scrolled"));
}

#[test]
fn test_missing_header_is_reported_not_fatal() {
    let mut doc = MemoryDocument::new();
    doc.append(None, ElementSpec::new("section").id("about"));

    let err = init_header_shadow(&mut doc, &NavigationSettings::default()).unwrap_err();
    assert!(err.is_missing_target());

    let report = init_navigation(&mut doc, &NavigationSettings::default());
    assert!(report.highlight);
    assert!(!report.header_shadow);
}

#[test]
fn test_smooth_scroll_to_section() {
    let mut doc = portfolio_page();
    let bound = init_smooth_scroll(&mut doc, &NavigationSettings::default()).unwrap();
    // Six nav links plus the hero call-to-action.
    assert_eq!(bound, 7);

    let projects = doc.element_by_id("projects").unwrap();
    let event = doc.click(nav_link(&doc, "projects"));

    assert!(event.default_prevented());
    assert_eq!(doc.scroll_requests().len(), 1);
    assert_eq!(doc.scroll_requests()[0].element, projects);
    assert_eq!(doc.scroll_requests()[0].options, ScrollIntoViewOptions::SMOOTH_START);
    assert_eq!(doc.scroll_y(), doc.offset_top(projects));
}

#[test]
fn test_smooth_scroll_without_target_is_noop() {
    let mut doc = portfolio_page();
    let bare = doc.append(None, ElementSpec::new("a").attr("href", "#"));
    let dangling = doc.append(None, ElementSpec::new("a").attr("href", "#contact"));
    init_smooth_scroll(&mut doc, &NavigationSettings::default()).unwrap();

    let first = doc.click(bare);
    let second = doc.click(dangling);

    assert!(first.default_prevented());
    assert!(second.default_prevented());
    assert!(doc.scroll_requests().is_empty());
    assert_eq!(doc.scroll_y(), 0.0);
}

#[test]
fn test_click_scroll_updates_highlight_and_header() {
    let mut doc = portfolio_page();
    let report = init_navigation(&mut doc, &NavigationSettings::default());
    assert_eq!(report.anchors, 7);
    assert!(report.highlight && report.header_shadow);

    doc.click(nav_link(&doc, "skills"));

    assert_eq!(active_links(&doc), vec!["#skills"]);
    assert!(doc.has_class(header(&doc), "scrolled"));
}

#[test]
fn test_reinvoking_setup_keeps_single_active_link() {
    let mut doc = portfolio_page();
    let settings = NavigationSettings::default();
    init_active_nav_highlight(&mut doc, &settings).unwrap();
    init_active_nav_highlight(&mut doc, &settings).unwrap();

    doc.scroll_to(1300.0);

    assert_eq!(active_links(&doc), vec!["#academic"]);
}
