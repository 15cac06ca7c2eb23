use portfolio_site::adapters::{build_portfolio_page, MemoryDocument, RecordingChartLibrary};
use portfolio_site::config::SiteConfig;
use portfolio_site::domain::model::ChartSeries;
use portfolio_site::domain::ports::{EventKind, PresentationSurface};
use portfolio_site::domain::selector::Selector;
use portfolio_site::utils::logger;
use portfolio_site::{portfolio_page, update_chart_data, Portfolio, SiteError};

fn cards(doc: &MemoryDocument) -> Vec<portfolio_site::domain::ports::ElementId> {
    doc.query_selector_all(&".project-card".parse::<Selector>().unwrap())
}

#[test]
fn test_launch_on_ready_document_initializes_immediately() {
    logger::init_test_logger();
    let mut doc = portfolio_page();
    let library = RecordingChartLibrary::new();
    let log = library.log();

    let launch = Portfolio::new(library).launch(&mut doc);

    assert!(launch.is_initialized());
    let report = launch.take_report().unwrap();
    assert!(report.chart.is_rendered());
    assert_eq!(report.navigation.anchors, 7);
    assert!(report.navigation.highlight);
    assert!(report.navigation.header_shadow);
    // Three project cards, four skill categories, two certificates.
    assert_eq!(report.animated, 9);
    assert_eq!(log.borrow().created, 1);
}

#[test]
fn test_launch_on_loading_document_defers_until_ready() {
    let mut doc = MemoryDocument::loading();
    build_portfolio_page(&mut doc);
    let library = RecordingChartLibrary::new();
    let log = library.log();

    let launch = Portfolio::new(library).launch(&mut doc);

    assert!(!launch.is_initialized());
    assert_eq!(doc.listener_count(EventKind::Ready), 1);
    assert_eq!(doc.listener_count(EventKind::Scroll), 0);
    assert_eq!(log.borrow().created, 0);

    doc.fire_ready();

    assert!(launch.is_initialized());
    assert_eq!(log.borrow().created, 1);
    assert_eq!(doc.listener_count(EventKind::Scroll), 2);

    doc.fire_ready();
    assert_eq!(log.borrow().created, 1);
}

#[test]
fn test_missing_chart_target_does_not_stop_init() {
    let config = SiteConfig::from_toml_str("[chart]\ncanvas_id = \"nowhere\"\n").unwrap();
    let mut doc = portfolio_page();

    let launch = Portfolio::with_config(config, RecordingChartLibrary::new())
        .unwrap()
        .launch(&mut doc);
    let report = launch.take_report().unwrap();

    assert!(!report.chart.is_rendered());
    assert!(report.chart.error().unwrap().is_missing_target());
    assert!(report.navigation.highlight);
    assert_eq!(report.animated, 9);
}

#[test]
fn test_chart_setup_failure_is_contained() {
    let mut doc = portfolio_page();

    let launch = Portfolio::new(RecordingChartLibrary::failing("no webgl")).launch(&mut doc);

    let report = launch.take_report().unwrap();
    assert!(matches!(
        report.chart.error(),
        Some(SiteError::ChartSetup { .. })
    ));
    assert!(report.navigation.header_shadow);
    assert_eq!(report.animated, 9);

    doc.scroll_to(50.0);
    let header = doc.query_selector(&"header".parse::<Selector>().unwrap()).unwrap();
    assert!(doc.has_class(header, "scrolled"));
}

#[test]
fn test_cards_fade_in_once_scrolled_into_view() {
    let mut doc = portfolio_page();
    let _launch = Portfolio::new(RecordingChartLibrary::new()).launch(&mut doc);
    let cards = cards(&doc);
    assert_eq!(doc.observer_count(), 9);
    assert!(cards.iter().all(|&c| !doc.has_class(c, "fade-in-up")));

    // Viewport 2110..2910: the first card fully, the second partly.
    doc.scroll_to(2110.0);

    assert!(doc.has_class(cards[0], "fade-in-up"));
    assert!(doc.has_class(cards[1], "fade-in-up"));
    assert!(!doc.has_class(cards[2], "fade-in-up"));
    assert_eq!(doc.observer_count(), 7);

    // Leaving the viewport keeps the animation class.
    doc.scroll_to(0.0);
    assert!(doc.has_class(cards[0], "fade-in-up"));
}

#[test]
fn test_chart_can_be_updated_after_launch() {
    let mut doc = portfolio_page();
    let library = RecordingChartLibrary::new();
    let log = library.log();
    let launch = Portfolio::new(library).launch(&mut doc);

    let series = ChartSeries {
        labels: vec!["20251".to_string()],
        values: vec![3.8],
    };
    let result = launch
        .with_report(|report| update_chart_data(report.chart.chart_mut(), &series))
        .unwrap();

    assert!(result.is_ok());
    assert_eq!(log.borrow().redraws(), 1);
}

#[test]
fn test_invalid_config_never_reaches_the_page() {
    let rejected = SiteConfig::from_toml_str("[chart]\ny_min = 4.0\ny_max = 2.5\n[animation]\nthreshold = 7.0\n");
    assert!(matches!(rejected, Err(SiteError::InvalidConfigValue { .. })));

    let mut config = SiteConfig::default();
    config.animation.threshold = 7.0;
    let library = RecordingChartLibrary::new();
    let log = library.log();

    let portfolio = Portfolio::with_config(config, library);
    assert!(matches!(portfolio, Err(SiteError::InvalidConfigValue { .. })));

    let doc = portfolio_page();
    assert_eq!(log.borrow().created, 0);
    assert_eq!(doc.listener_count(EventKind::Scroll), 0);
    assert_eq!(doc.observer_count(), 0);
}
