use crate::config::SiteConfig;
use crate::core::animation::init_animations;
use crate::core::chart::init_gpa_chart;
use crate::core::navigation::{init_navigation, NavigationReport};
use crate::domain::ports::{
    ChartInstance, ChartLibrary, Event, EventKind, EventTarget, PresentationSurface, ReadyState,
};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Result of the chart step. A skipped chart never fails initialisation.
pub enum ChartOutcome {
    Rendered(Box<dyn ChartInstance>),
    Skipped(SiteError),
}

impl ChartOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn chart_mut(&mut self) -> Option<&mut dyn ChartInstance> {
        match self {
            Self::Rendered(chart) => Some(chart.as_mut()),
            Self::Skipped(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SiteError> {
        match self {
            Self::Rendered(_) => None,
            Self::Skipped(e) => Some(e),
        }
    }
}

impl fmt::Debug for ChartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rendered(chart) => f
                .debug_tuple("Rendered")
                .field(&chart.config().series())
                .finish(),
            Self::Skipped(e) => f.debug_tuple("Skipped").field(e).finish(),
        }
    }
}

#[derive(Debug)]
pub struct InitReport {
    pub navigation: NavigationReport,
    pub chart: ChartOutcome,
    pub animated: usize,
}

pub struct Portfolio<L: ChartLibrary> {
    config: SiteConfig,
    charts: L,
}

impl<L: ChartLibrary> Portfolio<L> {
    pub fn new(charts: L) -> Self {
        Self {
            config: SiteConfig::default(),
            charts,
        }
    }

    /// Fails when `config` does not validate; nothing is attached in that case.
    pub fn with_config(config: SiteConfig, charts: L) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, charts })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Runs every startup step in order: navigation, chart, animations.
    pub fn init<S>(&mut self, surface: &mut S) -> InitReport
    where
        S: PresentationSurface + ?Sized,
    {
        tracing::info!("🚀 Initializing portfolio...");

        let navigation = init_navigation(surface, &self.config.navigation);

        let chart = match init_gpa_chart(&*surface, &mut self.charts, &self.config.chart) {
            Ok(chart) => {
                tracing::info!("✅ GPA Chart initialized");
                ChartOutcome::Rendered(chart)
            }
            Err(e) => {
                tracing::error!("❌ Error initializing GPA chart: {}", e);
                ChartOutcome::Skipped(e)
            }
        };

        let animated = match init_animations(surface, &self.config.animation) {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("❌ Scroll animations not attached: {}", e);
                0
            }
        };

        tracing::info!("✅ Portfolio initialized successfully");
        InitReport {
            navigation,
            chart,
            animated,
        }
    }
}

impl<L: ChartLibrary + 'static> Portfolio<L> {
    /// Initialises now if the surface is ready, otherwise once on its ready event.
    pub fn launch<S>(self, surface: &mut S) -> Launch
    where
        S: PresentationSurface + ?Sized,
    {
        let slot = Rc::new(RefCell::new(None));

        if surface.ready_state() == ReadyState::Loading {
            tracing::debug!("Surface still loading, deferring init to ready event");
            let mut pending = Some(self);
            let report = Rc::clone(&slot);
            surface.add_event_listener(
                EventTarget::Document,
                EventKind::Ready,
                Box::new(move |surface: &mut dyn PresentationSurface, _event: &mut Event| {
                    if let Some(mut app) = pending.take() {
                        *report.borrow_mut() = Some(app.init(surface));
                    }
                }),
            );
        } else {
            let mut app = self;
            *slot.borrow_mut() = Some(app.init(surface));
        }

        Launch { report: slot }
    }
}

/// Handle to a launched site; holds the report once initialisation has run.
#[derive(Debug, Clone)]
pub struct Launch {
    report: Rc<RefCell<Option<InitReport>>>,
}

impl Launch {
    pub fn is_initialized(&self) -> bool {
        self.report.borrow().is_some()
    }

    pub fn with_report<R>(&self, f: impl FnOnce(&mut InitReport) -> R) -> Option<R> {
        self.report.borrow_mut().as_mut().map(f)
    }

    pub fn take_report(&self) -> Option<InitReport> {
        self.report.borrow_mut().take()
    }
}
