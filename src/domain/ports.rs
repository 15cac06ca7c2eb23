use crate::domain::chart_config::{ChartConfig, LinearGradient};
use crate::domain::selector::Selector;
use crate::utils::error::Result;

/// Opaque handle to an element owned by a presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Ready,
    Scroll,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Document,
    Window,
    Element(ElementId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub target: EventTarget,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: EventTarget) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollIntoViewOptions {
    pub const SMOOTH_START: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };
}

/// Returned by intersection handlers: keep watching the element or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Disconnect,
}

pub type EventHandler = Box<dyn FnMut(&mut dyn PresentationSurface, &mut Event)>;
pub type IntersectionHandler = Box<dyn FnMut(&mut dyn PresentationSurface, ElementId) -> Observation>;

/// 2D drawing context of a canvas element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingContext {
    pub canvas: ElementId,
    pub width: f64,
    pub height: f64,
}

impl DrawingContext {
    pub fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> LinearGradient {
        LinearGradient::new(x0, y0, x1, y1)
    }
}

/// The rendering environment the behaviours attach to.
///
/// Handlers receive the surface back as `&mut dyn PresentationSurface`, so
/// implementations must not hold a borrow of a handler while invoking it.
pub trait PresentationSurface {
    fn ready_state(&self) -> ReadyState;

    fn element_by_id(&self, id: &str) -> Option<ElementId>;
    fn query_selector(&self, selector: &Selector) -> Option<ElementId>;
    fn query_selector_all(&self, selector: &Selector) -> Vec<ElementId>;
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn offset_top(&self, element: ElementId) -> f64;
    fn scroll_y(&self) -> f64;
    fn scroll_into_view(&mut self, element: ElementId, options: ScrollIntoViewOptions);

    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// `None` when the element is not a canvas.
    fn drawing_context(&self, element: ElementId) -> Option<DrawingContext>;

    fn add_event_listener(&mut self, target: EventTarget, kind: EventKind, handler: EventHandler);
    fn observe_intersection(
        &mut self,
        element: ElementId,
        threshold: f64,
        handler: IntersectionHandler,
    );
}

/// A chart created by a [`ChartLibrary`].
pub trait ChartInstance {
    fn config(&self) -> &ChartConfig;
    fn config_mut(&mut self) -> &mut ChartConfig;
    /// Redraw from the current configuration.
    fn update(&mut self) -> Result<()>;
}

pub trait ChartLibrary {
    fn create_chart(
        &mut self,
        context: &DrawingContext,
        config: ChartConfig,
    ) -> Result<Box<dyn ChartInstance>>;
}
