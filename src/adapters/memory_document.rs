//! In-memory presentation surface.
//!
//! Elements carry absolute vertical offsets and heights; there is no layout
//! engine. Events are dispatched synchronously: `scroll_to`, `click` and
//! `fire_ready` run every matching listener before returning, and scrolling
//! re-evaluates intersection observers afterwards.

use crate::domain::ports::{
    DrawingContext, ElementId, Event, EventHandler, EventKind, EventTarget, IntersectionHandler,
    Observation, PresentationSurface, ReadyState, ScrollBlock, ScrollIntoViewOptions,
};
use crate::domain::selector::{ElementView, Selector};
use std::collections::BTreeMap;

/// Builder for one element appended to a [`MemoryDocument`].
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    offset_top: f64,
    height: f64,
    canvas: Option<(f64, f64)>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn at(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Makes the element a canvas with a 2D context of the given size.
    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Some((width, height));
        self
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    offset_top: f64,
    height: f64,
    canvas: Option<(f64, f64)>,
}

impl ElementView for Node {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

struct Listener {
    target: EventTarget,
    kind: EventKind,
    handler: Option<EventHandler>,
}

struct Observer {
    element: ElementId,
    threshold: f64,
    handler: Option<IntersectionHandler>,
    visible: bool,
    connected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub element: ElementId,
    pub options: ScrollIntoViewOptions,
}

pub struct MemoryDocument {
    nodes: Vec<Node>,
    roots: Vec<ElementId>,
    ready_state: ReadyState,
    scroll_y: f64,
    viewport_height: f64,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    scroll_requests: Vec<ScrollRequest>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

    /// A fully loaded, empty document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            ready_state: ReadyState::Complete,
            scroll_y: 0.0,
            viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
            listeners: Vec::new(),
            observers: Vec::new(),
            scroll_requests: Vec::new(),
        }
    }

    /// An empty document that has not fired its ready event yet.
    pub fn loading() -> Self {
        Self {
            ready_state: ReadyState::Loading,
            ..Self::new()
        }
    }

    pub fn with_viewport_height(mut self, height: f64) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn append(&mut self, parent: Option<ElementId>, spec: ElementSpec) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag: spec.tag,
            classes: spec.classes,
            attributes: spec.attributes,
            parent,
            children: Vec::new(),
            offset_top: spec.offset_top,
            height: spec.height,
            canvas: spec.canvas,
        });

        match parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(parent) => parent.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.node(element).map(|n| n.tag.as_str())
    }

    pub fn classes(&self, element: ElementId) -> &[String] {
        self.node(element).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|l| l.kind == kind).count()
    }

    /// Observers still waiting for their element to appear.
    pub fn observer_count(&self) -> usize {
        self.observers.iter().filter(|o| o.connected).count()
    }

    /// Marks the document loaded and dispatches the ready event once.
    pub fn fire_ready(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        let mut event = Event::new(EventKind::Ready, EventTarget::Document);
        self.dispatch(&mut event);
        self.ready_state = ReadyState::Complete;
    }

    /// Sets the vertical scroll offset, dispatches a scroll event to the
    /// window and re-evaluates intersection observers.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
        let mut event = Event::new(EventKind::Scroll, EventTarget::Window);
        self.dispatch(&mut event);
        self.evaluate_observers();
    }

    /// Dispatches a click on `element` and returns the event afterwards.
    pub fn click(&mut self, element: ElementId) -> Event {
        let mut event = Event::new(EventKind::Click, EventTarget::Element(element));
        self.dispatch(&mut event);
        event
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.0)
    }

    fn ancestors(&self, element: ElementId) -> impl Iterator<Item = &Node> + '_ {
        let mut next = self.node(element).and_then(|n| n.parent);
        std::iter::from_fn(move || {
            let node = self.node(next?)?;
            next = node.parent;
            Some(node)
        })
    }

    /// Elements in tree order (pre-order, children in insertion order).
    fn tree_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    fn matches(&self, element: ElementId, selector: &Selector) -> bool {
        self.node(element)
            .is_some_and(|node| selector.matches(node, self.ancestors(element)))
    }

    fn dispatch(&mut self, event: &mut Event) {
        let matching: Vec<usize> = self
            .listeners
            .iter()
            .enumerate()
            .filter(|(_, l)| l.target == event.target && l.kind == event.kind)
            .map(|(index, _)| index)
            .collect();

        for index in matching {
            // Taken out while running so the handler can borrow the document.
            let Some(mut handler) = self.listeners[index].handler.take() else {
                continue;
            };
            handler(self as &mut dyn PresentationSurface, &mut *event);
            self.listeners[index].handler = Some(handler);
        }
    }

    fn intersection_ratio(&self, element: ElementId) -> f64 {
        let Some(node) = self.node(element) else {
            return 0.0;
        };
        let top = self.scroll_y;
        let bottom = self.scroll_y + self.viewport_height;

        if node.height <= 0.0 {
            return if node.offset_top >= top && node.offset_top <= bottom {
                1.0
            } else {
                0.0
            };
        }

        let visible = (node.offset_top + node.height).min(bottom) - node.offset_top.max(top);
        (visible / node.height).clamp(0.0, 1.0)
    }

    fn evaluate_observers(&mut self) {
        for index in 0..self.observers.len() {
            let (element, threshold, was_visible) = {
                let o = &self.observers[index];
                if !o.connected {
                    continue;
                }
                (o.element, o.threshold, o.visible)
            };

            let ratio = self.intersection_ratio(element);
            let visible = ratio > 0.0 && ratio >= threshold;
            self.observers[index].visible = visible;
            if !visible || was_visible {
                continue;
            }

            let Some(mut handler) = self.observers[index].handler.take() else {
                continue;
            };
            match handler(self as &mut dyn PresentationSurface, element) {
                Observation::Keep => self.observers[index].handler = Some(handler),
                Observation::Disconnect => self.observers[index].connected = false,
            }
        }
    }
}

impl PresentationSurface for MemoryDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.tree_order()
            .into_iter()
            .find(|&el| self.node(el).and_then(|n| n.attribute("id")) == Some(id))
    }

    fn query_selector(&self, selector: &Selector) -> Option<ElementId> {
        self.tree_order()
            .into_iter()
            .find(|&el| self.matches(el, selector))
    }

    fn query_selector_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.tree_order()
            .into_iter()
            .filter(|&el| self.matches(el, selector))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.node(element)
            .and_then(|n| n.attribute(name))
            .map(str::to_string)
    }

    fn offset_top(&self, element: ElementId) -> f64 {
        self.node(element).map_or(0.0, |n| n.offset_top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_into_view(&mut self, element: ElementId, options: ScrollIntoViewOptions) {
        let Some(node) = self.node(element) else {
            return;
        };
        let y = match options.block {
            ScrollBlock::Start => node.offset_top,
        };

        self.scroll_requests.push(ScrollRequest { element, options });
        self.scroll_to(y);
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element).is_some_and(|n| n.has_class(class))
    }

    fn drawing_context(&self, element: ElementId) -> Option<DrawingContext> {
        let (width, height) = self.node(element)?.canvas?;
        Some(DrawingContext {
            canvas: element,
            width,
            height,
        })
    }

    fn add_event_listener(&mut self, target: EventTarget, kind: EventKind, handler: EventHandler) {
        self.listeners.push(Listener {
            target,
            kind,
            handler: Some(handler),
        });
    }

    fn observe_intersection(
        &mut self,
        element: ElementId,
        threshold: f64,
        handler: IntersectionHandler,
    ) {
        self.observers.push(Observer {
            element,
            threshold,
            handler: Some(handler),
            visible: false,
            connected: true,
        });
        // Observers report the initial state as soon as they start.
        self.evaluate_observers();
    }
}
