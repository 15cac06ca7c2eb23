//! Smooth in-page scrolling, active-section highlighting and the header
//! shadow toggle.

use crate::config::NavigationSettings;
use crate::domain::ports::{
    ElementId, Event, EventKind, EventTarget, PresentationSurface, ScrollIntoViewOptions,
};
use crate::domain::selector::Selector;
use crate::utils::error::{Result, SiteError};

/// Id of the last section whose top, less `margin`, has been scrolled past.
/// Sections are in document order; later ones win.
pub fn active_section(sections: &[(String, f64)], scroll_y: f64, margin: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - margin)
        .last()
        .map(|(id, _)| id.as_str())
}

pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scrolls to the element an anchor's href points at. Returns whether a
/// target was found.
pub fn scroll_to_anchor_target<S>(surface: &mut S, anchor: ElementId) -> bool
where
    S: PresentationSurface + ?Sized,
{
    let Some(href) = surface.attribute(anchor, "href") else {
        return false;
    };

    let target = match href.parse::<Selector>() {
        Ok(selector) => surface.query_selector(&selector),
        Err(e) => {
            tracing::debug!("Anchor href is not a usable target: {}", e);
            None
        }
    };

    match target {
        Some(target) => {
            surface.scroll_into_view(target, ScrollIntoViewOptions::SMOOTH_START);
            true
        }
        None => false,
    }
}

/// Intercepts clicks on in-page anchors. Returns the number of anchors bound.
pub fn init_smooth_scroll<S>(surface: &mut S, settings: &NavigationSettings) -> Result<usize>
where
    S: PresentationSurface + ?Sized,
{
    let selector: Selector = settings.anchor_selector.parse()?;
    let anchors = surface.query_selector_all(&selector);

    for &anchor in &anchors {
        surface.add_event_listener(
            EventTarget::Element(anchor),
            EventKind::Click,
            Box::new(move |surface: &mut dyn PresentationSurface, event: &mut Event| {
                event.prevent_default();
                scroll_to_anchor_target(surface, anchor);
            }),
        );
    }

    tracing::debug!("Smooth scroll bound to {} anchors", anchors.len());
    Ok(anchors.len())
}

/// Sections and links captured at setup; re-evaluated on every scroll.
#[derive(Debug, Clone)]
pub struct NavHighlighter {
    sections: Vec<ElementId>,
    links: Vec<ElementId>,
    active_class: String,
    margin: f64,
}

impl NavHighlighter {
    pub fn capture<S>(surface: &S, settings: &NavigationSettings) -> Result<Self>
    where
        S: PresentationSurface + ?Sized,
    {
        let sections = surface.query_selector_all(&settings.section_selector.parse::<Selector>()?);
        let links = surface.query_selector_all(&settings.nav_link_selector.parse::<Selector>()?);

        Ok(Self {
            sections,
            links,
            active_class: settings.active_class.clone(),
            margin: settings.lookahead_margin,
        })
    }

    /// Marks the link for the current section; returns that section's id.
    pub fn apply<S>(&self, surface: &mut S) -> Option<String>
    where
        S: PresentationSurface + ?Sized,
    {
        let tops: Vec<(String, f64)> = self
            .sections
            .iter()
            .filter_map(|&section| {
                surface
                    .attribute(section, "id")
                    .map(|id| (id, surface.offset_top(section)))
            })
            .collect();

        let current = active_section(&tops, surface.scroll_y(), self.margin).map(str::to_string);
        let wanted = current.as_ref().map(|id| format!("#{}", id));

        for &link in &self.links {
            surface.remove_class(link, &self.active_class);
            if wanted.is_some() && surface.attribute(link, "href") == wanted {
                surface.add_class(link, &self.active_class);
            }
        }

        current
    }
}

pub fn init_active_nav_highlight<S>(surface: &mut S, settings: &NavigationSettings) -> Result<()>
where
    S: PresentationSurface + ?Sized,
{
    let highlighter = NavHighlighter::capture(&*surface, settings)?;
    highlighter.apply(surface);

    surface.add_event_listener(
        EventTarget::Window,
        EventKind::Scroll,
        Box::new(move |surface: &mut dyn PresentationSurface, _event: &mut Event| {
            highlighter.apply(surface);
        }),
    );
    Ok(())
}

#[derive(Debug, Clone)]
pub struct HeaderShadow {
    header: ElementId,
    class: String,
    threshold: f64,
}

impl HeaderShadow {
    pub fn apply<S>(&self, surface: &mut S)
    where
        S: PresentationSurface + ?Sized,
    {
        if header_is_scrolled(surface.scroll_y(), self.threshold) {
            surface.add_class(self.header, &self.class);
        } else {
            surface.remove_class(self.header, &self.class);
        }
    }
}

pub fn init_header_shadow<S>(surface: &mut S, settings: &NavigationSettings) -> Result<()>
where
    S: PresentationSurface + ?Sized,
{
    let selector: Selector = settings.header_selector.parse()?;
    let Some(header) = surface.query_selector(&selector) else {
        tracing::warn!("No element matches \"{}\", header shadow disabled", selector);
        return Err(SiteError::target_not_found(selector.to_string()));
    };

    let shadow = HeaderShadow {
        header,
        class: settings.scrolled_class.clone(),
        threshold: settings.header_threshold,
    };
    shadow.apply(surface);

    surface.add_event_listener(
        EventTarget::Window,
        EventKind::Scroll,
        Box::new(move |surface: &mut dyn PresentationSurface, _event: &mut Event| {
            shadow.apply(surface);
        }),
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationReport {
    pub anchors: usize,
    pub highlight: bool,
    pub header_shadow: bool,
}

/// Attaches all three behaviours. A behaviour that cannot attach is logged
/// and left off; the others are unaffected.
pub fn init_navigation<S>(surface: &mut S, settings: &NavigationSettings) -> NavigationReport
where
    S: PresentationSurface + ?Sized,
{
    let mut report = NavigationReport::default();

    match init_smooth_scroll(surface, settings) {
        Ok(count) => report.anchors = count,
        Err(e) => tracing::error!("❌ Smooth scroll not attached: {}", e),
    }

    match init_active_nav_highlight(surface, settings) {
        Ok(()) => report.highlight = true,
        Err(e) => tracing::error!("❌ Active link highlight not attached: {}", e),
    }

    match init_header_shadow(surface, settings) {
        Ok(()) => report.header_shadow = true,
        Err(e) => tracing::warn!("⚠️ Header shadow not attached: {}", e),
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("hero".to_string(), 0.0),
            ("about".to_string(), 600.0),
            ("projects".to_string(), 1400.0),
        ]
    }

    #[test]
    fn test_active_section_uses_lookahead_margin() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("hero"));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("hero"));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 5000.0, 100.0), Some("projects"));
    }

    #[test]
    fn test_active_section_none_before_first() {
        let sections = vec![("about".to_string(), 600.0)];
        assert_eq!(active_section(&sections, 0.0, 100.0), None);
        assert_eq!(active_section(&[], 100.0, 100.0), None);
    }

    #[test]
    fn test_later_section_wins_on_tie() {
        let sections = vec![("a".to_string(), 300.0), ("b".to_string(), 300.0)];
        assert_eq!(active_section(&sections, 250.0, 100.0), Some("b"));
    }

    #[test]
    fn test_header_threshold_is_strict() {
        assert!(!header_is_scrolled(0.0, 10.0));
        assert!(!header_is_scrolled(10.0, 10.0));
        assert!(header_is_scrolled(10.5, 10.0));
    }
}
