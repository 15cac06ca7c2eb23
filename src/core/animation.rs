use crate::config::AnimationSettings;
use crate::domain::ports::{ElementId, Observation, PresentationSurface};
use crate::domain::selector::Selector;
use crate::utils::error::Result;

/// Adds `class` to each element matching `selector` the first time it is
/// visible past `threshold`, then stops observing it. Returns the number of
/// observed elements.
pub fn animate_on_scroll<S>(
    surface: &mut S,
    selector: &Selector,
    class: &str,
    threshold: f64,
) -> usize
where
    S: PresentationSurface + ?Sized,
{
    let elements = surface.query_selector_all(selector);

    for &element in &elements {
        let class = class.to_string();
        surface.observe_intersection(
            element,
            threshold,
            Box::new(move |surface: &mut dyn PresentationSurface, target: ElementId| {
                surface.add_class(target, &class);
                Observation::Disconnect
            }),
        );
    }

    tracing::debug!("Observing {} elements for \"{}\"", elements.len(), selector);
    elements.len()
}

/// Binds every configured target. Returns the total number of observed elements.
pub fn init_animations<S>(surface: &mut S, settings: &AnimationSettings) -> Result<usize>
where
    S: PresentationSurface + ?Sized,
{
    let mut observed = 0;
    for target in &settings.targets {
        let selector: Selector = target.parse()?;
        observed += animate_on_scroll(surface, &selector, &settings.class, settings.threshold);
    }
    Ok(observed)
}
