use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// One-shot visibility flag for the scroll-reveal animations.  Flips true
/// the first time the section scrolls into view and stays there.
pub fn use_reveal() -> (NodeRef<html::Section>, Signal<bool>) {
    let target = NodeRef::<html::Section>::new();
    let (visible, set_visible) = signal(false);
    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.2]),
    );
    (target, visible.into())
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

/// Cards inside a section fade in one after another.
pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms", index * 150)
}
