use yew::prelude::*;

use crate::viewport::{viewport_width, LayoutMode, ResizeListener};

/// Current viewport width, updated on every window `resize`. `None` outside a
/// browser.
#[hook]
pub fn use_viewport_width() -> Option<f64> {
    let width = use_state(viewport_width);
    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ResizeListener::register(move |w| width.set(Some(w)));
                move || drop(listener)
            },
            (),
        );
    }
    *width
}

/// Layout for the current viewport, kept in sync with window resizes.
#[hook]
pub fn use_layout_mode(narrow_breakpoint: u32) -> LayoutMode {
    use_viewport_width()
        .map(|w| LayoutMode::from_width(w, narrow_breakpoint))
        .unwrap_or(LayoutMode::Wide)
}
