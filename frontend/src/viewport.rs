use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub fn from_width(width: f64, narrow_breakpoint: u32) -> Self {
        if width <= f64::from(narrow_breakpoint) {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == LayoutMode::Narrow
    }

    /// Minimum fraction digits for amounts shown in this layout.
    pub fn fraction_digits(self) -> u32 {
        match self {
            LayoutMode::Wide => 0,
            LayoutMode::Narrow => 2,
        }
    }

    /// Extra classes for the period dropdown triggers.
    pub fn trigger_class(self) -> &'static str {
        match self {
            LayoutMode::Wide => "h-12",
            LayoutMode::Narrow => "h-10 text-xs",
        }
    }
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// A `resize` listener on the window, removed again when dropped.
pub struct ResizeListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn register(on_resize: impl Fn(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = viewport_width() {
                on_resize(width);
            }
        });
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_width_is_narrow() {
        assert_eq!(LayoutMode::from_width(768.0, 768), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(768.5, 768), LayoutMode::Wide);
    }

    #[test]
    fn narrow_triggers_are_compact() {
        assert_eq!(LayoutMode::Wide.trigger_class(), "h-12");
        assert_eq!(LayoutMode::Narrow.trigger_class(), "h-10 text-xs");
        assert_eq!(LayoutMode::Narrow.fraction_digits(), 2);
    }
}
