//! Platform glue
//!
//! Handles browser differences for:
//! - Pointer input (touch vs mouse, page → element coordinates)
//! - Touch scrolling on iOS
//! - The intro page

#[cfg(target_arch = "wasm32")]
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod intro;

/// Which press event a device delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
}

impl PointerKind {
    /// Touch-capable pages listen for `touchstart`, never both
    pub fn detect(has_touch: bool) -> Self {
        if has_touch {
            PointerKind::Touch
        } else {
            PointerKind::Mouse
        }
    }

    /// DOM event name for a press
    pub fn press_event(&self) -> &'static str {
        match self {
            PointerKind::Touch => "touchstart",
            PointerKind::Mouse => "mousedown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_event() {
        assert_eq!(PointerKind::detect(true).press_event(), "touchstart");
        assert_eq!(PointerKind::detect(false).press_event(), "mousedown");
    }
}
