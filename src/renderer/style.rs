//! CSS values for the DOM strategies

use glam::Vec2;

/// Pixel length, e.g. `12.5px`
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// `left` and `top` for absolute positioning
pub fn absolute_style(pos: Vec2) -> (String, String) {
    (px(pos.x), px(pos.y))
}

/// `transform` value; translate3d keeps the element on its own layer
pub fn transform_style(pos: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_style() {
        let (left, top) = absolute_style(Vec2::new(6.0, 12.5));
        assert_eq!(left, "6px");
        assert_eq!(top, "12.5px");
    }

    #[test]
    fn test_transform_style() {
        assert_eq!(
            transform_style(Vec2::new(750.0, 0.25)),
            "translate3d(750px, 0.25px, 0)"
        );
    }
}
