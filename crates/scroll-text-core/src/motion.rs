// Scroll-to-style mapping for a single letter unit.

/// Vertical offset in px; negative moves the letter up.
#[inline]
pub fn movement(scroll_offset: f64, speed: f64) -> f64 {
    -(scroll_offset * speed)
}

/// Linear fade over `tween_distance`. Not clamped: the renderer clamps
/// values outside [0, 1] on its own.
#[inline]
pub fn opacity(scroll_offset: f64, tween_distance: f64) -> f64 {
    (tween_distance - scroll_offset) / tween_distance
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

impl LetterStyle {
    pub fn at(scroll_offset: f64, speed: f64, tween_distance: f64) -> Self {
        Self {
            translate_y: movement(scroll_offset, speed),
            opacity: opacity(scroll_offset, tween_distance),
        }
    }

    /// 3-D translation so engines promote the letter to its own layer.
    pub fn transform_css(&self) -> String {
        format!("translate3d(0, {}px, 0)", self.translate_y)
    }

    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }
}
