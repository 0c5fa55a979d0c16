// Attribute names and fallback values for the scroll-text element.

pub const ATTR_TEXT: &str = "text";
pub const ATTR_FONT_SIZE: &str = "font-size";
pub const ATTR_FONT_FAMILY: &str = "font-family";
pub const ATTR_FONT_COLOR: &str = "font-color";
pub const ATTR_BACKGROUND_START: &str = "background-start";
pub const ATTR_BACKGROUND_END: &str = "background-end";
pub const ATTR_HEADING_TAG: &str = "heading-tag";
pub const ATTR_TWEEN_DISTANCE: &str = "tween-distance";
pub const ATTR_TEXT_ALIGNMENT: &str = "text-alignment";

/// Attributes whose mutation triggers a full re-render.
pub const OBSERVED_ATTRIBUTES: [&str; 9] = [
    ATTR_TEXT,
    ATTR_FONT_SIZE,
    ATTR_FONT_FAMILY,
    ATTR_FONT_COLOR,
    ATTR_BACKGROUND_START,
    ATTR_BACKGROUND_END,
    ATTR_HEADING_TAG,
    ATTR_TWEEN_DISTANCE,
    ATTR_TEXT_ALIGNMENT,
];

pub const DEFAULT_TEXT: &str = "Scroll Magic";
pub const DEFAULT_FONT_SIZE_VW: f64 = 4.0; // viewport-width units
pub const DEFAULT_FONT_FAMILY: &str = "Roboto";
pub const DEFAULT_FONT_COLOR: &str = "#E8EAF6";
pub const DEFAULT_BACKGROUND_START: &str = "#1A237E";
pub const DEFAULT_BACKGROUND_END: &str = "#7986CB";
pub const DEFAULT_HEADING_TAG: &str = "h1";
pub const DEFAULT_TEXT_ALIGNMENT: &str = "center";

/// Fixed tween distance (px) for hosts that opt out of the randomized fallback.
pub const DEFAULT_TWEEN_DISTANCE_PX: f64 = 300.0;

// Randomized tween fallback, drawn once per render: [min, max)
pub const RANDOM_TWEEN_MIN_PX: f64 = 200.0;
pub const RANDOM_TWEEN_MAX_PX: f64 = 400.0;

// Speed factors are kept to two decimals and never reach 1.0
pub const SPEED_QUANTUM: f64 = 100.0;
pub const MAX_SPEED: f64 = 0.99;
