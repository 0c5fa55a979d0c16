// Host-page wiring constants for the wasm front-end.

/// Custom element name; must contain a hyphen and be lowercase.
pub const ELEMENT_NAME: &str = "scroll-text";

/// Window event that drives letter updates.
pub const SCROLL_EVENT: &str = "scroll";

// Letter span tag and the dataset key carrying its speed factor.
pub const LETTER_TAG: &str = "span";
pub const SPEED_DATA_KEY: &str = "speed";
pub const CONTAINER_TAG: &str = "div";
pub const STYLE_TAG: &str = "style";

/// Decimal places written to `data-speed`.
pub const SPEED_DECIMALS: usize = 2;

/// `data-speed` text for a speed factor.
pub fn speed_label(speed: f64) -> String {
    format!("{:.*}", SPEED_DECIMALS, speed)
}
