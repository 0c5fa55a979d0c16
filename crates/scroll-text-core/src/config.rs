//! Attribute-sourced configuration.
//!
//! Every option has a hardcoded fallback, so resolving against an empty
//! attribute set always yields a renderable configuration. Nothing in here
//! reports failure to the caller; bad input is logged and replaced.

use crate::constants::*;
use fnv::FnvHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;
use thiserror::Error;

/// Read-only view over an element's attributes.
pub trait Attributes {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher> Attributes for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Plain attribute store, handy for hosts that are not a DOM element.
pub type AttributeMap = FnvHashMap<String, String>;

pub fn attribute_map<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> AttributeMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumberError {
    #[error("empty value")]
    Empty,
    #[error("no leading number in {0:?}")]
    NotNumeric(String),
    #[error("{0} is zero or not finite")]
    Unusable(f64),
}

/// Parse the longest leading decimal number of `raw`, ignoring any trailing
/// unit or garbage ("3.5vw" -> 3.5). Negative values are kept; zero and
/// non-finite values are rejected.
pub fn parse_number(raw: &str) -> Result<f64, NumberError> {
    let s = raw.trim_start();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }
    let end = numeric_prefix_len(s.as_bytes());
    let value: f64 = s[..end]
        .parse()
        .map_err(|_| NumberError::NotNumeric(raw.to_string()))?;
    if !value.is_finite() || value == 0.0 {
        return Err(NumberError::Unusable(value));
    }
    Ok(value)
}

// Length of `[+-]?digits[.digits][(e|E)[+-]?digits]`, 0 if no mantissa digit.
fn numeric_prefix_len(b: &[u8]) -> usize {
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Fully resolved options for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTextConfig {
    pub text: String,
    pub font_size_vw: f64,
    pub font_family: String,
    pub font_color: String,
    pub background_start: String,
    pub background_end: String,
    pub heading_tag: String,
    /// `None` means the host's fallback policy picks the distance.
    pub tween_distance: Option<f64>,
    pub text_alignment: String,
}

impl Default for ScrollTextConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            font_size_vw: DEFAULT_FONT_SIZE_VW,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_color: DEFAULT_FONT_COLOR.to_string(),
            background_start: DEFAULT_BACKGROUND_START.to_string(),
            background_end: DEFAULT_BACKGROUND_END.to_string(),
            heading_tag: DEFAULT_HEADING_TAG.to_string(),
            tween_distance: None,
            text_alignment: DEFAULT_TEXT_ALIGNMENT.to_string(),
        }
    }
}

impl ScrollTextConfig {
    pub fn resolve<A: Attributes + ?Sized>(attrs: &A) -> Self {
        Self {
            text: string_or(attrs, ATTR_TEXT, DEFAULT_TEXT),
            font_size_vw: number_attr(attrs, ATTR_FONT_SIZE).unwrap_or(DEFAULT_FONT_SIZE_VW),
            font_family: string_or(attrs, ATTR_FONT_FAMILY, DEFAULT_FONT_FAMILY),
            font_color: string_or(attrs, ATTR_FONT_COLOR, DEFAULT_FONT_COLOR),
            background_start: string_or(attrs, ATTR_BACKGROUND_START, DEFAULT_BACKGROUND_START),
            background_end: string_or(attrs, ATTR_BACKGROUND_END, DEFAULT_BACKGROUND_END),
            heading_tag: heading_tag(attrs),
            tween_distance: number_attr(attrs, ATTR_TWEEN_DISTANCE),
            text_alignment: string_or(attrs, ATTR_TEXT_ALIGNMENT, DEFAULT_TEXT_ALIGNMENT),
        }
    }
}

// Absent and empty both count as unset.
fn string_or<A: Attributes + ?Sized>(attrs: &A, name: &str, default: &str) -> String {
    match attrs.attribute(name) {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

fn number_attr<A: Attributes + ?Sized>(attrs: &A, name: &str) -> Option<f64> {
    let raw = attrs.attribute(name)?;
    match parse_number(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("[config] {name}: {e}, using default");
            None
        }
    }
}

pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn heading_tag<A: Attributes + ?Sized>(attrs: &A) -> String {
    let tag = string_or(attrs, ATTR_HEADING_TAG, DEFAULT_HEADING_TAG);
    if is_valid_tag_name(&tag) {
        tag.to_ascii_lowercase()
    } else {
        log::warn!("[config] heading-tag {tag:?} is not an element name, using {DEFAULT_HEADING_TAG}");
        DEFAULT_HEADING_TAG.to_string()
    }
}
