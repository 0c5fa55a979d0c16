//! Lifecycle of one scroll-text element, independent of the DOM.
//!
//! The host forwards its insertion, removal, attribute and scroll
//! notifications here; all visible effects go through [`Surface`]. Each
//! render throws away the previous letter units and builds a new set.

use crate::config::{Attributes, ScrollTextConfig};
use crate::constants::OBSERVED_ATTRIBUTES;
use crate::letters::{split_letters, LetterUnit};
use crate::motion::LetterStyle;
use crate::random::{random_tween_distance, RandomSource};
use crate::stylesheet::stylesheet;

/// Everything a surface needs to rebuild its tree.
#[derive(Debug)]
pub struct RenderFrame<'a> {
    pub stylesheet: String,
    pub heading_tag: &'a str,
    pub letters: &'a [LetterUnit],
}

/// Rendering target and scroll signal provider.
pub trait Surface {
    /// Discard the previous tree and build one from `frame`.
    fn rebuild(&mut self, frame: &RenderFrame<'_>);
    /// Style the letter at `index` (same order as `RenderFrame::letters`).
    fn apply(&mut self, index: usize, style: &LetterStyle);
    fn scroll_offset(&self) -> f64;
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
    /// Drop every handle into the rendered tree. Called whenever the
    /// element is left detached, so nothing outside the host keeps it alive.
    fn release(&mut self);
}

/// What to do when no usable `tween-distance` is configured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TweenFallback {
    Fixed(f64),
    /// Whole pixels in [200, 400), drawn once per render.
    #[default]
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unrendered,
    Rendered,
}

pub struct ScrollText<R: RandomSource> {
    random: R,
    fallback: TweenFallback,
    config: ScrollTextConfig,
    tween_distance: f64,
    letters: Vec<LetterUnit>,
    phase: Phase,
    subscribed: bool,
}

impl<R: RandomSource> ScrollText<R> {
    pub fn new(random: R) -> Self {
        Self::with_fallback(random, TweenFallback::default())
    }

    pub fn with_fallback(random: R, fallback: TweenFallback) -> Self {
        Self {
            random,
            fallback,
            config: ScrollTextConfig::default(),
            tween_distance: 0.0,
            letters: Vec::new(),
            phase: Phase::Unrendered,
            subscribed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn letters(&self) -> &[LetterUnit] {
        &self.letters
    }

    pub fn tween_distance(&self) -> f64 {
        self.tween_distance
    }

    /// Re-render when an observed attribute actually changed. Returns whether
    /// a render happened.
    pub fn attribute_changed<A, S>(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
        attrs: &A,
        surface: &mut S,
    ) -> bool
    where
        A: Attributes + ?Sized,
        S: Surface + ?Sized,
    {
        if old == new || !OBSERVED_ATTRIBUTES.contains(&name) {
            return false;
        }
        log::debug!("[scroll-text] {name} changed: {old:?} -> {new:?}");
        self.render(attrs, surface);
        if !self.subscribed {
            surface.release();
        }
        true
    }

    /// Initial render, then start listening for scroll.
    pub fn connected<A, S>(&mut self, attrs: &A, surface: &mut S)
    where
        A: Attributes + ?Sized,
        S: Surface + ?Sized,
    {
        self.render(attrs, surface);
        if !self.subscribed {
            surface.subscribe();
            self.subscribed = true;
        }
    }

    pub fn disconnected<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.subscribed {
            surface.unsubscribe();
            self.subscribed = false;
        }
        surface.release();
    }

    pub fn render<A, S>(&mut self, attrs: &A, surface: &mut S)
    where
        A: Attributes + ?Sized,
        S: Surface + ?Sized,
    {
        self.config = ScrollTextConfig::resolve(attrs);
        self.tween_distance = match (self.config.tween_distance, self.fallback) {
            (Some(d), _) => d,
            (None, TweenFallback::Fixed(d)) => d,
            (None, TweenFallback::Random) => random_tween_distance(&mut self.random),
        };
        self.letters = split_letters(&self.config.text, &mut self.random);
        let frame = RenderFrame {
            stylesheet: stylesheet(&self.config),
            heading_tag: &self.config.heading_tag,
            letters: &self.letters,
        };
        surface.rebuild(&frame);
        self.phase = Phase::Rendered;
        log::debug!(
            "[scroll-text] rendered {} letters, tween {}px",
            self.letters.len(),
            self.tween_distance
        );
        self.update(surface);
    }

    /// Restyle every letter for the current scroll offset.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let scroll = surface.scroll_offset();
        for (i, letter) in self.letters.iter().enumerate() {
            surface.apply(i, &LetterStyle::at(scroll, letter.speed, self.tween_distance));
        }
    }

    /// Scroll signal from the host. Ignored unless subscribed.
    pub fn on_scroll<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.subscribed {
            return false;
        }
        self.update(surface);
        true
    }
}
