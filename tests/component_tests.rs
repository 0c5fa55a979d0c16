// Host-side tests for the element lifecycle, driven through a recording surface.

use scroll_text_core::constants::*;
use scroll_text_core::*;

#[derive(Default)]
struct RecordingSurface {
    scroll: f64,
    rebuilds: usize,
    glyphs: String,
    heading_tag: String,
    stylesheet: String,
    applied: Vec<(usize, LetterStyle)>,
    subscribes: usize,
    unsubscribes: usize,
    releases: usize,
    // Letters the surface still holds handles for
    held: usize,
}

impl Surface for RecordingSurface {
    fn rebuild(&mut self, frame: &RenderFrame<'_>) {
        self.rebuilds += 1;
        self.glyphs = glyphs(frame.letters);
        self.heading_tag = frame.heading_tag.to_string();
        self.stylesheet = frame.stylesheet.clone();
        self.held = frame.letters.len();
    }

    fn apply(&mut self, index: usize, style: &LetterStyle) {
        self.applied.push((index, *style));
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn subscribe(&mut self) {
        self.subscribes += 1;
    }

    fn unsubscribe(&mut self) {
        self.unsubscribes += 1;
    }

    fn release(&mut self) {
        self.releases += 1;
        self.held = 0;
    }
}

fn element(values: Vec<f64>) -> ScrollText<SequenceSource> {
    ScrollText::new(SequenceSource::new(values))
}

#[test]
fn connect_with_no_attributes_renders_defaults() {
    let mut text = element(vec![0.5]);
    let mut surface = RecordingSurface::default();
    assert_eq!(text.phase(), Phase::Unrendered);

    text.connected(&AttributeMap::default(), &mut surface);

    assert_eq!(text.phase(), Phase::Rendered);
    assert!(text.is_subscribed());
    assert_eq!(surface.subscribes, 1);
    assert_eq!(surface.rebuilds, 1);
    assert_eq!(surface.glyphs, "ScrollMagic");
    assert_eq!(surface.heading_tag, "h1");
    assert!(surface.stylesheet.contains("linear-gradient(90deg, #1A237E, #7986CB)"));
    // Random fallback drew 0.5 -> 300px
    assert_eq!(text.tween_distance(), 300.0);
    // Initial update styles every letter at the current offset
    assert_eq!(surface.applied.len(), 11);
    assert!(surface.applied.iter().all(|(_, s)| s.opacity == 1.0));
}

#[test]
fn text_with_space_yields_three_letters() {
    let mut text = element(vec![0.25]);
    let mut surface = RecordingSurface::default();
    let attrs = attribute_map([(ATTR_TEXT, "AB C"), (ATTR_TWEEN_DISTANCE, "300")]);

    text.connected(&attrs, &mut surface);

    assert_eq!(text.letters().len(), 3);
    assert_eq!(surface.glyphs, "ABC");
    let indices: Vec<usize> = surface.applied.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn scroll_updates_every_letter() {
    let mut text = element(vec![0.0, 0.5]);
    let mut surface = RecordingSurface::default();
    let attrs = attribute_map([(ATTR_TEXT, "ab"), (ATTR_TWEEN_DISTANCE, "200")]);
    text.connected(&attrs, &mut surface);
    surface.applied.clear();

    surface.scroll = 100.0;
    assert!(text.on_scroll(&mut surface));

    assert_eq!(surface.applied.len(), 2);
    let (_, still) = surface.applied[0];
    let (_, moving) = surface.applied[1];
    assert_eq!(still.translate_y, 0.0);
    assert_eq!(moving.translate_y, -50.0);
    assert_eq!(still.opacity, 0.5);
    assert_eq!(moving.opacity, 0.5);
}

#[test]
fn scroll_after_removal_mutates_nothing() {
    let mut text = element(vec![0.3]);
    let mut surface = RecordingSurface::default();
    text.connected(&AttributeMap::default(), &mut surface);
    text.disconnected(&mut surface);
    assert_eq!(surface.unsubscribes, 1);
    assert!(!text.is_subscribed());
    surface.applied.clear();

    surface.scroll = 120.0;
    assert!(!text.on_scroll(&mut surface));
    assert!(surface.applied.is_empty());

    // A second removal does not unsubscribe twice
    text.disconnected(&mut surface);
    assert_eq!(surface.unsubscribes, 1);
}

#[test]
fn reconnect_subscribes_once_per_connection() {
    let mut text = element(vec![0.3]);
    let mut surface = RecordingSurface::default();
    let attrs = AttributeMap::default();
    text.connected(&attrs, &mut surface);
    text.connected(&attrs, &mut surface);
    assert_eq!(surface.subscribes, 1);

    text.disconnected(&mut surface);
    text.connected(&attrs, &mut surface);
    assert_eq!(surface.subscribes, 2);
    assert!(text.is_subscribed());
}

#[test]
fn attribute_change_rerenders_only_on_new_value() {
    let mut text = element(vec![0.4]);
    let mut surface = RecordingSurface::default();
    let mut attrs = attribute_map([(ATTR_TEXT, "one")]);
    text.connected(&attrs, &mut surface);
    assert_eq!(surface.rebuilds, 1);

    assert!(!text.attribute_changed(ATTR_TEXT, Some("one"), Some("one"), &attrs, &mut surface));
    assert_eq!(surface.rebuilds, 1);

    attrs.insert(ATTR_TEXT.to_string(), "two words".to_string());
    assert!(text.attribute_changed(ATTR_TEXT, Some("one"), Some("two words"), &attrs, &mut surface));
    assert_eq!(surface.rebuilds, 2);
    assert_eq!(surface.glyphs, "twowords");
}

#[test]
fn unobserved_attribute_is_ignored() {
    let mut text = element(vec![0.4]);
    let mut surface = RecordingSurface::default();
    let attrs = AttributeMap::default();
    assert!(!text.attribute_changed("class", None, Some("wide"), &attrs, &mut surface));
    assert_eq!(surface.rebuilds, 0);
    assert_eq!(text.phase(), Phase::Unrendered);
}

#[test]
fn removing_an_attribute_restores_its_default() {
    let mut text = element(vec![0.4]);
    let mut surface = RecordingSurface::default();
    let attrs = attribute_map([(ATTR_HEADING_TAG, "h3")]);
    text.connected(&attrs, &mut surface);
    assert_eq!(surface.heading_tag, "h3");

    let cleared = AttributeMap::default();
    assert!(text.attribute_changed(ATTR_HEADING_TAG, Some("h3"), None, &cleared, &mut surface));
    assert_eq!(surface.heading_tag, "h1");
}

#[test]
fn rerender_with_same_attributes_keeps_letter_sequence() {
    let mut text = ScrollText::new(RngSource::seeded(11));
    let mut surface = RecordingSurface::default();
    let attrs = attribute_map([(ATTR_TEXT, "Parallax Title")]);

    text.render(&attrs, &mut surface);
    let first = text.letters().to_vec();
    text.render(&attrs, &mut surface);
    let second = text.letters().to_vec();

    assert_eq!(first.len(), second.len());
    assert_eq!(glyphs(&first), glyphs(&second));
    assert_eq!(glyphs(&second), "ParallaxTitle");
}

#[test]
fn configured_tween_distance_wins_over_fallback() {
    let mut text = ScrollText::with_fallback(SequenceSource::new(vec![0.1]), TweenFallback::Random);
    let mut surface = RecordingSurface::default();
    text.render(&attribute_map([(ATTR_TWEEN_DISTANCE, "250")]), &mut surface);
    assert_eq!(text.tween_distance(), 250.0);
}

#[test]
fn fixed_fallback_uses_default_distance() {
    let mut text = ScrollText::with_fallback(
        SequenceSource::new(vec![0.1]),
        TweenFallback::Fixed(DEFAULT_TWEEN_DISTANCE_PX),
    );
    let mut surface = RecordingSurface::default();
    text.render(&attribute_map([(ATTR_TWEEN_DISTANCE, "soon")]), &mut surface);
    assert_eq!(text.tween_distance(), 300.0);
}

#[test]
fn render_reflects_current_scroll_immediately() {
    let mut text = element(vec![0.5]);
    let mut surface = RecordingSurface {
        scroll: 150.0,
        ..Default::default()
    };
    text.render(&attribute_map([(ATTR_TEXT, "A"), (ATTR_TWEEN_DISTANCE, "300")]), &mut surface);
    assert_eq!(surface.applied.len(), 1);
    let (_, style) = surface.applied[0];
    assert_eq!(style.translate_y, -75.0);
    assert_eq!(style.opacity, 0.5);
}

#[test]
fn removal_releases_rendered_handles() {
    let mut text = element(vec![0.3]);
    let mut surface = RecordingSurface::default();
    text.connected(&attribute_map([(ATTR_TEXT, "abc")]), &mut surface);
    assert_eq!(surface.held, 3);
    assert_eq!(surface.releases, 0);

    text.disconnected(&mut surface);
    assert_eq!(surface.releases, 1);
    assert_eq!(surface.held, 0);
}

#[test]
fn detached_attribute_change_does_not_keep_handles() {
    let mut text = element(vec![0.3]);
    let mut surface = RecordingSurface::default();
    let attrs = attribute_map([(ATTR_TEXT, "xy")]);

    assert!(text.attribute_changed(ATTR_TEXT, None, Some("xy"), &attrs, &mut surface));
    assert_eq!(surface.rebuilds, 1);
    assert_eq!(surface.releases, 1);
    assert_eq!(surface.held, 0);
    // Letter state survives for the next insertion
    assert_eq!(text.letters().len(), 2);
}

#[test]
fn attached_attribute_change_keeps_handles() {
    let mut text = element(vec![0.3]);
    let mut surface = RecordingSurface::default();
    let mut attrs = attribute_map([(ATTR_TEXT, "xy")]);
    text.connected(&attrs, &mut surface);

    attrs.insert(ATTR_TEXT.to_string(), "xyz".to_string());
    assert!(text.attribute_changed(ATTR_TEXT, Some("xy"), Some("xyz"), &attrs, &mut surface));
    assert_eq!(surface.releases, 0);
    assert_eq!(surface.held, 3);
}
