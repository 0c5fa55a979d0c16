//! DOM side of the scroll-text element.
//!
//! `ScrollTextElement` is the object the JS class shim holds on to. The
//! lifecycle logic lives in `scroll_text_core::ScrollText`; this file only
//! turns its render frames and letter styles into shadow-DOM mutations and
//! owns the window scroll listener.
//!
//! The host element is handed in on every callback and never stored. Shadow
//! and letter handles are kept only while the element is attached, so a
//! detached element holds no path back to its host.

use crate::constants::*;
use crate::dom::{self, js_err};
use rand::rngs::StdRng;
use scroll_text_core::{
    Attributes, LetterStyle, RenderFrame, RngSource, ScrollText, Surface, TweenFallback,
    CONTAINER_CLASS, HEADING_CLASS,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct HostAttributes(web::HtmlElement);

impl Attributes for HostAttributes {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

struct Inner {
    text: ScrollText<RngSource<StdRng>>,
    surface: DomSurface,
}

struct DomSurface {
    window: web::Window,
    document: web::Document,
    shadow: Option<web::ShadowRoot>,
    letters: Vec<web::HtmlElement>,
    listener: Option<Closure<dyn FnMut()>>,
    this: Weak<RefCell<Inner>>,
}

impl DomSurface {
    fn bind(&mut self, host: &web::HtmlElement) {
        self.shadow = host.shadow_root();
    }

    fn try_rebuild(&mut self, frame: &RenderFrame<'_>) -> anyhow::Result<()> {
        self.letters.clear();
        let shadow = self
            .shadow
            .clone()
            .ok_or_else(|| anyhow::anyhow!("host has no shadow root"))?;
        shadow.set_inner_html("");

        let style = dom::create_html(&self.document, STYLE_TAG)?;
        style.set_text_content(Some(frame.stylesheet.as_str()));
        shadow.append_child(&style).map_err(js_err)?;

        let container = dom::create_html(&self.document, CONTAINER_TAG)?;
        container.set_class_name(CONTAINER_CLASS);
        let heading = dom::create_html(&self.document, frame.heading_tag)?;
        heading.set_class_name(HEADING_CLASS);
        container.append_child(&heading).map_err(js_err)?;
        shadow.append_child(&container).map_err(js_err)?;

        self.letters.reserve(frame.letters.len());
        for letter in frame.letters {
            let span = dom::create_html(&self.document, LETTER_TAG)?;
            span.set_text_content(Some(letter.glyph.to_string().as_str()));
            span.dataset()
                .set(SPEED_DATA_KEY, &speed_label(letter.speed))
                .map_err(js_err)?;
            heading.append_child(&span).map_err(js_err)?;
            self.letters.push(span);
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn rebuild(&mut self, frame: &RenderFrame<'_>) {
        if let Err(e) = self.try_rebuild(frame) {
            log::warn!("[scroll-text] render incomplete: {:?}", e);
        }
    }

    fn apply(&mut self, index: usize, style: &LetterStyle) {
        if let Some(span) = self.letters.get(index) {
            let css = span.style();
            _ = css.set_property("transform", &style.transform_css());
            _ = css.set_property("opacity", &style.opacity_css());
        }
    }

    fn scroll_offset(&self) -> f64 {
        dom::scroll_y(&self.window)
    }

    fn subscribe(&mut self) {
        if self.listener.is_some() {
            return;
        }
        let this = self.this.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(inner) = this.upgrade() else {
                return;
            };
            // A scroll delivered while a render holds the state is skipped;
            // the render ends with its own update.
            let Ok(mut guard) = inner.try_borrow_mut() else {
                return;
            };
            let Inner { text, surface } = &mut *guard;
            text.on_scroll(surface);
        }) as Box<dyn FnMut()>);
        if let Err(e) = self
            .window
            .add_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
        {
            log::warn!("[scroll-text] scroll listener not attached: {:?}", e);
            return;
        }
        self.listener = Some(closure);
    }

    fn unsubscribe(&mut self) {
        if let Some(closure) = self.listener.take() {
            _ = self
                .window
                .remove_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref());
        }
    }

    fn release(&mut self) {
        self.letters.clear();
        self.shadow = None;
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[wasm_bindgen]
pub struct ScrollTextElement {
    inner: Rc<RefCell<Inner>>,
}

impl ScrollTextElement {
    pub(crate) fn new(host: &web::HtmlElement) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document()?;
        // A re-created element reuses the shadow root it attached earlier.
        if host.shadow_root().is_none() {
            host.attach_shadow(&web::ShadowRootInit::new(web::ShadowRootMode::Open))
                .map_err(js_err)?;
        }
        let inner = Rc::new_cyclic(|this| {
            RefCell::new(Inner {
                text: ScrollText::with_fallback(RngSource::from_entropy(), TweenFallback::Random),
                surface: DomSurface {
                    window,
                    document,
                    shadow: None,
                    letters: Vec::new(),
                    listener: None,
                    this: this.clone(),
                },
            })
        });
        Ok(Self { inner })
    }
}

#[wasm_bindgen]
impl ScrollTextElement {
    pub fn connected(&self, host: web::HtmlElement) {
        let mut guard = self.inner.borrow_mut();
        let Inner { text, surface } = &mut *guard;
        surface.bind(&host);
        text.connected(&HostAttributes(host), surface);
    }

    pub fn disconnected(&self) {
        let mut guard = self.inner.borrow_mut();
        let Inner { text, surface } = &mut *guard;
        text.disconnected(surface);
    }

    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(
        &self,
        host: web::HtmlElement,
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    ) {
        let mut guard = self.inner.borrow_mut();
        let Inner { text, surface } = &mut *guard;
        surface.bind(&host);
        text.attribute_changed(
            &name,
            old_value.as_deref(),
            new_value.as_deref(),
            &HostAttributes(host),
            surface,
        );
    }

    /// Number of letter units currently rendered.
    #[wasm_bindgen(getter, js_name = letterCount)]
    pub fn letter_count(&self) -> usize {
        self.inner.borrow().text.letters().len()
    }
}
