use crate::constants::ELEMENT_NAME;
use crate::dom::js_err;
use crate::element::ScrollTextElement;
use scroll_text_core::constants::OBSERVED_ATTRIBUTES;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Custom elements must be ES classes extending HTMLElement, so a tiny shim
// owns the class and forwards lifecycle callbacks to the Rust object. The
// Rust object is freed on removal and re-created on demand; it never keeps
// a reference to the host.
#[wasm_bindgen(inline_js = r#"
export function defineScrollText(tag, observed, create) {
  if (customElements.get(tag)) {
    return false;
  }
  customElements.define(tag, class extends HTMLElement {
    static get observedAttributes() {
      return observed;
    }
    _state() {
      if (!this._inner) this._inner = create(this);
      return this._inner;
    }
    connectedCallback() {
      const inner = this._state();
      if (inner) inner.connected(this);
    }
    disconnectedCallback() {
      const inner = this._inner;
      this._inner = null;
      if (inner) {
        inner.disconnected();
        inner.free();
      }
    }
    attributeChangedCallback(name, oldValue, newValue) {
      const inner = this._state();
      if (inner) inner.attributeChanged(this, name, oldValue, newValue);
    }
  });
  return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = defineScrollText, catch)]
    fn define_scroll_text(
        tag: &str,
        observed: &js_sys::Array,
        create: &js_sys::Function,
    ) -> Result<bool, JsValue>;
}

/// Register the element class once per page.
pub fn define() -> anyhow::Result<()> {
    let observed: js_sys::Array = OBSERVED_ATTRIBUTES
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect();

    let create = Closure::wrap(Box::new(|host: web::HtmlElement| -> JsValue {
        match ScrollTextElement::new(&host) {
            Ok(el) => el.into(),
            Err(e) => {
                log::error!("[scroll-text] element init failed: {:?}", e);
                JsValue::NULL
            }
        }
    }) as Box<dyn FnMut(web::HtmlElement) -> JsValue>);

    let defined =
        define_scroll_text(ELEMENT_NAME, &observed, create.as_ref().unchecked_ref()).map_err(js_err)?;
    if defined {
        log::info!("[scroll-text] <{}> defined", ELEMENT_NAME);
        // The class keeps calling this for every new element.
        create.forget();
    } else {
        log::warn!("[scroll-text] <{}> already defined, skipping", ELEMENT_NAME);
    }
    Ok(())
}
