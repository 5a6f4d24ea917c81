use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to listen on", element_id);
    }
}

/// Look up `#id` and cast it, failing loudly during init.
pub fn element_as<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong type: {:?}", id, e))
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            // fallback for pages without the CSS class
            _ = el.remove_attribute("hidden");
        } else {
            _ = cl.add_1("hidden");
            _ = el.set_attribute("hidden", "");
        }
    }
}
