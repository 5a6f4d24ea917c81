use crate::constants::*;
use crate::core::{conic_gradient, label_angle, rotate_transform};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rebuild the wheel face and its labels for the current words.
pub fn render_words(document: &web::Document, words: &[&str]) -> anyhow::Result<()> {
    if let Some(face) = dom::html_element(document, WHEEL_FACE_ID) {
        _ = face
            .style()
            .set_property("background", &conic_gradient(words.len()));
    }

    let labels = document
        .get_element_by_id(WHEEL_LABELS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", WHEEL_LABELS_ID))?;
    labels.set_inner_html("");
    for (i, word) in words.iter().enumerate() {
        let slot = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        slot.set_class_name("wheel-label");
        _ = slot
            .style()
            .set_property("transform", &rotate_transform(label_angle(i, words.len())));

        let text = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        text.set_text_content(Some(*word));
        _ = slot.append_child(&text);
        _ = labels.append_child(&slot);
    }

    dom::set_visible(document, ALL_LEARNED_ID, words.is_empty());
    Ok(())
}

#[inline]
pub fn set_rotation(document: &web::Document, deg: f64) {
    if let Some(rotor) = dom::html_element(document, WHEEL_ROTOR_ID) {
        _ = rotor.style().set_property("transform", &rotate_transform(deg));
    }
}

/// Disable the spin button while the wheel turns or has nothing left to pick.
pub fn set_spin_enabled(document: &web::Document, enabled: bool) {
    if let Some(el) = document.get_element_by_id(SPIN_BUTTON_ID) {
        if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
            button.set_disabled(!enabled);
        }
        _ = el.set_attribute("aria-busy", if enabled { "false" } else { "true" });
    }
}
