use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn input_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlInputElement> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an <input>: {:?}", id, e))
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
