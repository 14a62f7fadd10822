use crate::layout::scroll_fraction;
use web_sys as web;

/// Current raw scroll offset of the page, 0 at the top and 1 fully scrolled.
pub fn raw_scroll_offset(window: &web::Window, document: &web::Document) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_fraction(scroll_y, content, viewport)
}
