//! DOM side of the section overlay: progress bar fill plus one list item per
//! section, exactly one of which carries the `active` class.

use crate::constants::{ACTIVE_CLASS, OVERLAY_ID, PROGRESS_FILL_ID, SECTION_LIST_ID};
use anyhow::anyhow;
use rig_core::{OverlayState, SectionDescriptor};
use web_sys as web;

pub struct DomOverlay {
    state: OverlayState,
    fill: web::HtmlElement,
    items: Vec<web::Element>,
}

impl DomOverlay {
    /// Build the section list inside `#journey-sections`.
    pub fn mount(
        document: &web::Document,
        sections: &'static [SectionDescriptor],
    ) -> anyhow::Result<Self> {
        use wasm_bindgen::JsCast;

        if document.get_element_by_id(OVERLAY_ID).is_none() {
            return Err(anyhow!("missing #{}", OVERLAY_ID));
        }
        let fill = document
            .get_element_by_id(PROGRESS_FILL_ID)
            .ok_or_else(|| anyhow!("missing #{}", PROGRESS_FILL_ID))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let list = document
            .get_element_by_id(SECTION_LIST_ID)
            .ok_or_else(|| anyhow!("missing #{}", SECTION_LIST_ID))?;
        list.set_inner_html("");

        let mut items = Vec::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            let li = document
                .create_element("li")
                .map_err(|e| anyhow!("{:?}", e))?;
            _ = li.set_attribute("data-index", &i.to_string());
            let title = document
                .create_element("h3")
                .map_err(|e| anyhow!("{:?}", e))?;
            title.set_text_content(Some(section.title));
            let body = document
                .create_element("p")
                .map_err(|e| anyhow!("{:?}", e))?;
            body.set_text_content(Some(section.description));
            _ = li.append_child(&title);
            _ = li.append_child(&body);
            _ = list.append_child(&li);
            items.push(li);
        }

        let overlay = Self {
            state: OverlayState::new(sections),
            fill,
            items,
        };
        overlay.paint_fill();
        overlay.paint_active();
        Ok(overlay)
    }

    /// Listener entry point; called once per frame with published progress.
    pub fn on_progress(&mut self, v: f32) {
        let changed = self.state.apply(v).is_some();
        self.paint_fill();
        if changed {
            self.paint_active();
        }
    }

    fn paint_fill(&self) {
        let pct = format!("{:.2}%", self.state.fill() * 100.0);
        _ = self.fill.style().set_property("width", &pct);
    }

    fn paint_active(&self) {
        for (i, el) in self.items.iter().enumerate() {
            let active = self.state.is_active(i);
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
            if active {
                _ = el.set_attribute("aria-current", "step");
            } else {
                _ = el.remove_attribute("aria-current");
            }
        }
    }
}
