//! Keeps the header nav in sync with the section currently on screen.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Picks the section id with the largest visible ratio. Ties keep the
/// earliest entry so the highlight does not flicker between sections.
pub fn pick_active(visible: &[(String, f64)]) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (id, ratio) in visible {
        let better = match best {
            None => true,
            Some((_, current)) => *ratio > current,
        };
        if better {
            best = Some((id.as_str(), *ratio));
        }
    }
    best.map(|(id, _)| id)
}

fn set_active_link(id: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let links = match document.query_selector_all("[data-nav-link]") {
        Ok(links) => links,
        Err(_) => return,
    };
    for i in 0..links.length() {
        if let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let matches = link
                .get_attribute("href")
                .map_or(false, |href| href.trim_start_matches('#') == id);
            let _ = link.class_list().toggle_with_force("nav-link--active", matches);
        }
    }
}

/// Observer over every `[data-section]` element. Dropping disconnects it.
pub struct ScrollSpy {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ScrollSpy {
    pub fn observe(document: &Document) -> Option<ScrollSpy> {
        let sections = document.query_selector_all("[data-section]").ok()?;
        let links = document.query_selector_all("[data-nav-link]").ok()?;
        if sections.length() == 0 || links.length() == 0 {
            return None;
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let mut visible = Vec::new();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    visible.push((entry.target().id(), entry.intersection_ratio()));
                }
            }
            if let Some(active) = pick_active(&visible) {
                set_active_link(active);
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        let thresholds = js_sys::Array::of2(&JsValue::from_f64(0.25), &JsValue::from_f64(0.6));
        options.set_threshold(&thresholds);
        // Shrink the viewport band so a section counts as current while it
        // occupies the middle of the screen, not the instant it touches an
        // edge.
        options.set_root_margin("-20% 0px -40% 0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        for i in 0..sections.length() {
            if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&section);
            }
        }

        Some(ScrollSpy {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::pick_active;

    #[test]
    fn no_visible_sections_means_no_highlight() {
        assert_eq!(pick_active(&[]), None);
    }

    #[test]
    fn picks_the_most_visible_section() {
        let visible = vec![
            ("services".to_string(), 0.3),
            ("workflow".to_string(), 0.72),
            ("faq".to_string(), 0.25),
        ];
        assert_eq!(pick_active(&visible), Some("workflow"));
    }

    #[test]
    fn ties_keep_the_earliest_section() {
        let visible = vec![
            ("services".to_string(), 0.6),
            ("workflow".to_string(), 0.6),
        ];
        assert_eq!(pick_active(&visible), Some("services"));
    }
}
