use dashboard::{Notification, Page};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub const NOTIFICATION_ITEM_CLASS: &str = "notification-item";
pub const NOTIFICATION_ACTION_SELECTOR: &str = ".action-btn";
pub const FILTER_CONTROL_SELECTOR: &str = ".filter-btn";

/// Id prefixes for filter controls found at init and for controls first seen
/// through `filter_notifications`. Kept apart so the two never collide.
pub const FILTER_CONTROL_ID_PREFIX: &str = "notification-filter";
pub const LATE_FILTER_CONTROL_ID_PREFIX: &str = "notification-filter-late";

/// `Page` over the live document.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.element(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    /// Builds notification records from the `.notification-item` markup and
    /// collects the filter controls. An item is tagged with its classes and
    /// the words of its `data-category`. Elements without an id get one.
    pub fn discover_notifications(&self) -> (Vec<Notification>, Vec<String>) {
        let mut items = Vec::new();
        for (i, el) in self.select_all(&format!(".{NOTIFICATION_ITEM_CLASS}")).into_iter().enumerate() {
            let id = ensure_id(&el, "notification", i);
            let category = el.get_attribute("data-category").unwrap_or_default();
            let mut item = Notification::untagged(id)
                .with_tags(class_names(&el))
                .with_tags(category.split_whitespace());
            if let Ok(Some(action)) = el.query_selector(NOTIFICATION_ACTION_SELECTOR) {
                item = item.with_action(ensure_id(&action, "notification-action", i));
            }
            if el.get_attribute("data-read").as_deref() == Some("true") {
                item = item.read();
            }
            items.push(item);
        }

        let controls = self
            .select_all(FILTER_CONTROL_SELECTOR)
            .into_iter()
            .enumerate()
            .map(|(i, el)| ensure_id(&el, FILTER_CONTROL_ID_PREFIX, i))
            .collect();

        (items, controls)
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .collect()
    }
}

pub fn ensure_id(el: &Element, prefix: &str, index: usize) -> String {
    let id = el.id();
    if !id.is_empty() {
        return id;
    }
    let id = generated_id(prefix, index);
    el.set_id(&id);
    id
}

fn generated_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}

fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

impl Page for DomPage {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn ensure_element(&mut self, id: &str, class: &str) -> bool {
        if self.has_element(id) {
            return false;
        }
        let Some(body) = self.document.body() else {
            return false;
        };
        let Ok(el) = self.document.create_element("div") else {
            return false;
        };
        el.set_id(id);
        el.set_class_name(class);
        body.append_child(&el).is_ok()
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.class_list().add_1(class).is_ok())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.class_list().remove_1(class).is_ok())
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        let Some(el) = self.html_element(id) else {
            return false;
        };
        let style = el.style();
        if value.is_empty() {
            style.remove_property(property).is_ok()
        } else {
            style.set_property(property, value).is_ok()
        }
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        el.set_inner_html(html);
        true
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.input(id).map(|i| i.value())
    }

    fn set_input_value(&mut self, id: &str, value: &str) -> bool {
        let Some(input) = self.input(id) else {
            return false;
        };
        input.set_value(value);
        true
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_control_ids_never_reuse_discovered_ones() {
        let discovered: Vec<String> = (0..64)
            .map(|i| generated_id(FILTER_CONTROL_ID_PREFIX, i))
            .collect();
        for i in 0..64 {
            let late = generated_id(LATE_FILTER_CONTROL_ID_PREFIX, i);
            assert!(!discovered.contains(&late), "{late}");
        }
        assert_eq!(generated_id(FILTER_CONTROL_ID_PREFIX, 0), "notification-filter-0");
    }
}
