use std::collections::{BTreeMap, BTreeSet};

/// Id-addressed view of the page markup.
///
/// Every mutating call reports whether the target element exists. A missing
/// element is never an error: the call does nothing and returns `false`.
pub trait Page {
    fn has_element(&self, id: &str) -> bool;

    /// Appends a `div` with `id` and `class` to the body unless an element
    /// with that id already exists.
    fn ensure_element(&mut self, id: &str, class: &str) -> bool;

    fn add_class(&mut self, id: &str, class: &str) -> bool;
    fn remove_class(&mut self, id: &str, class: &str) -> bool;

    /// Sets an inline style property. An empty value clears it.
    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool;

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    fn input_value(&self, id: &str) -> Option<String>;
    fn set_input_value(&mut self, id: &str, value: &str) -> bool;

    /// Locks or restores scrolling of the document body.
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessElement {
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub html: String,
    pub text: String,
    pub value: String,
}

/// In-memory page used by host builds and tests.
#[derive(Debug, Default, Clone)]
pub struct HeadlessPage {
    elements: BTreeMap<String, HeadlessElement>,
    scroll_locked: bool,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut page = Self::new();
        for id in ids {
            page.insert(id);
        }
        page
    }

    pub fn insert(&mut self, id: &str) -> &mut HeadlessElement {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn remove(&mut self, id: &str) -> Option<HeadlessElement> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&HeadlessElement> {
        self.elements.get(id)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.html.as_str())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl Page for HeadlessPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn ensure_element(&mut self, id: &str, class: &str) -> bool {
        if self.elements.contains_key(id) {
            return false;
        }
        self.insert(id).classes.insert(class.to_string());
        true
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        let Some(e) = self.elements.get_mut(id) else {
            return false;
        };
        e.classes.insert(class.to_string());
        true
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        let Some(e) = self.elements.get_mut(id) else {
            return false;
        };
        e.classes.remove(class);
        true
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        let Some(e) = self.elements.get_mut(id) else {
            return false;
        };
        if value.is_empty() {
            e.styles.remove(property);
        } else {
            e.styles.insert(property.to_string(), value.to_string());
        }
        true
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        let Some(e) = self.elements.get_mut(id) else {
            return false;
        };
        e.html = html.to_string();
        true
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(e) = self.elements.get_mut(id) else {
            return false;
        };
        e.text = text.to_string();
        true
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn set_input_value(&mut self, id: &str, value: &str) -> bool {
        let Some(e) = self.elements.get_mut(id) else {
            return false;
        };
        e.value = value.to_string();
        true
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_are_reported_not_created() {
        let mut page = HeadlessPage::new();
        assert!(!page.add_class("nope", "active"));
        assert!(!page.set_text("nope", "1"));
        assert!(!page.has_element("nope"));
    }

    #[test]
    fn ensure_element_keeps_existing_node() {
        let mut page = HeadlessPage::with_elements(["panel-overlay"]);
        assert!(!page.ensure_element("panel-overlay", "modal-panel-overlay"));
        assert!(!page.has_class("panel-overlay", "modal-panel-overlay"));
        assert!(page.ensure_element("other", "x"));
        assert!(page.has_class("other", "x"));
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut page = HeadlessPage::with_elements(["n"]);
        page.set_style("n", "opacity", "0.5");
        assert_eq!(page.style("n", "opacity"), Some("0.5"));
        page.set_style("n", "opacity", "");
        assert_eq!(page.style("n", "opacity"), None);
    }
}
