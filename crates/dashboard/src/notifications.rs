use std::collections::BTreeSet;

use crate::config::DashboardConfig;
use crate::markup;
use crate::page::Page;

/// One notification row of the page.
///
/// `is_read` is the source of truth; the row's opacity and the visibility of
/// its action control are derived from it. `tags` mirrors the row's class
/// list: a category filter shows the row when the category is one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub element_id: String,
    pub tags: BTreeSet<String>,
    pub action_id: Option<String>,
    pub is_read: bool,
    pub visible: bool,
}

impl Notification {
    pub fn new(element_id: impl Into<String>, category: impl Into<String>) -> Self {
        Self::untagged(element_id).with_tags([category])
    }

    pub fn untagged(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            tags: BTreeSet::new(),
            action_id: None,
            is_read: false,
            visible: true,
        }
    }

    /// Adds tags; blank ones are dropped.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag: String = tag.into();
            let tag = tag.trim();
            if !tag.is_empty() {
                self.tags.insert(tag.to_string());
            }
        }
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn with_action(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Category(String),
}

impl NotificationFilter {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == "all" {
            NotificationFilter::All
        } else {
            NotificationFilter::Category(s.to_string())
        }
    }

    pub fn matches(&self, item: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Category(c) => item.has_tag(c),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationWidget {
    items: Vec<Notification>,
    filter: NotificationFilter,
    filter_controls: Vec<String>,
    active_control: Option<String>,
    list_id: String,
    count_id: String,
    active_class: String,
    read_opacity: String,
    visible_display: String,
}

impl NotificationWidget {
    pub fn new(
        config: &DashboardConfig,
        items: Vec<Notification>,
        filter_controls: Vec<String>,
    ) -> Self {
        Self {
            items,
            filter: NotificationFilter::All,
            filter_controls,
            active_control: None,
            list_id: config.notifications_list_id.clone(),
            count_id: config.notification_count_id.clone(),
            active_class: config.active_class.clone(),
            read_opacity: config.read_opacity.clone(),
            visible_display: config.visible_display.clone(),
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn filter_state(&self) -> &NotificationFilter {
        &self.filter
    }

    pub fn active_control(&self) -> Option<&str> {
        self.active_control.as_deref()
    }

    /// Applies the read styling of items that start out read and writes the
    /// count.
    pub fn init<P: Page>(&mut self, page: &mut P) -> usize {
        for item in self.items.iter().filter(|n| n.is_read) {
            apply_read_style(page, item, &self.read_opacity);
        }
        self.render_count(page)
    }

    /// Shows the items tagged `category` (`"all"` shows everything) and marks
    /// `control_id` as the only active filter control. A control not seen at
    /// init is remembered so later filters deactivate it.
    pub fn filter<P: Page>(&mut self, page: &mut P, category: &str, control_id: &str) {
        if !self.filter_controls.iter().any(|c| c == control_id) {
            self.filter_controls.push(control_id.to_string());
        }
        for control in &self.filter_controls {
            page.remove_class(control, &self.active_class);
        }
        page.add_class(control_id, &self.active_class);
        self.active_control = Some(control_id.to_string());

        self.filter = NotificationFilter::parse(category);
        for item in &mut self.items {
            item.visible = self.filter.matches(item);
            let display = if item.visible {
                self.visible_display.as_str()
            } else {
                "none"
            };
            page.set_style(&item.element_id, "display", display);
        }
        tracing::debug!(filter = ?self.filter, "notifications filtered");
    }

    /// Returns `false` when no item has that element id.
    pub fn mark_read<P: Page>(&mut self, page: &mut P, element_id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|n| n.element_id == element_id) else {
            return false;
        };
        item.is_read = true;
        apply_read_style(page, item, &self.read_opacity);
        self.render_count(page);
        true
    }

    pub fn mark_all_read<P: Page>(&mut self, page: &mut P) {
        for item in &mut self.items {
            item.is_read = true;
            apply_read_style(page, item, &self.read_opacity);
        }
        self.render_count(page);
    }

    pub fn clear_all<P: Page>(&mut self, page: &mut P) {
        page.set_inner_html(&self.list_id, markup::NO_NOTIFICATIONS);
        self.items.clear();
        self.render_count(page);
    }

    pub fn count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub fn render_count<P: Page>(&self, page: &mut P) -> usize {
        let count = self.count();
        page.set_text(&self.count_id, &count.to_string());
        count
    }
}

fn apply_read_style<P: Page>(page: &mut P, item: &Notification, read_opacity: &str) {
    page.set_style(&item.element_id, "opacity", read_opacity);
    if let Some(action) = &item.action_id {
        page.set_style(action, "display", "none");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;
    use pretty_assertions::assert_eq;

    fn fixture() -> (NotificationWidget, HeadlessPage) {
        let items = vec![
            Notification::new("n1", "alert").with_action("n1-action"),
            Notification::new("n2", "update").with_action("n2-action"),
            Notification::new("n3", "alert").with_action("n3-action"),
        ];
        let controls = vec!["f-all".to_string(), "f-alert".to_string(), "f-update".to_string()];
        let widget = NotificationWidget::new(&DashboardConfig::default(), items, controls);
        let page = HeadlessPage::with_elements([
            "n1",
            "n1-action",
            "n2",
            "n2-action",
            "n3",
            "n3-action",
            "f-all",
            "f-alert",
            "f-update",
            "notifications-list",
            "notification-count",
        ]);
        (widget, page)
    }

    fn shown(w: &NotificationWidget) -> Vec<&str> {
        w.items()
            .iter()
            .filter(|n| n.visible)
            .map(|n| n.element_id.as_str())
            .collect()
    }

    #[test]
    fn init_writes_unread_count() {
        let (mut w, mut page) = fixture();
        assert_eq!(w.init(&mut page), 3);
        assert_eq!(page.text("notification-count"), Some("3"));
    }

    #[test]
    fn filter_by_category_and_back_to_all() {
        let (mut w, mut page) = fixture();
        w.filter(&mut page, "alert", "f-alert");
        assert_eq!(shown(&w), vec!["n1", "n3"]);
        assert_eq!(page.style("n2", "display"), Some("none"));
        assert_eq!(page.style("n1", "display"), Some("flex"));

        w.filter(&mut page, "all", "f-all");
        assert_eq!(shown(&w), vec!["n1", "n2", "n3"]);
        assert_eq!(page.style("n2", "display"), Some("flex"));
    }

    #[test]
    fn only_the_triggering_control_is_active() {
        let (mut w, mut page) = fixture();
        w.filter(&mut page, "alert", "f-alert");
        w.filter(&mut page, "update", "f-update");
        assert!(page.has_class("f-update", "active"));
        assert!(!page.has_class("f-alert", "active"));
        assert!(!page.has_class("f-all", "active"));
        assert_eq!(w.active_control(), Some("f-update"));
    }

    #[test]
    fn category_filter_matches_any_tag() {
        let items = vec![
            Notification::untagged("n1").with_tags(["notification-item", "unread", "flood"]),
            Notification::untagged("n2").with_tags(["notification-item", "weather"]),
        ];
        let mut w = NotificationWidget::new(&DashboardConfig::default(), items, Vec::new());
        let mut page = HeadlessPage::with_elements(["n1", "n2", "f-flood", "f-unread"]);

        w.filter(&mut page, "flood", "f-flood");
        assert_eq!(shown(&w), vec!["n1"]);
        assert_eq!(page.style("n1", "display"), Some("flex"));
        assert_eq!(page.style("n2", "display"), Some("none"));

        w.filter(&mut page, "unread", "f-unread");
        assert_eq!(shown(&w), vec!["n1"]);
    }

    #[test]
    fn late_filter_controls_are_deactivated_later() {
        let (mut w, mut page) = fixture();
        page.insert("f-extra");
        w.filter(&mut page, "alert", "f-extra");
        assert!(page.has_class("f-extra", "active"));
        w.filter(&mut page, "all", "f-all");
        assert!(!page.has_class("f-extra", "active"));
        assert!(page.has_class("f-all", "active"));
    }

    #[test]
    fn blank_tags_are_dropped() {
        let n = Notification::untagged("n1").with_tags(["", "  ", "alert"]);
        assert_eq!(n.tags.len(), 1);
        assert!(n.has_tag("alert"));
    }

    #[test]
    fn mark_read_dims_item_and_hides_action() {
        let (mut w, mut page) = fixture();
        assert!(w.mark_read(&mut page, "n2"));
        assert_eq!(page.style("n2", "opacity"), Some("0.5"));
        assert_eq!(page.style("n2-action", "display"), Some("none"));
        assert_eq!(w.count(), 2);
        assert_eq!(page.text("notification-count"), Some("2"));
        assert!(!w.mark_read(&mut page, "missing"));
    }

    #[test]
    fn mark_all_read_zeroes_count() {
        let (mut w, mut page) = fixture();
        w.mark_read(&mut page, "n1");
        w.mark_all_read(&mut page);
        assert_eq!(w.count(), 0);
        assert_eq!(page.text("notification-count"), Some("0"));
        for id in ["n1-action", "n2-action", "n3-action"] {
            assert_eq!(page.style(id, "display"), Some("none"));
        }
    }

    #[test]
    fn unrelated_opacity_changes_do_not_affect_count() {
        let (mut w, mut page) = fixture();
        page.set_style("n1", "opacity", "0.5");
        assert_eq!(w.render_count(&mut page), 3);
    }

    #[test]
    fn clear_all_shows_placeholder() {
        let (mut w, mut page) = fixture();
        w.clear_all(&mut page);
        assert!(w.items().is_empty());
        assert_eq!(page.html("notifications-list"), Some(markup::NO_NOTIFICATIONS));
        assert_eq!(page.text("notification-count"), Some("0"));
    }

    #[test]
    fn items_read_at_start_are_styled_on_init() {
        let items = vec![Notification::new("n1", "alert").with_action("a1").read()];
        let mut w = NotificationWidget::new(&DashboardConfig::default(), items, Vec::new());
        let mut page = HeadlessPage::with_elements(["n1", "a1", "notification-count"]);
        assert_eq!(w.init(&mut page), 0);
        assert_eq!(page.style("a1", "display"), Some("none"));
    }
}
