use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key holding the user's sidebar layout.
pub const SIDEBAR_CUSTOMIZATION_KEY: &str = "astrbot_sidebar_customization";
/// Translation key of the synthetic overflow group.
pub const MORE_GROUP_TITLE: &str = "core.navigation.groups.more";
/// Icon of the synthetic overflow group.
pub const MORE_GROUP_ICON: &str = "mdi-dots-horizontal";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A sidebar entry: a leaf that links to a route, or a group holding leaves.
///
/// An item is a group whenever `children` is present, even if the list is empty. Fields the
/// dashboard attaches beyond the ones modeled here are kept in `extra` and copied along.
pub struct NavigationItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationItem>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigationItem {
    /// Creates a leaf with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Creates a group holding `children`.
    pub fn group(title: impl Into<String>, children: Vec<NavigationItem>) -> Self {
        Self {
            title: title.into(),
            children: Some(children),
            ..Self::default()
        }
    }

    /// The overflow group built from user-relegated items.
    pub fn more_group(children: Vec<NavigationItem>) -> Self {
        Self::group(MORE_GROUP_TITLE, children).with_icon(MORE_GROUP_ICON)
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// User-chosen sidebar layout, stored as `{"mainItems": [...], "moreItems": [...]}`.
///
/// Entries are item titles. Titles listed in neither field are hidden once a customization
/// exists.
pub struct SidebarCustomization {
    /// Top-level items, in display order.
    #[serde(default)]
    pub main_items: Vec<String>,
    /// Items moved into the "More Features" group, in display order.
    #[serde(default)]
    pub more_items: Vec<String>,
}

impl SidebarCustomization {
    pub fn new<M, O>(main_items: M, more_items: O) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            main_items: main_items.into_iter().map(Into::into).collect(),
            more_items: more_items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn customization_uses_camel_case_fields() {
        let config = SidebarCustomization::new(["Bots", "Plugins"], ["Console"]);

        assert_eq!(
            serde_json::to_value(&config).expect("serialize"),
            json!({ "mainItems": ["Bots", "Plugins"], "moreItems": ["Console"] })
        );
    }

    #[test]
    fn missing_lists_decode_as_empty() {
        let config: SidebarCustomization =
            serde_json::from_value(json!({ "mainItems": ["Bots"] })).expect("decode");

        assert_eq!(config, SidebarCustomization::new(["Bots"], Vec::<String>::new()));
    }

    #[test]
    fn navigation_item_keeps_unmodeled_fields() {
        let raw = json!({
            "title": "core.navigation.platforms",
            "icon": "mdi-robot",
            "route": "/platforms",
            "badge": 3,
        });
        let item: NavigationItem = serde_json::from_value(raw.clone()).expect("decode");

        assert!(!item.is_group());
        assert_eq!(item.extra.get("badge"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&item).expect("serialize"), raw);
    }

    #[test]
    fn empty_children_still_make_a_group() {
        let item: NavigationItem =
            serde_json::from_value(json!({ "title": "More", "children": [] })).expect("decode");
        assert!(item.is_group());
    }

    #[test]
    fn more_group_has_fixed_title_and_icon() {
        let group = NavigationItem::more_group(vec![NavigationItem::new("Logs")]);

        assert_eq!(group.title, MORE_GROUP_TITLE);
        assert_eq!(group.icon.as_deref(), Some(MORE_GROUP_ICON));
        assert_eq!(group.children, Some(vec![NavigationItem::new("Logs")]));
    }
}
