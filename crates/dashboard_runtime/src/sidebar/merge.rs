use std::{borrow::Cow, collections::HashMap};

use super::model::{NavigationItem, SidebarCustomization};

/// Applies an optional customization to the default sidebar.
///
/// Without a customization the defaults are returned as-is, borrowed. With one, a new list is
/// built from copies of the referenced items; `default_items` is never modified.
pub fn apply_sidebar_customization<'a>(
    default_items: &'a [NavigationItem],
    customization: Option<&SidebarCustomization>,
) -> Cow<'a, [NavigationItem]> {
    match customization {
        Some(customization) => Cow::Owned(customization.apply(default_items)),
        None => Cow::Borrowed(default_items),
    }
}

impl SidebarCustomization {
    /// Rebuilds the sidebar from `default_items` following this layout.
    ///
    /// Groups in the defaults are flattened one level, so any leaf can be placed anywhere.
    /// Titles with no matching item are skipped. The overflow group is only emitted when
    /// `more_items` is non-empty.
    pub fn apply(&self, default_items: &[NavigationItem]) -> Vec<NavigationItem> {
        let by_title = index_by_title(default_items);
        let pick = |titles: &[String]| -> Vec<NavigationItem> {
            titles
                .iter()
                .filter_map(|title| by_title.get(title.as_str()).map(|item| (*item).clone()))
                .collect()
        };

        let mut customized = pick(&self.main_items);
        if !self.more_items.is_empty() {
            customized.push(NavigationItem::more_group(pick(&self.more_items)));
        }
        customized
    }
}

// Groups contribute their children, never themselves. The first item seen with a title wins.
fn index_by_title(items: &[NavigationItem]) -> HashMap<&str, &NavigationItem> {
    let mut by_title = HashMap::new();
    for item in items {
        match &item.children {
            Some(children) => {
                for child in children {
                    by_title.entry(child.title.as_str()).or_insert(child);
                }
            }
            None => {
                by_title.entry(item.title.as_str()).or_insert(item);
            }
        }
    }
    by_title
}
