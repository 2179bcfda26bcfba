use std::borrow::Cow;

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use thiserror::Error;

use super::{
    merge::apply_sidebar_customization,
    model::{NavigationItem, SidebarCustomization, SIDEBAR_CUSTOMIZATION_KEY},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while touching the persisted sidebar layout.
pub enum SidebarStorageError {
    /// The store could not be read or held a value that is not a layout.
    #[error("sidebar customization read failed: {0}")]
    Read(String),
    /// The layout could not be serialized or the store rejected the write.
    #[error("sidebar customization write failed: {0}")]
    Write(String),
    /// The store rejected the delete.
    #[error("sidebar customization clear failed: {0}")]
    Clear(String),
}

#[derive(Debug, Clone)]
/// Persists the user's sidebar layout and applies it to the default navigation.
///
/// The infallible operations ([`get`](Self::get), [`set`](Self::set), [`clear`](Self::clear),
/// [`apply`](Self::apply)) log storage failures and carry on as if nothing was stored. The
/// `try_*` variants surface the error for callers that want to report it.
pub struct SidebarCustomizer<S> {
    store: S,
    key: String,
}

impl<S: PrefsStore> SidebarCustomizer<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SIDEBAR_CUSTOMIZATION_KEY)
    }

    /// Uses `key` instead of [`SIDEBAR_CUSTOMIZATION_KEY`].
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the stored layout. `None` when nothing is stored or the entry is unreadable.
    pub async fn get(&self) -> Option<SidebarCustomization> {
        match self.try_get().await {
            Ok(customization) => customization,
            Err(err) => {
                logging::error!("{err}");
                None
            }
        }
    }

    /// Stores `config`. A rejected write is logged and dropped.
    pub async fn set(&self, config: &SidebarCustomization) {
        if let Err(err) = self.try_set(config).await {
            logging::error!("{err}");
        }
    }

    /// Forgets the stored layout so the defaults apply again.
    pub async fn clear(&self) {
        if let Err(err) = self.try_clear().await {
            logging::error!("{err}");
        }
    }

    /// Applies the stored layout, if any, to `default_items`.
    pub async fn apply<'a>(
        &self,
        default_items: &'a [NavigationItem],
    ) -> Cow<'a, [NavigationItem]> {
        let customization = self.get().await;
        apply_sidebar_customization(default_items, customization.as_ref())
    }

    /// Loads the stored layout.
    ///
    /// An empty entry or a stored JSON `null` counts as no layout.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarStorageError::Read`] when the store fails or the entry does not decode.
    pub async fn try_get(&self) -> Result<Option<SidebarCustomization>, SidebarStorageError> {
        load_pref_with::<_, Option<SidebarCustomization>>(&self.store, &self.key)
            .await
            .map(Option::flatten)
            .map_err(SidebarStorageError::Read)
    }

    /// Stores `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarStorageError::Write`] when serialization or the store write fails.
    pub async fn try_set(&self, config: &SidebarCustomization) -> Result<(), SidebarStorageError> {
        save_pref_with(&self.store, &self.key, config)
            .await
            .map_err(SidebarStorageError::Write)
    }

    /// Deletes the stored layout.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarStorageError::Clear`] when the store delete fails.
    pub async fn try_clear(&self) -> Result<(), SidebarStorageError> {
        self.store
            .delete_pref(&self.key)
            .await
            .map_err(SidebarStorageError::Clear)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, UnavailablePrefsStore};
    use pretty_assertions::assert_eq;

    use super::*;

    fn defaults() -> Vec<NavigationItem> {
        vec![
            NavigationItem::new("Dashboard").with_route("/"),
            NavigationItem::new("Platforms").with_route("/platforms"),
            NavigationItem::group(
                "More",
                vec![
                    NavigationItem::new("Console").with_route("/console"),
                    NavigationItem::new("About").with_route("/about"),
                ],
            ),
        ]
    }

    #[test]
    fn set_then_get_round_trips() {
        let customizer = SidebarCustomizer::new(MemoryPrefsStore::default());
        let config = SidebarCustomization::new(["Console", "Dashboard"], ["Platforms"]);

        block_on(customizer.set(&config));

        assert_eq!(block_on(customizer.get()), Some(config));
        assert_eq!(
            customizer.store().raw(SIDEBAR_CUSTOMIZATION_KEY).as_deref(),
            Some(r#"{"mainItems":["Console","Dashboard"],"moreItems":["Platforms"]}"#)
        );
    }

    #[test]
    fn clear_then_get_is_absent() {
        let customizer = SidebarCustomizer::new(MemoryPrefsStore::default());
        block_on(customizer.set(&SidebarCustomization::new(["Dashboard"], ["About"])));

        block_on(customizer.clear());

        assert_eq!(block_on(customizer.get()), None);
        assert!(customizer.store().is_empty());
    }

    #[test]
    fn corrupt_entry_reads_as_absent() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(SIDEBAR_CUSTOMIZATION_KEY, "{\"mainItems\": [1, 2");
        let customizer = SidebarCustomizer::new(store);

        assert!(matches!(
            block_on(customizer.try_get()),
            Err(SidebarStorageError::Read(_))
        ));
        assert_eq!(block_on(customizer.get()), None);

        let defaults = defaults();
        let applied = block_on(customizer.apply(&defaults));
        assert!(matches!(applied, Cow::Borrowed(_)));
    }

    #[test]
    fn stored_empty_string_reads_as_absent() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(SIDEBAR_CUSTOMIZATION_KEY, "");
        let customizer = SidebarCustomizer::new(store);

        assert_eq!(block_on(customizer.try_get()), Ok(None));
        let defaults = defaults();
        assert!(matches!(
            block_on(customizer.apply(&defaults)),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn stored_null_reads_as_absent() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(SIDEBAR_CUSTOMIZATION_KEY, "null");
        let customizer = SidebarCustomizer::new(store);

        assert_eq!(block_on(customizer.try_get()), Ok(None));
    }

    #[test]
    fn unavailable_storage_never_reaches_the_caller() {
        let customizer = SidebarCustomizer::new(UnavailablePrefsStore::with_reason("denied"));
        let config = SidebarCustomization::new(["Dashboard"], Vec::<String>::new());

        block_on(customizer.set(&config));
        block_on(customizer.clear());
        assert_eq!(block_on(customizer.get()), None);

        assert_eq!(
            block_on(customizer.try_set(&config)),
            Err(SidebarStorageError::Write("denied".to_string()))
        );
        assert_eq!(
            block_on(customizer.try_clear()),
            Err(SidebarStorageError::Clear("denied".to_string()))
        );
    }

    #[test]
    fn apply_without_layout_returns_defaults() {
        let customizer = SidebarCustomizer::new(MemoryPrefsStore::default());
        let defaults = defaults();

        let applied = block_on(customizer.apply(&defaults));

        assert_eq!(applied.into_owned(), defaults);
    }

    #[test]
    fn apply_uses_the_stored_layout() {
        let customizer = SidebarCustomizer::new(MemoryPrefsStore::default());
        block_on(customizer.set(&SidebarCustomization::new(
            ["Console", "Dashboard"],
            ["Platforms", "Unknown"],
        )));
        let defaults = defaults();

        let applied = block_on(customizer.apply(&defaults)).into_owned();

        assert_eq!(
            applied,
            vec![
                NavigationItem::new("Console").with_route("/console"),
                NavigationItem::new("Dashboard").with_route("/"),
                NavigationItem::more_group(vec![
                    NavigationItem::new("Platforms").with_route("/platforms")
                ]),
            ]
        );
    }

    #[test]
    fn custom_key_isolates_layouts() {
        let store = MemoryPrefsStore::default();
        let admin = SidebarCustomizer::with_key(store.clone(), "sidebar.admin");
        let viewer = SidebarCustomizer::new(store);

        block_on(admin.set(&SidebarCustomization::new(["About"], Vec::<String>::new())));

        assert_eq!(admin.key(), "sidebar.admin");
        assert_eq!(block_on(viewer.get()), None);
        assert!(block_on(admin.get()).is_some());
    }
}
