//! Routes for widget tokens that consult external state.

use crate::collaborators::{Pasteboard, TabSnapshot};
use crate::route::Route;

/// "Open copied" quick link: a copied URL opens, anything else is searched.
pub(super) fn open_copied(pasteboard: &dyn Pasteboard, is_private: bool) -> Route {
    match pasteboard.url() {
        Some(url) => Route::Search {
            url: Some(url),
            is_private,
        },
        None => Route::SearchQuery {
            query: pasteboard.string().unwrap_or_default(),
        },
    }
}

/// Tabs widget: jump to the tab with `uuid`, or open a blank regular tab.
pub(super) fn open_tab(tabs: &dyn TabSnapshot, uuid: Option<&str>) -> Route {
    let tabs = tabs.open_tabs();
    match uuid {
        Some(uuid) if !tabs.is_empty() => Route::SearchUrl {
            url: tabs.get(uuid).and_then(|tab| tab.url.clone()),
            tab_id: uuid.to_string(),
        },
        _ => Route::Search {
            url: None,
            is_private: false,
        },
    }
}
