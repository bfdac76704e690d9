//! `deep-link?url=<path>/<section>` resolution.

use crate::deeplink::DeeplinkPath;
use crate::route::{DefaultBrowserSection, HomepanelSection, Route, SettingsSection};

/// Resolves the `url` value of a `deep-link` URL.
///
/// The target is lowercased and must consist of exactly two non-empty
/// segments: a [`DeeplinkPath`] and a section of that category.
pub(super) fn route(target: Option<&str>) -> Option<Route> {
    let target = target?.to_lowercase();
    let mut segments = target.split('/').filter(|s| !s.is_empty());
    let path = DeeplinkPath::parse(segments.next()?)?;
    let section = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    match path {
        DeeplinkPath::Settings => {
            SettingsSection::parse(section).map(|section| Route::Settings { section })
        }
        DeeplinkPath::Homepanel => {
            HomepanelSection::parse(section).map(|section| Route::Homepanel { section })
        }
        DeeplinkPath::DefaultBrowser => {
            DefaultBrowserSection::parse(section).map(|section| Route::DefaultBrowser { section })
        }
    }
}
