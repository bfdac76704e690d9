use super::*;
use crate::collaborators::SimpleTab;
use crate::route::{DefaultBrowserSection, HomepanelSection, SettingsSection};
use crate::telemetry::MemoryTelemetry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
struct CountingSignal(AtomicUsize);

impl DefaultBrowserSignal for CountingSignal {
    fn opened_as_default_browser(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

struct Harness {
    builder: RouteBuilder,
    telemetry: Arc<MemoryTelemetry>,
    signal: Arc<CountingSignal>,
}

fn harness(last_private: bool) -> Harness {
    let telemetry = Arc::new(MemoryTelemetry::new());
    let signal = Arc::new(CountingSignal::default());
    let builder = RouteBuilder::new(["firefox"], move || last_private)
        .with_telemetry(telemetry.clone())
        .with_default_browser_signal(signal.clone());
    Harness {
        builder,
        telemetry,
        signal,
    }
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn open_url_with_explicit_private_flag() {
    let h = harness(false);
    assert_eq!(
        h.builder
            .make_route("firefox://open-url?url=https://example.com&private=true"),
        Some(Route::Search {
            url: Some(url("https://example.com")),
            is_private: true
        })
    );
}

#[test]
fn explicit_false_overrides_private_last_mode() {
    let h = harness(true);
    assert_eq!(
        h.builder
            .make_route("firefox://open-url?url=https://example.com&private=false"),
        Some(Route::Search {
            url: Some(url("https://example.com")),
            is_private: false
        })
    );
}

#[test]
fn missing_or_garbled_private_flag_uses_last_mode() {
    let h = harness(true);
    let expected = Some(Route::Search {
        url: Some(url("https://example.com")),
        is_private: true,
    });
    assert_eq!(
        h.builder.make_route("firefox://open-url?url=https://example.com"),
        expected
    );
    assert_eq!(
        h.builder
            .make_route("firefox://open-url?url=https://example.com&private=yes"),
        expected
    );
}

#[test]
fn open_url_without_url_opens_blank() {
    let h = harness(false);
    assert_eq!(
        h.builder.make_route("firefox://open-url"),
        Some(Route::Search {
            url: None,
            is_private: false
        })
    );
}

#[test]
fn open_text() {
    let h = harness(false);
    assert_eq!(
        h.builder.make_route("firefox://open-text?text=hello"),
        Some(Route::SearchQuery {
            query: "hello".to_string()
        })
    );
    assert_eq!(
        h.builder.make_route("firefox://open-text"),
        Some(Route::SearchQuery {
            query: String::new()
        })
    );
}

#[test]
fn deep_link_sections() {
    let h = harness(false);
    assert_eq!(
        h.builder.make_route("firefox://deep-link?url=settings/general"),
        Some(Route::Settings {
            section: SettingsSection::General
        })
    );
    assert_eq!(
        h.builder.make_route("firefox://deep-link?url=homepanel/bookmarks"),
        Some(Route::Homepanel {
            section: HomepanelSection::Bookmarks
        })
    );
    assert_eq!(
        h.builder.make_route("firefox://deep-link?url=default-browser/tutorial"),
        Some(Route::DefaultBrowser {
            section: DefaultBrowserSection::Tutorial
        })
    );
    assert_eq!(
        h.builder.make_route("firefox://deep-link?url=settings/unknown"),
        None
    );
    assert_eq!(h.builder.make_route("firefox://deep-link"), None);
}

#[test]
fn fxa_sign_in_requires_signin_param() {
    let h = harness(false);
    assert_eq!(h.builder.make_route("firefox://fxa-signin"), None);
    assert_eq!(
        h.builder.make_route("firefox://fxa-signin?signin=1&entrypoint=x"),
        Some(Route::FxaSignIn {
            params: AuthLaunchParams::from_deeplink("signin=1&entrypoint=x")
        })
    );
}

#[test]
fn glean_keeps_url_verbatim() {
    let h = harness(false);
    let input = "firefox://glean?logPings=true&debugViewTag=test";
    assert_eq!(
        h.builder.make_route(input),
        Some(Route::Glean { url: url(input) })
    );
}

#[test]
fn host_token_is_case_insensitive() {
    let h = harness(false);
    assert_eq!(
        h.builder.make_route("firefox://OPEN-TEXT?text=hi"),
        Some(Route::SearchQuery {
            query: "hi".to_string()
        })
    );
}

#[test]
fn unknown_host_and_foreign_scheme_yield_none() {
    let h = harness(false);
    assert_eq!(h.builder.make_route("firefox://launch-rockets"), None);
    assert_eq!(h.builder.make_route("otherapp://open-url?url=https://a.b"), None);
    assert_eq!(h.builder.make_route("ftp://example.com/file"), None);
    assert!(h.telemetry.is_empty());
}

#[test]
fn malformed_input_yields_none() {
    let h = harness(false);
    for input in ["", "   ", "not a url", "firefox:open-url", "://missing-scheme"] {
        assert_eq!(h.builder.make_route(input), None, "{input:?}");
    }
    assert_eq!(h.signal.0.load(Ordering::Relaxed), 0);
}

#[test]
fn web_scheme_opens_as_default_browser() {
    let h = harness(true);
    let input = "https://www.example.com/page?private=false";
    assert_eq!(
        h.builder.make_route(input),
        Some(Route::Search {
            url: Some(url(input)),
            is_private: true
        })
    );
    assert_eq!(h.signal.0.load(Ordering::Relaxed), 1);
    let events = h.telemetry.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].object, EventObject::AsDefaultBrowser);
}

#[test]
fn widget_open_url_records_telemetry() {
    let h = harness(false);
    let route = h.builder.make_route(
        "firefox://widget-medium-quicklink-open-url?url=https://example.com&private=true",
    );
    assert_eq!(
        route,
        Some(Route::Search {
            url: Some(url("https://example.com")),
            is_private: true
        })
    );
    let events = h.telemetry.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].object, EventObject::MediumQuickActionPrivateSearch);
}

#[test]
fn close_private_tabs_action() {
    let h = harness(false);
    for host in [
        "widget-small-quicklink-close-private-tabs",
        "widget-medium-quicklink-close-private-tabs",
    ] {
        assert_eq!(
            h.builder.make_route(&format!("firefox://{host}")),
            Some(Route::Action {
                action: AppAction::ClosePrivateTabs
            })
        );
    }
    let objects: Vec<_> = h.telemetry.events().into_iter().map(|e| e.object).collect();
    assert_eq!(
        objects,
        vec![
            EventObject::SmallQuickActionClosePrivate,
            EventObject::MediumQuickActionClosePrivate
        ]
    );
}

#[test]
fn open_copied_reads_pasteboard() {
    let builder = RouteBuilder::new(["firefox"], || false)
        .with_telemetry(Arc::new(()))
        .with_pasteboard(Arc::new(StaticPasteboard::from_text("https://copied.example/")));
    assert_eq!(
        builder.make_route("firefox://widget-small-quicklink-open-copied?private=true"),
        Some(Route::Search {
            url: Some(url("https://copied.example/")),
            is_private: true
        })
    );

    let builder = RouteBuilder::new(["firefox"], || false)
        .with_pasteboard(Arc::new(StaticPasteboard::from_text("copied words")));
    assert_eq!(
        builder.make_route("firefox://widget-medium-quicklink-open-copied"),
        Some(Route::SearchQuery {
            query: "copied words".to_string()
        })
    );
}

#[test]
fn open_copied_records_close_private_telemetry() {
    let h = harness(false);
    h.builder.make_route("firefox://widget-small-quicklink-open-copied");
    h.builder.make_route("firefox://widget-medium-quicklink-open-copied");
    let objects: Vec<_> = h.telemetry.events().into_iter().map(|e| e.object).collect();
    assert_eq!(
        objects,
        vec![
            EventObject::SmallQuickActionClosePrivate,
            EventObject::MediumQuickActionClosePrivate
        ]
    );
}

#[test]
fn tabs_widget_uses_snapshot() {
    let mut tabs = HashMap::new();
    tabs.insert(
        "tab-1".to_string(),
        SimpleTab {
            title: Some("Example".to_string()),
            url: Some(url("https://example.com/")),
            last_used_time: Some(1),
            is_private: false,
        },
    );
    let builder = RouteBuilder::new(["firefox"], || true).with_tabs(Arc::new(tabs));

    assert_eq!(
        builder.make_route("firefox://widget-tabs-large-open-url?uuid=tab-1"),
        Some(Route::SearchUrl {
            url: Some(url("https://example.com/")),
            tab_id: "tab-1".to_string()
        })
    );
    // No uuid: blank regular tab even though the last mode was private.
    assert_eq!(
        builder.make_route("firefox://widget-tabs-medium-open-url"),
        Some(Route::Search {
            url: None,
            is_private: false
        })
    );
}

#[test]
fn resolver_consulted_only_when_flag_missing() {
    let asked = Arc::new(AtomicBool::new(false));
    let probe = asked.clone();
    let builder = RouteBuilder::new(["firefox"], move || {
        probe.store(true, Ordering::Relaxed);
        false
    });
    builder.make_route("firefox://open-url?private=true");
    assert!(!asked.load(Ordering::Relaxed));
    builder.make_route("firefox://open-url");
    assert!(asked.load(Ordering::Relaxed));
}

#[test]
fn classification_is_idempotent() {
    let h = harness(false);
    for input in [
        "firefox://open-url?url=https://example.com",
        "firefox://deep-link?url=settings/theme",
        "https://example.com/",
        "firefox://nope",
    ] {
        assert_eq!(h.builder.make_route(input), h.builder.make_route(input));
    }
}

#[test]
fn make_route_from_parsed_url() {
    let h = harness(false);
    assert_eq!(
        h.builder.make_route_from_url(&url("firefox://open-text?text=x")),
        Some(Route::SearchQuery {
            query: "x".to_string()
        })
    );
}

#[test]
fn builder_from_config_lowercases_schemes() {
    let cfg = LinkrouteConfig {
        app_schemes: vec!["Focus".to_string()],
        ..LinkrouteConfig::default()
    };
    let builder = RouteBuilder::from_config(&cfg, || false);
    assert_eq!(builder.app_schemes(), ["focus".to_string()]);
    assert!(builder.make_route("focus://open-text?text=a").is_some());
    assert!(builder.make_route("firefox://open-text?text=a").is_none());
}
