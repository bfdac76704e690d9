//! `linkroute route <url>` – classify a URL.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use linkroute_core::collaborators::{
    DefaultBrowserSignal, FileTabSnapshot, StaticPasteboard, TabSnapshot,
};
use linkroute_core::config::LinkrouteConfig;
use linkroute_core::onboarding::{FilePrefs, Prefs, LAST_MODE_PRIVATE};
use linkroute_core::telemetry::{MemoryTelemetry, TelemetrySink, TracingTelemetry};
use linkroute_core::url_scanner::parse_bool;
use linkroute_core::RouteBuilder;

#[derive(Debug)]
pub struct RouteArgs {
    pub url: String,
    pub private: Option<bool>,
    pub clipboard: Option<String>,
    pub tabs: Option<PathBuf>,
    pub events: bool,
}

/// Logs when a web link was handed to us as the default browser.
struct LogDefaultBrowser;

impl DefaultBrowserSignal for LogDefaultBrowser {
    fn opened_as_default_browser(&self) {
        tracing::info!("opened as default browser");
    }
}

/// Last browsing mode: explicit flag, then saved prefs, then config default.
fn last_mode_private(cfg: &LinkrouteConfig, explicit: Option<bool>) -> bool {
    if let Some(private) = explicit {
        return private;
    }
    let saved = match FilePrefs::open_default() {
        Ok(prefs) => prefs
            .string_for_key(LAST_MODE_PRIVATE)
            .and_then(|v| parse_bool(&v)),
        Err(e) => {
            tracing::warn!("prefs unavailable: {:#}", e);
            None
        }
    };
    saved.unwrap_or(cfg.private_by_default)
}

pub fn run_route(cfg: &LinkrouteConfig, args: RouteArgs) -> Result<()> {
    let last_private = last_mode_private(cfg, args.private);

    let memory = Arc::new(MemoryTelemetry::new());
    let telemetry: Arc<dyn TelemetrySink> = if args.events {
        memory.clone()
    } else {
        Arc::new(TracingTelemetry)
    };

    let pasteboard = args
        .clipboard
        .map(StaticPasteboard::from_text)
        .unwrap_or_default();

    let tabs: Arc<dyn TabSnapshot> = match args.tabs.or_else(|| cfg.tabs_snapshot.clone()) {
        Some(path) => Arc::new(FileTabSnapshot::new(path)),
        None => Arc::new(()),
    };

    let builder = RouteBuilder::from_config(cfg, move || last_private)
        .with_telemetry(telemetry)
        .with_pasteboard(Arc::new(pasteboard))
        .with_tabs(tabs)
        .with_default_browser_signal(Arc::new(LogDefaultBrowser));

    match builder.make_route(&args.url) {
        Some(route) => println!("{}", serde_json::to_string_pretty(&route)?),
        None => println!("no route for {}", args.url),
    }

    if args.events {
        for event in memory.events() {
            println!("event: {}", serde_json::to_string(&event)?);
        }
    }

    Ok(())
}
