//! Shared doubles for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use linkroute_core::collaborators::DefaultBrowserSignal;
use linkroute_core::telemetry::MemoryTelemetry;
use linkroute_core::RouteBuilder;

pub const SCHEME: &str = "firefox";

/// Private-mode switch the test can flip between classifications.
#[derive(Clone, Default)]
pub struct LastMode(Arc<AtomicBool>);

impl LastMode {
    pub fn set_private(&self, private: bool) {
        self.0.store(private, Ordering::SeqCst);
    }

    pub fn resolver(&self) -> impl Fn() -> bool + Send + Sync + 'static {
        let flag = self.0.clone();
        move || flag.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct DefaultBrowserCount(AtomicUsize);

impl DefaultBrowserCount {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl DefaultBrowserSignal for DefaultBrowserCount {
    fn opened_as_default_browser(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Setup {
    pub builder: RouteBuilder,
    pub mode: LastMode,
    pub telemetry: Arc<MemoryTelemetry>,
    pub default_browser: Arc<DefaultBrowserCount>,
}

pub fn setup() -> Setup {
    let mode = LastMode::default();
    let telemetry = Arc::new(MemoryTelemetry::new());
    let default_browser = Arc::new(DefaultBrowserCount::default());
    let builder = RouteBuilder::new([SCHEME], mode.resolver())
        .with_telemetry(telemetry.clone())
        .with_default_browser_signal(default_browser.clone());
    Setup {
        builder,
        mode,
        telemetry,
        default_browser,
    }
}
