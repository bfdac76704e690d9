//! `linkroute update-check` – evaluate the update onboarding sheet.

use std::sync::Arc;

use anyhow::{Context, Result};
use linkroute_core::config::LinkrouteConfig;
use linkroute_core::onboarding::{FilePrefs, UpdateViewModel};
use linkroute_core::telemetry::TracingTelemetry;

pub fn run_update_check(
    cfg: &LinkrouteConfig,
    force: bool,
    app_version: Option<&str>,
    has_sync_account: bool,
) -> Result<()> {
    let prefs = FilePrefs::open_default()?;
    let app_version = app_version.unwrap_or(env!("CARGO_PKG_VERSION"));

    let mut vm = UpdateViewModel::new(prefs, cfg.onboarding_upgrade, Arc::new(TracingTelemetry));
    vm.refresh_syncable_account(&|| has_sync_account);

    let show = vm.should_show_update_sheet(force, app_version);
    // The saved version must reach disk before the decision is reported.
    vm.prefs().persist().context("saving onboarding state")?;

    if !show {
        println!("skip update sheet for {}", app_version);
        return Ok(());
    }

    println!("show update sheet for {}", app_version);
    for (position, card) in vm.enabled_cards().into_iter().enumerate() {
        if let Some(model) = vm.info_model(card) {
            println!("  {}. {} – {}", position + 1, model.title, model.primary_action);
        }
    }
    Ok(())
}
