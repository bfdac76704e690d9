//! Update onboarding.
//!
//! Decides whether the "what's new" sheet is shown after an app update and
//! which cards it contains. Card rendering is left to the host.

mod cards;
mod prefs;
mod version;

pub use cards::{update_info_model, InfoModel, InformationCard};
pub use prefs::{FilePrefs, MemoryPrefs, Prefs, APP_VERSION_LATEST, LAST_MODE_PRIVATE};
pub use version::{is_major_version_update, major_version};

use std::sync::Arc;

use crate::telemetry::{EventCategory, EventMethod, EventObject, TelemetryEvent, TelemetrySink};

/// Telemetry extra naming the card a close button was tapped on.
pub const CARD_TYPE_EXTRA: &str = "card-type";

/// Reports whether the user is signed in with a syncable account.
pub trait SyncAccountProbe {
    fn has_sync_account(&self) -> bool;
}

impl<F: Fn() -> bool> SyncAccountProbe for F {
    fn has_sync_account(&self) -> bool {
        self()
    }
}

/// View model behind the update onboarding sheet.
pub struct UpdateViewModel<P: Prefs> {
    prefs: P,
    feature_enabled: bool,
    has_syncable_account: Option<bool>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl<P: Prefs> UpdateViewModel<P> {
    /// `feature_enabled` is the onboarding-upgrade feature flag.
    pub fn new(prefs: P, feature_enabled: bool, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            prefs,
            feature_enabled,
            has_syncable_account: None,
            telemetry,
        }
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn has_syncable_account(&self) -> Option<bool> {
        self.has_syncable_account
    }

    /// Asks `probe` for the account state and caches the answer.
    pub fn refresh_syncable_account(&mut self, probe: &dyn SyncAccountProbe) -> bool {
        let has_sync = probe.has_sync_account();
        self.has_syncable_account = Some(has_sync);
        has_sync
    }

    /// Signed-in users skip the sign-in card.
    pub fn enabled_cards(&self) -> Vec<InformationCard> {
        if self.has_syncable_account.unwrap_or(false) {
            vec![InformationCard::UpdateWelcome]
        } else {
            vec![InformationCard::UpdateWelcome, InformationCard::UpdateSignSync]
        }
    }

    pub fn should_show_single_card(&self) -> bool {
        self.enabled_cards().len() == 1
    }

    /// No version has ever been saved.
    pub fn is_fresh_install(&self) -> bool {
        self.prefs.string_for_key(APP_VERSION_LATEST).is_none()
    }

    pub fn should_show_feature(&self) -> bool {
        self.feature_enabled && !self.is_fresh_install()
    }

    /// Whether to present the sheet for `app_version`.
    ///
    /// Unless forced or still on the saved major version, `app_version` is
    /// recorded as the latest seen, so the sheet shows once per major update.
    pub fn should_show_update_sheet(&mut self, force: bool, app_version: &str) -> bool {
        if force {
            return true;
        }

        if !self.should_show_feature() {
            self.save_app_version(app_version);
            return false;
        }

        if self.is_fresh_install() {
            self.save_app_version(app_version);
            return false;
        }

        if self.is_major_version_update(app_version) {
            self.save_app_version(app_version);
            return true;
        }

        false
    }

    /// Saved version's major is lower than `app_version`'s.
    pub fn is_major_version_update(&self, app_version: &str) -> bool {
        match self.prefs.string_for_key(APP_VERSION_LATEST) {
            Some(saved) => is_major_version_update(&saved, app_version),
            None => false,
        }
    }

    pub fn position_for_card(&self, card: InformationCard) -> Option<usize> {
        self.enabled_cards().iter().position(|c| *c == card)
    }

    pub fn info_model(&self, card: InformationCard) -> Option<InfoModel> {
        update_info_model(card)
    }

    /// Records a close tap on the card at `index`; unknown indices are ignored.
    pub fn send_close_button_telemetry(&self, index: usize) {
        let Some(card) = self.enabled_cards().get(index).copied() else {
            tracing::debug!(index, "close tap on unknown onboarding card");
            return;
        };
        self.telemetry.record(
            TelemetryEvent::new(EventCategory::Action, EventMethod::Tap, EventObject::OnboardingClose)
                .with_extra(CARD_TYPE_EXTRA, card.telemetry_value()),
        );
    }

    fn save_app_version(&mut self, app_version: &str) {
        self.prefs.set_string(APP_VERSION_LATEST, app_version);
    }
}
