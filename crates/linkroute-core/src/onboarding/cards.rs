//! Onboarding information cards and their display models.

use serde::Serialize;

/// Every card the onboarding flows know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InformationCard {
    Welcome,
    SignSync,
    Notification,
    UpdateWelcome,
    UpdateSignSync,
}

impl InformationCard {
    /// Value reported as the `card-type` telemetry extra.
    pub fn telemetry_value(self) -> &'static str {
        match self {
            InformationCard::Welcome => "welcome",
            InformationCard::SignSync => "sign-to-sync",
            InformationCard::Notification => "notification",
            InformationCard::UpdateWelcome => "update-welcome",
            InformationCard::UpdateSignSync => "update-sign-to-sync",
        }
    }
}

/// Content of one card as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoModel {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: Option<&'static str>,
    pub a11y_id_root: &'static str,
}

/// Display model for the update flow. First-run cards have none.
pub fn update_info_model(card: InformationCard) -> Option<InfoModel> {
    match card {
        InformationCard::UpdateWelcome => Some(InfoModel {
            image: "onboarding-welcome-v106",
            title: "Welcome back to an independent internet",
            description: "Firefox puts people over profits and defends your privacy as you browse.",
            primary_action: "Get Started",
            secondary_action: None,
            a11y_id_root: "Upgrade.welcomeCard",
        }),
        InformationCard::UpdateSignSync => Some(InfoModel {
            image: "onboarding-sync-v106",
            title: "Switch your phone and computer",
            description: "Pick up where you left off with tabs from other devices now on your homepage.",
            primary_action: "Sign In",
            secondary_action: Some("Skip"),
            a11y_id_root: "Upgrade.signSyncCard",
        }),
        InformationCard::Welcome | InformationCard::SignSync | InformationCard::Notification => None,
    }
}
