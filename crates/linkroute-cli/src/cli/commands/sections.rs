//! `linkroute sections` – list deep-link targets.

use anyhow::Result;
use linkroute_core::deeplink::DeeplinkPath;
use linkroute_core::route::{DefaultBrowserSection, HomepanelSection, SettingsSection};

pub fn run_sections() -> Result<()> {
    for path in DeeplinkPath::ALL {
        let sections: Vec<&str> = match path {
            DeeplinkPath::Settings => SettingsSection::ALL.iter().map(|s| s.as_str()).collect(),
            DeeplinkPath::Homepanel => HomepanelSection::ALL.iter().map(|s| s.as_str()).collect(),
            DeeplinkPath::DefaultBrowser => {
                DefaultBrowserSection::ALL.iter().map(|s| s.as_str()).collect()
            }
        };
        for section in sections {
            println!("{}/{}", path.as_str(), section);
        }
    }
    Ok(())
}
