//! `linkroute hosts` – list recognised host tokens.

use anyhow::Result;
use linkroute_core::config::LinkrouteConfig;
use linkroute_core::deeplink::HostToken;

pub fn run_hosts(cfg: &LinkrouteConfig) -> Result<()> {
    println!("schemes: {}", cfg.app_schemes.join(", "));
    println!("{:<45} {}", "HOST", "SOURCE");
    for token in HostToken::ALL {
        let source = if token.is_widget() { "widget" } else { "app" };
        println!("{:<45} {}", token.as_str(), source);
    }
    Ok(())
}
