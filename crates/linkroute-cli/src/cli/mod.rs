//! CLI for the linkroute deeplink classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linkroute_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_hosts, run_route, run_sections, run_update_check, RouteArgs};

/// Top-level CLI for linkroute.
#[derive(Debug, Parser)]
#[command(name = "linkroute")]
#[command(about = "linkroute: classify browser deeplinks into app routes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL and print the resulting route.
    Route {
        /// URL to classify (app scheme or http/https).
        url: String,

        /// Browsing mode to assume when the URL has no `private` flag.
        #[arg(long, value_name = "BOOL")]
        private: Option<bool>,

        /// Pretend the clipboard holds this text (for open-copied widgets).
        #[arg(long, value_name = "TEXT")]
        clipboard: Option<String>,

        /// Open-tabs JSON snapshot (overrides `tabs_snapshot` in config).
        #[arg(long, value_name = "PATH")]
        tabs: Option<PathBuf>,

        /// Also print the telemetry events the classification emitted.
        #[arg(long)]
        events: bool,
    },

    /// List the host tokens recognised on the app scheme.
    Hosts,

    /// List `deep-link` targets (`path/section`).
    Sections,

    /// Decide whether the update onboarding sheet should be shown.
    UpdateCheck {
        /// Show regardless of version history.
        #[arg(long)]
        force: bool,

        /// Version being launched (defaults to this build's version).
        #[arg(long, value_name = "VERSION")]
        app_version: Option<String>,

        /// Treat the user as signed in with a sync account.
        #[arg(long)]
        has_sync_account: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions must not touch the config dir.
        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Route {
                url,
                private,
                clipboard,
                tabs,
                events,
            } => run_route(
                &cfg,
                RouteArgs {
                    url,
                    private,
                    clipboard,
                    tabs,
                    events,
                },
            )?,
            CliCommand::Hosts => run_hosts(&cfg)?,
            CliCommand::Sections => run_sections()?,
            CliCommand::UpdateCheck {
                force,
                app_version,
                has_sync_account,
            } => run_update_check(&cfg, force, app_version.as_deref(), has_sync_account)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
