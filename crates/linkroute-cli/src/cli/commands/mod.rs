//! CLI command handlers, one per file.

mod completions;
mod hosts;
mod route;
mod sections;
mod update_check;

pub use completions::run_completions;
pub use hosts::run_hosts;
pub use route::{run_route, RouteArgs};
pub use sections::run_sections;
pub use update_check::run_update_check;
