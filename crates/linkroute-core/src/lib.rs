pub mod config;
pub mod logging;

pub mod collaborators;
pub mod deeplink;
pub mod notification_surface;
pub mod onboarding;
pub mod route;
pub mod route_builder;
pub mod telemetry;
pub mod url_scanner;

pub use route::Route;
pub use route_builder::RouteBuilder;
