//! Deeplink vocabulary: the host tokens the app answers to and the
//! categories a `deep-link` URL may point into.

mod host;
mod path;

pub use host::HostToken;
pub use path::DeeplinkPath;
