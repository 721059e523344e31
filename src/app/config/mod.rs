//! Repository-backed loaders for tool settings and the URI config store.
//!
//! Pure parsing lives in `domain::settings` and `domain::uri_config::parse`.

mod load_settings;
mod uri_config_store;

pub use load_settings::load_settings;
pub use uri_config_store::{load_uri_config, persist_uri_config};
