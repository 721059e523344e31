//! Gateway/microservices URI mapping shared by every generated router.

mod merge;
mod pairs;
pub mod parse;

pub use merge::{EntryChange, MergeOutcome};
pub use pairs::UriPair;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default store location, relative to the source root.
pub const DEFAULT_URI_CONFIG_PATH: &str = "config/appUriConfig.json";

/// The persisted URI config document.
///
/// Both mappings keep insertion order. Either may be absent on disk, which
/// older tool versions produced; it loads as empty. Top-level entries other
/// than the two mappings are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriConfig {
    #[serde(rename = "gatewayApiUri", default)]
    pub gateway_api_uri: IndexMap<String, String>,

    #[serde(rename = "microservicesApiUri", default)]
    pub microservices_api_uri: IndexMap<String, String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UriConfig {
    pub fn is_empty(&self) -> bool {
        self.gateway_api_uri.is_empty()
            && self.microservices_api_uri.is_empty()
            && self.extra.is_empty()
    }
}
