use indexmap::IndexMap;

use super::UriConfig;
use crate::domain::ConfigKeys;

/// What a merge did to one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryChange {
    Inserted,
    Unchanged,
    /// Last write wins: the key existed with a different URL.
    Replaced { previous: String },
}

/// Result of merging one service into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub gateway: EntryChange,
    pub microservices: EntryChange,
}

impl UriConfig {
    /// Insert or overwrite the service's gateway and microservices URLs.
    ///
    /// Every other entry is preserved. An existing key keeps its position and
    /// takes the new URL (last write wins); a new key is appended. Merging the
    /// same pair twice leaves the store unchanged the second time.
    pub fn merge(
        &mut self,
        keys: &ConfigKeys,
        gateway_url: &str,
        microservices_url: &str,
    ) -> MergeOutcome {
        MergeOutcome {
            gateway: upsert(&mut self.gateway_api_uri, &keys.gateway, gateway_url),
            microservices: upsert(
                &mut self.microservices_api_uri,
                &keys.microservices,
                microservices_url,
            ),
        }
    }
}

fn upsert(map: &mut IndexMap<String, String>, key: &str, url: &str) -> EntryChange {
    match map.insert(key.to_string(), url.to_string()) {
        None => EntryChange::Inserted,
        Some(previous) if previous == url => EntryChange::Unchanged,
        Some(previous) => EntryChange::Replaced { previous },
    }
}
