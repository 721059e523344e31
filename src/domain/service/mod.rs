//! Resolved service identity for one scaffold operation.

mod keys;

pub use keys::ConfigKeys;

use crate::domain::ServiceName;

/// A service (and optional sub-service) to scaffold.
///
/// The leaf name drives file and binding names; the full pair drives
/// config key naming and hook directory nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    name: ServiceName,
    sub_name: Option<ServiceName>,
}

impl ServiceSpec {
    pub fn new(name: ServiceName, sub_name: Option<ServiceName>) -> Self {
        Self { name, sub_name }
    }

    /// Normalize raw operator input into a spec.
    ///
    /// A sub-service given as blank text is treated as absent.
    pub fn from_raw(name: &str, sub_name: Option<&str>) -> Result<Self, crate::domain::AppError> {
        let name = ServiceName::normalize(name)?;
        let sub_name = match sub_name.map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) => Some(ServiceName::normalize(raw)?),
            None => None,
        };
        Ok(Self::new(name, sub_name))
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    pub fn sub_name(&self) -> Option<&ServiceName> {
        self.sub_name.as_ref()
    }

    /// Sub-service if present, else the service.
    pub fn effective_name(&self) -> &ServiceName {
        self.sub_name.as_ref().unwrap_or(&self.name)
    }

    /// Directory segments under `hooks/`: `name` or `name/sub`.
    pub fn namespace(&self) -> Vec<&str> {
        let mut segments = vec![self.name.as_str()];
        if let Some(sub) = &self.sub_name {
            segments.push(sub.as_str());
        }
        segments
    }

    pub fn keys(&self) -> ConfigKeys {
        ConfigKeys::derive(&self.name, self.sub_name.as_ref())
    }
}

impl std::fmt::Display for ServiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.namespace().join("/"))
    }
}
