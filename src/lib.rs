//! routegen: scaffold reverse-proxy route hooks, routers, and the shared
//! gateway URI config.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, ScaffoldInput, ScaffoldOptions, ScaffoldOutcome, UriConfigListing, list, list_at,
    scaffold, scaffold_at,
};
pub use domain::{ConfigKeys, EntryChange, MergeOutcome, ServiceName, ServiceSpec, UriPair};
