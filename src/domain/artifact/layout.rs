//! Source-tree layout shared by artifact paths and generated imports.
//!
//! Module paths are relative to the source root and carry no extension,
//! which is the form the generated `import` statements use.

use crate::domain::ServiceSpec;

pub const HOOKS_DIR: &str = "hooks";
pub const ROUTES_DIR: &str = "routes";
pub const SOURCE_EXTENSION: &str = "js";

/// Generic delegate modules, living directly under `hooks/`.
pub const GENERIC_REQUEST_MODULE: &str = "genericRequest";
pub const GENERIC_RESPONSE_MODULE: &str = "genericResponse";

/// `hooks/<name>[/<sub>]`
pub fn hook_dir(spec: &ServiceSpec) -> String {
    let mut segments = vec![HOOKS_DIR];
    segments.extend(spec.namespace());
    segments.join("/")
}

/// `hooks/<name>[/<sub>]/<leaf>Request`
pub fn request_hook_module(spec: &ServiceSpec) -> String {
    format!("{}/{}", hook_dir(spec), request_binding(spec))
}

/// `hooks/<name>[/<sub>]/<leaf>Response`
pub fn response_hook_module(spec: &ServiceSpec) -> String {
    format!("{}/{}", hook_dir(spec), response_binding(spec))
}

/// `routes/<leaf>Router`
pub fn router_module(spec: &ServiceSpec) -> String {
    format!("{}/{}Router", ROUTES_DIR, spec.effective_name())
}

pub fn request_binding(spec: &ServiceSpec) -> String {
    format!("{}Request", spec.effective_name())
}

pub fn response_binding(spec: &ServiceSpec) -> String {
    format!("{}Response", spec.effective_name())
}

pub fn route_binding(spec: &ServiceSpec) -> String {
    format!("{}Route", spec.effective_name())
}

/// Append the source extension to a module path.
pub fn file_path(module: &str) -> String {
    format!("{module}.{SOURCE_EXTENSION}")
}

/// Final path component with extension, e.g. `billingRouter.js`.
pub fn file_name(module: &str) -> String {
    let stem = module.rsplit('/').next().unwrap_or(module);
    file_path(stem)
}

/// Import specifier for `target` as seen from a file at module path `from`.
///
/// Both paths are source-root relative. `from = hooks/billing/invoices/x`,
/// `target = hooks/genericRequest` gives `../../genericRequest`.
pub fn relative_import(from: &str, target: &str) -> String {
    let from_dirs: Vec<&str> = from.split('/').collect();
    let from_dirs = &from_dirs[..from_dirs.len().saturating_sub(1)];
    let target_parts: Vec<&str> = target.split('/').collect();

    let common = from_dirs.iter().zip(&target_parts).take_while(|(a, b)| a == b).count();
    let ups = from_dirs.len() - common;

    let mut parts: Vec<&str> = vec![".."; ups];
    parts.extend(&target_parts[common..]);
    let joined = parts.join("/");
    if ups == 0 { format!("./{joined}") } else { joined }
}
