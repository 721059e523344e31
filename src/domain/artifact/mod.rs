pub mod layout;

use crate::domain::{ConfigKeys, ServiceSpec};

/// Router descriptor fields that are identical for every generated service.
///
/// The proxy runtime registers all generated routers the same way, so these
/// never vary with the service.
pub mod router_shape {
    pub const PROXY_TYPE: &str = "http";
    pub const METHODS: &[&str] = &["GET"];
    /// Shared downstream target, read from the config module.
    pub const TARGET_KEY: &str = "commonServicesMicroServicesBaseUrL";
    /// Import specifier of the shared config module, as seen from `routes/`.
    pub const CONFIG_IMPORT: &str = "../../config";
}

/// The three files generated for every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    RequestHook,
    ResponseHook,
    Router,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] =
        [ArtifactKind::RequestHook, ArtifactKind::ResponseHook, ArtifactKind::Router];

    /// Name of the embedded template that renders this artifact.
    pub fn template_name(self) -> &'static str {
        match self {
            ArtifactKind::RequestHook => "request_hook.js.j2",
            ArtifactKind::ResponseHook => "response_hook.js.j2",
            ArtifactKind::Router => "router.js.j2",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ArtifactKind::RequestHook => "request hook",
            ArtifactKind::ResponseHook => "response hook",
            ArtifactKind::Router => "router",
        }
    }

    /// Module path (source-root relative, no extension) for a service.
    pub fn module_path(self, spec: &ServiceSpec) -> String {
        match self {
            ArtifactKind::RequestHook => layout::request_hook_module(spec),
            ArtifactKind::ResponseHook => layout::response_hook_module(spec),
            ArtifactKind::Router => layout::router_module(spec),
        }
    }
}

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    /// Source-root relative module path, e.g. `hooks/billing/billingRequest`.
    pub module_path: String,
    pub content: String,
}

impl GeneratedArtifact {
    /// Source-root relative file path, e.g. `hooks/billing/billingRequest.js`.
    pub fn relative_path(&self) -> String {
        layout::file_path(&self.module_path)
    }

    pub fn file_name(&self) -> String {
        layout::file_name(&self.module_path)
    }
}

/// Values every artifact template is rendered with.
///
/// File names, imports and config references all derive from one
/// `ServiceSpec` and its `ConfigKeys`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtifactContext {
    pub gateway_key: String,
    pub microservices_key: String,
    pub request_binding: String,
    pub response_binding: String,
    pub route_binding: String,
    pub request_file: String,
    pub response_file: String,
    pub router_file: String,
    pub request_import: String,
    pub response_import: String,
    pub generic_request_import: String,
    pub generic_response_import: String,
    pub config_import: &'static str,
    pub proxy_type: &'static str,
    pub methods: &'static [&'static str],
    pub target_key: &'static str,
}

impl ArtifactContext {
    pub fn new(spec: &ServiceSpec, keys: &ConfigKeys) -> Self {
        let request_module = layout::request_hook_module(spec);
        let response_module = layout::response_hook_module(spec);
        let router_module = layout::router_module(spec);
        let generic = |module: &str| format!("{}/{}", layout::HOOKS_DIR, module);

        Self {
            gateway_key: keys.gateway.clone(),
            microservices_key: keys.microservices.clone(),
            request_binding: layout::request_binding(spec),
            response_binding: layout::response_binding(spec),
            route_binding: layout::route_binding(spec),
            request_file: layout::file_name(&request_module),
            response_file: layout::file_name(&response_module),
            router_file: layout::file_name(&router_module),
            request_import: layout::relative_import(&router_module, &request_module),
            response_import: layout::relative_import(&router_module, &response_module),
            generic_request_import: layout::relative_import(
                &request_module,
                &generic(layout::GENERIC_REQUEST_MODULE),
            ),
            generic_response_import: layout::relative_import(
                &response_module,
                &generic(layout::GENERIC_RESPONSE_MODULE),
            ),
            config_import: router_shape::CONFIG_IMPORT,
            proxy_type: router_shape::PROXY_TYPE,
            methods: router_shape::METHODS,
            target_key: router_shape::TARGET_KEY,
        }
    }
}
