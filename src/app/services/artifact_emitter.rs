//! Render the three artifacts for a service.

use crate::domain::{
    AppError, ArtifactContext, ArtifactKind, ConfigKeys, GeneratedArtifact, ServiceSpec,
};
use crate::ports::ArtifactTemplates;

/// Render request hook, response hook and router for `spec`.
///
/// Paths, imports and config references all derive from one
/// `ArtifactContext`, so identical input gives byte-identical output.
pub fn emit<T: ArtifactTemplates>(
    templates: &T,
    spec: &ServiceSpec,
    keys: &ConfigKeys,
) -> Result<[GeneratedArtifact; 3], AppError> {
    let context = ArtifactContext::new(spec, keys);
    let render = |kind: ArtifactKind| -> Result<GeneratedArtifact, AppError> {
        Ok(GeneratedArtifact {
            kind,
            module_path: kind.module_path(spec),
            content: templates.render(kind, &context)?,
        })
    };

    Ok([
        render(ArtifactKind::RequestHook)?,
        render(ArtifactKind::ResponseHook)?,
        render(ArtifactKind::Router)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedArtifactTemplates;
    use crate::domain::artifact::layout;

    fn emit_for(name: &str, sub: Option<&str>) -> [GeneratedArtifact; 3] {
        let spec = ServiceSpec::from_raw(name, sub).unwrap();
        let templates = EmbeddedArtifactTemplates::new().unwrap();
        emit(&templates, &spec, &spec.keys()).unwrap()
    }

    #[test]
    fn billing_paths() {
        let [request, response, router] = emit_for("billing", None);
        assert_eq!(request.module_path, "hooks/billing/billingRequest");
        assert_eq!(response.module_path, "hooks/billing/billingResponse");
        assert_eq!(router.module_path, "routes/billingRouter");
        assert_eq!(request.relative_path(), "hooks/billing/billingRequest.js");
        assert_eq!(router.file_name(), "billingRouter.js");
    }

    #[test]
    fn router_references_both_keys() {
        let [_, _, router] = emit_for("billing", None);
        assert!(router.content.contains("prefix: config.billingGatewayApiUri,"));
        assert!(router.content.contains("prefixRewrite: config.billingMicroservicesApiUri,"));
    }

    #[test]
    fn sub_service_artifacts_use_leaf_name_and_full_keys() {
        let [request, response, router] = emit_for("billing", Some("invoices"));
        assert_eq!(request.module_path, "hooks/billing/invoices/invoicesRequest");
        assert_eq!(response.module_path, "hooks/billing/invoices/invoicesResponse");
        assert_eq!(router.module_path, "routes/invoicesRouter");
        assert!(router.content.contains("config.billingInvoicesGatewayApiUri"));
        assert!(router.content.contains("config.billingInvoicesMicroservicesApiUri"));
        assert!(router.content.contains("const invoicesRoute = {"));
    }

    #[test]
    fn router_imports_resolve_to_emitted_hooks() {
        let [request, response, router] = emit_for("prior auth", Some("claim status"));
        for hook in [&request, &response] {
            let import = layout::relative_import(&router.module_path, &hook.module_path);
            assert!(
                router.content.contains(&format!("from \"{}\";", import)),
                "router should import {}",
                import
            );
        }
    }

    #[test]
    fn emission_is_deterministic() {
        assert_eq!(emit_for("billing", Some("invoices")), emit_for("billing", Some("invoices")));
    }
}
