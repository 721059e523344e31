use crate::domain::ServiceName;
use crate::domain::identities::validation::capitalize;

const GATEWAY_KEY_SUFFIX: &str = "GatewayApiUri";
const MICROSERVICES_KEY_SUFFIX: &str = "MicroservicesApiUri";

/// The pair of URI config keys a service is registered under.
///
/// Generated routers read `config.<gateway>` and `config.<microservices>`,
/// so these strings are the contract between the router files and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKeys {
    pub gateway: String,
    pub microservices: String,
}

impl ConfigKeys {
    /// Derive both keys from the service and optional sub-service.
    ///
    /// `billing` → `billingGatewayApiUri`; `billing` + `invoices` →
    /// `billingInvoicesGatewayApiUri`.
    pub fn derive(name: &ServiceName, sub_name: Option<&ServiceName>) -> Self {
        let stem = match sub_name {
            Some(sub) => format!("{}{}", name, capitalize(sub)),
            None => name.to_string(),
        };
        Self {
            gateway: format!("{stem}{GATEWAY_KEY_SUFFIX}"),
            microservices: format!("{stem}{MICROSERVICES_KEY_SUFFIX}"),
        }
    }
}
