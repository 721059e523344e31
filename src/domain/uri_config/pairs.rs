use super::UriConfig;

/// Gateway/microservices key suffix pairs, current form first.
///
/// Older tool versions wrote `<name>GatewayUri` / `<name>MicroservicesUri`.
const SUFFIX_PAIRS: [(&str, &str); 2] =
    [("GatewayApiUri", "MicroservicesApiUri"), ("GatewayUri", "MicroservicesUri")];

/// One service's entries as found in the store.
///
/// Either side may be missing for entries written by older tool versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriPair {
    pub gateway: Option<(String, String)>,
    pub microservices: Option<(String, String)>,
}

impl UriConfig {
    /// Group entries by service, in gateway insertion order, followed by
    /// microservices entries that have no gateway partner.
    pub fn pairs(&self) -> Vec<UriPair> {
        let mut pairs = Vec::new();
        let mut paired_micro = Vec::new();

        for (key, url) in &self.gateway_api_uri {
            let micro = partner_key(key)
                .and_then(|k| self.microservices_api_uri.get_key_value(k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()));
            if let Some((k, _)) = &micro {
                paired_micro.push(k.clone());
            }
            pairs.push(UriPair { gateway: Some((key.clone(), url.clone())), microservices: micro });
        }

        for (key, url) in &self.microservices_api_uri {
            if !paired_micro.contains(key) {
                pairs.push(UriPair {
                    gateway: None,
                    microservices: Some((key.clone(), url.clone())),
                });
            }
        }

        pairs
    }
}

fn partner_key(gateway_key: &str) -> Option<String> {
    SUFFIX_PAIRS.iter().find_map(|(gateway_suffix, micro_suffix)| {
        gateway_key.strip_suffix(gateway_suffix).map(|stem| format!("{stem}{micro_suffix}"))
    })
}
