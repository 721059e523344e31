//! List command implementation.

use crate::domain::AppError;

const MISSING: &str = "-";

pub fn run_list() -> Result<(), AppError> {
    let listing = crate::app::api::list()?;

    if !listing.exists {
        println!("No URI config at {} yet. Run 'routegen new' first.", listing.uri_config_path);
        return Ok(());
    }
    if listing.pairs.is_empty() {
        println!("{} has no entries", listing.uri_config_path);
        return Ok(());
    }

    println!("{}:", listing.uri_config_path);
    for pair in &listing.pairs {
        let (gateway_key, gateway_url) = split(&pair.gateway);
        let (micro_key, micro_url) = split(&pair.microservices);
        println!("  • {} = {}", gateway_key, gateway_url);
        println!("    {} = {}", micro_key, micro_url);
    }
    Ok(())
}

fn split(entry: &Option<(String, String)>) -> (&str, &str) {
    match entry {
        Some((key, url)) => (key.as_str(), url.as_str()),
        None => (MISSING, MISSING),
    }
}
