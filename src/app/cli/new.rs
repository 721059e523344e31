//! New command: collect service input and scaffold it.

use dialoguer::{Confirm, Error as DialoguerError, Input};
use std::io::ErrorKind;

use crate::app::api::{ScaffoldInput, ScaffoldOptions, ScaffoldOutcome};
use crate::domain::{AppError, EntryChange};

/// Arguments accepted on the command line; anything missing is prompted for.
#[derive(Debug, Default, clap::Args)]
pub struct NewArgs {
    /// Service name (e.g. "billing" or "prior auth")
    #[arg(short, long)]
    pub name: Option<String>,
    /// Sub-service name, nested under the service
    #[arg(short, long)]
    pub sub: Option<String>,
    /// Gateway API URL
    #[arg(short, long)]
    pub gateway_url: Option<String>,
    /// Microservices API URL
    #[arg(short, long)]
    pub microservice_url: Option<String>,
    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_new(args: NewArgs) -> Result<(), AppError> {
    let dry_run = args.dry_run;
    let Some(input) = resolve_inputs(args, &mut DialoguerPrompter)? else {
        return Ok(());
    };

    let outcome = crate::app::api::scaffold(&input, ScaffoldOptions { dry_run })?;
    report(&outcome, &input);
    Ok(())
}

/// Source of answers for fields missing from the command line.
///
/// `Ok(None)` means the operator cancelled.
trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, AppError>;
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, AppError>;
}

struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        match Input::<String>::new().with_prompt(prompt).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::config_error(format!("Failed to read {}: {}", prompt, err))),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, AppError> {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::config_error(format!("Failed to read answer: {}", err))),
        }
    }
}

fn resolve_inputs<P: Prompter>(
    args: NewArgs,
    prompter: &mut P,
) -> Result<Option<ScaffoldInput>, AppError> {
    let prompted_name = args.name.is_none();

    let name = match args.name {
        Some(value) => value,
        None => match prompter.text("Service name")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let sub_name = match args.sub {
        Some(value) => Some(value),
        None if prompted_name => {
            match prompter.confirm("Create a sub-service inside this service?")? {
                Some(true) => match prompter.text("Sub-service name")? {
                    Some(value) => Some(value),
                    None => return Ok(None),
                },
                Some(false) => None,
                None => return Ok(None),
            }
        }
        None => None,
    };

    let gateway_url = match args.gateway_url {
        Some(value) => value,
        None => match prompter.text("Gateway API URL")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let microservices_url = match args.microservice_url {
        Some(value) => value,
        None => match prompter.text("Microservices API URL")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    Ok(Some(ScaffoldInput { name, sub_name, gateway_url, microservices_url }))
}

fn report(outcome: &ScaffoldOutcome, input: &ScaffoldInput) {
    let (dir_verb, file_verb, config_verb) = if outcome.dry_run {
        ("Would create", "Would write", "Would update")
    } else {
        ("Created", "Wrote", "Updated")
    };

    for dir in &outcome.created_dirs {
        println!("✅ {} folder {}/", dir_verb, dir);
    }
    for path in &outcome.artifacts {
        println!("✅ {} {}", file_verb, path);
    }

    for (key, change, url) in [
        (&outcome.keys.gateway, &outcome.merge.gateway, input.gateway_url.trim()),
        (
            &outcome.keys.microservices,
            &outcome.merge.microservices,
            input.microservices_url.trim(),
        ),
    ] {
        if let EntryChange::Replaced { previous } = change {
            println!("⚠️  {} was {}; now {} (last write wins)", key, previous, url);
        }
    }

    println!(
        "✅ {} {} with {} and {} for '{}'",
        config_verb,
        outcome.uri_config_path,
        outcome.keys.gateway,
        outcome.keys.microservices,
        outcome.spec
    );
}
