use crate::output::{print_json, print_table};
use anyhow::Context;
use carrental_core::config::{Config, WarnLevel};
use carrental_core::form::FormSubmission;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let submission = FormSubmission::from_page(&config.page());

    if json {
        let value = serde_json::json!({
            "config": config,
            "submission": {
                "method": submission.method,
                "url": submission.navigation_url(),
            },
        });
        return print_json(&value);
    }

    print!("{}", serde_yaml::to_string(&config)?);
    println!(
        "# button submits: {} {}",
        submission.method,
        submission.navigation_url()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        let rows = warnings
            .iter()
            .map(|w| vec![w.level.as_str().to_string(), w.message.clone()])
            .collect();
        print_table(&["LEVEL", "MESSAGE"], rows);
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
