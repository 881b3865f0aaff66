/*!
`register.rs`

Registration flow for the `slash-register` CLI:

  1. Collect options (options file first, then each --option in argument order)
  2. Build exactly one command payload
  3. Resolve the endpoint (guild-scoped when --guild-id is set, else global)
  4. Print "Target URL: <url>"
  5. Submit (or dry run) and return the exit code

`--option` strings are parsed by clap via `option::parse_option`, so a malformed
option never reaches this module.
*/

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use super::option::{CommandOption, parse_option};
use super::payload::{CommandPayload, load_options_file};
use super::submit::register_command;
use crate::discord::{build_url, build_url_with_base, parse_api_base};
use crate::{log_debug, log_trace};

/* -------------------------------------------------------------------------- */
/* Argument Struct                                                            */
/* -------------------------------------------------------------------------- */

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Discord application ID
    #[arg(long = "app-id", value_name = "ID")]
    pub app_id: String,

    /// Discord bot token
    #[arg(long, value_name = "TOKEN")]
    pub token: String,

    /// Optional guild ID. Omit for global command registration
    #[arg(long = "guild-id", value_name = "ID")]
    pub guild_id: Option<String>,

    /// Slash command name
    #[arg(long)]
    pub name: String,

    /// Slash command description
    #[arg(long)]
    pub description: String,

    /// Option in format name:type:required:description (repeatable)
    #[arg(
        long = "option",
        value_name = "NAME:TYPE:REQUIRED:DESCRIPTION",
        value_parser = parse_option
    )]
    pub options: Vec<CommandOption>,

    /// Load options from file (JSON or YAML array); entries precede --option values
    #[arg(long = "options-file", value_name = "PATH")]
    pub options_file: Option<String>,

    /// REST API root override (default: https://discord.com/api/v10)
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Print payload and skip API call
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/* -------------------------------------------------------------------------- */
/* Preparation                                                                */
/* -------------------------------------------------------------------------- */

/// A fully resolved registration request.
#[derive(Debug)]
pub struct Registration {
    pub url: String,
    pub batch: Vec<CommandPayload>,
}

/// Resolve arguments into endpoint + payload. Fails on a bad
/// `--api-base` or `--options-file` (usage-class errors).
pub fn prepare(args: &RegisterArgs) -> Result<Registration> {
    let mut options = match &args.options_file {
        Some(path) => load_options_file(path)?,
        None => Vec::new(),
    };
    options.extend(args.options.iter().cloned());
    log_debug!("{} option(s) collected", options.len());

    let batch = CommandPayload::new(&args.name, &args.description, options).into_batch();
    let guild_id = args.guild_id.as_deref();
    let url = match &args.api_base {
        Some(raw) => build_url_with_base(&parse_api_base(raw)?, &args.app_id, guild_id),
        None => build_url(&args.app_id, guild_id),
    };

    Ok(Registration { url, batch })
}

/* -------------------------------------------------------------------------- */
/* Public Entry Point                                                         */
/* -------------------------------------------------------------------------- */

/// Print the target, run the registration on the given writers and return the exit code.
pub fn execute_register<O: Write, E: Write>(
    registration: Registration,
    token: &str,
    dry_run: bool,
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    writeln!(out, "Target URL: {}", registration.url)?;
    log_trace!(
        "payload: {}",
        serde_json::to_string(&registration.batch).context("Failed to encode payload")?
    );

    let code = register_command(
        &registration.url,
        token,
        &registration.batch,
        dry_run,
        out,
        err,
    )?;
    out.flush()?;
    Ok(code)
}

/* -------------------------------------------------------------------------- */
/* Tests                                                                      */
/* -------------------------------------------------------------------------- */
