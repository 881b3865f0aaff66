use anyhow::Result;
use clap::Parser;

mod cmd;
mod discord;
mod utils;

use cmd::RegisterArgs;

/// slash-register - register one Discord slash command using the REST API.
///
/// Usage:
///   slash-register --app-id <ID> --token <TOKEN> [--guild-id <ID>] \
///     --name <NAME> --description <TEXT> [--option name:type:required:description ...] [--dry-run]
///
/// Option types:
///   string integer boolean user channel role mentionable number
///
/// Exit codes:
///   0  success (including --dry-run)
///   1  HTTP error response or network failure
///   2  usage error (missing flag, bad --option, bad --options-file / --api-base)
///
/// Examples:
///   slash-register --app-id 123 --token "$BOT_TOKEN" --guild-id 456 \
///     --name verify --description "Verify your registration." \
///     --option "email:string:false:Your registration email."
///   slash-register --app-id 123 --token x --name ping --description Ping --dry-run
#[derive(Parser, Debug)]
#[command(
    name = "slash-register",
    version,
    author,
    about = "Register one Discord slash command using the REST API."
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all non-error diagnostics
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    register: RegisterArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let registration = match cmd::prepare(&cli.register) {
        Ok(r) => r,
        Err(e) => {
            log_error!("{e:#}");
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = cmd::execute_register(
        registration,
        &cli.register.token,
        cli.register.dry_run,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
