//! `xua` command
//!
//! Parses one X-User-Agent identity string and prints its fields together with
//! the re-formatted header value.
//!
//! ```bash
//! xua "jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)"
//! XUA_OS_FIELD=combined xua --output json "App/1.0 (PC, Windows 10 Pro, Other)"
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

mod cli;
mod logging;
mod output;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    let grammar = cli.grammar();
    debug!(?grammar, "parsing identity string");

    let ua = match grammar.parse(&cli.user_agent) {
        Ok(ua) => ua,
        Err(e) => {
            error!(reason = %e.reason(), "{e}");
            return ExitCode::FAILURE;
        }
    };

    match output::render(&ua, grammar.trailing, cli.output) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to render output: {e}");
            ExitCode::FAILURE
        }
    }
}
