use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pharmacy_cart::{configure_tracing, infra::{get_config_settings, Cli}, run};
use tracing::error;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = get_config_settings().context("Could not read application configuration.")?;

    // _worker_guard is pulled back into the scope of main() to ensure all tracing events get
    // written to the log file when the program terminates, which is done when _worker_guard is
    // dropped.
    let _worker_guard = configure_tracing(&settings);

    match run(&settings, cli) {
        Ok(output) => {
            let rendered =
                serde_json::to_string_pretty(&output).context("Could not render output.")?;
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("pharmacy_cart: command failed with {e:?}");
            eprintln!("{e}");
            Ok(e.exit_code())
        }
    }
}
