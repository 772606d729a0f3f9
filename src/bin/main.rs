use colored::Colorize;
use ds_efficiency::{demos, logging, DemoConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn run() -> ds_efficiency::Result<()> {
    let config = DemoConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default config");
        DemoConfig::default()
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let reports = demos::run_all(&mut out, &config)?;
    out.flush()?;

    for report in &reports {
        tracing::debug!(demo = report.name, summary = %report.summary, "totals");
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
