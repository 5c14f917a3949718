//! Binary entry point for `pluck`.
//!
//! Argument parsing and process exit live here; everything else is in the
//! library so the core run can be tested without terminating a process.

use std::process::ExitCode;

use clap::Parser;

use pluck::cli::Cli;
use pluck::logging::Logger;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let log = Logger::new(args.verbose);

    log.info("Using:");
    log.info(&format!(" - Manifest: {}", args.manifest.display()));
    log.info(&format!(" - Source:   {}", args.source.display()));
    log.info(&format!(" - Dest:     {}", args.dest.display()));

    match pluck::run(&args.manifest, &args.source, &args.dest, &log) {
        Ok(report) => {
            report.print(&log);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
