//! Contact book command-line entry point.
//!
//! # Responsibility
//! - Parse startup options and optionally enable file logging.
//! - Own the single repository value for the process lifetime.

use clap::Parser;
use contactbook_core::{
    core_version, default_log_level, init_logging, ContactRepository, FileContactStore,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

mod menu;

#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "Personal contact book")]
struct Args {
    /// Backing store file, one `name;phone;email` record per line.
    #[arg(short, long, default_value = "contacts.txt")]
    file: PathBuf,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        if let Err(err) = init_logging(&args.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    let (mut repo, report) = ContactRepository::open(FileContactStore::new(&args.file));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());

    let result = menu::report_load(&report, &mut output)
        .and_then(|()| menu::run_menu(&mut repo, &mut input, &mut output));

    match result {
        Ok(()) => {
            log::info!("event=app_exit module=cli status=ok count={}", repo.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=app_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
