use anyhow::Context as _;
use bal::error::LauncherError;
use bal::exit_codes::FAILURE;
use bal::launcher::{Context, Launcher};
use bal::logging;
use bal_shim::ProcessDelegate;
use std::ffi::OsString;
use std::io::Write;
use std::process;

fn main() {
    logging::init();

    let code = match try_main() {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            FAILURE
        }
    };

    let _ = std::io::stdout().flush();
    process::exit(code);
}

fn try_main() -> anyhow::Result<i32> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let ctx = Context::from_env().context("failed to resolve the installation")?;

    let mut stdout = std::io::stdout().lock();
    let mut launcher = Launcher::new(ctx, ProcessDelegate);
    Ok(launcher.dispatch(&args, &mut stdout)?)
}

/// Only usage errors go to stdout. Resolution failures such as a missing
/// distribution or completion script are diagnostics and stay on stderr.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<LauncherError>() {
        Some(usage) if usage.is_usage() => println!("{usage}"),
        _ => eprintln!("{err:#}"),
    }
}
