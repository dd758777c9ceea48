//! Delegate command - relay a pip verb with the configured index injected

use colored::Colorize;
use std::process::Command;

use crate::config::ConfigStore;
use crate::pip;

const PIP_NOT_FOUND: &str = "Error: pip not found. Make sure Python is installed correctly.";

pub fn run(store: &ConfigStore, verb: &str, passthrough: &[String]) -> anyhow::Result<()> {
    let pref = store.load();

    let Some(pip_bin) = pip::find_pip() else {
        eprintln!("{}", PIP_NOT_FOUND.red());
        std::process::exit(1);
    };

    let args = pip::build_args(verb, &pref.index_url, passthrough);

    println!("Aetos: using index {}", pref.index_url.cyan());
    println!(
        "{}",
        format!("Running: {} {}", pip_bin.display(), args.join(" ")).dimmed()
    );

    tracing::debug!("spawning {} {:?}", pip_bin.display(), args);

    // Blocks until pip terminates; no timeout by design.
    let status = Command::new(&pip_bin)
        .args(&args)
        .stdin(std::process::Stdio::inherit())
        .stdout(std::process::Stdio::inherit())
        .stderr(std::process::Stdio::inherit())
        .status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => {
            // Relay pip's own exit code; fall back to 1 on signal termination.
            let code = s.code().unwrap_or(1);
            eprintln!("{}", format!("pip exited with status {code}").red());
            std::process::exit(code);
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("{}", PIP_NOT_FOUND.red());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", format!("Error running pip: {e}").red());
            std::process::exit(1);
        }
    }
}
