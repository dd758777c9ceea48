//! Config command - show, set, or reset the persisted index URL

use colored::Colorize;

use crate::config::{ConfigStore, Preference, DEFAULT_INDEX_URL};

/// Dispatch on the config action argument. No action means `show`.
pub fn run(store: &ConfigStore, args: &[String]) -> anyhow::Result<()> {
    match args.first().map(String::as_str) {
        None | Some("show") => show(store),
        Some("set") => set(store, args.get(1).map(String::as_str)),
        Some("reset") => reset(store),
        Some(other) => {
            eprintln!("{}", format!("Unknown config command: {other}").red());
            eprintln!("{}", "Usage: aetos config [show|set <url>|reset]".dimmed());
            std::process::exit(1);
        }
    }
}

fn show(store: &ConfigStore) -> anyhow::Result<()> {
    let pref = store.load();
    println!("Current index URL: {}", pref.index_url.cyan());
    if pref.is_default() {
        println!("{} {}", "●".green(), "Using the built-in default");
    } else {
        println!(
            "{} Custom configuration saved at: {}",
            "●".yellow(),
            store.config_path().display()
        );
    }
    Ok(())
}

fn set(store: &ConfigStore, url: Option<&str>) -> anyhow::Result<()> {
    let Some(url) = url else {
        eprintln!("{}", "Usage: aetos config set <url>".red());
        eprintln!(
            "{}",
            "e.g. aetos config set https://pypi.org/simple/".dimmed()
        );
        std::process::exit(1);
    };

    if !is_valid_index_url(url) {
        eprintln!(
            "{}",
            "Error: the URL must start with http:// or https://".red()
        );
        std::process::exit(1);
    }

    let pref = Preference {
        index_url: url.to_string(),
    };
    store.save(&pref)?;

    println!("{}", format!("Index URL updated to: {url}").green());
    println!(
        "{}",
        format!("Configuration saved at: {}", store.config_path().display()).dimmed()
    );
    Ok(())
}

fn reset(store: &ConfigStore) -> anyhow::Result<()> {
    let existed = store.reset()?;
    if existed {
        println!(
            "Removed configuration file: {}",
            store.config_path().display()
        );
    }
    println!(
        "{}",
        format!("Restored default index URL: {DEFAULT_INDEX_URL}").green()
    );
    Ok(())
}

fn is_valid_index_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_index_urls() {
        assert!(is_valid_index_url("https://pypi.org/simple/"));
        assert!(is_valid_index_url("http://mirror.local:8080/simple/"));
    }

    #[test]
    fn test_invalid_index_urls() {
        assert!(!is_valid_index_url("ftp://x"));
        assert!(!is_valid_index_url("invalid-url"));
        assert!(!is_valid_index_url(""));
        assert!(!is_valid_index_url("https:/missing-slash"));
    }

    #[test]
    fn test_set_then_show_reads_same_url() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(tmp.path().join(".aetos"));

        set(&store, Some("https://mirror.example/simple/")).unwrap();
        assert_eq!(store.load().index_url, "https://mirror.example/simple/");
    }

    #[test]
    fn test_reset_without_file_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(tmp.path().join(".aetos"));
        reset(&store).unwrap();
        assert!(store.load().is_default());
    }
}
