//! Construction and discovery for delegated pip invocations.
//!
//! Every non-config verb is relayed to pip with the configured index URL and
//! its derived trusted host injected ahead of the passthrough arguments.

use std::path::PathBuf;

/// Binary names probed, in order, when locating pip.
const PIP_BINARIES: &[&str] = &["pip3", "pip"];

/// Locate the pip binary on PATH.
pub fn find_pip() -> Option<PathBuf> {
    PIP_BINARIES
        .iter()
        .find_map(|name| which::which(name).ok())
}

/// Extract the authority (host[:port]) from an index URL.
///
/// Strips the scheme prefix and any path suffix; pip's `--trusted-host` flag
/// takes only the authority component.
pub fn trusted_host(index_url: &str) -> String {
    let after_scheme = index_url.split("//").last().unwrap_or(index_url);
    after_scheme
        .split('/')
        .next()
        .unwrap_or(after_scheme)
        .to_string()
}

/// Build the full pip argument list for a delegated verb.
///
/// Order matters: verb first, then the injected index flags, then the
/// passthrough arguments. Injection is uniform across verbs; verbs that
/// reject the flags surface pip's own error.
pub fn build_args(verb: &str, index_url: &str, passthrough: &[String]) -> Vec<String> {
    let mut args = vec![
        verb.to_string(),
        "--index-url".to_string(),
        index_url.to_string(),
        "--trusted-host".to_string(),
        trusted_host(index_url),
    ];
    args.extend(passthrough.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_host_strips_scheme_and_path() {
        assert_eq!(
            trusted_host("https://mirror.example/simple/"),
            "mirror.example"
        );
        assert_eq!(trusted_host("http://mirror.example/"), "mirror.example");
    }

    #[test]
    fn test_trusted_host_keeps_port() {
        assert_eq!(
            trusted_host("https://mirror.example:8443/simple/"),
            "mirror.example:8443"
        );
    }

    #[test]
    fn test_trusted_host_bare_host() {
        assert_eq!(trusted_host("https://mirror.example"), "mirror.example");
    }

    #[test]
    fn test_trusted_host_default_index() {
        assert_eq!(
            trusted_host("https://nexus.uclv.edu.cu/repository/pypi.org/"),
            "nexus.uclv.edu.cu"
        );
    }

    #[test]
    fn test_build_args_injects_flags_before_passthrough() {
        let args = build_args(
            "install",
            "https://mirror.example/simple/",
            &["requests".to_string()],
        );
        assert_eq!(
            args,
            vec![
                "install",
                "--index-url",
                "https://mirror.example/simple/",
                "--trusted-host",
                "mirror.example",
                "requests",
            ]
        );
    }

    #[test]
    fn test_build_args_no_passthrough() {
        let args = build_args("list", "https://mirror.example/simple/", &[]);
        assert_eq!(
            args,
            vec![
                "list",
                "--index-url",
                "https://mirror.example/simple/",
                "--trusted-host",
                "mirror.example",
            ]
        );
    }

    #[test]
    fn test_build_args_preserves_passthrough_order() {
        let passthrough = vec![
            "requests".to_string(),
            "--upgrade".to_string(),
            "flask".to_string(),
        ];
        let args = build_args("install", "https://mirror.example/simple/", &passthrough);
        assert_eq!(&args[5..], &passthrough[..]);
    }
}
