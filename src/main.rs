//! GitHub user search - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Search GitHub users and browse their public repositories
#[derive(Parser, Debug)]
#[command(name = "ghscout")]
#[command(version)]
#[command(about = "TUI application for searching GitHub users and browsing their repositories")]
pub struct Args {
    /// Search for this username on startup
    pub query: Option<String>,

    /// GitHub API root URL (e.g. a GitHub Enterprise endpoint)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Number of users to request per search
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub per_page: Option<u8>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = ghscout::config::load_config_with_precedence(args.config.clone())?;
        let merged = ghscout::config::merge_config(config_file)?;
        let with_env = ghscout::config::apply_env_overrides(merged);
        ghscout::config::apply_cli_overrides(with_env, args.api_url.clone(), args.per_page)
    };

    ghscout::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    ghscout::view::run_with_config(&config, args.query, args.no_color)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["ghscout", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["ghscout", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["ghscout"]);
        assert_eq!(args.query, None);
        assert_eq!(args.api_url, None);
        assert_eq!(args.per_page, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_positional_query() {
        let args = Args::parse_from(["ghscout", "octocat"]);
        assert_eq!(args.query, Some("octocat".to_string()));
    }

    #[test]
    fn test_per_page_accepts_bounds() {
        assert_eq!(Args::parse_from(["ghscout", "--per-page", "1"]).per_page, Some(1));
        assert_eq!(
            Args::parse_from(["ghscout", "--per-page", "100"]).per_page,
            Some(100)
        );
    }

    #[test]
    fn test_per_page_rejects_zero() {
        let err = Args::try_parse_from(["ghscout", "--per-page", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_per_page_rejects_above_hundred() {
        let err = Args::try_parse_from(["ghscout", "--per-page", "101"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "ghscout",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "--per-page",
            "20",
            "--no-color",
            "--config",
            "/tmp/ghscout.toml",
            "torvalds",
        ]);
        assert_eq!(args.query.as_deref(), Some("torvalds"));
        assert_eq!(
            args.api_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(args.per_page, Some(20));
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/ghscout.toml")));
    }

    #[test]
    fn test_cli_overrides_flow_through_precedence_chain() {
        let args = Args::parse_from(["ghscout", "--per-page", "7", "--api-url", "http://x"]);

        let merged = ghscout::config::merge_config(None).unwrap();
        let config = ghscout::config::apply_cli_overrides(merged, args.api_url, args.per_page);

        assert_eq!(config.search_per_page, 7);
        assert_eq!(config.api_base_url, "http://x");
    }
}
