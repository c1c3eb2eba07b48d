//! reposcout - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// reposcout - search repositories from your terminal
#[derive(Parser, Debug)]
#[command(name = "reposcout")]
#[command(version)]
#[command(about = "TUI for searching repositories with infinite-scrolling results")]
pub struct Args {
    /// Initial search query (searches immediately when 3+ characters)
    pub query: Option<String>,

    /// Base URL of the search API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Results per page (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: Option<u32>,

    /// API token for authenticated requests (or set GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), reposcout::model::AppError> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = reposcout::config::load_config_with_precedence(args.config.clone())?;
        let merged = reposcout::config::merge_config(config_file);
        let with_env = reposcout::config::apply_env_overrides(merged);
        reposcout::config::apply_cli_overrides(
            with_env,
            args.api_url.clone(),
            args.page_size,
            args.token.clone(),
        )
    };

    reposcout::logging::init(&config.log_file_path)?;

    info!(
        api_url = %config.api_url,
        page_size = config.page_size,
        authenticated = config.token.is_some(),
        "configuration resolved"
    );

    // The fetch worker owns the only HTTP client.
    let client = reposcout::api::SearchClient::new(
        config.api_url.as_str(),
        config.page_size,
        config.token.as_deref(),
    )?;
    let fetch = reposcout::fetch::FetchHandle::spawn(client);

    // Seed state from the CLI query, dispatching the initial search if it
    // already qualifies.
    let mut app_state = match &args.query {
        Some(query) => reposcout::state::AppState::with_query(query.as_str()),
        None => reposcout::state::AppState::new(),
    };
    if let Some(request) = app_state.fetch_after_edit() {
        fetch.dispatch(request);
    }

    let colors = reposcout::view::ColorConfig::from_env_and_args(args.no_color);
    let styles = reposcout::view::AppStyles::new(colors);

    reposcout::view::run(app_state, fetch, styles)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["reposcout", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["reposcout", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["reposcout"]);
        assert_eq!(args.query, None);
        assert_eq!(args.api_url, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.token, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_positional_query() {
        let args = Args::parse_from(["reposcout", "rust tui"]);
        assert_eq!(args.query.as_deref(), Some("rust tui"));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let result = Args::try_parse_from(["reposcout", "--page-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_rejects_over_api_maximum() {
        let result = Args::try_parse_from(["reposcout", "--page-size", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["reposcout", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "reposcout",
            "ratatui",
            "--api-url",
            "https://github.example.com/api/v3",
            "--page-size",
            "50",
            "--no-color",
        ]);
        assert_eq!(args.query.as_deref(), Some("ratatui"));
        assert_eq!(
            args.api_url.as_deref(),
            Some("https://github.example.com/api/v3")
        );
        assert_eq!(args.page_size, Some(50));
        assert!(args.no_color);
    }

    #[test]
    fn test_cli_flows_through_config_precedence_chain() {
        use reposcout::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            api_url: Some("https://file.example".to_string()),
            page_size: Some(10),
            token: None,
            log_file_path: None,
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(
            merged.api_url, "https://file.example",
            "Config file should override default API URL"
        );

        let with_cli = apply_cli_overrides(merged, None, Some(75), None);
        assert_eq!(with_cli.api_url, "https://file.example");
        assert_eq!(with_cli.page_size, 75, "CLI page size overrides the file");
    }
}
