//! Reddit Scraper - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_scraper::{
    api::RedditApi,
    cli::Args,
    config::{validate_config, Config},
    download::download_users,
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_global_stats, print_info,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_config_summary(
        &config.targets.usernames,
        &config.output_directory(),
        config.options.concurrency,
    );

    let api = RedditApi::new(&config.client)?;
    tracing::debug!("User-Agent: {}", api.user_agent());

    let global_state = download_users(&api, &config).await?;

    print_global_stats(&global_state);

    if global_state.users_failed == 0 && global_state.failed_count == 0 {
        print_success("All users processed");
    } else {
        print_warning("Finished with errors; see messages above");
    }

    Ok(())
}
