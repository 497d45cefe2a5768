//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Reddit image scraper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-scraper",
    version,
    about = "Download images from Reddit users' submissions",
    long_about = "Fetches the first page of each user's submissions and saves direct images, \
                  gallery items and imgur album exports to one folder per user.\n\n\
                  Files that already exist are skipped."
)]
pub struct Args {
    /// Username(s) to download from, replacing the configured list.
    #[arg(short, long, num_args = 1..)]
    pub user: Option<Vec<String>>,

    /// Output root directory.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Maximum simultaneous downloads per user.
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Reddit username named in the User-Agent.
    #[arg(long, env = "REDDIT_SCRAPER_MAINTAINER")]
    pub maintainer: Option<String>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(users) = self.user {
            config.targets.usernames = users;
        }

        if let Some(dir) = self.output_directory {
            config.options.output_directory = Some(dir);
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrency = concurrency;
        }

        if let Some(maintainer) = self.maintainer {
            config.client.maintainer = maintainer;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
