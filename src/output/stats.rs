//! Statistics reporting.

use console::style;

use crate::download::{DownloadState, GlobalState};

/// Print statistics for a single user.
pub fn print_user_stats(state: &DownloadState) {
    let username = state.username.as_deref().unwrap_or("unknown");

    println!();
    println!("{}", style(format!("Statistics for {}:", username)).bold());
    if state.is_empty() {
        println!("  No images found");
        return;
    }
    println!("  Found:      {}", state.image_count);
    println!("  Downloaded: {}", state.downloaded_count);
    println!("  Skipped:    {} (already exist)", state.skipped_count);
    if state.failed_count() > 0 {
        println!("  Failed:     {}", style(state.failed_count()).red());
    }
}

/// Print global statistics across all users.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Users processed: {}", state.users_processed);
    if state.users_without_images > 0 {
        println!("  Users without images: {}", state.users_without_images);
    }
    if state.users_failed > 0 {
        println!("  Users failed:    {}", style(state.users_failed).red());
    }
    println!("  Downloaded: {}", state.downloaded_count);
    println!("  Skipped:    {} (already exist)", state.skipped_count);
    if state.failed_count > 0 {
        println!("  Failed:     {}", style(state.failed_count).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
