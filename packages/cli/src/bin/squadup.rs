//! Terminal client for browsing gaming teammates and chatting with them.
//!
//! Lists players for the selected game, narrows the roster with search,
//! minimum rating and rank filters, and opens a simulated chat in which the
//! player answers with a canned reply after a short delay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin squadup
//! cargo run --bin squadup -- --reply-delay-ms 300 --stale-replies append
//! cargo run --bin squadup -- --roster players.json --log-level debug
//! ```

use clap::Parser;

use squadup_cli::config::Args;
use squadup_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = squadup_cli::run(args).await {
        tracing::error!("squadup error: {}", e);
        std::process::exit(1);
    }
}
