//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use squadup_core::{domain::StaleReplyPolicy, usecase::ChatConfig};

/// What happens to a reply whose conversation was closed or replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StaleRepliesArg {
    /// Cancel pending replies and drop late ones
    Discard,
    /// Append late replies to whatever conversation is current
    Append,
}

impl From<StaleRepliesArg> for StaleReplyPolicy {
    fn from(arg: StaleRepliesArg) -> Self {
        match arg {
            StaleRepliesArg::Discard => StaleReplyPolicy::Discard,
            StaleRepliesArg::Append => StaleReplyPolicy::AppendToCurrent,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "squadup")]
#[command(about = "Browse gaming teammates and chat with them", long_about = None)]
pub struct Args {
    /// Delay before a player replies, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub reply_delay_ms: u64,

    /// Handling of replies addressed to a closed or replaced chat
    #[arg(long, value_enum, default_value_t = StaleRepliesArg::Discard)]
    pub stale_replies: StaleRepliesArg,

    /// JSON roster file (defaults to the built-in roster)
    #[arg(short = 'r', long)]
    pub roster: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            stale_reply_policy: self.stale_replies.into(),
        }
    }
}
