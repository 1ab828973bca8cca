//! Logging setup for the SquadUp binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers the library crates and the binary itself. `RUST_LOG`
/// overrides it entirely when set.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "squadup")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn")
///
/// # Examples
///
/// ```no_run
/// use squadup_shared::logger::setup_logger;
///
/// setup_logger("squadup", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the `EnvFilter` directive used when `RUST_LOG` is absent.
fn default_filter(binary_name: &str, level: &str) -> String {
    ["squadup_shared", "squadup_core", "squadup_cli", binary_name]
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_all_crates_and_binary() {
        // テスト項目: デフォルトのフィルタが全クレートとバイナリを対象にする
        // given (前提条件):
        let binary_name = "squadup";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert!(filter.contains("squadup_shared=debug"));
        assert!(filter.contains("squadup_core=debug"));
        assert!(filter.contains("squadup_cli=debug"));
        assert!(filter.ends_with("squadup=debug"));
    }

    #[test]
    fn test_default_filter_normalizes_hyphens() {
        // テスト項目: バイナリ名のハイフンがアンダースコアに変換される
        // given (前提条件):
        let binary_name = "squadup-demo";

        // when (操作):
        let filter = default_filter(binary_name, "info");

        // then (期待する結果):
        assert!(filter.contains("squadup_demo=info"));
        assert!(!filter.contains("squadup-demo"));
    }
}
