//! Logger bootstrap for Hibiki binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the default filter directive for a binary.
///
/// Binary names use hyphens, but tracing targets use the crate name with
/// underscores, so `hibiki-server` becomes `hibiki_server`.
pub fn default_directive(bin_name: &str, level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={level},tower_http={level},warn")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
/// Calling this more than once is a no-op.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_converts_bin_name_to_target() {
        // テスト項目: バイナリ名のハイフンが tracing の target 形式に変換される
        // when (操作):
        let directive = default_directive("hibiki-server", "debug");

        // then (期待する結果):
        assert_eq!(directive, "hibiki_server=debug,tower_http=debug,warn");
    }

    #[test]
    fn test_default_directive_is_a_valid_filter() {
        // テスト項目: 生成したディレクティブが EnvFilter として解釈できる
        // when (操作):
        let result = EnvFilter::try_new(default_directive("hibiki-server", "info"));

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: 2回呼び出しても panic しない
        setup_logger("hibiki-server", "info");
        setup_logger("hibiki-server", "info");
    }
}
