// server/src/logging.rs

use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber, chosen through `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl LogFormat {
  /// Reads `LOG_FORMAT` (`pretty` or `json`, case-insensitive). Unset or
  /// unrecognized values fall back to `Pretty`.
  pub fn from_env() -> Self {
    std::env::var("LOG_FORMAT")
      .map(|value| Self::parse(&value))
      .unwrap_or_default()
  }

  fn parse(value: &str) -> Self {
    if value.trim().eq_ignore_ascii_case("json") {
      LogFormat::Json
    } else {
      LogFormat::Pretty
    }
  }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(format: LogFormat) {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}
