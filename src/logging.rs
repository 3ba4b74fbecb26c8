//! Log setup shared by both binaries.
//!
//! Every line is prefixed with the local wall-clock time as `[HH:MM:SS]`.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Timer rendering `[HH:MM:SS]` in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", clock_stamp(&Local::now()))
    }
}

/// Format `time` as `[HH:MM:SS]`.
pub fn clock_stamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("[%H:%M:%S]").to_string()
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "pwa_devtools=debug,pwa_icons=debug,tower_http=debug"
    } else {
        "pwa_devtools=info,pwa_icons=info,tower_http=warn"
    }
}

/// Build the fmt subscriber writing to `writer`.
pub fn build_subscriber<W>(filter: &str, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ClockTime)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).to_string());

    build_subscriber(&env_filter, std::io::stdout).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clock_stamp_is_zero_padded() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(clock_stamp(&t), "[07:05:02]");
    }

    #[test]
    fn verbose_filter_enables_debug() {
        assert!(default_filter(true).contains("pwa_devtools=debug"));
        assert!(default_filter(false).contains("pwa_devtools=info"));
    }
}
