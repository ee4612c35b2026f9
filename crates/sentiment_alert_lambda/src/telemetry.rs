use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps `LOG_LEVEL` values, including the Python-style `WARNING` and
/// `CRITICAL`, onto a tracing filter directive.
pub fn filter_directive(log_level: &str) -> &'static str {
    match log_level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" | "FATAL" => "error",
        "OFF" => "off",
        _ => "info",
    }
}

/// JSON logs to stdout so CloudWatch keeps one event per line.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::new(filter_directive(log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .without_time(),
        )
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_level_names_are_understood() {
        assert_eq!(filter_directive("INFO"), "info");
        assert_eq!(filter_directive("warning"), "warn");
        assert_eq!(filter_directive("CRITICAL"), "error");
        assert_eq!(filter_directive("DEBUG"), "debug");
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing("DEBUG");
        init_tracing("INFO");
        tracing::info!(component = "telemetry_test", "still logging");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(filter_directive("verbose"), "info");
        assert_eq!(filter_directive(""), "info");
    }
}
