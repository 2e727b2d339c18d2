use std::sync::Once;

/// Filter applied when neither `RUST_LOG` nor the config file provide one.
pub const DEFAULT_LOG_FILTER: &str = "bank_core=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `directives` when set. Later calls are no-ops and
/// return `false`.
pub fn init_tracing(directives: &str) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

        // another subscriber may already be installed by an embedding binary
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        installed = true;
    });
    installed
}

/// Renders an amount the way the console narrative shows it: integral values
/// keep a trailing `.0` (`1200.0`, `-200.0`).
pub fn format_amount(amount: f64) -> String {
    format!("{amount:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_amounts_keep_one_decimal() {
        assert_eq!(format_amount(1200.0), "1200.0");
        assert_eq!(format_amount(-200.0), "-200.0");
        assert_eq!(format_amount(0.0), "0.0");
    }

    #[test]
    fn fractional_amounts_are_not_rounded() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }
}
