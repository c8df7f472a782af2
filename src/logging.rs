use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts colored logging on stderr so reports on stdout stay clean.
/// `RUST_LOG` overrides `spec`.
pub fn setup_logging(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(spec)?
        .format(flexi_logger::colored_default_format)
        .log_to_stderr()
        .start()
}
