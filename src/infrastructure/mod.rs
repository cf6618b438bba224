pub mod i18n;
pub mod log_redact;
pub mod logging;
