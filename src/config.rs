/// Application-level constants
pub const APP_NAME: &str = "Orato";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filename convention for the rendered report artifact.
pub const REPORT_FILENAME: &str = "Speech_Analysis_Report.html";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_orato() {
        assert_eq!(APP_NAME, "Orato");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn report_filename_is_html() {
        assert!(REPORT_FILENAME.ends_with(".html"));
    }
}
