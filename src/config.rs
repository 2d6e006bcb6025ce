//! Application-level constants.

pub const APP_NAME: &str = "Patient Queue Management";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is unset. Conflicts and failed slot
/// searches are logged at warn level, so they stay visible by default.
pub fn default_log_filter() -> &'static str {
    "warn"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_keeps_warnings() {
        assert_eq!(default_log_filter(), "warn");
    }
}
