//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_is_hash_or_unknown() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_COMMIT.contains(char::is_whitespace));
    }

    #[test]
    fn test_build_date_is_set() {
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_long_version_mentions_package_version() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains(BUILD_COMMIT));
    }
}
