//! Tests for reconstruction constants and shred geometry validation

#[cfg(test)]
mod tests {
    use unshred::io::configuration::{
        DEFAULT_SEED, DEFAULT_SHRED_WIDTH, DEFAULT_STRIPE_COLUMNS, MAX_INDIVIDUAL_PROGRESS_BARS,
        OUTPUT_SUFFIX, SCRAMBLED_SUFFIX, SUPPORTED_EXTENSIONS, ShredConfig,
    };

    // Tests default geometry values
    // Verified by changing constant values
    #[test]
    fn test_default_geometry() {
        assert_eq!(DEFAULT_SHRED_WIDTH, 32);
        assert_eq!(DEFAULT_STRIPE_COLUMNS, 4);

        let config = ShredConfig::default();
        assert_eq!(config.shred_width(), DEFAULT_SHRED_WIDTH);
        assert_eq!(config.stripe_columns(), DEFAULT_STRIPE_COLUMNS);
        assert_eq!(
            ShredConfig::new(DEFAULT_SHRED_WIDTH, DEFAULT_STRIPE_COLUMNS).ok(),
            Some(config)
        );
    }

    // Tests zero values and k > W are rejected
    // Verified by allowing stripe columns equal to width plus one
    #[test]
    fn test_invalid_geometry_rejected() {
        for (width, columns) in [(0, 0), (0, 4), (32, 0), (4, 5), (1, 2)] {
            let err = ShredConfig::new(width, columns).unwrap_err();
            assert!(
                err.is_configuration_error(),
                "({width}, {columns}) should be a configuration error"
            );
        }
    }

    // Tests the boundary k == W is accepted
    #[test]
    fn test_columns_equal_to_width() {
        let config = ShredConfig::new(4, 4).expect("k == W is valid");
        assert_eq!(config.stripe_columns(), 4);
        assert!(ShredConfig::new(1, 1).is_ok());
    }

    // Tests output suffixes are distinct and filesystem safe
    // Verified by adding special character
    #[test]
    fn test_output_suffixes() {
        assert_ne!(OUTPUT_SUFFIX, SCRAMBLED_SUFFIX);
        for suffix in [OUTPUT_SUFFIX, SCRAMBLED_SUFFIX] {
            assert!(suffix.starts_with('_'));
            assert!(
                suffix.chars().all(|ch| ch.is_alphanumeric() || ch == '_'),
                "Output suffix contains invalid character: {suffix}"
            );
        }
    }

    // Tests remaining constants
    #[test]
    fn test_misc_constants() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        assert!(SUPPORTED_EXTENSIONS.contains(&"jpg"));
    }
}
