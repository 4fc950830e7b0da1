// Storage sizes are reported in tebibytes (2^40 bytes), not terabytes.
pub const TIB_BYTES: f64 = 1_099_511_627_776.0;

pub fn bytes_to_tib(bytes: f64) -> f64 {
    bytes / TIB_BYTES
}

/// Two decimals, rounded.
pub fn format_tib(tib: f64) -> String {
    format!("{tib:.2}")
}

/// Drops the fractional part; out-of-range values saturate and NaN becomes 0.
pub fn truncate_count(n: f64) -> i64 {
    n as i64
}

pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if visible.len() == key.len() {
        "…".to_string()
    } else {
        format!("{visible}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_tib() {
        assert_eq!(bytes_to_tib(0.0), 0.0);
        assert_eq!(bytes_to_tib(TIB_BYTES), 1.0);
        assert_eq!(bytes_to_tib(TIB_BYTES * 2.5), 2.5);
        assert!((bytes_to_tib(1_000_000_000_000.0) - 0.909_494_701_772_928_2).abs() < 1e-12);
    }

    #[test]
    fn test_format_tib_rounds() {
        assert_eq!(format_tib(1.0), "1.00");
        assert_eq!(format_tib(0.0), "0.00");
        assert_eq!(format_tib(0.909_494_7), "0.91");
        assert_eq!(format_tib(12.3449), "12.34");
        assert_eq!(format_tib(12.3451), "12.35");
        assert_eq!(format_tib(0.999), "1.00");
    }

    #[test]
    fn test_format_tib_is_idempotent() {
        for v in [0.0, 0.004, 0.909_494_7, 1.0, 3.14159, 12.3451, 999.999, 123_456.789] {
            let once = format_tib(v);
            let reparsed: f64 = once.parse().unwrap();
            assert_eq!(format_tib(reparsed), once, "value {v}");
        }
    }

    #[test]
    fn test_truncate_count() {
        assert_eq!(truncate_count(5.9), 5);
        assert_eq!(truncate_count(5.0), 5);
        assert_eq!(truncate_count(0.99), 0);
        assert_eq!(truncate_count(-2.7), -2);
        assert_eq!(truncate_count(f64::NAN), 0);
        assert_eq!(truncate_count(1e30), i64::MAX);
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AKIAEXAMPLE"), "AKIA…");
        assert_eq!(mask_key("ABCD"), "…");
        assert_eq!(mask_key(""), "…");
    }
}
