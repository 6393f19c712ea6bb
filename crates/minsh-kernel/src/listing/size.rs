//! Human-readable byte counts.

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count with binary prefixes.
///
/// Values under 1024 render exactly (`"512 B"`); larger values are scaled by
/// powers of 1024 with one decimal (`"1.5 KiB"`, `"16.0 EiB"`).
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}iB", bytes as f64 / div as f64, PREFIXES[exp])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 B")]
    #[case(1, "1 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.0 KiB")]
    #[case(1536, "1.5 KiB")]
    #[case(1024 * 1024, "1.0 MiB")]
    #[case(3 * 1024 * 1024 * 1024, "3.0 GiB")]
    #[case(1024u64.pow(4), "1.0 TiB")]
    #[case(1024u64.pow(5), "1.0 PiB")]
    #[case(1024u64.pow(6), "1.0 EiB")]
    #[case(u64::MAX, "16.0 EiB")]
    fn formats(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_size(bytes), expected);
    }

    #[test]
    fn below_one_kib_is_exact() {
        for b in 0..1024 {
            assert_eq!(format_size(b), format!("{b} B"));
        }
    }

    #[test]
    fn scaled_value_is_within_rounding() {
        let samples = [1024u64, 1500, 4095, 999_999, 123_456_789, 9_876_543_210, u64::MAX / 3];
        for b in samples {
            let out = format_size(b);
            let (number, unit) = out.split_once(' ').unwrap();
            let exp = "KMGTPE".find(unit.chars().next().unwrap()).unwrap() as i32 + 1;
            let shown: f64 = number.parse().unwrap();
            let actual = b as f64 / 1024f64.powi(exp);
            assert!((shown - actual).abs() <= 0.05 + f64::EPSILON, "{b} rendered as {out}");
        }
    }
}
