//! Turning band colors into the strings shown to the user.
//!
//! Incomplete or unsupported band states decode to the `"NaN"` sentinel
//! instead of failing.

use crate::band::Band;
use crate::swatch::Swatch;

pub const NAN: &str = "NaN";

const SUFFIXES: [&str; 5] = ["", "k", "M", "B", "T"];

/// Resistance in ohms, or `None` while any of the three bands is unassigned.
///
/// At most `99 * 10^9`, which needs the 64 bits.
pub fn ohms(digit1: &Band, digit2: &Band, multiplier: &Band) -> Option<u64> {
    let (d1, d2, m) = (digit1.assigned?, digit2.assigned?, multiplier.assigned?);
    let base = (d1.index() * 10 + d2.index()) as u64;
    Some(base * 10u64.pow(m.index() as u32))
}

pub fn compute_resistance(digit1: &Band, digit2: &Band, multiplier: &Band) -> String {
    match ohms(digit1, digit2, multiplier) {
        Some(ohms) => format_ohms(ohms),
        None => NAN.to_string(),
    }
}

/// `220` -> `"220"`, `4700` -> `"4.70k"`, `99_000_000_000` -> `"99B"`.
pub fn format_ohms(ohms: u64) -> String {
    if ohms < 1000 {
        return ohms.to_string();
    }

    let mut value = ohms as f64;
    let mut scale = 0;
    while value >= 1000.0 && scale < SUFFIXES.len() - 1 {
        value /= 1000.0;
        scale += 1;
    }

    if value.fract() == 0.0 {
        format!("{:.0}{}", value, SUFFIXES[scale])
    } else {
        format!("{:.2}{}", value, SUFFIXES[scale])
    }
}

/// Only white, yellow and the bare band are meaningful here; every other
/// color decodes to `"NaN"`.
pub fn compute_tolerance(tolerance: &Band) -> String {
    match tolerance.assigned {
        None => "25%",
        Some(Swatch::White) => "10%",
        Some(Swatch::Yellow) => "5%",
        Some(_) => NAN,
    }
    .to_string()
}

#[cfg(test)]
pub mod tests {
    use crate::band::SlotKind;
    use crate::decode::*;

    fn band(slot: SlotKind, digit: Option<usize>) -> Band {
        Band {
            slot,
            assigned: digit.and_then(Swatch::from_index),
            focused: false,
        }
    }

    fn resistance(d1: usize, d2: usize, m: usize) -> String {
        compute_resistance(
            &band(SlotKind::Digit1, Some(d1)),
            &band(SlotKind::Digit2, Some(d2)),
            &band(SlotKind::Multiplier, Some(m)),
        )
    }

    const SCENARIOS: [((usize, usize, usize), &str); 9] = [
        ((2, 2, 1), "220"),
        ((1, 0, 3), "10k"),
        ((4, 7, 0), "47"),
        ((9, 9, 9), "99B"),
        ((4, 7, 2), "4.70k"),
        ((3, 3, 5), "3.30M"),
        ((1, 0, 2), "1k"),
        ((0, 0, 9), "0"),
        ((0, 1, 3), "1k"),
    ];

    #[test]
    fn test_resistance_scenarios() {
        for ((d1, d2, m), expected) in SCENARIOS {
            let got = resistance(d1, d2, m);
            assert!(
                got == expected,
                "{}{}x10^{} decoded to {} instead of {}!",
                d1,
                d2,
                m,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_ohms_all_combinations() {
        for d1 in 0..10 {
            for d2 in 0..10 {
                for m in 0..10 {
                    let got = ohms(
                        &band(SlotKind::Digit1, Some(d1)),
                        &band(SlotKind::Digit2, Some(d2)),
                        &band(SlotKind::Multiplier, Some(m)),
                    );
                    let expected = (10 * d1 + d2) as u64 * 10u64.pow(m as u32);
                    assert!(got == Some(expected), "Wrong ohms for {}{}x10^{}!", d1, d2, m);

                    let text = resistance(d1, d2, m);
                    assert!(!text.contains(','), "Thousands separator in {}!", text);
                    if expected < 1000 {
                        assert!(text == expected.to_string());
                    } else {
                        let digits = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
                        assert!(
                            !digits.contains('.') || digits.split('.').nth(1).map(str::len) == Some(2),
                            "{} doesn't have exactly two decimals!",
                            text
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_resistance_unassigned_is_nan() {
        for missing in 0..3 {
            let digit = |i: usize| if i == missing { None } else { Some(5) };
            let got = compute_resistance(
                &band(SlotKind::Digit1, digit(0)),
                &band(SlotKind::Digit2, digit(1)),
                &band(SlotKind::Multiplier, digit(2)),
            );
            assert!(got == NAN, "Band {} unassigned but got {}!", missing, got);
        }
    }

    #[test]
    fn test_format_ohms_suffixes() {
        assert!(format_ohms(999) == "999");
        assert!(format_ohms(1000) == "1k");
        assert!(format_ohms(1500) == "1.50k");
        assert!(format_ohms(2_000_000) == "2M");
        assert!(format_ohms(12_340_000_000) == "12.34B");
        assert!(format_ohms(5_000_000_000_000) == "5T");
        // Never scales past T.
        assert!(format_ohms(7_000_000_000_000_000) == "7000T");
    }

    #[test]
    fn test_tolerance_table() {
        for swatch in Swatch::ALL {
            let expected = match swatch {
                Swatch::White => "10%",
                Swatch::Yellow => "5%",
                _ => NAN,
            };
            let tolerance = band(SlotKind::Tolerance, Some(swatch.index()));
            let first = compute_tolerance(&tolerance);
            assert!(first == expected, "{} decoded to {}!", swatch.name(), first);
            assert!(compute_tolerance(&tolerance) == first, "Tolerance isn't stable!");
        }

        assert!(compute_tolerance(&band(SlotKind::Tolerance, None)) == "25%");
    }
}
