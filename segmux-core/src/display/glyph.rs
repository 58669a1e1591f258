//! Glyph coverage resolution
//!
//! Each scan line energizes one group of segments. Lines 0-9 are the
//! segments specific to one decimal digit; lines 10-14 are segment groups
//! shared by several digits. A digit position is switched on for a line
//! when its current digit uses that line's segments, so cycling through
//! all 15 lines draws every digit completely.
//!
//! | line | digits        |
//! |------|---------------|
//! | 0-9  | the digit itself |
//! | 10   | 2, 6, 8       |
//! | 11   | 3, 5, 6, 8    |
//! | 12   | 4, 8, 9       |
//! | 13   | 5, 6, 8, 9    |
//! | 14   | 6, 8          |

use crate::config::MAX_DIGITS;

/// Number of glyph scan lines
pub const SCAN_LINES: u8 = 15;

/// Scan counter position used as the blank/sync marker
pub const SYNC_LINE: u8 = 15;

/// Scan lines used by each decimal digit, as a bitmask over lines
const DIGIT_LINES: [u16; 10] = [
    1 << 0,
    1 << 1,
    1 << 2 | 1 << 10,
    1 << 3 | 1 << 11,
    1 << 4 | 1 << 12,
    1 << 5 | 1 << 11 | 1 << 13,
    1 << 6 | 1 << 10 | 1 << 11 | 1 << 13 | 1 << 14,
    1 << 7,
    // 8 is the union of every shared group
    1 << 8 | 1 << 10 | 1 << 11 | 1 << 12 | 1 << 13 | 1 << 14,
    1 << 9 | 1 << 12 | 1 << 13,
];

/// Scan lines a decimal digit appears on
///
/// Returns an empty set for anything that is not a decimal digit.
pub const fn scan_lines_for(digit: u8) -> u16 {
    if digit >= 10 {
        return 0;
    }
    DIGIT_LINES[digit as usize]
}

/// Check if `digit` is drawn on `scan_line`
pub const fn matches(scan_line: u8, digit: u8) -> bool {
    if scan_line >= SCAN_LINES {
        return false;
    }
    scan_lines_for(digit) & (1 << scan_line) != 0
}

/// Digit positions to energize for `scan_line`
///
/// Bit `d` of the result is digit position `d` of `value`, counted from
/// the least significant digit. `scan_line` must be below [`SYNC_LINE`];
/// the sync line never matches anything.
pub fn coverage(value: u32, scan_line: u8, digits: u8) -> u8 {
    let mut rest = value;
    let mut mask = 0u8;
    for position in 0..digits.min(MAX_DIGITS) {
        if matches(scan_line, (rest % 10) as u8) {
            mask |= 1 << position;
        }
        rest /= 10;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_lines() {
        for line in 0..10u8 {
            for digit in 0..10u8 {
                if digit == 8 || line == digit {
                    continue;
                }
                // Only the digit itself owns lines 0-9
                assert!(!matches(line, digit), "line {} digit {}", line, digit);
            }
            assert!(matches(line, line));
        }
    }

    #[test]
    fn test_shared_lines() {
        assert_eq!(scan_lines_for(2) >> 10, 0b00001);
        assert_eq!(scan_lines_for(3) >> 10, 0b00010);
        assert_eq!(scan_lines_for(6) >> 10, 0b11011);
        assert!(matches(12, 4));
        assert!(matches(12, 9));
        assert!(!matches(12, 6));
        assert!(matches(14, 6));
        assert!(!matches(14, 5));
    }

    #[test]
    fn test_eight_on_every_shared_line() {
        for line in 10..SCAN_LINES {
            assert!(matches(line, 8));
        }
        assert!(matches(8, 8));
        assert!(!matches(7, 8));
    }

    #[test]
    fn test_lines_per_digit() {
        let expected = [1, 1, 2, 2, 2, 3, 5, 1, 6, 3];
        for (digit, &count) in expected.iter().enumerate() {
            assert_eq!(scan_lines_for(digit as u8).count_ones(), count, "digit {}", digit);
        }
    }

    #[test]
    fn test_sync_line_never_matches() {
        for digit in 0..10 {
            assert!(!matches(SYNC_LINE, digit));
        }
        assert_eq!(coverage(8888, SYNC_LINE, 4), 0);
    }

    #[test]
    fn test_coverage_positions() {
        // 2019: position 0 = 9, 1 = 1, 2 = 0, 3 = 2
        assert_eq!(coverage(2019, 9, 4), 0b0001);
        assert_eq!(coverage(2019, 1, 4), 0b0010);
        assert_eq!(coverage(2019, 0, 4), 0b0100);
        assert_eq!(coverage(2019, 2, 4), 0b1000);
        // Shared lines: 9 on 12 and 13, 2 on 10
        assert_eq!(coverage(2019, 12, 4), 0b0001);
        assert_eq!(coverage(2019, 13, 4), 0b0001);
        assert_eq!(coverage(2019, 10, 4), 0b1000);
        assert_eq!(coverage(2019, 14, 4), 0);
    }

    #[test]
    fn test_leading_zeros_are_drawn() {
        assert_eq!(coverage(7, 0, 4), 0b1110);
        assert_eq!(coverage(7, 7, 4), 0b0001);
    }

    #[test]
    fn test_digit_count_limits_positions() {
        assert_eq!(coverage(88, 8, 2), 0b11);
        assert_eq!(coverage(88, 8, 8), 0b11);
        assert_eq!(coverage(0, 0, 8), 0xFF);
    }

    #[test]
    fn test_every_digit_fully_drawn_in_one_frame() {
        // Each position is lit on exactly the lines of its digit
        let value = 5_963_847;
        for position in 0..7u32 {
            let digit = (value / 10u32.pow(position) % 10) as u8;
            let mut lit: u16 = 0;
            for line in 0..SCAN_LINES {
                if coverage(value, line, 7) & (1 << position) != 0 {
                    lit |= 1 << line;
                }
            }
            assert_eq!(lit, scan_lines_for(digit));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_coverage_is_pure(value in any::<u32>(), line in 0u8..SCAN_LINES, digits in 1u8..=8) {
                prop_assert_eq!(coverage(value, line, digits), coverage(value, line, digits));
            }

            #[test]
            fn prop_coverage_fits_digits(value in any::<u32>(), line in 0u8..SCAN_LINES, digits in 1u8..=8) {
                let mask = coverage(value, line, digits) as u16;
                prop_assert_eq!(mask >> digits, 0);
            }
        }
    }
}
