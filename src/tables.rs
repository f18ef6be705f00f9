//! Code 128 module-width tables.

/// Number of symbols carrying a 6-element pattern (values 0 to 105).
pub const SYMBOL_COUNT: usize = 106;

/// Width of every 6-element symbol, in modules.
pub const SYMBOL_MODULES: u32 = 11;
/// Width of the stop pattern, in modules.
pub const STOP_MODULES: u32 = 13;

/// Symbol value of the subset A start code.
pub const START_A: u8 = 103;
/// Symbol value of the subset B start code.
pub const START_B: u8 = 104;
/// Symbol value of the subset C start code.
pub const START_C: u8 = 105;
/// Symbol value of the stop code. It is the only symbol drawn with 7 elements.
pub const STOP: u8 = 106;

/// Bar/space widths indexed by symbol value, starting with a bar.
pub static PATTERNS: [[u8; 6]; SYMBOL_COUNT] = [
    [2, 1, 2, 2, 2, 2], [2, 2, 2, 1, 2, 2], [2, 2, 2, 2, 2, 1], [1, 2, 1, 2, 2, 3], [1, 2, 1, 3, 2, 2], [1, 3, 1, 2, 2, 2],
    [1, 2, 2, 2, 1, 3], [1, 2, 2, 3, 1, 2], [1, 3, 2, 2, 1, 2], [2, 2, 1, 2, 1, 3], [2, 2, 1, 3, 1, 2], [2, 3, 1, 2, 1, 2],
    [1, 1, 2, 2, 3, 2], [1, 2, 2, 1, 3, 2], [1, 2, 2, 2, 3, 1], [1, 1, 3, 2, 2, 2], [1, 2, 3, 1, 2, 2], [1, 2, 3, 2, 2, 1],
    [2, 2, 3, 2, 1, 1], [2, 2, 1, 1, 3, 2], [2, 2, 1, 2, 3, 1], [2, 1, 3, 2, 1, 2], [2, 2, 3, 1, 1, 2], [3, 1, 2, 1, 3, 1],
    [3, 1, 1, 2, 2, 2], [3, 2, 1, 1, 2, 2], [3, 2, 1, 2, 2, 1], [3, 1, 2, 2, 1, 2], [3, 2, 2, 1, 1, 2], [3, 2, 2, 2, 1, 1],
    [2, 1, 2, 1, 2, 3], [2, 1, 2, 3, 2, 1], [2, 3, 2, 1, 2, 1], [1, 1, 1, 3, 2, 3], [1, 3, 1, 1, 2, 3], [1, 3, 1, 3, 2, 1],
    [1, 1, 2, 3, 1, 3], [1, 3, 2, 1, 1, 3], [1, 3, 2, 3, 1, 1], [2, 1, 1, 3, 1, 3], [2, 3, 1, 1, 1, 3], [2, 3, 1, 3, 1, 1],
    [1, 1, 2, 1, 3, 3], [1, 1, 2, 3, 3, 1], [1, 3, 2, 1, 3, 1], [1, 1, 3, 1, 2, 3], [1, 1, 3, 3, 2, 1], [1, 3, 3, 1, 2, 1],
    [3, 1, 3, 1, 2, 1], [2, 1, 1, 3, 3, 1], [2, 3, 1, 1, 3, 1], [2, 1, 3, 1, 1, 3], [2, 1, 3, 3, 1, 1], [2, 1, 3, 1, 3, 1],
    [3, 1, 1, 1, 2, 3], [3, 1, 1, 3, 2, 1], [3, 3, 1, 1, 2, 1], [3, 1, 2, 1, 1, 3], [3, 1, 2, 3, 1, 1], [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1], [2, 2, 1, 4, 1, 1], [4, 3, 1, 1, 1, 1], [1, 1, 1, 2, 2, 4], [1, 1, 1, 4, 2, 2], [1, 2, 1, 1, 2, 4],
    [1, 2, 1, 4, 2, 1], [1, 4, 1, 1, 2, 2], [1, 4, 1, 2, 2, 1], [1, 1, 2, 2, 1, 4], [1, 1, 2, 4, 1, 2], [1, 2, 2, 1, 1, 4],
    [1, 2, 2, 4, 1, 1], [1, 4, 2, 1, 1, 2], [1, 4, 2, 2, 1, 1], [2, 4, 1, 2, 1, 1], [2, 2, 1, 1, 1, 4], [4, 1, 3, 1, 1, 1],
    [2, 4, 1, 1, 1, 2], [1, 3, 4, 1, 1, 1], [1, 1, 1, 2, 4, 2], [1, 2, 1, 1, 4, 2], [1, 2, 1, 2, 4, 1], [1, 1, 4, 2, 1, 2],
    [1, 2, 4, 1, 1, 2], [1, 2, 4, 2, 1, 1], [4, 1, 1, 2, 1, 2], [4, 2, 1, 1, 1, 2], [4, 2, 1, 2, 1, 1], [2, 1, 2, 1, 4, 1],
    [2, 1, 4, 1, 2, 1], [4, 1, 2, 1, 2, 1], [1, 1, 1, 1, 4, 3], [1, 1, 1, 3, 4, 1], [1, 3, 1, 1, 4, 1], [1, 1, 4, 1, 1, 3],
    [1, 1, 4, 3, 1, 1], [4, 1, 1, 1, 1, 3], [4, 1, 1, 3, 1, 1], [1, 1, 3, 1, 4, 1], [1, 1, 4, 1, 3, 1], [3, 1, 1, 1, 4, 1],
    [4, 1, 1, 1, 3, 1], [2, 1, 1, 4, 1, 2], [2, 1, 1, 2, 1, 4], [2, 1, 1, 2, 3, 2],
];

/// Stop pattern, including the final 2-module termination bar.
pub static STOP_PATTERN: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

/// Returns the widths of `symbol`, or `None` past the stop code.
pub fn pattern(symbol: u8) -> Option<&'static [u8]> {
    match symbol {
        STOP => Some(&STOP_PATTERN),
        s => PATTERNS.get(s as usize).map(|p| &p[..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_is_eleven_modules() {
        for (value, widths) in PATTERNS.iter().enumerate() {
            let sum: u32 = widths.iter().map(|&w| w as u32).sum();
            assert_eq!(sum, SYMBOL_MODULES, "symbol {value}");
            assert!(widths.iter().all(|&w| (1..=4).contains(&w)));
        }
    }

    #[test]
    fn test_stop_is_thirteen_modules() {
        let sum: u32 = STOP_PATTERN.iter().map(|&w| w as u32).sum();
        assert_eq!(sum, STOP_MODULES);
    }

    #[test]
    fn test_start_codes() {
        assert_eq!(PATTERNS[START_A as usize], [2, 1, 1, 4, 1, 2]);
        assert_eq!(PATTERNS[START_B as usize], [2, 1, 1, 2, 1, 4]);
        assert_eq!(PATTERNS[START_C as usize], [2, 1, 1, 2, 3, 2]);
    }

    #[test]
    fn test_patterns_are_unique() {
        for i in 0..SYMBOL_COUNT {
            for j in (i + 1)..SYMBOL_COUNT {
                assert_ne!(PATTERNS[i], PATTERNS[j], "symbols {i} and {j}");
            }
        }
    }

    #[test]
    fn test_pattern_lookup() {
        assert_eq!(pattern(STOP), Some(&STOP_PATTERN[..]));
        assert_eq!(pattern(0), Some(&[2, 1, 2, 2, 2, 2][..]));
        assert_eq!(pattern(107), None);
    }
}
