//! # Prefix Indicators
//!
//! Some cells only make sense together with the cell that follows them
//! (voicing marks, contraction marks, the numeral sign). Layout must never
//! separate such a pair across a line break.
//!
//! The set of recognized indicator patterns belongs to the transliteration
//! scheme, so layout receives it as a [`PrefixSet`] value rather than
//! looking it up in a table of its own.

use std::collections::BTreeSet;

use crate::cell::{BrailleCell, DotPattern};

/// Dakuten (voiced) indicator, dot 5.
pub const DAKUTEN: DotPattern = DotPattern::from_bits(0x10);
/// Handakuten (semi-voiced) indicator, dot 6.
pub const HANDAKUTEN: DotPattern = DotPattern::from_bits(0x20);
/// Yōon (contracted sound) indicator, dot 4.
pub const YOON: DotPattern = DotPattern::from_bits(0x08);
/// Voiced yōon indicator, dots 4-5.
pub const YOON_DAKUTEN: DotPattern = DotPattern::from_bits(0x18);
/// Semi-voiced yōon indicator, dots 4-6.
pub const YOON_HANDAKUTEN: DotPattern = DotPattern::from_bits(0x28);
/// Numeral indicator, dots 3-4-5-6.
pub const NUMERAL_INDICATOR: DotPattern = DotPattern::from_bits(0x3C);
/// Foreign-script indicator, dots 5-6.
pub const FOREIGN_INDICATOR: DotPattern = DotPattern::from_bits(0x30);

/// Closed set of dot patterns that bind to the following cell.
///
/// # Examples
/// ```
/// use braille_cell::{BrailleCell, PrefixSet, prefix::NUMERAL_INDICATOR};
///
/// let prefixes = PrefixSet::japanese();
/// let numeral = BrailleCell::from_pattern(NUMERAL_INDICATOR, "数");
/// assert!(prefixes.is_prefix(&numeral));
/// assert!(!prefixes.is_prefix(&BrailleCell::space()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSet {
    patterns: BTreeSet<DotPattern>,
}

impl PrefixSet {
    /// Creates an empty set; every cell becomes its own unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven indicators of Japanese braille: dakuten, handakuten, the
    /// three yōon variants, the numeral sign and the foreign-script sign.
    pub fn japanese() -> Self {
        [
            DAKUTEN,
            HANDAKUTEN,
            YOON,
            YOON_DAKUTEN,
            YOON_HANDAKUTEN,
            NUMERAL_INDICATOR,
            FOREIGN_INDICATOR,
        ]
        .into_iter()
        .collect()
    }

    /// True if the pattern is a recognized indicator.
    pub fn contains(&self, pattern: DotPattern) -> bool {
        self.patterns.contains(&pattern)
    }

    /// True if the cell's pattern is a recognized indicator.
    pub fn is_prefix(&self, cell: &BrailleCell) -> bool {
        self.contains(cell.pattern())
    }
}

impl FromIterator<DotPattern> for PrefixSet {
    fn from_iter<I: IntoIterator<Item = DotPattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
