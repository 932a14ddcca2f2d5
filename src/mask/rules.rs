//! Character rules for pattern slots.
//!
//! A mask pattern glyph either names a rule in a [`RuleTable`] (and becomes a
//! pattern slot) or is copied verbatim into the rendered text as a literal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Candidate character that empties a slot instead of filling it.
pub const EMPTY_CHAR: char = ' ';

/// Forces the following glyph to be a literal.
pub const ESCAPE_CHAR: char = '\\';

/// Glyph shown for unfilled slots unless the caller picks another.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Context-sensitive filter: candidate, absolute slot index, rendered text so far.
pub type ContextFilter = fn(char, usize, &[char]) -> bool;

/// Letter test shared by the `L`, `l`, `A` and `a` glyphs.
///
/// Anything above ASCII counts as a letter so accented and non-latin input is
/// not rejected.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch as u32 > 127
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Built-in character classes, one per default glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// `0`
    Digit,
    /// `9`
    DigitOrSpace,
    /// `#`
    Signed,
    /// `L`
    Letter,
    /// `l`
    LetterOrSpace,
    /// `C`
    NonWhitespace,
    /// `c`: anything on a single line
    Any,
    /// `A`
    Alphanumeric,
    /// `a`
    AlphanumericOrSpace,
}

impl CharClass {
    pub const ALL: [CharClass; 9] = [
        CharClass::Digit,
        CharClass::DigitOrSpace,
        CharClass::Signed,
        CharClass::Letter,
        CharClass::LetterOrSpace,
        CharClass::NonWhitespace,
        CharClass::Any,
        CharClass::Alphanumeric,
        CharClass::AlphanumericOrSpace,
    ];

    /// The default glyph that selects this class in a pattern.
    pub fn glyph(self) -> char {
        match self {
            CharClass::Digit => '0',
            CharClass::DigitOrSpace => '9',
            CharClass::Signed => '#',
            CharClass::Letter => 'L',
            CharClass::LetterOrSpace => 'l',
            CharClass::NonWhitespace => 'C',
            CharClass::Any => 'c',
            CharClass::Alphanumeric => 'A',
            CharClass::AlphanumericOrSpace => 'a',
        }
    }

    pub fn for_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.glyph() == glyph)
    }

    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::DigitOrSpace => ch.is_ascii_digit() || ch.is_whitespace(),
            CharClass::Signed => {
                ch.is_ascii_digit() || ch == '+' || ch == '-' || ch.is_whitespace()
            }
            CharClass::Letter => is_letter(ch),
            CharClass::LetterOrSpace => is_letter(ch) || ch == ' ',
            CharClass::NonWhitespace => !ch.is_whitespace(),
            CharClass::Any => !is_line_break(ch),
            CharClass::Alphanumeric => is_letter(ch) || ch.is_ascii_digit(),
            CharClass::AlphanumericOrSpace => is_letter(ch) || ch.is_ascii_digit() || ch == ' ',
        }
    }
}

/// Acceptance predicate attached to a pattern slot.
#[derive(Debug, Clone)]
pub enum CharRule {
    Class(CharClass),
    /// Accept exactly the listed characters
    OneOf(Vec<char>),
    /// Decide using the slot's position and the text rendered so far
    Context(ContextFilter),
}

impl CharRule {
    pub fn one_of(chars: &str) -> Self {
        CharRule::OneOf(chars.chars().collect())
    }

    pub fn accepts(&self, ch: char, index: usize, full_text: &[char]) -> bool {
        match self {
            CharRule::Class(class) => class.matches(ch),
            CharRule::OneOf(chars) => chars.contains(&ch),
            CharRule::Context(filter) => filter(ch, index, full_text),
        }
    }
}

impl From<CharClass> for CharRule {
    fn from(class: CharClass) -> Self {
        CharRule::Class(class)
    }
}

/// Glyph lookup used by the parser.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<char, CharRule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleTable {
    /// Table with no glyphs; every pattern character becomes a literal.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let rules = CharClass::ALL
            .into_iter()
            .map(|class| (class.glyph(), CharRule::Class(class)))
            .collect();
        Self { rules }
    }

    /// Register (or override) a glyph. The escape marker is never a rule glyph
    /// and is ignored here.
    pub fn with_rule(mut self, glyph: char, rule: impl Into<CharRule>) -> Self {
        self.insert(glyph, rule);
        self
    }

    /// Returns false when the glyph is reserved and was not registered.
    pub fn insert(&mut self, glyph: char, rule: impl Into<CharRule>) -> bool {
        if glyph == ESCAPE_CHAR {
            return false;
        }
        self.rules.insert(glyph, rule.into());
        true
    }

    pub fn get(&self, glyph: char) -> Option<&CharRule> {
        self.rules.get(&glyph)
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.rules.contains_key(&glyph)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_classes() {
        assert!(CharClass::Digit.matches('7'));
        assert!(!CharClass::Digit.matches(' '));
        assert!(CharClass::DigitOrSpace.matches(' '));
        assert!(CharClass::DigitOrSpace.matches('\t'));
        assert!(!CharClass::DigitOrSpace.matches('x'));
    }

    #[test]
    fn test_signed_class() {
        let c = CharClass::Signed;
        assert!(c.matches('+'));
        assert!(c.matches('-'));
        assert!(c.matches('3'));
        assert!(c.matches(' '));
        assert!(!c.matches('*'));
    }

    #[test]
    fn test_letter_classes() {
        assert!(CharClass::Letter.matches('q'));
        assert!(CharClass::Letter.matches('Z'));
        assert!(CharClass::Letter.matches('é'));
        assert!(CharClass::Letter.matches('ж'));
        assert!(!CharClass::Letter.matches('5'));
        assert!(!CharClass::Letter.matches('['));
        assert!(CharClass::LetterOrSpace.matches(' '));
        // only a plain space counts for the letter-or-space classes
        assert!(!CharClass::LetterOrSpace.matches('\t'));
    }

    #[test]
    fn test_alphanumeric_classes() {
        assert!(CharClass::Alphanumeric.matches('a'));
        assert!(CharClass::Alphanumeric.matches('0'));
        assert!(!CharClass::Alphanumeric.matches(' '));
        assert!(CharClass::AlphanumericOrSpace.matches(' '));
        assert!(!CharClass::AlphanumericOrSpace.matches('-'));
    }

    #[test]
    fn test_any_and_non_whitespace() {
        assert!(CharClass::Any.matches(' '));
        assert!(CharClass::Any.matches('%'));
        assert!(!CharClass::Any.matches('\n'));
        assert!(CharClass::NonWhitespace.matches('%'));
        assert!(!CharClass::NonWhitespace.matches(' '));
    }

    #[test]
    fn test_glyph_round_trip() {
        for class in CharClass::ALL {
            assert_eq!(CharClass::for_glyph(class.glyph()), Some(class));
        }
        assert_eq!(CharClass::for_glyph('-'), None);
    }

    #[test]
    fn test_builtin_table() {
        let table = RuleTable::builtin();
        assert_eq!(table.len(), 9);
        assert!(table.contains('0'));
        assert!(table.contains('a'));
        assert!(!table.contains('-'));
        assert!(!table.contains(ESCAPE_CHAR));
    }

    #[test]
    fn test_custom_rules() {
        let table = RuleTable::builtin()
            .with_rule('H', CharRule::one_of("0123456789abcdefABCDEF"))
            .with_rule('0', CharClass::Letter);
        assert!(table.get('H').unwrap().accepts('f', 0, &[]));
        assert!(!table.get('H').unwrap().accepts('g', 0, &[]));
        // overriding a built-in glyph
        assert!(table.get('0').unwrap().accepts('x', 0, &[]));
    }

    #[test]
    fn test_escape_glyph_is_reserved() {
        let mut table = RuleTable::empty();
        assert!(!table.insert(ESCAPE_CHAR, CharClass::Any));
        assert!(table.is_empty());
    }

    #[test]
    fn test_context_rule_sees_neighbours() {
        // second digit of an hour may only be 0-3 when the first is '2'
        fn hour_second_digit(ch: char, index: usize, text: &[char]) -> bool {
            if !ch.is_ascii_digit() {
                return false;
            }
            match index.checked_sub(1).and_then(|i| text.get(i)) {
                Some('2') => ch <= '3',
                _ => true,
            }
        }

        let rule = CharRule::Context(hour_second_digit);
        assert!(rule.accepts('9', 1, &['1', '_']));
        assert!(!rule.accepts('9', 1, &['2', '_']));
        assert!(rule.accepts('3', 1, &['2', '_']));
    }
}
