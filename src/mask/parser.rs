//! Mask pattern parsing.
//!
//! Each pattern glyph produces one node. A glyph known to the [`RuleTable`]
//! becomes a pattern slot, anything else a literal. `\x` produces a single
//! literal `x` whatever `x` is. A lone `\` at the very end of the pattern is
//! kept as a literal backslash.

use super::node::RuleNode;
use super::rules::{RuleTable, ESCAPE_CHAR};

/// Parse `pattern` into a node sequence ending with a terminal node.
pub fn parse(pattern: &str, rules: &RuleTable) -> Vec<RuleNode> {
    let glyphs: Vec<char> = pattern.chars().collect();
    let mut nodes = Vec::with_capacity(glyphs.len() + 1);
    let mut index = 0;

    while let Some(&glyph) = glyphs.get(index) {
        let (node, width) = if glyph == ESCAPE_CHAR {
            match glyphs.get(index + 1) {
                Some(&escaped) => (RuleNode::literal(escaped), 2),
                None => (RuleNode::literal(ESCAPE_CHAR), 1),
            }
        } else {
            (node_for_glyph(glyph, rules), 1)
        };

        nodes.push(node);
        index += width;
    }

    nodes.push(RuleNode::terminal());
    nodes
}

fn node_for_glyph(glyph: char, rules: &RuleTable) -> RuleNode {
    match rules.get(glyph) {
        Some(rule) => RuleNode::pattern(glyph, rule.clone()),
        None => RuleNode::literal(glyph),
    }
}

/// Number of slots `pattern` produces (terminal excluded).
pub fn slot_count(pattern: &str) -> usize {
    let mut count = 0;
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHAR {
            chars.next();
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::node::NodeKind;

    fn kinds(pattern: &str) -> Vec<String> {
        parse(pattern, &RuleTable::builtin())
            .iter()
            .map(|node| match node.kind() {
                NodeKind::Terminal => "$".to_string(),
                NodeKind::Pattern { glyph, .. } => format!("p{}", glyph),
                NodeKind::Literal(ch) => format!("l{}", ch),
            })
            .collect()
    }

    #[test]
    fn test_phone_pattern() {
        assert_eq!(
            kinds("(00) 0"),
            vec!["l(", "p0", "p0", "l)", "l ", "p0", "$"]
        );
    }

    #[test]
    fn test_empty_pattern_is_terminal_only() {
        assert_eq!(kinds(""), vec!["$"]);
    }

    #[test]
    fn test_escape_makes_literal() {
        assert_eq!(kinds("\\000"), vec!["l0", "p0", "p0", "$"]);
        assert_eq!(kinds("\\\\0"), vec!["l\\", "p0", "$"]);
        assert_eq!(kinds("a\\-"), vec!["pa", "l-", "$"]);
    }

    #[test]
    fn test_trailing_escape_is_literal_backslash() {
        assert_eq!(kinds("00\\"), vec!["p0", "p0", "l\\", "$"]);
    }

    #[test]
    fn test_all_builtin_glyphs() {
        assert_eq!(
            kinds("09#LlCcAa"),
            vec!["p0", "p9", "p#", "pL", "pl", "pC", "pc", "pA", "pa", "$"]
        );
    }

    #[test]
    fn test_custom_glyph() {
        let rules = RuleTable::builtin().with_rule('H', crate::mask::CharRule::one_of("abc"));
        let nodes = parse("H-H", &rules);
        assert!(nodes[0].is_pattern());
        assert!(nodes[1].is_literal());
        assert!(nodes[2].is_pattern());
    }

    #[test]
    fn test_slot_count_matches_parse() {
        for pattern in ["", "000-0000", "\\000", "+1 (000) 000-0000", "\\\\\\", "ab\\"] {
            let nodes = parse(pattern, &RuleTable::builtin());
            assert_eq!(nodes.len() - 1, slot_count(pattern), "pattern {:?}", pattern);
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(kinds("+1 (\\000) 000-0000"), kinds("+1 (\\000) 000-0000"));
    }

    #[test]
    fn test_long_pattern() {
        let pattern = format!("{}\\", "0\\0".repeat(100_000));
        let nodes = parse(&pattern, &RuleTable::builtin());
        assert_eq!(nodes.len(), slot_count(&pattern) + 1);
        assert_eq!(nodes.len(), 200_002);
        assert!(nodes[1].is_literal());
        assert!(nodes[199_998].is_pattern());
        assert!(nodes[200_000].is_literal());
        assert!(nodes[200_001].is_terminal());
    }
}
