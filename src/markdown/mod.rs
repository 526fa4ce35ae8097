//! Minimal line-prefix markdown renderer for review reports.
//!
//! Each line is classified independently against an ordered rule table;
//! there is no lookahead and no state carried between lines. Fence lines
//! (```` ``` ````) are dropped, and the lines between two fences are not
//! reassembled into a code block: they fall through to paragraphs.

use crate::models::DisplayBlock;

/// A line-prefix rule: when a line starts with any of `prefixes`,
/// `build` receives the remainder and decides what (if anything) to emit.
struct Rule {
    prefixes: &'static [&'static str],
    build: fn(&str) -> Option<DisplayBlock>,
}

/// Evaluated top to bottom; the first matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        prefixes: &["## "],
        build: |rest| Some(DisplayBlock::heading(2, rest)),
    },
    Rule {
        prefixes: &["### "],
        build: |rest| Some(DisplayBlock::heading(3, rest)),
    },
    Rule {
        prefixes: &["* ", "- "],
        build: |rest| Some(DisplayBlock::list_item(rest)),
    },
    Rule {
        prefixes: &["```"],
        build: |_| None,
    },
];

/// Render a report into display blocks, one input line to at most one block.
pub fn render(report: &str) -> Vec<DisplayBlock> {
    report.split('\n').filter_map(classify_line).collect()
}

/// Classify a single line. `None` means the line is suppressed.
pub fn classify_line(line: &str) -> Option<DisplayBlock> {
    for rule in RULES {
        for prefix in rule.prefixes {
            if let Some(rest) = line.strip_prefix(prefix) {
                return (rule.build)(rest);
            }
        }
    }
    Some(DisplayBlock::paragraph(line))
}
