//! Brace expansion for content patterns.
//!
//! `glob::Pattern` has no notion of `{a,b}` alternatives, so each group is
//! expanded up front and every alternative is checked on its own. Braces
//! inside a `[...]` class, and braces with no partner, are literal text and
//! are left for `glob::Pattern` to judge.

use std::collections::HashMap;

/// Upper bound on the number of alternatives one pattern may expand to.
pub(crate) const MAX_EXPANSIONS: usize = 1024;

/// Upper bound on the number of brace groups in one pattern.
pub(crate) const MAX_GROUPS: usize = 128;

/// Expand every `{a,b,...}` group in `pattern`. Groups may nest.
///
/// A group without a comma expands to its single alternative.
pub fn expand_braces(pattern: &str) -> Result<Vec<String>, String> {
    let scan = Scan::new(pattern);
    if scan.groups.len() > MAX_GROUPS {
        return Err(format!("more than {MAX_GROUPS} brace groups"));
    }
    scan.expand(pattern, 0, pattern.len())
}

/// Byte offsets of the structural parts of a pattern. Every delimiter is
/// ASCII, so each offset is a char boundary.
#[derive(Default)]
struct Scan {
    /// Offset of a matched `{` to the offset of its `}`.
    groups: HashMap<usize, usize>,
    /// Offset of a `[` to the offset just past its closing `]`.
    classes: HashMap<usize, usize>,
}

impl Scan {
    fn new(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        let mut scan = Self::default();
        let mut open = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'[' => {
                    if let Some(end) = class_end(bytes, i) {
                        scan.classes.insert(i, end);
                        i = end;
                        continue;
                    }
                }
                b'{' => open.push(i),
                b'}' => {
                    if let Some(start) = open.pop() {
                        scan.groups.insert(start, i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        scan
    }

    /// Expand `pattern[start..end]`. Recursion depth is bounded by the
    /// nesting depth, which `MAX_GROUPS` caps.
    fn expand(&self, pattern: &str, start: usize, end: usize) -> Result<Vec<String>, String> {
        let mut out = vec![String::new()];
        let mut literal = start;
        let mut i = start;
        while i < end {
            if let Some(&close) = self.groups.get(&i) {
                push_literal(&mut out, &pattern[literal..i]);

                let mut alternatives = Vec::new();
                for (alt_start, alt_end) in self.alternatives(pattern.as_bytes(), i, close) {
                    alternatives.extend(self.expand(pattern, alt_start, alt_end)?);
                    if alternatives.len() > MAX_EXPANSIONS {
                        return Err(too_many());
                    }
                }
                out = product(&out, &alternatives)?;

                i = close + 1;
                literal = i;
            } else if let Some(&past) = self.classes.get(&i) {
                i = past;
            } else {
                i += 1;
            }
        }
        push_literal(&mut out, &pattern[literal..end]);
        Ok(out)
    }

    /// Spans of the top-level alternatives of the group at `open..=close`.
    fn alternatives(&self, bytes: &[u8], open: usize, close: usize) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = open + 1;
        let mut i = start;
        while i < close {
            if let Some(&inner) = self.groups.get(&i) {
                i = inner + 1;
            } else if let Some(&past) = self.classes.get(&i) {
                i = past;
            } else {
                if bytes[i] == b',' {
                    spans.push((start, i));
                    start = i + 1;
                }
                i += 1;
            }
        }
        spans.push((start, close));
        spans
    }
}

/// End (exclusive) of the `[...]` class opening at `open`, using the same
/// rules as `glob::Pattern`: an optional `!`, then a first member that may
/// itself be `]`.
fn class_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if bytes.get(i) == Some(&b'!') {
        i += 1;
    }
    i += 1;
    while i < bytes.len() {
        if bytes[i] == b']' {
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

fn push_literal(out: &mut [String], text: &str) {
    if text.is_empty() {
        return;
    }
    for s in out.iter_mut() {
        s.push_str(text);
    }
}

fn product(prefixes: &[String], suffixes: &[String]) -> Result<Vec<String>, String> {
    if prefixes.len().saturating_mul(suffixes.len()) > MAX_EXPANSIONS {
        return Err(too_many());
    }
    Ok(prefixes
        .iter()
        .flat_map(|p| suffixes.iter().map(move |s| format!("{p}{s}")))
        .collect())
}

fn too_many() -> String {
    format!("expands to more than {MAX_EXPANSIONS} patterns")
}
