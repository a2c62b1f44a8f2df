// ABOUTME: Text-area encoding for ordered string sequences (ingredients, instructions)
// ABOUTME: One entry per line, surrounding whitespace trimmed, blank lines dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

/// Parse text-area input into an ordered list of entries
///
/// Each line becomes one entry. Leading and trailing whitespace is trimmed per
/// line and lines left empty are dropped. Order is preserved.
#[must_use]
pub fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join entries back into text-area form (one entry per line)
#[must_use]
pub fn join_lines(entries: &[String]) -> String {
    entries.join("\n")
}
