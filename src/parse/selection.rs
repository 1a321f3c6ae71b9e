use std::collections::BTreeSet;
use std::num::IntErrorKind;

/// Widest range accepted in a single `start-end` token. Wider ranges are
/// discarded like any other malformed token.
pub const MAX_RANGE_SPAN: usize = 10_000;

/// A deduplicated, ascending set of 1-based list positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<usize>);

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.0.contains(&position)
    }

    /// Positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Positions highest first, the order batches are applied in
    pub fn descending(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().rev().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Selection(iter.into_iter().collect())
    }
}

/// Parse a selection such as `1 3-5,7` into positions.
///
/// Tokens are separated by commas and/or whitespace. A token containing `-`
/// is an inclusive range; anything else must be a single integer. Malformed
/// tokens contribute nothing. A reversed range (`5-2`) is empty.
pub fn parse_selection(raw: &str) -> Selection {
    let mut positions = BTreeSet::new();
    for token in raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if token.contains('-') {
            if let Some((start, end)) = parse_range(token) {
                positions.extend(start..=end);
            }
        } else if let Some(n) = parse_number(token) {
            positions.insert(n);
        }
    }
    Selection(positions)
}

/// Join CLI argument tokens and parse them as one selection
pub fn parse_selection_args<S: AsRef<str>>(tokens: &[S]) -> Selection {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    parse_selection(&joined)
}

fn parse_range(token: &str) -> Option<(usize, usize)> {
    let mut parts = token.split('-');
    let start = parse_number(parts.next()?)?;
    let end = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    if end >= start && end - start >= MAX_RANGE_SPAN {
        return None;
    }
    Some((start, end))
}

/// An integer token. Digits too large for `usize` saturate so the position
/// is reported as out of range rather than dropped as malformed.
fn parse_number(s: &str) -> Option<usize> {
    match s.parse() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => None,
    }
}
