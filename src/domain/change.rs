use std::fmt;

use tracing::debug;

use crate::domain::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insertions,
    Deletions,
}

impl ChangeKind {
    pub fn noun(&self) -> &'static str {
        match self {
            ChangeKind::Insertions => "insertion",
            ChangeKind::Deletions => "deletion",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            ChangeKind::Insertions => "(+)",
            ChangeKind::Deletions => "(-)",
        }
    }

    /// Find `<digits><whitespace>insertion[s](+)` (or the deletion form) anywhere in
    /// `line` and return the digits. The leftmost match wins: if its count does not fit
    /// in a `u64` the line yields `None`, later mentions are not tried.
    pub fn extract_count(&self, line: &str) -> Option<u64> {
        let noun = self.noun();
        if !line.contains(noun) {
            return None;
        }

        for (start, _) in line.match_indices(noun) {
            let rest = &line[start + noun.len()..];
            let rest = rest.strip_prefix('s').unwrap_or(rest);
            if !rest.starts_with(self.marker()) {
                continue;
            }
            let Some(digits) = trailing_count(&line[..start]) else {
                continue;
            };
            match digits.parse::<u64>() {
                Ok(count) => return Some(count),
                Err(err) => {
                    debug!(%line, kind = noun, "skipping unparseable count: {err}");
                    return None;
                }
            }
        }

        debug!(%line, kind = noun, "line mentions changes but has no count");
        None
    }
}

/// The digit run that ends right before the whitespace at the end of `prefix`.
/// Only ASCII digits count; git writes shortstat numbers in ASCII.
fn trailing_count(prefix: &str) -> Option<&str> {
    let before_space = prefix.trim_end_matches(char::is_whitespace);
    if before_space.len() == prefix.len() {
        return None;
    }
    let digits_start = before_space
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .len();
    let digits = &before_space[digits_start..];
    if digits.is_empty() { None } else { Some(digits) }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeTotals {
    pub insertions: u64,
    pub deletions: u64,
}

impl ChangeTotals {
    pub fn new(insertions: u64, deletions: u64) -> Self {
        Self {
            insertions,
            deletions,
        }
    }

    pub fn aggregate(report: &Report) -> Self {
        report
            .lines()
            .map(Self::from_line)
            .fold(Self::default(), Self::merge)
    }

    /// Counts a single line contributes. Both kinds are checked independently.
    pub fn from_line(line: &str) -> Self {
        Self {
            insertions: ChangeKind::Insertions.extract_count(line).unwrap_or(0),
            deletions: ChangeKind::Deletions.extract_count(line).unwrap_or(0),
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            insertions: self.insertions.saturating_add(other.insertions),
            deletions: self.deletions.saturating_add(other.deletions),
        }
    }

    pub fn net_change(&self) -> i128 {
        i128::from(self.insertions) - i128::from(self.deletions)
    }
}

impl fmt::Display for ChangeTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total insertions: {}", self.insertions)?;
        writeln!(f, "Total deletions: {}", self.deletions)?;
        write!(f, "Net change: {}", self.net_change())
    }
}
