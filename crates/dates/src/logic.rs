use repo_core::{DateRange, Record, YearCounts};
use std::collections::BTreeMap;

const DATE_LEN: usize = 10;
const YEAR_LEN: usize = 4;

/// Min/max over the full `date_dsi` strings, truncated to `YYYY-MM-DD` afterwards.
///
/// Lexicographic order matches chronological order for ISO prefixes, so no
/// date parsing happens here. Returns `None` for an empty slice.
pub fn date_range(docs: &[Record], num_found: u64) -> Option<DateRange> {
    let mut dates = docs.iter().map(|r| r.date_dsi.as_str());
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    });

    Some(DateRange {
        min_date: prefix(min, DATE_LEN).to_string(),
        max_date: prefix(max, DATE_LEN).to_string(),
        rows_returned: docs.len(),
        num_found,
    })
}

pub fn year_counts(docs: &[Record], num_found: u64) -> YearCounts {
    let mut years = BTreeMap::new();
    for record in docs {
        *years
            .entry(prefix(&record.date_dsi, YEAR_LEN).to_string())
            .or_insert(0) += 1;
    }

    YearCounts {
        rows_returned: docs.len(),
        num_found,
        years,
    }
}

/// First `n` characters of `s`, or all of it when shorter.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
