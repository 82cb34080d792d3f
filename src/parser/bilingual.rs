use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;
use crate::model::BilingualText;

static TR_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<tr\b[^>]*>").unwrap());
static TD_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<td\b[^>]*>").unwrap());
static ROW_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</tr\s*>|<tr\b[^>]*>|</table\s*>").unwrap());

/// Recover a Latin/English pair from a fragment that should hold a parallel
/// two-column row. The corpus routinely drops closing tags, so instead of a
/// well-formed table parse this runs a cascade, first success wins:
///
/// 1. first table row (closed or not), split at its second cell opening;
/// 2. relaxed: first two cell openings anywhere in the fragment;
/// 3. the whole fragment normalized as English only.
///
/// Tiers 1 and 2 reject a split where either side normalizes to nothing and
/// fall through; tier 3 always succeeds, so the function is total.
pub fn split_bilingual(fragment: &str) -> BilingualText {
    if let Some(text) = split_first_row(fragment) {
        return text;
    }
    if let Some(text) = split_at_cells(fragment) {
        return text;
    }
    BilingualText::english_only(normalize(fragment))
}

/// Tier 1: bound the fragment to its first row, then split on cells. A row
/// ends at `</tr>`, the next `<tr>`, `</table>`, or the end of the fragment.
fn split_first_row(fragment: &str) -> Option<BilingualText> {
    let open = TR_OPEN_RE.find(fragment)?;
    let rest = &fragment[open.end()..];
    let row = match ROW_END_RE.find(rest) {
        Some(end) => &rest[..end.start()],
        None => rest,
    };
    split_at_cells(row)
}

/// Tier 2 (also the splitting step of tier 1): first cell is Latin, second
/// is English. Leftover `</td>`/`</tr>` debris disappears in normalization.
fn split_at_cells(fragment: &str) -> Option<BilingualText> {
    let mut cells = TD_OPEN_RE.find_iter(fragment);
    let first = cells.next()?;
    let second = cells.next()?;

    let latin = normalize(&fragment[first.end()..second.start()]);
    let english = normalize(&fragment[second.end()..]);
    if latin.is_empty() || english.is_empty() {
        return None;
    }
    Some(BilingualText { latin, english })
}
