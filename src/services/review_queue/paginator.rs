use serde::Serialize;
use sha2::{Digest, Sha256};

use super::classifier::ReviewTab;
use super::filters::ReviewFilters;
use super::sorting::SortSpec;

pub(crate) const PAGE_SIZE: usize = 20;

const CONFIG_KEY_LEN: usize = 16;

/// Why a requested cursor was discarded in favour of the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InvalidCursor {
    BeyondTotal { cursor: u64, total_count: usize },
    StaleConfiguration { cursor: u64 },
}

#[derive(Debug)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) total_count: usize,
    pub(crate) has_more: bool,
    /// Offset the page was actually served from.
    pub(crate) cursor: usize,
    pub(crate) invalid_cursor: Option<InvalidCursor>,
}

impl<T> Page<T> {
    pub(crate) fn next_cursor(&self) -> Option<usize> {
        self.has_more.then(|| self.cursor + self.items.len())
    }
}

#[derive(Serialize)]
struct ConfigurationFingerprint<'a> {
    course_id: i64,
    tab: ReviewTab,
    filters: &'a ReviewFilters,
    sort: SortSpec,
}

/// Fingerprint of a (course, tab, filters, sort) configuration. Cursors are only valid under
/// the configuration that produced them.
pub(crate) fn configuration_key(
    course_id: i64,
    tab: ReviewTab,
    filters: &ReviewFilters,
    sort: SortSpec,
) -> String {
    let payload = serde_json::to_vec(&ConfigurationFingerprint { course_id, tab, filters, sort })
        .unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&payload);
    let mut key = hex::encode(hasher.finalize());
    key.truncate(CONFIG_KEY_LEN);
    key
}

/// Slices `ordered` into one page starting at `cursor`. A cursor past the end, or one issued
/// for a different configuration, restarts from the first page.
pub(crate) fn paginate<T>(
    ordered: Vec<T>,
    page_size: usize,
    cursor: u64,
    same_configuration: bool,
) -> Page<T> {
    let total_count = ordered.len();

    let invalid_cursor = if !same_configuration && cursor > 0 {
        Some(InvalidCursor::StaleConfiguration { cursor })
    } else if usize::try_from(cursor).map_or(true, |value| value > total_count) {
        Some(InvalidCursor::BeyondTotal { cursor, total_count })
    } else {
        None
    };

    let start = match invalid_cursor {
        Some(_) => 0,
        None => cursor as usize,
    };

    let items = ordered.into_iter().skip(start).take(page_size).collect::<Vec<_>>();
    let has_more = start + items.len() < total_count;

    Page { items, total_count, has_more, cursor: start, invalid_cursor }
}
