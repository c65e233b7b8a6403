use serde::Serialize;

/// Cursor-paged list. `next_cursor` is present only while `has_more` is true and is only valid
/// together with the `config_key` it was returned with.
#[derive(Debug, Serialize)]
pub(crate) struct CursorPaginatedResponse<T> {
    pub(crate) items: Vec<T>,
    pub(crate) total_count: usize,
    pub(crate) has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) next_cursor: Option<usize>,
    pub(crate) cursor_reset: bool,
    pub(crate) config_key: String,
}
