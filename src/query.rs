use crate::error::FilterError;
use crate::loader::StrainTable;
use crate::strain::{Column, SortOrder, StrainRecord};
use serde::{Deserialize, Serialize};

/// Sort key used when none is given or the given one is unknown.
pub const DEFAULT_SORT_KEY: Column = Column::Name;
/// Rows per page of the dashboard table.
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Parameters of one table interaction: what to search, how to order it,
/// and which page to show. Every field is optional so a bare request gives
/// the initial dashboard view.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TableQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// One page of a filtered and sorted projection of the table.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TableView {
    pub records: Vec<StrainRecord>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    /// Records matching the search, across all pages.
    pub total: usize,
}

/// Resolve a requested sort key, falling back to [`DEFAULT_SORT_KEY`].
pub fn resolve_sort_key(sort_by: Option<&str>) -> Column {
    match sort_by.and_then(Column::parse) {
        Some(column) => column,
        None => {
            if let Some(key) = sort_by {
                log::debug!("unknown sort key '{}', using {}", key, DEFAULT_SORT_KEY);
            }
            DEFAULT_SORT_KEY
        }
    }
}

/// Stable sort on one column.
///
/// Descending order reverses the comparison rather than the result, so
/// records with equal keys keep their relative order in both directions.
pub fn sort_records(records: &mut [StrainRecord], key: Column, order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.compare(b, key)),
        SortOrder::Desc => records.sort_by(|a, b| b.compare(a, key)),
    }
}

/// Records whose `column` contains `target`, ignoring case
///
/// `target` is matched literally. An empty target matches everything.
///
/// # Errors
/// * `FilterError::InvalidColumn` if `column` is not one of the table's columns
///
/// # Examples
/// ```
/// use marypy::query::filter_records;
/// use marypy::strain::StrainRecord;
///
/// let records = vec![
///     StrainRecord::new("White Widow", Some(4.3), Some(19), "hybrid"),
///     StrainRecord::new("Blue Dream", Some(4.5), Some(21), "hybrid"),
/// ];
/// let found = filter_records(&records, "widow", "Name").unwrap();
/// assert_eq!(found.len(), 1);
/// assert!(filter_records(&records, "widow", "Effects").is_err());
/// ```
pub fn filter_records(
    records: &[StrainRecord],
    target: &str,
    column: &str,
) -> Result<Vec<StrainRecord>, FilterError> {
    let column =
        Column::parse(column).ok_or_else(|| FilterError::InvalidColumn(column.to_string()))?;
    let needle = target.to_lowercase();

    Ok(records
        .iter()
        .filter(|r| r.field_text(column).to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Search the table by column, defaulting to `Name`.
pub fn search_strains(
    table: &StrainTable,
    target: &str,
    search_by: Option<&str>,
) -> Result<Vec<StrainRecord>, FilterError> {
    filter_records(table.records(), target, search_by.unwrap_or("Name"))
}

/// Filter by name, then sort. The full, unpaginated result of a query.
pub fn select_records(table: &StrainTable, query: &TableQuery) -> Vec<StrainRecord> {
    let mut records = match query.search.as_deref().map(str::trim) {
        // Name is always a known column, so the search cannot fail here
        Some(term) if !term.is_empty() => search_strains(table, term, None).unwrap_or_default(),
        _ => table.records().to_vec(),
    };

    let key = resolve_sort_key(query.sort_by.as_deref());
    let order = query
        .order
        .as_deref()
        .map(SortOrder::from_strng)
        .unwrap_or_default();
    sort_records(&mut records, key, order);
    records
}

/// Derive the page of the table a query asks for
///
/// Applies the name search, the sort and then pagination. Pages are
/// 0-based; a page past the end shows the last page.
pub fn build_view(table: &StrainTable, query: &TableQuery) -> TableView {
    let records = select_records(table, query);
    let page_size = query
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    paginate(records, query.page.unwrap_or(0), page_size)
}

fn paginate(records: Vec<StrainRecord>, page: usize, page_size: usize) -> TableView {
    let total = records.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);

    let records = records
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();

    TableView {
        records,
        page,
        page_size,
        page_count,
        total,
    }
}
