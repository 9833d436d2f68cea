use crate::error::LoadError;
use crate::strain::{Column, StrainRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

lazy_static! {
    static ref NON_DIGIT_REGEX: Regex = Regex::new(r"\D").unwrap();
}

/// Cell values read as missing, the same set `pandas.read_csv` treats as NA.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Location of the strain dataset, relative to the working directory.
pub const DEFAULT_STRAINS_PATH: &str = "./data/strains_cleaned.csv";

/// The loaded strain directory.
///
/// Built once at startup and never mutated afterwards; every table the
/// user sees is a view derived from these records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrainTable {
    records: Vec<StrainRecord>,
}

impl StrainTable {
    /// Wrap records, ordering them by name the way the dashboard first shows them.
    pub fn new(mut records: Vec<StrainRecord>) -> Self {
        records.sort_by(|a, b| a.compare(b, Column::Name));
        StrainTable { records }
    }

    pub fn records(&self) -> &[StrainRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the strain directory from a CSV file
///
/// Reads the file, keeps only the `Name`, `Rating`, `THC%` and `Type`
/// columns and cleans `THC%` into an integer percentage. Columns may appear
/// in any order and any other column is ignored.
///
/// # Arguments
/// * `filepath` - Path to the CSV file to load
///
/// # Returns
/// * `Result<StrainTable, LoadError>` - The cleaned table or an error
///
/// # Examples
/// ```no_run
/// use marypy::loader::{load_strains, DEFAULT_STRAINS_PATH};
///
/// match load_strains(DEFAULT_STRAINS_PATH) {
///     Ok(table) => println!("Loaded {} strains", table.len()),
///     Err(e) => eprintln!("Error loading CSV: {}", e),
/// }
/// ```
pub fn load_strains(filepath: impl AsRef<Path>) -> Result<StrainTable, LoadError> {
    let file = File::open(filepath)?;
    from_reader(file)
}

/// Load the strain directory from any CSV source
///
/// Same cleaning rules as [`load_strains`]; used for files and for
/// in-memory data alike.
///
/// # Errors
/// * `LoadError::MissingColumn` if one of the four columns is not in the header
/// * `LoadError::InvalidRating` if a rating is neither a number nor an NA token
/// * `LoadError::Csv` for malformed CSV
pub fn from_reader<R: Read>(reader: R) -> Result<StrainTable, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_idx = column_index(&headers, Column::Name)?;
    let rating_idx = column_index(&headers, Column::Rating)?;
    let thc_idx = column_index(&headers, Column::Thc)?;
    let type_idx = column_index(&headers, Column::Type)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let rating = parse_rating(field(rating_idx), line)?;

        records.push(StrainRecord {
            name: field(name_idx).to_string(),
            rating,
            thc: parse_thc(field(thc_idx)),
            strain_type: field(type_idx).to_string(),
        });
    }

    log::debug!("loaded {} strain rows", records.len());
    Ok(StrainTable::new(records))
}

/// Clean a THC percentage such as `"18%"` into `18`
///
/// Every non-digit character is removed before parsing, so `"18 %"` and
/// `"18"` give the same value. A decimal point is removed too, which turns
/// `"18.5%"` into `185`. A field without any digits, an NA token such as
/// `"N/A"`, or a digit run too large for a `u32` (`"12345678901%"`) gives
/// `None`.
///
/// # Examples
/// ```
/// use marypy::loader::parse_thc;
///
/// assert_eq!(parse_thc("21%"), Some(21));
/// assert_eq!(parse_thc("18 %"), Some(18));
/// assert_eq!(parse_thc("n/a"), None);
/// ```
pub fn parse_thc(raw: &str) -> Option<u32> {
    if is_na(raw) {
        return None;
    }
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}

/// Parse the rating cell found on CSV line `line`.
///
/// Empty cells and NA tokens are missing ratings; any other text that is
/// not a finite number is an error.
pub fn parse_rating(raw: &str, line: u64) -> Result<Option<f64>, LoadError> {
    if is_na(raw) {
        return Ok(None);
    }
    match raw.trim().parse::<f64>() {
        Ok(r) if r.is_finite() => Ok(Some(r)),
        _ => Err(LoadError::InvalidRating {
            line,
            value: raw.to_string(),
        }),
    }
}

fn is_na(raw: &str) -> bool {
    NA_TOKENS.contains(&raw.trim())
}

fn column_index(headers: &StringRecord, column: Column) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == column.as_str())
        .ok_or(LoadError::MissingColumn(column.as_str()))
}
