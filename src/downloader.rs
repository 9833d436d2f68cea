use crate::error::ExportError;
use crate::strain::{Column, StrainRecord};
use csv::WriterBuilder;

/// Convert a view of the table to CSV format
///
/// Writes a header row with the displayed column names followed by one row
/// per record. Missing numbers are written as empty fields, and `THC%` is
/// written as the cleaned integer.
///
/// # Arguments
/// * `records` - The records to export, in the order they should appear
///
/// # Returns
/// * `Result<String, ExportError>` - CSV content as a string or an error
///
/// # Examples
/// ```
/// use marypy::downloader::to_csv;
/// use marypy::strain::StrainRecord;
///
/// let records = vec![StrainRecord::new("Blue Dream", Some(4.5), Some(21), "hybrid")];
/// let csv = to_csv(&records).unwrap();
/// assert_eq!(csv, "Name,Rating,THC%,Type\nBlue Dream,4.5,21,hybrid\n");
/// ```
pub fn to_csv(records: &[StrainRecord]) -> Result<String, ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    wtr.write_record(Column::ALL.iter().map(|c| c.as_str()))?;
    for record in records {
        wtr.serialize(record)?;
    }

    let buffer = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(buffer)?)
}

/// Convert a view of the table to XLSX format
///
/// The header row is bold. Ratings and THC values are written as numbers so
/// they sort as numbers in a spreadsheet; missing values are left blank.
///
/// # Returns
/// * `Result<Vec<u8>, ExportError>` - XLSX file content as bytes or an error
#[cfg(feature = "web")]
pub fn to_xlsx(records: &[StrainRecord]) -> Result<Vec<u8>, ExportError> {
    use rust_xlsxwriter::{Format, Workbook, XlsxError};

    let xlsx_err = |e: XlsxError| ExportError::Xlsx(e.to_string());

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (c, column) in Column::ALL.iter().enumerate() {
        worksheet
            .write_string_with_format(0, c as u16, column.as_str(), &header)
            .map_err(xlsx_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.name).map_err(xlsx_err)?;
        if let Some(rating) = record.rating {
            worksheet.write_number(row, 1, rating).map_err(xlsx_err)?;
        }
        if let Some(thc) = record.thc {
            worksheet.write_number(row, 2, thc as f64).map_err(xlsx_err)?;
        }
        worksheet
            .write_string(row, 3, &record.strain_type)
            .map_err(xlsx_err)?;
    }

    let buffer = workbook.save_to_buffer().map_err(xlsx_err)?;
    Ok(buffer)
}
