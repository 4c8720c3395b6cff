//! Spreadsheet export.
//!
//! Writes the generated rows to a single-sheet `.xlsx` workbook held in
//! memory: bold powder-blue header, bordered cells, fixed column widths.
//! The [`grid`] projection exposes the exact cell values for testing.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use crate::models::{ScheduleRow, COLUMN_HEADERS};

const SHEET_NAME: &str = "Schedule";
const POWDER_BLUE: Color = Color::RGB(0xB0E0E6);
const COLUMN_WIDTHS: [f64; 4] = [15.0, 10.0, 15.0, 15.0];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Cell values row by row, in `COLUMN_HEADERS` order, header excluded.
pub fn grid(rows: &[ScheduleRow]) -> Vec<[String; 4]> {
    rows.iter().map(ScheduleRow::cells).collect()
}

/// Build the workbook and return its bytes, ready to stream as a download.
pub fn write_workbook(rows: &[ScheduleRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(POWDER_BLUE)
        .set_border(FormatBorder::Thin);
    let cell_format = Format::new().set_border(FormatBorder::Thin);

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        match row {
            ScheduleRow::Trial { slot, .. } => {
                let cells = row.cells();
                worksheet.write_string_with_format(r, 0, &cells[0], &cell_format)?;
                // slot numbers stay numeric in the sheet
                worksheet.write_number_with_format(r, 1, f64::from(*slot), &cell_format)?;
                worksheet.write_string_with_format(r, 2, &cells[2], &cell_format)?;
                worksheet.write_string_with_format(r, 3, &cells[3], &cell_format)?;
            }
            ScheduleRow::Lunch { .. } | ScheduleRow::Separator => {
                for (col, value) in row.cells().iter().enumerate() {
                    worksheet.write_string_with_format(r, col as u16, value, &cell_format)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
