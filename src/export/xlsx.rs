// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::{OverviewExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Export XLSX: week cells are Excel durations (`[h]:mm`) filled green when
/// the target is met and red otherwise.
pub(crate) fn export_xlsx(data: &OverviewExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Weekuren").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = data.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 1).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let met = Format::new()
        .set_num_format("[h]:mm")
        .set_font_color(Color::RGB(0x1B5E20))
        .set_background_color(Color::RGB(0xE8F5E9))
        .set_pattern(FormatPattern::Solid)
        .set_bold()
        .set_border(FormatBorder::Thin);
    let missed = Format::new()
        .set_num_format("[h]:mm")
        .set_font_color(Color::RGB(0xB71C1C))
        .set_background_color(Color::RGB(0xFFEBEE))
        .set_pattern(FormatPattern::Solid)
        .set_bold()
        .set_border(FormatBorder::Thin);
    let plain = Format::new().set_border(FormatBorder::Thin);
    let duration = Format::new()
        .set_num_format("[h]:mm")
        .set_border(FormatBorder::Thin);
    let number = Format::new()
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);

    // ---------------------------
    // Rows
    // ---------------------------
    let week_labels = &data.overview.week_labels;

    for (idx, s) in data.overview.students.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet
            .write_with_format(row, 0, s.student_name.as_str(), &plain)
            .map_err(to_app_error)?;
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(s.student_name.as_str()));

        for (w_idx, w) in week_labels.iter().enumerate() {
            let col = (w_idx + 1) as u16;
            match s.weeks.get(w) {
                Some(minutes) => {
                    let fmt = if data.meets_target(*minutes) { &met } else { &missed };
                    worksheet
                        .write_with_format(row, col, *minutes as f64 / MINUTES_PER_DAY, fmt)
                        .map_err(to_app_error)?;
                }
                None => {
                    worksheet.write_blank(row, col, &plain).map_err(to_app_error)?;
                }
            }
        }

        let total_col = (week_labels.len() + 1) as u16;
        worksheet
            .write_with_format(row, total_col, s.total_minutes as f64 / MINUTES_PER_DAY, &duration)
            .map_err(to_app_error)?;
        worksheet
            .write_with_format(row, total_col + 1, s.total_minutes as f64, &number)
            .map_err(to_app_error)?;
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).max(8) as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
