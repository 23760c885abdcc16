// src/export/logic.rs

use crate::core::LocationTimeTableParser;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::collect_rows;
use crate::export::ExportFormat;
use crate::models::{Location, ScheduleKind};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Exports the weekly timetables of `locations`.
    ///
    /// - `format`: csv | json
    /// - `file`: output path; an existing file is only replaced with `force`
    ///   or after confirmation
    pub fn export(
        parser: &mut LocationTimeTableParser,
        locations: &[Location],
        kinds: &[ScheduleKind],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let rows = collect_rows(parser, locations, kinds);
        if rows.is_empty() {
            return Err(AppError::Export(
                "nothing to export: no schedule rows found".into(),
            ));
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
