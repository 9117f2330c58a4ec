//! Spreadsheet export of submitted records

use super::traits::Exporter;
use crate::state::{FieldKind, FormRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// Base file name of the exported spreadsheet
pub const DEFAULT_FILE_NAME: &str = "Form_Data";

/// Worksheet name used for the single sheet
const SHEET_NAME: &str = "Sheet1";

/// Render records as an XLSX workbook
///
/// The first row holds the record keys, every following row one record.
/// Cells are written as strings so values like passwords keep their
/// leading zeros.
pub fn to_xlsx(rows: &[FormRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(SHEET_NAME)?;

    for (col, field) in FieldKind::ALL.iter().enumerate() {
        worksheet.write_string(0, col as u16, field.key())?;
    }

    for (r, record) in rows.iter().enumerate() {
        let row = (r + 1) as u32;
        for (col, (_, value)) in record.entries().iter().enumerate() {
            worksheet.write_string(row, col as u16, *value)?;
        }
    }

    workbook.push_worksheet(worksheet);
    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}

/// Replace characters that are unsafe in file names with underscores
pub fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Exporter that writes `<dir>/<base_name>.xlsx`
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    dir: PathBuf,
}

impl XlsxExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path for a base name
    pub fn path_for(&self, base_name: &str) -> PathBuf {
        let name = sanitize_filename(base_name);
        let name = if name.trim().is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            name
        };
        self.dir.join(format!("{name}.xlsx"))
    }
}

#[async_trait]
impl Exporter for XlsxExporter {
    async fn export(&self, rows: &[FormRecord], base_name: &str) -> Result<PathBuf> {
        let bytes = to_xlsx(rows)?;
        let path = self.path_for(base_name);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Exported {} record(s) to {}", rows.len(), path.display());
        Ok(path)
    }
}
