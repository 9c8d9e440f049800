use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use lfs_core::errors::{ErrorInfo, LfsError};
use lfs_shapes::Shape;
use tracing::info;

use crate::report::BenchmarkReport;
use crate::runner::ShapeSheet;
use crate::serde::to_canonical_json_bytes;

/// Receives finished sheets, one call per shape.
pub trait SheetSink {
    /// Persists or collects one sheet.
    fn write_sheet(&mut self, sheet: &ShapeSheet) -> Result<(), LfsError>;
}

impl SheetSink for Vec<ShapeSheet> {
    fn write_sheet(&mut self, sheet: &ShapeSheet) -> Result<(), LfsError> {
        self.push(sheet.clone());
        Ok(())
    }
}

/// Writes each sheet to `<dir>/<Shape Name>.csv`.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvSink {
    /// Creates the output directory if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, LfsError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| io_error("output-dir", &dir, err))?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File the sheet of `shape` is written to.
    pub fn path_for(&self, shape: Shape) -> PathBuf {
        self.dir.join(format!("{}.csv", shape.name()))
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SheetSink for CsvSink {
    fn write_sheet(&mut self, sheet: &ShapeSheet) -> Result<(), LfsError> {
        let path = self.path_for(sheet.shape);
        let file = File::create(&path).map_err(|err| io_error("sheet-create", &path, err))?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        for record in sheet_records(sheet) {
            writer
                .write_record(&record)
                .map_err(|err| wrap_csv("sheet-write", err))?;
        }
        writer
            .flush()
            .map_err(|err| io_error("sheet-flush", &path, err))?;
        info!(shape = sheet.shape.name(), path = %path.display(), "wrote sheet");
        self.written.push(path);
        Ok(())
    }
}

/// Header plus one record per size, in the sheet layout.
///
/// Columns: `Sample Count`, then `Min`, `Max`, `Avg`, `Single` per strategy,
/// then `Sequence`, the sample sequence's element at `size - 1`.
pub fn sheet_records(sheet: &ShapeSheet) -> Vec<Vec<String>> {
    let mut header = Vec::with_capacity(2 + sheet.columns.len() * 4);
    header.push("Sample Count".to_string());
    for column in &sheet.columns {
        let name = column.strategy.name();
        for stat in ["Min", "Max", "Avg", "Single"] {
            header.push(format!("{name} {stat}"));
        }
    }
    header.push("Sequence".to_string());

    let mut records = Vec::with_capacity(sheet.sizes.count() + 1);
    records.push(header);
    for (row, size) in sheet.sizes.iter().enumerate() {
        let mut record = Vec::with_capacity(records[0].len());
        record.push(size.to_string());
        for column in &sheet.columns {
            match column.rows.get(row) {
                Some(stats) => {
                    record.push(stats.min_guesses.to_string());
                    record.push(stats.max_guesses.to_string());
                    record.push(format!("{:.6}", stats.running_average));
                    record.push(stats.last_sample.to_string());
                }
                None => record.extend(std::iter::repeat(String::new()).take(4)),
            }
        }
        record.push(
            sheet
                .sample_sequence
                .get(size - 1)
                .map(u64::to_string)
                .unwrap_or_default(),
        );
        records.push(record);
    }
    records
}

/// Writes `report` as canonical JSON to `<dir>/report.json`.
pub fn write_report(dir: &Path, report: &BenchmarkReport) -> Result<PathBuf, LfsError> {
    fs::create_dir_all(dir).map_err(|err| io_error("output-dir", dir, err))?;
    let path = dir.join("report.json");
    let bytes = to_canonical_json_bytes(report)?;
    fs::write(&path, bytes).map_err(|err| io_error("report-write", &path, err))?;
    Ok(path)
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> LfsError {
    LfsError::Io(
        ErrorInfo::new(code, "output file failure")
            .with_context("path", path.display())
            .with_hint(err.to_string()),
    )
}

fn wrap_csv(code: &str, err: csv::Error) -> LfsError {
    LfsError::Serde(ErrorInfo::new(code, "CSV sheet failure").with_hint(err.to_string()))
}
