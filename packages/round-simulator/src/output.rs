//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, RoundMetrics};
use crate::types::OutputFormat;

enum DetailWriter {
    /// One JSON object per line, flushed as rounds finish.
    Lines(Box<dyn Write + Send>),
    /// A single JSON array, written on finish.
    Array {
        writer: Box<dyn Write + Send>,
        rounds: Vec<RoundMetrics>,
    },
}

pub struct OutputWriter {
    detail: DetailWriter,
    csv_writer: csv::Writer<BufWriter<File>>,
    detail_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut filename = format!("simulation_{timestamp}.{extension}");
        if compress {
            filename.push_str(".gz");
        }
        let detail_path = dir.join(&filename);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&detail_path)?;
        let writer: Box<dyn Write + Send> = if compress {
            Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Box::new(BufWriter::new(file))
        };
        let detail = match format {
            OutputFormat::Jsonl => DetailWriter::Lines(writer),
            OutputFormat::Json => DetailWriter::Array {
                writer,
                rounds: Vec::new(),
            },
        };

        // Always create CSV summary
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            detail,
            csv_writer,
            detail_path,
            csv_path,
        })
    }

    pub fn write_round(&mut self, metrics: &RoundMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.detail {
            DetailWriter::Lines(writer) => {
                let json = serde_json::to_string(metrics)?;
                writeln!(writer, "{json}")?;
                writer.flush()?;
            }
            DetailWriter::Array { rounds, .. } => rounds.push(metrics.clone()),
        }

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        self.csv_writer.flush()?;

        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.detail {
            DetailWriter::Lines(writer) => writer.flush()?,
            DetailWriter::Array { writer, rounds } => {
                serde_json::to_writer_pretty(&mut *writer, rounds)?;
                writer.flush()?;
            }
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.detail_path, &self.csv_path)
    }
}
