//! Template Method: `DataMiner::mine` fixes the skeleton (extract, parse,
//! analyze, report). Miners fill in the format-specific steps and may
//! override the `analyze` hook.

use std::io::Write;

use serde::Deserialize;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub source: &'static str,
    pub records: usize,
    pub total: f64,
    pub note: Option<String>,
}

pub trait DataMiner {
    fn source(&self) -> &'static str;

    /// Raw lines or documents from the source.
    fn extract(&self, raw: &str) -> Vec<String>;

    fn parse(&self, chunk: &str) -> Result<Vec<Record>, PatternError>;

    /// Hook with a default; override to add commentary.
    fn analyze(&self, _records: &[Record]) -> Option<String> {
        None
    }

    /// The template method. Not meant to be overridden.
    fn mine(&self, raw: &str) -> Result<Report, PatternError> {
        let mut records = Vec::new();
        for chunk in self.extract(raw) {
            records.extend(self.parse(&chunk)?);
        }
        tracing::debug!(source = self.source(), records = records.len(), "mined");

        let note = self.analyze(&records);
        Ok(Report {
            source: self.source(),
            records: records.len(),
            total: records.iter().map(|r| r.amount).sum(),
            note,
        })
    }
}

/// `name,amount` rows under a header line. `#` comment lines are ignored.
pub struct CsvMiner;

impl DataMiner for CsvMiner {
    fn source(&self) -> &'static str {
        "csv"
    }

    fn extract(&self, raw: &str) -> Vec<String> {
        let document = raw
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        vec![document]
    }

    fn parse(&self, chunk: &str) -> Result<Vec<Record>, PatternError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(chunk.as_bytes());

        reader
            .deserialize()
            .map(|row| row.map_err(|e| PatternError::parse("csv", e.to_string())))
            .collect()
    }
}

/// A JSON array of `{"name": ..., "amount": ...}` objects.
pub struct JsonMiner {
    pub flag_above: f64,
}

impl DataMiner for JsonMiner {
    fn source(&self) -> &'static str {
        "json"
    }

    fn extract(&self, raw: &str) -> Vec<String> {
        vec![raw.to_string()]
    }

    fn parse(&self, chunk: &str) -> Result<Vec<Record>, PatternError> {
        serde_json::from_str(chunk).map_err(|e| PatternError::parse("json", e.to_string()))
    }

    fn analyze(&self, records: &[Record]) -> Option<String> {
        let flagged: Vec<&str> = records
            .iter()
            .filter(|r| r.amount > self.flag_above)
            .map(|r| r.name.as_str())
            .collect();
        if flagged.is_empty() {
            None
        } else {
            Some(format!("large amounts: {}", flagged.join(", ")))
        }
    }
}

pub struct TemplateMethodPattern;

const SAMPLE_CSV: &str = "name,amount\n# monthly\nrent,1200.00\ncoffee,4.50\nbooks,38.25\n";
const SAMPLE_JSON: &str =
    r#"[{"name": "laptop", "amount": 1899.99}, {"name": "cable", "amount": 12.5}]"#;

impl Pattern for TemplateMethodPattern {
    fn name(&self) -> &'static str {
        "template-method"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Define the skeleton of an algorithm and defer some steps to implementors."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("AbstractClass", "DataMiner (mine)"),
            Participant::new("ConcreteClass", "CsvMiner, JsonMiner"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Template Method")?;

        let csv_miner = CsvMiner;
        let json_miner = JsonMiner { flag_above: 1000.0 };
        let runs: [(&dyn DataMiner, &str); 2] =
            [(&csv_miner, SAMPLE_CSV), (&json_miner, SAMPLE_JSON)];
        for (miner, raw) in runs {
            let report = miner.mine(raw)?;
            writeln!(
                out,
                "{}: {} records, total {:.2}",
                report.source, report.records, report.total
            )?;
            if let Some(note) = report.note {
                writeln!(out, "  note: {note}")?;
            }
        }

        output::section(out, "Malformed input")?;
        if let Err(e) = CsvMiner.mine("name,amount\nrent;1200\n") {
            writeln!(out, "{e}")?;
        }
        Ok(())
    }
}
