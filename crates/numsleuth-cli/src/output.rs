//! Result rendering. Only results go to the writer; diagnostics go to
//! `tracing` on stderr.
use crate::cli::OutputFormat;
use compact_str::CompactString;
use numsleuth_core::AggregateReport;
use std::io::Write;

/// Resolved labels as `[1, 2, capsuni, ...]` or a JSON array.
pub fn write_labels<W: Write>(
    out: &mut W,
    labels: &[CompactString],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            write!(out, "[")?;
            for (i, label) in labels.iter().enumerate() {
                if i > 0 {
                    write!(out, ", ")?;
                }
                write!(out, "{label}")?;
            }
            writeln!(out, "]")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, labels)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// The sum alone, or the whole report as pretty JSON.
pub fn write_aggregate<W: Write>(
    out: &mut W,
    report: &AggregateReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.total)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numsleuth_core::{FileOutcome, MissingFilePolicy, TaskReport};
    use std::path::PathBuf;

    fn render_labels(labels: &[&str], format: OutputFormat) -> String {
        let labels: Vec<CompactString> = labels.iter().map(|s| CompactString::new(s)).collect();
        let mut buf = Vec::new();
        write_labels(&mut buf, &labels, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_labels_text() {
        assert_eq!(render_labels(&["1", "2", "capsuni"], OutputFormat::Text), "[1, 2, capsuni]\n");
        assert_eq!(render_labels(&[], OutputFormat::Text), "[]\n");
    }

    #[test]
    fn test_labels_json() {
        assert_eq!(render_labels(&["1", "mere"], OutputFormat::Json), "[\"1\",\"mere\"]\n");
    }

    #[test]
    fn test_aggregate_text_is_just_the_total() {
        let report = AggregateReport {
            total: -1,
            policy: MissingFilePolicy::Sentinel,
            missing: 1,
            failed: 0,
            files: vec![TaskReport {
                path: PathBuf::from("gone.txt"),
                outcome: FileOutcome::FileNotFound("gone".into()),
            }],
        };
        let mut buf = Vec::new();
        write_aggregate(&mut buf, &report, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "-1\n");

        let mut buf = Vec::new();
        write_aggregate(&mut buf, &report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total"], -1);
        assert_eq!(value["missing"], 1);
    }
}
