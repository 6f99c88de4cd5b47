use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::driver::BenchmarkRun;
use crate::error::BenchError;
use crate::probe::{Prediction, ProbeResult, ProbeStatus};

/// Header of the persisted result table, in column order.
pub const COLUMNS: [&str; 6] = [
    "Provider",
    "Status",
    "Total Latency (ms)",
    "Processing Time (ms)",
    "Sentiment",
    "Confidence",
];

#[derive(Debug, Serialize, Deserialize)]
struct TableRow {
    #[serde(rename = "Provider")]
    provider: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Total Latency (ms)")]
    total_latency_ms: Option<f64>,
    #[serde(rename = "Processing Time (ms)")]
    processing_time_ms: Option<f64>,
    #[serde(rename = "Sentiment")]
    sentiment: Option<String>,
    #[serde(rename = "Confidence")]
    confidence: Option<f64>,
}

impl From<&ProbeResult> for TableRow {
    fn from(result: &ProbeResult) -> Self {
        let prediction = result.prediction().cloned().unwrap_or_default();
        Self {
            provider: result.provider().to_string(),
            status: result.status().to_string(),
            total_latency_ms: result.latency_ms(),
            processing_time_ms: prediction.processing_time_ms,
            sentiment: prediction.sentiment,
            confidence: prediction.confidence,
        }
    }
}

impl TableRow {
    fn into_result(self, row: usize) -> Result<ProbeResult, BenchError> {
        let status = match self
            .status
            .parse::<ProbeStatus>()
            .map_err(|message| BenchError::MalformedRow { row, message })?
        {
            ProbeStatus::Success(_) => ProbeStatus::Success(Prediction {
                processing_time_ms: self.processing_time_ms,
                sentiment: self.sentiment.filter(|s| !s.is_empty()),
                confidence: self.confidence,
            }),
            other => other,
        };
        Ok(match self.total_latency_ms {
            Some(latency) => ProbeResult::new(self.provider, status, latency),
            None => ProbeResult::without_latency(self.provider, status),
        })
    }
}

/// Makes sure `path` can be written: creates missing parent directories and
/// opens the file without truncating it.
pub fn prepare_output(path: impl AsRef<Path>) -> Result<(), BenchError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| BenchError::Table(format!("cannot write {}: {e}", path.display())))?;
    Ok(())
}

/// Writes the run as CSV to `path`, replacing any previous file.
pub fn persist(run: &BenchmarkRun, path: impl AsRef<Path>) -> Result<(), BenchError> {
    let path = path.as_ref();
    prepare_output(path)?;
    let file = fs::File::create(path)
        .map_err(|e| BenchError::Table(format!("cannot write {}: {e}", path.display())))?;
    write_to(run, file)?;
    log::info!("Saved {} rows to {}", run.len(), path.display());
    Ok(())
}

pub fn write_to<W: Write>(run: &BenchmarkRun, writer: W) -> Result<(), BenchError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // Written by hand so an empty run still gets its header row.
    wtr.write_record(COLUMNS)?;
    for result in run {
        wtr.serialize(TableRow::from(result))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads a table written by [`persist`].
pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkRun, BenchError> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .map_err(|e| BenchError::Table(format!("cannot read {}: {e}", path.display())))?;
    read_from(file)
}

pub fn read_from<R: Read>(reader: R) -> Result<BenchmarkRun, BenchError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.iter().ne(COLUMNS) {
        return Err(BenchError::Table(format!(
            "unexpected header {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut results = Vec::new();
    for (idx, row) in rdr.deserialize::<TableRow>().enumerate() {
        let row_number = idx + 2;
        let row = row.map_err(|e| BenchError::MalformedRow {
            row: row_number,
            message: e.to_string(),
        })?;
        results.push(row.into_result(row_number)?);
    }
    Ok(BenchmarkRun::from_results(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> BenchmarkRun {
        BenchmarkRun::from_results(vec![
            ProbeResult::new(
                "AWS SageMaker",
                ProbeStatus::Success(Prediction {
                    processing_time_ms: Some(101.37),
                    sentiment: Some("Positive".to_string()),
                    confidence: Some(0.8123),
                }),
                118.52,
            ),
            ProbeResult::new("GCP Vertex AI", ProbeStatus::Error { code: 502 }, 12.0),
            ProbeResult::new(
                "Azure AI Studio",
                ProbeStatus::Failure {
                    reason: "connection failed: refused, reset".to_string(),
                },
                3.25,
            ),
        ])
    }

    #[test]
    fn header_and_empty_cells() {
        let mut buf = Vec::new();
        write_to(&run(), &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Provider,Status,Total Latency (ms),Processing Time (ms),Sentiment,Confidence"
        );
        assert_eq!(lines[2], "GCP Vertex AI,Error 502,12.0,,,");
        assert!(lines[3].starts_with("Azure AI Studio,\"Failed: connection failed: refused, reset\","));
    }

    #[test]
    fn table_reads_back() {
        let original = run();
        let mut buf = Vec::new();
        write_to(&original, &mut buf).expect("write");
        let loaded = read_from(buf.as_slice()).expect("read");
        assert_eq!(loaded, original);
    }

    #[test]
    fn empty_run_still_has_header() {
        let mut buf = Vec::new();
        write_to(&BenchmarkRun::new(), &mut buf).expect("write");
        let loaded = read_from(buf.as_slice()).expect("read");
        assert!(loaded.is_empty());
    }

    #[test]
    fn foreign_header_is_rejected() {
        let data = "name,latency\nA,1.0\n";
        assert!(matches!(
            read_from(data.as_bytes()),
            Err(BenchError::Table(_))
        ));
    }

    #[test]
    fn bad_status_reports_row_number() {
        let data = format!("{}\nA,Pending,1.0,,,\n", COLUMNS.join(","));
        let err = read_from(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BenchError::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn empty_latency_cells_are_left_out_of_stats() {
        let data = format!(
            "{}\nA,Success,40.0,20.0,Positive,0.8\nB,Error 500,,,,\nB,Failed: refused,,,,\n",
            COLUMNS.join(",")
        );
        let run = read_from(data.as_bytes()).expect("read");
        assert_eq!(run.len(), 3);
        assert_eq!(run.results()[1].latency_ms(), None);

        let summary = crate::report::summarize(&run);
        let b = &summary["B"];
        assert_eq!((b.count, b.errors, b.failures), (2, 1, 1));
        assert_eq!(b.latency.count, 0);
        assert_eq!(summary["A"].latency.mean, 40.0);
    }

    #[test]
    fn missing_latency_stays_empty_when_written() {
        let run = BenchmarkRun::from_results(vec![ProbeResult::without_latency(
            "B",
            ProbeStatus::Error { code: 500 },
        )]);
        let mut buf = Vec::new();
        write_to(&run, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text.lines().nth(1), Some("B,Error 500,,,,"));
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "occupied").expect("write blocker");
        let path = blocker.join("results.csv");

        let err = persist(&run(), &path).unwrap_err();
        assert!(matches!(err, BenchError::Io(_) | BenchError::Table(_)), "{err:?}");
        assert!(prepare_output(&path).is_err());
    }

    #[test]
    fn prepare_output_keeps_existing_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.csv");
        persist(&run(), &path).expect("write");
        prepare_output(&path).expect("prepare");
        assert_eq!(load(&path).expect("load").len(), 3);
    }

    #[test]
    fn persist_overwrites_and_creates_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("results.csv");
        persist(&run(), &path).expect("first write");
        persist(&BenchmarkRun::new(), &path).expect("second write");
        assert!(load(&path).expect("load").is_empty());
    }
}
