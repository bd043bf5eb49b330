#![cfg(test)]
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use iotscan_common::config::ScanTiming;
use iotscan_core::export::{DirectorySink, ReportSink};
use iotscan_core::random::SeededRandom;
use iotscan_core::report::{ReportFormat, csv};
use iotscan_core::scanner::{DeviceScanner, SimulatedScanner};

fn scratch_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir().join(format!("iotscan-export-{}-{nanos}", std::process::id()))
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 14).expect("valid date")
}

#[tokio::test(start_paused = true)]
async fn scan_results_export_to_disk() -> anyhow::Result<()> {
    let mut scanner = SimulatedScanner::new(ScanTiming::default(), Box::new(SeededRandom::new(5)));
    let (tx, rx) = tokio::sync::mpsc::channel(64);
    drop(rx);
    let devices = scanner.scan(tx).await;

    let dir = scratch_dir();
    let sink = DirectorySink::new(&dir);

    let csv_path = sink.save(&ReportFormat::Csv.render(&devices, report_date()))?;
    let pdf_path = sink.save(&ReportFormat::Pdf.render(&devices, report_date()))?;

    assert_eq!(csv_path.file_name().and_then(|n| n.to_str()), Some("iot_security_scan_report.csv"));
    assert_eq!(pdf_path.file_name().and_then(|n| n.to_str()), Some("iot_security_scan_report.pdf"));

    let written = fs::read_to_string(&csv_path)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), devices.len() + 1);
    assert_eq!(lines[0], csv::HEADER);
    for (line, device) in lines[1..].iter().zip(&devices) {
        assert!(line.starts_with(&format!("{},{},", device.ip(), device.mac())));
    }

    let pdf = fs::read(&pdf_path)?;
    assert!(pdf.starts_with(b"%PDF-1.4"));
    assert!(pdf.ends_with(b"%%EOF\n"));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn empty_results_export_header_only() -> anyhow::Result<()> {
    let dir = scratch_dir().join("empty");
    let sink = DirectorySink::new(&dir);

    let path = sink.save(&ReportFormat::Csv.render(&[], report_date()))?;

    assert_eq!(fs::read_to_string(&path)?, format!("{}\n", csv::HEADER));
    let _ = fs::remove_dir_all(dir.parent().unwrap_or(&dir));
    Ok(())
}
