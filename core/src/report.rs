//! # Report Serializers
//!
//! Pure transforms from a finished device list to a downloadable [`Artifact`].
//! Saving the artifact is left to a [`crate::export::ReportSink`].

use chrono::NaiveDate;
use iotscan_common::device::Device;

pub mod csv;
pub mod document;
pub mod pdf;

pub const CSV_FILE_NAME: &str = "iot_security_scan_report.csv";
pub const PDF_FILE_NAME: &str = "iot_security_scan_report.pdf";

/// A rendered report, ready to be handed to the host's file-save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Delimited text table.
    Csv,
    /// Paginated formatted report.
    Pdf,
}

impl ReportFormat {
    /// Renders `devices`; `date` is printed on the document's title page.
    pub fn render(&self, devices: &[Device], date: NaiveDate) -> Artifact {
        match self {
            ReportFormat::Csv => Artifact {
                file_name: CSV_FILE_NAME,
                mime_type: "text/csv",
                bytes: csv::render(devices).into_bytes(),
            },
            ReportFormat::Pdf => Artifact {
                file_name: PDF_FILE_NAME,
                mime_type: "application/pdf",
                bytes: pdf::encode(&document::layout(devices, date)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_still_render() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date");

        let csv = ReportFormat::Csv.render(&[], date);
        assert_eq!(csv.file_name, "iot_security_scan_report.csv");
        assert_eq!(csv.mime_type, "text/csv");
        assert_eq!(csv.bytes, format!("{}\n", csv::HEADER).into_bytes());

        let pdf = ReportFormat::Pdf.render(&[], date);
        assert_eq!(pdf.file_name, "iot_security_scan_report.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF-1.4"));
    }
}
