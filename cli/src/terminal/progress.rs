use colored::*;
use indicatif::ProgressStyle;
use iotscan_core::session::ScanSession;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} [{bar:32.cyan/blue}] {pos:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░")
        .tick_strings(TICKS)
}

/// Span that carries the scan progress bar while it is entered.
pub fn scan_span() -> Span {
    let span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_style(&scan_style());
    span.pb_set_length(100);
    span.pb_set_message("Ready to Scan");
    span
}

/// Mirrors the session's progress and device count onto the bar.
pub fn report(span: &Span, session: &ScanSession) {
    span.pb_set_position(session.progress().round() as u64);
    span.pb_set_message(&format!(
        "{} {}",
        session.status_line(),
        format!("[{} devices]", session.devices().len()).green().bold()
    ));
}
