use colored::*;
use iotscan_common::config::Config;
use iotscan_common::vulnerability::Finding;

use crate::terminal::print::TreeEntry;
use crate::terminal::{colors, format, print};

pub fn catalog(cfg: &Config) {
    print::header("vulnerability catalog", cfg.quiet);

    let entries: Vec<TreeEntry> = Finding::ALL.iter().map(entry).collect();
    print::tree(entries);
}

fn entry(finding: &Finding) -> TreeEntry {
    let vuln = finding.vulnerability();
    let port: ColoredString = match finding.port() {
        Some(port) => port.to_string().color(colors::ACCENT),
        None => "-".color(colors::SEPARATOR),
    };

    let details = vec![
        ("Severity".to_string(), format::severity(vuln.severity)),
        ("Port".to_string(), port),
        ("Issue".to_string(), vuln.description.color(colors::TEXT_SECONDARY)),
        ("Fix".to_string(), vuln.recommendation.normal()),
    ];
    (vuln.name.to_string(), details)
}
