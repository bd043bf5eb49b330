use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use iotscan_common::config::Config;
use iotscan_common::device::Device;
use iotscan_common::error::SessionError;
use iotscan_common::vulnerability::Severity;
use iotscan_core::export::{DirectorySink, ReportSink};
use iotscan_core::random::{RandomSource, SeededRandom};
use iotscan_core::report::ReportFormat;
use iotscan_core::scanner::{self, DeviceScanner, SimulatedScanner};
use iotscan_core::session::ScanSession;
use tracing::{debug, info, warn};

use crate::terminal::{colors, format, print, progress};

const CHART_WIDTH: usize = 24;

/// What to do with a finished scan.
pub struct ScanRequest {
    pub formats: Vec<ReportFormat>,
    pub select: Option<String>,
}

pub async fn scan(request: ScanRequest, cfg: &Config) -> anyhow::Result<()> {
    let random: Box<dyn RandomSource> = match cfg.seed {
        Some(seed) => {
            info!("Using fixed seed {seed}");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(SeededRandom::from_os()),
    };
    let mut simulator = SimulatedScanner::new(cfg.timing, random);
    let mut session = ScanSession::new();
    session.start()?;

    let span = progress::scan_span();
    let guard = span.enter();
    let start_time: Instant = Instant::now();

    let (tx, mut rx) = scanner::event_channel();
    let consume = async {
        while session.is_scanning() {
            let Some(event) = rx.recv().await else {
                break;
            };
            session.apply(event)?;
            progress::report(&span, &session);
        }
        Ok::<(), SessionError>(())
    };
    let (_, consumed) = tokio::join!(simulator.scan(tx), consume);
    consumed.context("scan session rejected an event")?;

    drop(guard);

    scan_ends(&mut session, start_time.elapsed(), &request, cfg)
}

fn scan_ends(
    session: &mut ScanSession,
    total_time: Duration,
    request: &ScanRequest,
    cfg: &Config,
) -> anyhow::Result<()> {
    if session.devices().is_empty() {
        no_devices_found(cfg);
    } else {
        print_overview(session, cfg);
        print_chart(session, cfg);
        if cfg.quiet < 2 {
            print_devices(session.devices(), cfg);
        }
        if let Some(needle) = &request.select {
            match session.select(needle) {
                Ok(device) => print_device_details(device, cfg),
                Err(e) => warn!("Cannot show details: {e}"),
            }
        }
    }

    print_summary(session, total_time, cfg);
    export(session.devices(), request, cfg)?;

    if cfg.quiet == 0 {
        print::rule();
    }
    Ok(())
}

fn no_devices_found(cfg: &Config) {
    print::header("scan results", cfg.quiet);
    if cfg.quiet == 0 {
        print::notice("No Vulnerable Devices Found");
    }
    print::status("Your network appears to be secure. Great job!");
}

fn print_overview(session: &ScanSession, cfg: &Config) {
    print::header("Security Overview", cfg.quiet);
    let summary = session.risk_summary();
    for severity in Severity::ALL {
        let count: ColoredString = summary
            .count(severity)
            .to_string()
            .color(colors::for_severity(severity))
            .bold();
        print::count_line(&format!("{severity} Risk"), count, 11);
    }
}

fn print_chart(session: &ScanSession, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::header("Findings", cfg.quiet);
    let tally = session.finding_tally();
    let max: usize = tally.values().copied().max().unwrap_or(0);
    let name_width: usize = tally.keys().map(|name| name.len()).max().unwrap_or(0);

    for (name, count) in &tally {
        let bar: ColoredString = format::bar(*count, max, CHART_WIDTH).color(colors::PRIMARY);
        print::print(&format!(
            "  {}{} {} {}",
            name.color(colors::TEXT_DEFAULT),
            " ".repeat(name_width - name.len()),
            bar,
            count.to_string().bold()
        ));
    }
}

fn print_devices(devices: &[Device], cfg: &Config) {
    print::header("Discovered Devices", cfg.quiet);
    print::tree(
        devices
            .iter()
            .map(|device| (format::device_title(device), format::device_details(device)))
            .collect(),
    );
}

fn print_device_details(device: &Device, cfg: &Config) {
    print::header(&format!("Details for {}", device.ip()), cfg.quiet);
    print::status(format!(
        "MAC: {} | Vendor: {}",
        device.mac().color(colors::MAC_ADDR),
        device.vendor()
    ));
    print::status(format!("Open Ports: {}", format::ports(device)));

    for vuln in device.vulnerabilities() {
        print::blank();
        print::print(&format!(
            "  {} {}",
            vuln.name.bold(),
            format!("[{} Risk]", format::severity(vuln.severity))
        ));
        print::paragraph(4, vuln.description, colors::TEXT_SECONDARY);
        print::print(&format!("    {}", "Recommendation:".color(colors::PRIMARY)));
        print::paragraph(4, vuln.recommendation, colors::TEXT_DEFAULT);
    }
}

fn print_summary(session: &ScanSession, total_time: Duration, cfg: &Config) {
    let found: ColoredString = format!("{} devices", session.devices().len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "{}",
        format!("Scan Complete: {found} found in {total_time}").color(colors::TEXT_DEFAULT)
    );

    match cfg.quiet {
        0 => {
            print::rule();
            print::centered(&output);
        }
        _ => info!("{}", output),
    }
}

fn export(devices: &[Device], request: &ScanRequest, cfg: &Config) -> anyhow::Result<()> {
    if request.formats.is_empty() {
        return Ok(());
    }

    let sink = DirectorySink::new(&cfg.output_dir);
    debug!("Exporting {} report(s) to {}", request.formats.len(), sink.dir().display());
    let date = chrono::Local::now().date_naive();
    for report_format in &request.formats {
        let artifact = report_format.render(devices, date);
        let path = sink
            .save(&artifact)
            .with_context(|| format!("could not export {}", artifact.file_name))?;
        info!("Report saved to {}", path.display());
    }
    Ok(())
}
