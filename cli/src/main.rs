mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, ScanArgs, catalog, pool, scan};
use iotscan_common::config::{Config, ScanTiming};
use iotscan_core::report::ReportFormat;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let mut cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        ..Config::default()
    };
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Scan(args) => {
            let request = configure_scan(&args, &mut cfg)?;
            print::header("starting scanner", cfg.quiet);
            scan::scan(request, &cfg).await
        }
        Commands::Catalog => {
            catalog::catalog(&cfg);
            Ok(())
        }
        Commands::Pool => {
            pool::pool(&cfg);
            Ok(())
        }
    }
}

fn configure_scan(args: &ScanArgs, cfg: &mut Config) -> anyhow::Result<scan::ScanRequest> {
    cfg.timing = ScanTiming::new(
        Duration::from_millis(args.duration),
        Duration::from_millis(args.interval),
    )?;
    cfg.seed = args.seed;
    cfg.output_dir = args.out_dir.clone();

    let mut formats: Vec<ReportFormat> = Vec::new();
    if args.csv {
        formats.push(ReportFormat::Csv);
    }
    if args.pdf {
        formats.push(ReportFormat::Pdf);
    }

    Ok(scan::ScanRequest {
        formats,
        select: args.select.clone(),
    })
}
