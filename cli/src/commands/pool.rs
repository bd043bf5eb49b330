use colored::*;
use iotscan_common::config::Config;
use iotscan_common::pool::DEVICE_POOL;

use crate::terminal::{colors, print};

pub fn pool(cfg: &Config) {
    print::header("device pool", cfg.quiet);

    print::tree(
        DEVICE_POOL
            .iter()
            .map(|entry| {
                let details = vec![
                    ("IPv4".to_string(), entry.ip.to_string().color(colors::IPV4_ADDR)),
                    ("MAC".to_string(), entry.mac.color(colors::MAC_ADDR)),
                    ("Type".to_string(), entry.kind.as_str().normal()),
                ];
                (entry.vendor.to_string(), details)
            })
            .collect(),
    );
}
