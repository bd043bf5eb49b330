use crate::terminal::colors;
use colored::*;
use iotscan_common::device::Device;
use iotscan_common::vulnerability::Severity;

pub type Detail = (String, ColoredString);

pub fn severity(severity: Severity) -> ColoredString {
    severity.as_str().color(colors::for_severity(severity)).bold()
}

pub fn ports(device: &Device) -> String {
    device
        .open_ports()
        .iter()
        .map(u16::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// One-line title used for tree heads: `Camera - 192.168.1.110`.
pub fn device_title(device: &Device) -> String {
    format!("{} - {}", device.kind(), device.ip())
}

pub fn device_details(device: &Device) -> Vec<Detail> {
    let findings: String = device
        .vulnerabilities()
        .iter()
        .map(|vuln| vuln.name)
        .collect::<Vec<&str>>()
        .join(", ");

    vec![
        ("IPv4".to_string(), device.ip().to_string().color(colors::IPV4_ADDR)),
        ("MAC".to_string(), device.mac().color(colors::MAC_ADDR)),
        ("Vendor".to_string(), device.vendor().normal()),
        ("Risk".to_string(), severity(device.risk())),
        ("Ports".to_string(), ports(device).normal()),
        ("Findings".to_string(), findings.color(colors::TEXT_SECONDARY)),
    ]
}

/// Horizontal bar of `count` cells scaled against `max`.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled: usize = (count * width).div_ceil(max).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(2, 4, 8).chars().filter(|c| *c == '█').count(), 4);
        assert_eq!(bar(4, 4, 8), "█".repeat(8));
        assert_eq!(bar(1, 3, 4).chars().count(), 4);
        assert_eq!(bar(0, 0, 8), "");
    }
}
