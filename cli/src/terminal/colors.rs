use colored::Color;
use iotscan_common::vulnerability::Severity;

pub const PRIMARY: Color = Color::TrueColor { r: 6, g: 182, b: 212 };
pub const ACCENT: Color = Color::TrueColor { r: 250, g: 204, b: 21 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 226, g: 232, b: 240 };
pub const TEXT_SECONDARY: Color = Color::TrueColor { r: 148, g: 163, b: 184 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 125, g: 211, b: 252 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 196, g: 181, b: 253 };

pub const RISK_HIGH: Color = Color::TrueColor { r: 239, g: 68, b: 68 };
pub const RISK_MEDIUM: Color = Color::TrueColor { r: 245, g: 158, b: 11 };
pub const RISK_LOW: Color = Color::TrueColor { r: 34, g: 197, b: 94 };

pub fn for_severity(severity: Severity) -> Color {
    match severity {
        Severity::High => RISK_HIGH,
        Severity::Medium => RISK_MEDIUM,
        Severity::Low => RISK_LOW,
    }
}
