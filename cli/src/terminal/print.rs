use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

const TOTAL_WIDTH: usize = 64;
/// Target of raw terminal output; the formatter prints these events verbatim.
pub const PRINT_TARGET: &str = "iotscan::print";

/// A titled entry of a numbered listing.
pub type TreeEntry = (String, Vec<Detail>);

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    print("");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("IOTSCAN v{}", env!("CARGO_PKG_VERSION"));
    let tagline: &str = "simulated IoT vulnerability scan";
    let inner: usize = TOTAL_WIDTH - 2;
    let pad = |text: &str| " ".repeat(inner.saturating_sub(text.width() + 2));

    print(&format!("╭{}╮", "─".repeat(inner)).color(colors::SEPARATOR).to_string());
    print(&format!(
        "{} {}{} {}",
        "│".color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        pad(&title),
        "│".color(colors::SEPARATOR)
    ));
    print(&format!(
        "{} {}{} {}",
        "│".color(colors::SEPARATOR),
        tagline.italic().color(colors::TEXT_SECONDARY),
        pad(tagline),
        "│".color(colors::SEPARATOR)
    ));
    print(&format!("╰{}╯", "─".repeat(inner)).color(colors::SEPARATOR).to_string());
}

/// Section title, left aligned and ruled out to the block width.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = title.to_uppercase();
    let fill: usize = TOTAL_WIDTH.saturating_sub(title.width() + 3);
    print(&format!(
        "{} {} {}",
        "▌".color(colors::PRIMARY),
        title.color(colors::PRIMARY).bold(),
        "─".repeat(fill).color(colors::SEPARATOR)
    ));
}

pub fn rule() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `label ···· count`, with labels padded to `label_width`.
pub fn count_line(label: &str, count: ColoredString, label_width: usize) {
    let dots: String = "·".repeat(label_width.saturating_sub(label.width()) + 2);
    print(&format!(
        "  {} {} {}",
        label.color(colors::TEXT_DEFAULT),
        dots.color(colors::SEPARATOR),
        count
    ));
}

/// Numbered listing; each entry's details hang off it as branches.
pub fn tree(entries: Vec<TreeEntry>) {
    let count: usize = entries.len();
    for (idx, (title, details)) in entries.into_iter().enumerate() {
        print(&format!(
            "{}{}{} {}",
            "[".color(colors::SEPARATOR),
            idx.to_string().color(colors::ACCENT),
            "]".color(colors::SEPARATOR),
            title.color(colors::PRIMARY)
        ));

        let key_width: usize = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
        let last: usize = details.len().saturating_sub(1);
        for (i, (key, value)) in details.iter().enumerate() {
            let branch: &str = if i == last { "└─" } else { "├─" };
            print(&format!(
                " {} {}{} {}",
                branch.color(colors::SEPARATOR),
                format!("{key:<key_width$}").color(colors::TEXT_DEFAULT),
                ":".color(colors::SEPARATOR),
                value
            ));
        }

        if idx + 1 != count {
            blank();
        }
    }
}

/// Prints an indented paragraph wrapped to the block width.
pub fn paragraph(indent: usize, text: &str, color: Color) {
    let width: usize = TOTAL_WIDTH.saturating_sub(indent).max(16);
    let margin: String = " ".repeat(indent);
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            print(&format!("{margin}{}", line.color(color)));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        print(&format!("{margin}{}", line.color(color)));
    }
}

pub fn centered(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

/// Boxed one-line notice, centred in the block.
pub fn notice(msg: &str) {
    let inner: usize = msg.width() + 4;
    let margin: String = " ".repeat(TOTAL_WIDTH.saturating_sub(inner + 2) / 2);
    let edge = |left: &str, right: &str| {
        format!("{margin}{left}{}{right}", "─".repeat(inner)).color(colors::RISK_LOW)
    };

    print(&edge("╭", "╮").to_string());
    print(&format!(
        "{margin}{}  {}  {}",
        "│".color(colors::RISK_LOW),
        msg.color(colors::RISK_LOW).bold(),
        "│".color(colors::RISK_LOW)
    ));
    print(&edge("╰", "╯").to_string());
}
