//! Page layout of the formatted report.
//!
//! Positions are millimetres on an A4 page measured from the top-left corner,
//! the way the text is placed on paper. [`super::pdf`] turns them into PDF
//! user space.

use chrono::NaiveDate;
use iotscan_common::device::Device;
use iotscan_common::vulnerability::{Severity, Vulnerability};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const TOP: f32 = 15.0;
const CENTER_X: f32 = PAGE_WIDTH / 2.0;
/// Cursor limits checked before a device block and before a finding block.
const DEVICE_BREAK: f32 = 260.0;
const FINDING_BREAK: f32 = 270.0;

const HEADING_X: f32 = 15.0;
const DETAIL_X: f32 = 20.0;
const FINDING_X: f32 = 25.0;
const RECOMMENDATION_X: f32 = 28.0;
const RULE_END_X: f32 = 195.0;

const FINDING_WRAP: usize = 90;
const RECOMMENDATION_WRAP: usize = 88;
const WRAPPED_LINE_HEIGHT: f32 = 4.5;
const MIN_BLOCK_HEIGHT: f32 = 10.0;

const BLACK: Rgb = Rgb(0, 0, 0);
const RULE_GREY: Rgb = Rgb(0xcc, 0xcc, 0xcc);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn for_risk(risk: Severity) -> Self {
        match risk {
            Severity::High => Rgb(0xef, 0x44, 0x44),
            Severity::Medium => Rgb(0xf5, 0x9e, 0x0b),
            Severity::Low => Rgb(0x22, 0xc5, 0x5e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: FontStyle,
    pub color: Rgb,
    pub align: Align,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Text(TextLine),
    /// Horizontal line from `x1` to `x2` at height `y`.
    Rule { x1: f32, x2: f32, y: f32, color: Rgb },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn texts(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(|page| {
            page.items.iter().filter_map(|item| match item {
                Item::Text(line) => Some(line),
                Item::Rule { .. } => None,
            })
        })
    }
}

/// Lays out the full report: title page header, then one block per device.
pub fn layout(devices: &[Device], date: NaiveDate) -> Document {
    let mut cursor = Cursor::new();

    cursor.text(CENTER_X, 18.0, FontStyle::Regular, BLACK, Align::Center, "IoT Security Scan Report");
    cursor.advance(10.0);
    let dated = format!("Scan Date: {}", date.format("%Y-%m-%d"));
    cursor.text(CENTER_X, 12.0, FontStyle::Regular, BLACK, Align::Center, &dated);
    cursor.advance(15.0);

    for device in devices {
        cursor.break_after(DEVICE_BREAK);
        device_block(&mut cursor, device);
    }

    cursor.finish()
}

fn device_block(cursor: &mut Cursor, device: &Device) {
    let heading = format!("{} - {} (Risk: {})", device.kind(), device.ip(), device.risk());
    cursor.text(HEADING_X, 14.0, FontStyle::Bold, Rgb::for_risk(device.risk()), Align::Left, &heading);
    cursor.advance(7.0);

    cursor.detail(&format!("MAC: {}", device.mac()));
    cursor.advance(5.0);
    cursor.detail(&format!("Vendor: {}", device.vendor()));
    cursor.advance(5.0);
    let ports: Vec<String> = device.open_ports().iter().map(u16::to_string).collect();
    cursor.detail(&format!("Open Ports: {}", ports.join(", ")));
    cursor.advance(8.0);

    cursor.text(DETAIL_X, 10.0, FontStyle::Bold, BLACK, Align::Left, "Vulnerabilities Found:");
    cursor.advance(5.0);

    for vuln in device.vulnerabilities() {
        cursor.break_after(FINDING_BREAK);
        finding_block(cursor, vuln);
    }

    cursor.advance(5.0);
    cursor.rule(HEADING_X, RULE_END_X, RULE_GREY);
    cursor.advance(10.0);
}

fn finding_block(cursor: &mut Cursor, vuln: &Vulnerability) {
    let finding = format!("- {} ({}): {}", vuln.name, vuln.severity, vuln.description);
    cursor.wrapped(FINDING_X, FontStyle::Regular, &finding, FINDING_WRAP);

    let recommendation = format!("Recommendation: {}", vuln.recommendation);
    cursor.wrapped(RECOMMENDATION_X, FontStyle::Italic, &recommendation, RECOMMENDATION_WRAP);
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: TOP,
        }
    }

    fn advance(&mut self, by: f32) {
        self.y += by;
    }

    fn break_after(&mut self, limit: f32) {
        if self.y > limit {
            self.pages.push(Page::default());
            self.y = TOP;
        }
    }

    fn push(&mut self, item: Item) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn text(&mut self, x: f32, size: f32, style: FontStyle, color: Rgb, align: Align, text: &str) {
        let y = self.y;
        self.push(Item::Text(TextLine {
            x,
            y,
            size,
            style,
            color,
            align,
            text: text.to_string(),
        }));
    }

    fn detail(&mut self, text: &str) {
        self.text(DETAIL_X, 10.0, FontStyle::Regular, BLACK, Align::Left, text);
    }

    /// Writes `text` wrapped to `width` characters and moves past the block.
    fn wrapped(&mut self, x: f32, style: FontStyle, text: &str, width: usize) {
        let start = self.y;
        let lines = wrap(text, width);
        for (idx, line) in lines.iter().enumerate() {
            self.y = start + idx as f32 * WRAPPED_LINE_HEIGHT;
            self.text(x, 10.0, style, BLACK, Align::Left, line);
        }
        self.y = start + (lines.len() as f32 * WRAPPED_LINE_HEIGHT).max(MIN_BLOCK_HEIGHT);
    }

    fn rule(&mut self, x1: f32, x2: f32, color: Rgb) {
        let y = self.y;
        self.push(Item::Rule { x1, x2, y, color });
    }

    fn finish(self) -> Document {
        Document { pages: self.pages }
    }
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
