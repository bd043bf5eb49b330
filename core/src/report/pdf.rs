//! Minimal PDF 1.4 encoder for [`Document`] layouts.
//!
//! Only what the report needs: the three standard Helvetica faces, filled text
//! and stroked lines. Text outside printable ASCII is written as `?`.

use std::fmt::Write;

use super::document::{Align, Document, FontStyle, Item, PAGE_HEIGHT, PAGE_WIDTH, Rgb, TextLine};

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Advance widths of printable ASCII (32..=126) in 1/1000 em, from the
/// standard Helvetica metrics. The oblique face shares the regular widths.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FIRST_PAGE_ID: usize = 6;
const FONTS: [(&str, &str); 3] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
];

pub fn encode(document: &Document) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();

    let page_ids: Vec<usize> = (0..document.pages.len())
        .map(|idx| FIRST_PAGE_ID + idx * 2)
        .collect();
    let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();

    objects.push(format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>"));
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_ids.len()
    ));
    for (_, base_font) in FONTS {
        objects.push(format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{base_font} /Encoding /WinAnsiEncoding >>"
        ));
    }

    let font_refs: String = FONTS
        .iter()
        .enumerate()
        .map(|(idx, (name, _))| format!("/{name} {} 0 R", PAGES_ID + 1 + idx))
        .collect::<Vec<String>>()
        .join(" ");

    for (page, page_id) in document.pages.iter().zip(&page_ids) {
        let content = page_content(&page.items);
        objects.push(format!(
            "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << {font_refs} >> >> /Contents {} 0 R >>",
            mm(PAGE_WIDTH),
            mm(PAGE_HEIGHT),
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}endstream",
            content.len()
        ));
    }

    assemble(&objects)
}

fn assemble(objects: &[String]) -> Vec<u8> {
    let mut out = String::from("%PDF-1.4\n");
    let mut offsets: Vec<usize> = Vec::with_capacity(objects.len());

    for (idx, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{body}\nendobj\n", idx + 1);
    }

    let xref_offset = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = writeln!(out, "{offset:010} 00000 n ");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root {CATALOG_ID} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    );

    out.into_bytes()
}

fn page_content(items: &[Item]) -> String {
    let mut content = String::new();
    for item in items {
        match item {
            Item::Text(line) => text_op(&mut content, line),
            Item::Rule { x1, x2, y, color } => {
                let y = mm(PAGE_HEIGHT - y);
                let _ = writeln!(
                    content,
                    "{} RG 0.5 w {:.2} {y:.2} m {:.2} {y:.2} l S",
                    rgb(color),
                    mm(*x1),
                    mm(*x2)
                );
            }
        }
    }
    content
}

fn text_op(content: &mut String, line: &TextLine) {
    let font = match line.style {
        FontStyle::Regular => FONTS[0].0,
        FontStyle::Bold => FONTS[1].0,
        FontStyle::Italic => FONTS[2].0,
    };
    let text = escape(&line.text);
    let x = match line.align {
        Align::Left => mm(line.x),
        Align::Center => mm(line.x) - text_width(&line.text, line.style, line.size) / 2.0,
    };
    let y = mm(PAGE_HEIGHT - line.y);

    let _ = writeln!(
        content,
        "BT /{font} {:.1} Tf {} rg {x:.2} {y:.2} Td ({text}) Tj ET",
        line.size,
        rgb(&line.color)
    );
}

/// Rendered width of `text` in points, as written after [`escape`].
fn text_width(text: &str, style: FontStyle, size: f32) -> f32 {
    let widths: &[u16; 95] = match style {
        FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
        FontStyle::Regular | FontStyle::Italic => &HELVETICA_WIDTHS,
    };
    let units: u32 = text
        .chars()
        .map(|c| {
            let c = if (' '..='~').contains(&c) { c } else { '?' };
            u32::from(widths[c as usize - 32])
        })
        .sum();
    units as f32 * size / 1000.0
}

fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

fn rgb(color: &Rgb) -> String {
    let channel = |c: u8| f32::from(c) / 255.0;
    format!(
        "{:.3} {:.3} {:.3}",
        channel(color.0),
        channel(color.1),
        channel(color.2)
    )
}

/// Escapes a PDF literal string body.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
