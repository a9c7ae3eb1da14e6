// Rust guideline compliant 2026-10-17

//! ANSI escape sequence parsing.
//!
//! Converts captured terminal output into lines of styled spans. SGR
//! sequences (`ESC [ ... m`) become styles; every other escape sequence is
//! dropped. Carriage returns and backspaces move the cursor so progress
//! bars collapse to their final state.

use crate::style::{push_span, Color, Span, Style};

/// A rendered line of output.
pub type Line = Vec<Span>;

const ESC: char = '\x1b';
const TAB_SIZE: usize = 8;

/// Cursor-addressable cells of the line being built.
#[derive(Default)]
struct LineBuffer {
    cells: Vec<(char, Style)>,
    cursor: usize,
}

impl LineBuffer {
    fn put(&mut self, c: char, style: Style) {
        if self.cursor < self.cells.len() {
            self.cells[self.cursor] = (c, style);
        } else {
            self.cells.push((c, style));
        }
        self.cursor += 1;
    }

    fn finish(&mut self) -> Line {
        let mut spans = Vec::new();
        let mut buf = [0u8; 4];
        for (c, style) in self.cells.drain(..) {
            push_span(&mut spans, c.encode_utf8(&mut buf), style);
        }
        self.cursor = 0;
        spans
    }
}

/// Parses text with ANSI escapes into lines of styled spans.
///
/// Text ending in a newline yields a final empty line.
///
/// # Arguments
/// * `text` - Captured output
///
/// # Returns
/// One entry per line
pub fn parse_ansi(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = LineBuffer::default();
    let mut style = Style::default();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => match chars.next() {
                Some('[') => {
                    let mut params = String::new();
                    let mut terminator = None;
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            terminator = Some(next);
                            break;
                        }
                        params.push(next);
                    }
                    if terminator == Some('m') {
                        apply_sgr(&mut style, &params);
                    }
                }
                Some(']' | 'P' | 'X' | '^' | '_') => skip_string(&mut chars),
                Some('\x20'..='\x2f') => {
                    // nF sequences such as charset selection: intermediates, then a final byte.
                    for next in chars.by_ref() {
                        if !('\x20'..='\x2f').contains(&next) {
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\n' => lines.push(line.finish()),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    continue;
                }
                line.cursor = 0;
            }
            '\x08' => line.cursor = line.cursor.saturating_sub(1),
            '\t' => {
                let spaces = TAB_SIZE - line.cursor % TAB_SIZE;
                for _ in 0..spaces {
                    line.put(' ', style);
                }
            }
            c if c.is_control() => {}
            c => line.put(c, style),
        }
    }

    lines.push(line.finish());
    lines
}

/// Skips an OSC, DCS, SOS, PM or APC string up to BEL or ST.
fn skip_string(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while let Some(next) = chars.next() {
        if next == '\x07' {
            break;
        }
        if next == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            break;
        }
    }
}

/// Removes escape sequences from `text`, keeping the visible characters.
pub fn strip_ansi(text: &str) -> String {
    parse_ansi(text)
        .into_iter()
        .map(|line| line.into_iter().map(|span| span.text).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies an SGR parameter string to `style`.
fn apply_sgr(style: &mut Style, params: &str) {
    let codes: Vec<u16> = if params.is_empty() {
        vec![0]
    } else {
        params
            .split([';', ':'])
            .map(|p| p.parse().unwrap_or(0))
            .collect()
    };

    let mut iter = codes.into_iter();
    while let Some(code) = iter.next() {
        match code {
            0 => *style = Style::default(),
            1 => style.bold = true,
            2 => style.dim = true,
            3 => style.italic = true,
            4 | 21 => style.underline = true,
            5 | 6 => style.blink = true,
            7 => style.reverse = true,
            9 => style.strike = true,
            22 => {
                style.bold = false;
                style.dim = false;
            }
            23 => style.italic = false,
            24 => style.underline = false,
            25 => style.blink = false,
            27 => style.reverse = false,
            29 => style.strike = false,
            30..=37 => style.fg = Some(Color::Standard((code - 30) as u8)),
            38 => style.fg = extended_color(&mut iter),
            39 => style.fg = None,
            40..=47 => style.bg = Some(Color::Standard((code - 40) as u8)),
            48 => style.bg = extended_color(&mut iter),
            49 => style.bg = None,
            90..=97 => style.fg = Some(Color::Standard((code - 90 + 8) as u8)),
            100..=107 => style.bg = Some(Color::Standard((code - 100 + 8) as u8)),
            _ => {}
        }
    }
}

/// Reads the `5;n` or `2;r;g;b` tail of an extended color code.
fn extended_color(iter: &mut impl Iterator<Item = u16>) -> Option<Color> {
    let channel = |v: Option<u16>| v.map(|v| v.min(255) as u8);
    match iter.next()? {
        5 => {
            let index = channel(iter.next())?;
            Some(if index < 16 {
                Color::Standard(index)
            } else {
                Color::Indexed(index)
            })
        }
        2 => {
            let r = channel(iter.next())?;
            let g = channel(iter.next())?;
            let b = channel(iter.next())?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
