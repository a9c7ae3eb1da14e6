// Rust guideline compliant 2026-10-17

//! Console markup parsing for prompts.
//!
//! Markup looks like `[bold cyan]$[/]`: square-bracket tags open a style,
//! `[/]` closes the most recent one and `[/tag]` closes the most recent tag
//! with that name, leaving tags opened after it in effect. A
//! bracket that does not form a valid tag is kept as literal text, and
//! `\[` always produces a literal bracket.

use crate::style::{push_span, Color, Span, Style};
use crate::{Error, Result};

/// Applies the words of an opening tag on top of `base`.
///
/// # Returns
/// The resulting style, or `None` if any word is not understood
fn apply_style_words(base: Style, tag: &str) -> Option<Style> {
    let mut style = base;
    let mut words = tag.split_whitespace();

    while let Some(word) = words.next() {
        let lowered = word.to_ascii_lowercase();
        match lowered.as_str() {
            "on" => style.bg = Some(Color::parse(words.next()?)?),
            "not" => set_attribute(&mut style, words.next()?, false)?,
            _ => {
                if set_attribute(&mut style, &lowered, true).is_none() {
                    style.fg = Some(Color::parse(&lowered)?);
                }
            }
        }
    }

    Some(style)
}

fn set_attribute(style: &mut Style, word: &str, value: bool) -> Option<()> {
    match word {
        "bold" | "b" => style.bold = value,
        "dim" | "d" => style.dim = value,
        "italic" | "i" => style.italic = value,
        "underline" | "u" => style.underline = value,
        "strike" | "s" => style.strike = value,
        "reverse" | "r" => style.reverse = value,
        "blink" => style.blink = value,
        _ => return None,
    }
    Some(())
}

/// Finds a tag starting at byte offset `start` (which holds `[`).
///
/// # Returns
/// The tag body and the offset just past the closing `]`
fn find_tag(text: &str, start: usize) -> Option<(&str, usize)> {
    let rest = &text[start + 1..];
    let first = rest.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '#' || first == '/') {
        return None;
    }
    let end = rest.find(|c: char| c == ']' || c == '[')?;
    if rest.as_bytes()[end] != b']' {
        return None;
    }
    Some((&rest[..end], start + 1 + end + 1))
}

/// Parses console markup into styled spans.
///
/// # Arguments
/// * `text` - The markup text
///
/// # Returns
/// Spans in order, with adjacent equal styles merged
///
/// # Errors
///
/// Returns `Error::InvalidMarkup` when a closing tag does not match any
/// open tag.
pub fn parse_markup(text: &str) -> Result<Vec<Span>> {
    let mut spans = Vec::new();
    // Open tags in order; the current style is every open tag applied in turn.
    let mut stack: Vec<String> = Vec::new();
    let mut pos = 0;
    let mut literal_from = 0;

    let current = |stack: &[String]| {
        stack.iter().fold(Style::default(), |style, tag| {
            apply_style_words(style, tag).unwrap_or(style)
        })
    };

    while let Some(offset) = text[pos..].find(['[', '\\']) {
        let at = pos + offset;

        if text[at..].starts_with("\\[") {
            push_span(&mut spans, &text[literal_from..at], current(&stack));
            literal_from = at + 1;
            pos = at + 2;
            continue;
        }
        if text.as_bytes()[at] == b'\\' {
            pos = at + 1;
            continue;
        }

        let Some((tag, next)) = find_tag(text, at) else {
            pos = at + 1;
            continue;
        };

        if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            let index = if name.is_empty() {
                stack.len().checked_sub(1)
            } else {
                stack.iter().rposition(|open| open == name)
            };
            let Some(index) = index else {
                return Err(Error::InvalidMarkup(format!(
                    "closing tag '[{}]' at position {} doesn't match any open tag",
                    tag, at
                )));
            };
            push_span(&mut spans, &text[literal_from..at], current(&stack));
            stack.remove(index);
        } else {
            let style = current(&stack);
            if apply_style_words(style, tag).is_none() {
                pos = at + 1;
                continue;
            }
            push_span(&mut spans, &text[literal_from..at], style);
            stack.push(tag.trim().to_string());
        }

        literal_from = next;
        pos = next;
    }

    push_span(&mut spans, &text[literal_from..], current(&stack));
    Ok(spans)
}

/// Returns the text of `markup` without tags.
///
/// Markup that fails to parse is returned unchanged.
pub fn markup_to_plain(markup: &str) -> String {
    match parse_markup(markup) {
        Ok(spans) => spans.into_iter().map(|span| span.text).collect(),
        Err(_) => markup.to_string(),
    }
}

/// Escapes `text` so it renders literally when parsed as markup.
pub fn escape(text: &str) -> String {
    text.replace('[', "\\[")
}
