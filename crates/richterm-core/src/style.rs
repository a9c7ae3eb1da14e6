// Rust guideline compliant 2026-10-17

//! Text styles shared by the markup parser, the ANSI parser and the renderer.

/// Names of the 16 standard terminal colors, in palette order.
pub const STANDARD_COLOR_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 theme colors (0-7 normal, 8-15 bright).
    Standard(u8),
    /// An entry of the 256-color palette.
    Indexed(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses a color word as used in console markup.
    ///
    /// Accepts standard names (`red`, `bright_blue`, `grey`), `#rrggbb`,
    /// `color(N)` and `rgb(r,g,b)`.
    ///
    /// # Returns
    /// The parsed color, or `None` if the word is not a color
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.trim().to_ascii_lowercase();

        if let Some(index) = STANDARD_COLOR_NAMES.iter().position(|name| *name == word) {
            return Some(Color::Standard(index as u8));
        }

        match word.as_str() {
            "grey" | "gray" => return Some(Color::Standard(8)),
            "purple" => return Some(Color::Standard(5)),
            _ => {}
        }

        if let Some(hex) = word.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(inner) = word
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let index: u8 = inner.trim().parse().ok()?;
            return Some(if index < 16 {
                Color::Standard(index)
            } else {
                Color::Indexed(index)
            });
        }

        if let Some(inner) = word
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<u8> = inner
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<std::result::Result<_, _>>()
                .ok()?;
            if let [r, g, b] = parts[..] {
                return Some(Color::Rgb(r, g, b));
            }
        }

        None
    }
}

/// Visual attributes of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color, or the theme foreground when `None`.
    pub fg: Option<Color>,
    /// Background color, or the theme background when `None`.
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub strike: bool,
}

impl Style {
    /// Returns `true` if the style carries no attributes at all.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// Layers `other` on top of `self`: colors set in `other` win,
    /// attributes accumulate.
    pub fn combine(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            blink: self.blink || other.blink,
            reverse: self.reverse || other.reverse,
            strike: self.strike || other.strike,
        }
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    /// Creates a new span.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// Appends `text` to `spans`, merging with the last span when styles match.
pub fn push_span(spans: &mut Vec<Span>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => spans.push(Span::new(text, style)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_names() {
        assert_eq!(Color::parse("red"), Some(Color::Standard(1)));
        assert_eq!(Color::parse("bright_cyan"), Some(Color::Standard(14)));
        assert_eq!(Color::parse("grey"), Some(Color::Standard(8)));
    }

    #[test]
    fn test_parse_hex_and_functions() {
        assert_eq!(Color::parse("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(Color::parse("color(200)"), Some(Color::Indexed(200)));
        assert_eq!(Color::parse("color(3)"), Some(Color::Standard(3)));
        assert_eq!(Color::parse("rgb(1, 2, 3)"), Some(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Color::parse("bold"), None);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("rgb(1,2)"), None);
        assert_eq!(Color::parse("color(300)"), None);
    }

    #[test]
    fn test_combine_prefers_outer_colors() {
        let base = Style {
            fg: Some(Color::Standard(1)),
            bold: true,
            ..Style::default()
        };
        let top = Style {
            fg: Some(Color::Standard(2)),
            italic: true,
            ..Style::default()
        };
        let combined = base.combine(&top);
        assert_eq!(combined.fg, Some(Color::Standard(2)));
        assert!(combined.bold && combined.italic);
    }

    #[test]
    fn test_push_span_merges_equal_styles() {
        let mut spans = Vec::new();
        push_span(&mut spans, "ab", Style::default());
        push_span(&mut spans, "cd", Style::default());
        push_span(&mut spans, "", Style { bold: true, ..Style::default() });
        assert_eq!(spans, vec![Span::plain("abcd")]);
    }
}
