// Rust guideline compliant 2026-10-17

//! SVG rendering of a terminal window.
//!
//! The image mimics a dark terminal: window chrome with three buttons and a
//! title, then one row per line of text. Each run of styled text becomes a
//! `<text>` element positioned on a fixed character grid; backgrounds are
//! drawn as `<rect>` elements underneath.

use crate::ansi::{parse_ansi, Line};
use crate::config::Config;
use crate::markup::{markup_to_plain, parse_markup};
use crate::style::{push_span, Color, Span, Style};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

type Rgb = (u8, u8, u8);

const FONT_SIZE: f64 = 20.0;
const LINE_HEIGHT: f64 = FONT_SIZE * 1.22;
const CHAR_WIDTH: f64 = FONT_SIZE * 0.61;
const MARGIN: f64 = 1.0;
const PADDING_TOP: f64 = 40.0;
const PADDING_SIDE: f64 = 8.0;
const PADDING_BOTTOM: f64 = 8.0;
const FONT_FAMILY: &str = "Fira Code, Menlo, 'DejaVu Sans Mono', Consolas, monospace";

/// Color palette of the rendered terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalTheme {
    pub background: Rgb,
    pub foreground: Rgb,
    /// The 16 standard colors, normal then bright.
    pub ansi: [Rgb; 16],
}

impl Default for TerminalTheme {
    fn default() -> Self {
        Self {
            background: (41, 41, 41),
            foreground: (197, 200, 198),
            ansi: [
                (75, 78, 85),
                (204, 85, 90),
                (152, 168, 75),
                (208, 179, 68),
                (96, 138, 177),
                (152, 114, 159),
                (104, 160, 179),
                (197, 200, 198),
                (154, 155, 153),
                (255, 38, 39),
                (0, 130, 61),
                (208, 179, 68),
                (0, 153, 255),
                (255, 39, 255),
                (79, 196, 255),
                (229, 229, 229),
            ],
        }
    }
}

impl TerminalTheme {
    /// Resolves a color to RGB using this palette.
    pub fn resolve(&self, color: Color) -> Rgb {
        match color {
            Color::Standard(index) => self.ansi[(index % 16) as usize],
            Color::Indexed(index) if index < 16 => self.ansi[index as usize],
            Color::Indexed(index) if index < 232 => {
                const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
                let cube = index - 16;
                (
                    LEVELS[(cube / 36) as usize],
                    LEVELS[((cube / 6) % 6) as usize],
                    LEVELS[(cube % 6) as usize],
                )
            }
            Color::Indexed(index) => {
                let level = 8 + 10 * (index - 232);
                (level, level, level)
            }
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

/// Options controlling how a capture is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prompt markup shown before the command.
    pub prompt: String,
    /// Omit the prompt and command line entirely.
    pub hide_command: bool,
    /// Window title.
    pub title: String,
    /// Terminal width in columns; longer lines wrap.
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prompt: "$".to_string(),
            hide_command: false,
            title: "richterm".to_string(),
            width: 80,
        }
    }
}

impl RenderOptions {
    /// Creates options with the given prompt and defaults elsewhere.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            prompt: config.prompt.clone(),
            hide_command: config.hide_command,
            title: config.title.clone(),
            width: config.width,
        }
    }
}

/// Builds the styled lines of a capture: the command line, then the output.
fn build_lines(command: &str, output: &str, options: &RenderOptions) -> Vec<Line> {
    let mut lines = Vec::new();

    if !options.hide_command {
        let mut line = parse_markup(&options.prompt).unwrap_or_else(|_| vec![Span::plain(&options.prompt)]);
        if !line.is_empty() {
            push_span(&mut line, " ", Style::default());
        }
        push_span(&mut line, command, Style::default());
        lines.push(line);
    }

    let mut output_lines = parse_ansi(output);
    if output_lines.last().is_some_and(|line| line.is_empty()) && (output.ends_with('\n') || output.is_empty()) {
        output_lines.pop();
    }
    lines.extend(output_lines);

    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

/// Splits lines longer than `width` characters into several rows.
fn wrap_lines(lines: Vec<Line>, width: usize) -> Vec<Line> {
    let width = width.max(1);
    let mut rows = Vec::with_capacity(lines.len());

    for line in lines {
        let mut row: Line = Vec::new();
        let mut used = 0;
        for span in line {
            let mut rest = span.text.as_str();
            while !rest.is_empty() {
                let room = width - used;
                let split = rest
                    .char_indices()
                    .nth(room)
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                let (head, tail) = rest.split_at(split);
                push_span(&mut row, head, span.style);
                used += head.chars().count();
                rest = tail;
                if used == width && !rest.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    used = 0;
                }
            }
        }
        rows.push(row);
    }

    rows
}

fn hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

/// Escapes text for an SVG text node, keeping runs of spaces visible.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            ' ' => out.push_str("&#160;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Resolved foreground and optional background of a style.
fn colors_of(style: &Style, theme: &TerminalTheme) -> (Rgb, Option<Rgb>) {
    let fg = style.fg.map(|c| theme.resolve(c)).unwrap_or(theme.foreground);
    let bg = style.bg.map(|c| theme.resolve(c));
    if style.reverse {
        (bg.unwrap_or(theme.background), Some(fg))
    } else {
        (fg, bg)
    }
}

fn css_rule(style: &Style, theme: &TerminalTheme) -> String {
    let (fg, _) = colors_of(style, theme);
    let mut rule = format!("fill: {}", hex(fg));
    if style.bold {
        rule.push_str(";font-weight: bold");
    }
    if style.italic {
        rule.push_str(";font-style: italic");
    }
    if style.dim {
        rule.push_str(";opacity: 0.5");
    }
    match (style.underline, style.strike) {
        (true, true) => rule.push_str(";text-decoration: underline line-through"),
        (true, false) => rule.push_str(";text-decoration: underline"),
        (false, true) => rule.push_str(";text-decoration: line-through"),
        (false, false) => {}
    }
    rule
}

/// Derives a class prefix unique to this image's content.
///
/// Covers the palette and the resolved style of every span, so images
/// with equal text but different colors never share class names.
fn unique_id(title: &str, rows: &[Line], theme: &TerminalTheme) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"\0");
    for rgb in [theme.background, theme.foreground].iter().chain(theme.ansi.iter()) {
        hasher.update([rgb.0, rgb.1, rgb.2]);
    }
    for row in rows {
        for span in row {
            let (_, bg) = colors_of(&span.style, theme);
            hasher.update(span.text.as_bytes());
            hasher.update(b"\0");
            hasher.update(css_rule(&span.style, theme).as_bytes());
            hasher.update(bg.map(hex).unwrap_or_default().as_bytes());
            hasher.update(b"\0");
        }
        hasher.update(b"\n");
    }
    let digest = hasher.finalize();
    let short: String = digest[..5].iter().map(|b| format!("{:02x}", b)).collect();
    format!("terminal-{}", short)
}

/// Renders a command and its captured output as an SVG document.
///
/// # Arguments
/// * `command` - Command line as it should be displayed
/// * `output` - Captured output, possibly containing ANSI escapes
/// * `options` - Prompt, visibility, title and width
///
/// # Returns
/// A standalone SVG document
pub fn render_svg(command: &str, output: &str, options: &RenderOptions) -> String {
    render_svg_with_theme(command, output, options, &TerminalTheme::default())
}

/// Renders like [`render_svg`] with an explicit palette.
pub fn render_svg_with_theme(
    command: &str,
    output: &str,
    options: &RenderOptions,
    theme: &TerminalTheme,
) -> String {
    let rows = wrap_lines(build_lines(command, output, options), options.width);
    let id = unique_id(&options.title, &rows, theme);

    let terminal_width = (options.width as f64 * CHAR_WIDTH).ceil();
    let terminal_height = (rows.len() as f64 * LINE_HEIGHT).ceil();
    let width = terminal_width + 2.0 * PADDING_SIDE + 2.0 * MARGIN;
    let height = terminal_height + PADDING_TOP + PADDING_BOTTOM + 2.0 * MARGIN;

    let mut classes: BTreeMap<String, usize> = BTreeMap::new();
    let mut backgrounds = String::new();
    let mut matrix = String::new();

    for (row_index, row) in rows.iter().enumerate() {
        let y = row_index as f64 * LINE_HEIGHT;
        let mut column = 0usize;
        for span in row {
            let cells = span.text.chars().count();
            let x = column as f64 * CHAR_WIDTH;
            let (_, bg) = colors_of(&span.style, theme);
            if let Some(bg) = bg {
                backgrounds.push_str(&format!(
                    "<rect fill=\"{}\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" shape-rendering=\"crispEdges\"/>",
                    hex(bg),
                    x,
                    y + 1.5,
                    cells as f64 * CHAR_WIDTH,
                    LINE_HEIGHT
                ));
            }
            if !span.text.is_empty() {
                let rule = css_rule(&span.style, theme);
                let next = classes.len() + 1;
                let class = *classes.entry(rule).or_insert(next);
                matrix.push_str(&format!(
                    "<text class=\"{id}-r{class}\" x=\"{:.1}\" y=\"{:.1}\" textLength=\"{:.1}\" clip-path=\"url(#{id}-line-{row_index})\">{}</text>",
                    x,
                    y + FONT_SIZE,
                    cells as f64 * CHAR_WIDTH,
                    escape_text(&span.text)
                ));
            }
            column += cells;
        }
        matrix.push_str(&format!(
            "<text class=\"{id}-r0\" x=\"{:.1}\" y=\"{:.1}\">\n</text>",
            column as f64 * CHAR_WIDTH,
            y + FONT_SIZE
        ));
    }

    let mut styles = format!(
        ".{id}-matrix {{ font-family: {FONT_FAMILY}; font-size: {FONT_SIZE}px; line-height: {LINE_HEIGHT}px; font-variant-east-asian: full-width; }}\n\
         .{id}-title {{ font-size: 18px; font-weight: bold; font-family: arial; }}\n\
         .{id}-r0 {{ fill: {} }}\n",
        hex(theme.foreground)
    );
    let mut ordered: Vec<_> = classes.iter().collect();
    ordered.sort_by_key(|(_, index)| **index);
    for (rule, index) in ordered {
        styles.push_str(&format!(".{id}-r{index} {{ {rule} }}\n"));
    }

    let mut clips = format!(
        "<clipPath id=\"{id}-clip-terminal\"><rect x=\"0\" y=\"0\" width=\"{terminal_width:.1}\" height=\"{terminal_height:.1}\"/></clipPath>"
    );
    for row_index in 0..rows.len() {
        clips.push_str(&format!(
            "<clipPath id=\"{id}-line-{row_index}\"><rect x=\"0\" y=\"{:.1}\" width=\"{terminal_width:.1}\" height=\"{LINE_HEIGHT:.1}\"/></clipPath>",
            row_index as f64 * LINE_HEIGHT + 1.5
        ));
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg class=\"rich-terminal\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));
    svg.push_str("<!-- Generated with richterm -->\n");
    svg.push_str(&format!("<style>\n{styles}</style>\n"));
    svg.push_str(&format!("<defs>\n{clips}\n</defs>\n"));
    svg.push_str(&format!(
        "<rect fill=\"{}\" stroke=\"rgba(255,255,255,0.35)\" stroke-width=\"1\" x=\"{MARGIN}\" y=\"{MARGIN}\" width=\"{}\" height=\"{}\" rx=\"8\"/>\n",
        hex(theme.background),
        width - 2.0 * MARGIN,
        height - 2.0 * MARGIN
    ));
    svg.push_str(&format!(
        "<text class=\"{id}-title\" fill=\"{}\" text-anchor=\"middle\" x=\"{}\" y=\"27\">{}</text>\n",
        hex(theme.foreground),
        width / 2.0,
        escape_attr(&options.title)
    ));
    svg.push_str(
        "<g transform=\"translate(26,22)\">\
         <circle cx=\"0\" cy=\"0\" r=\"7\" fill=\"#ff5f57\"/>\
         <circle cx=\"22\" cy=\"0\" r=\"7\" fill=\"#febc2e\"/>\
         <circle cx=\"44\" cy=\"0\" r=\"7\" fill=\"#28c840\"/>\
         </g>\n",
    );
    svg.push_str(&format!(
        "<g transform=\"translate({}, {})\" clip-path=\"url(#{id}-clip-terminal)\">\n{backgrounds}\n<g class=\"{id}-matrix\">\n{matrix}\n</g>\n</g>\n",
        MARGIN + PADDING_SIDE,
        MARGIN + PADDING_TOP
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Renders a capture as plain text, the way it reads in a terminal.
///
/// Used where an image cannot be embedded.
pub fn render_text(command: &str, output: &str, options: &RenderOptions) -> String {
    let mut text = String::new();
    if !options.hide_command {
        let prompt = markup_to_plain(&options.prompt);
        if !prompt.is_empty() {
            text.push_str(&prompt);
            text.push(' ');
        }
        text.push_str(command);
        text.push('\n');
    }
    for line in build_lines("", output, &RenderOptions { hide_command: true, ..options.clone() }) {
        for span in line {
            text.push_str(&span.text);
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(svg: &str) -> String {
        svg.replace("&#160;", " ")
    }

    #[test]
    fn test_render_includes_prompt_and_command() {
        let svg = render_svg("echo hi", "hi\n", &RenderOptions::with_prompt("[bold]$"));
        assert!(svg.contains("<svg"));
        let text = normalize(&svg);
        assert!(text.contains("echo hi"));
        assert!(text.contains(">hi<"));
        assert!(text.contains('$'));
        assert!(!text.contains("[bold]"));
    }

    #[test]
    fn test_render_hides_command() {
        let options = RenderOptions {
            hide_command: true,
            ..RenderOptions::default()
        };
        let svg = normalize(&render_svg("echo hi", "hi\n", &options));
        assert!(!svg.contains("echo hi"));
        assert!(svg.contains("hi"));
    }

    #[test]
    fn test_render_escapes_markup_characters() {
        let svg = render_svg("cat", "<a & b>\n", &RenderOptions::default());
        assert!(svg.contains("&lt;a&#160;&amp;&#160;b&gt;"));
    }

    #[test]
    fn test_render_styles_become_classes() {
        let svg = render_svg("ls", "\x1b[1;31mred\x1b[0m\n", &RenderOptions::default());
        assert!(svg.contains("fill: #cc555a;font-weight: bold"));
        assert!(!svg.contains('\x1b'));
    }

    #[test]
    fn test_background_rects() {
        let svg = render_svg("x", "\x1b[44mblue\x1b[0m\n", &RenderOptions::default());
        assert!(svg.contains("<rect fill=\"#608ab1\""));
    }

    #[test]
    fn test_unique_ids_differ_by_content() {
        let a = render_svg("a", "1", &RenderOptions::default());
        let b = render_svg("b", "2", &RenderOptions::default());
        assert_ne!(id_of(&a), id_of(&b));
    }

    fn id_of(svg: &str) -> String {
        let start = svg.find("terminal-").unwrap();
        svg[start..start + 19].to_string()
    }

    #[test]
    fn test_unique_ids_differ_by_style() {
        let red = render_svg("ls", "x\n", &RenderOptions::with_prompt("[red]$"));
        let green = render_svg("ls", "x\n", &RenderOptions::with_prompt("[green]$"));
        assert_ne!(id_of(&red), id_of(&green));
    }

    #[test]
    fn test_unique_ids_differ_by_theme() {
        let options = RenderOptions::default();
        let dark = render_svg("ls", "x\n", &options);
        let light = render_svg_with_theme(
            "ls",
            "x\n",
            &options,
            &TerminalTheme {
                background: (255, 255, 255),
                foreground: (0, 0, 0),
                ..TerminalTheme::default()
            },
        );
        assert_ne!(id_of(&dark), id_of(&light));
    }

    #[test]
    fn test_space_only_runs_are_emitted() {
        let svg = render_svg("x", "\x1b[31ma\x1b[0m   \x1b[32mb\x1b[0m\n", &RenderOptions::default());
        assert!(svg.contains(">&#160;&#160;&#160;</text>"));
    }

    #[test]
    fn test_build_lines_drops_trailing_newline() {
        let lines = build_lines("cmd", "a\nb\n", &RenderOptions::default());
        assert_eq!(lines.len(), 3);
        let lines = build_lines("cmd", "", &RenderOptions::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_wrap_long_lines() {
        let rows = wrap_lines(vec![vec![Span::plain("abcdefghij")]], 4);
        let texts: Vec<String> = rows
            .iter()
            .map(|row| row.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_exact_width_does_not_add_row() {
        let rows = wrap_lines(vec![vec![Span::plain("abcd")]], 4);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_theme_resolves_palettes() {
        let theme = TerminalTheme::default();
        assert_eq!(theme.resolve(Color::Indexed(16)), (0, 0, 0));
        assert_eq!(theme.resolve(Color::Indexed(231)), (255, 255, 255));
        assert_eq!(theme.resolve(Color::Indexed(232)), (8, 8, 8));
        assert_eq!(theme.resolve(Color::Indexed(1)), theme.ansi[1]);
    }

    #[test]
    fn test_render_text_transcript() {
        let text = render_text("echo hi", "\x1b[32mhi\x1b[0m\n", &RenderOptions::with_prompt("[bold]$"));
        assert_eq!(text, "$ echo hi\nhi\n");
    }
}
