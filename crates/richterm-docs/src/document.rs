// Rust guideline compliant 2026-10-17

//! Expansion of richterm directives in reStructuredText documents.

use crate::directive::{Directive, OutputFormat, DIRECTIVE_NAME};
use crate::error::{DirectiveError, DocumentError};
use richterm_core::Config;

/// A directive found in a document, with the lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Index of the directive's first line.
    pub start: usize,
    /// Index one past its last option line.
    pub end: usize,
    /// Leading whitespace of the directive line.
    pub indent: String,
    pub directive: Directive,
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Matches a directive header line, returning its indent and argument.
fn match_header(line: &str) -> Option<(&str, &str)> {
    let indent = leading_whitespace(line);
    let rest = line[indent.len()..].strip_prefix("..")?;
    let rest = rest.trim_start().strip_prefix(DIRECTIVE_NAME)?;
    let argument = rest.strip_prefix("::")?;
    Some((indent, argument))
}

/// Directives whose bodies are shown verbatim.
const LITERAL_DIRECTIVES: [&str; 6] = [
    "code-block",
    "code",
    "sourcecode",
    "parsed-literal",
    "raw",
    "highlight",
];

/// Returns `true` if the body of an explicit markup line is quoted content:
/// a comment or a literal directive. Bodies of other directives such as
/// `.. note::` are still searched.
fn quotes_body(explicit: &str) -> bool {
    let rest = explicit.trim_start_matches('.').trim_start();
    match rest.find("::") {
        Some(end) if !rest[..end].is_empty() && !rest[..end].contains(char::is_whitespace) => {
            LITERAL_DIRECTIVES.contains(&&rest[..end])
        }
        _ => true,
    }
}

/// Splits an option line `:name: value` into its parts.
fn parse_option(line: &str) -> Option<(&str, &str)> {
    let body = line.trim().strip_prefix(':')?;
    let end = body.find(':')?;
    Some((&body[..end], body[end + 1..].trim()))
}

/// Finds every directive in `lines`.
///
/// # Errors
///
/// Returns an error for option lines that are malformed or unknown.
pub fn find_directives(lines: &[&str]) -> Result<Vec<Located>, DocumentError> {
    let mut found = Vec::new();
    let mut index = 0;

    // Indent of an open literal block or foreign directive body; lines
    // indented deeper than this belong to it and are never expanded.
    let mut quoted: Option<usize> = None;
    // Indent of the previous paragraph if it ended with `::`.
    let mut literal_intro: Option<usize> = None;

    while index < lines.len() {
        let line = lines[index];
        if line.trim().is_empty() {
            index += 1;
            continue;
        }
        let depth = leading_whitespace(line).len();

        if let Some(outer) = quoted {
            if depth > outer {
                index += 1;
                continue;
            }
            quoted = None;
        }
        if let Some(outer) = literal_intro.take() {
            if depth > outer {
                quoted = Some(outer);
                index += 1;
                continue;
            }
        }

        let Some((indent, argument)) = match_header(line) else {
            let trimmed = line.trim_start();
            if trimmed == ".." || trimmed.starts_with(".. ") {
                if quotes_body(trimmed) {
                    quoted = Some(depth);
                }
            } else if line.trim_end().ends_with("::") {
                literal_intro = Some(depth);
            }
            index += 1;
            continue;
        };

        let mut directive = Directive::new(argument.trim());
        let start = index;
        index += 1;

        while index < lines.len() {
            let line = lines[index];
            if line.trim().is_empty() || leading_whitespace(line).len() <= indent.len() {
                break;
            }
            let Some((name, value)) = parse_option(line) else {
                return Err(DocumentError {
                    line: index + 1,
                    source: DirectiveError::InvalidOption {
                        name: line.trim().to_string(),
                        reason: "expected an option of the form ':name: value'".to_string(),
                    },
                });
            };
            directive
                .options
                .set(name, value)
                .map_err(|source| DocumentError {
                    line: index + 1,
                    source,
                })?;
            index += 1;
        }

        found.push(Located {
            start,
            end: index,
            indent: indent.to_string(),
            directive,
        });
    }

    Ok(found)
}

/// Replaces every richterm directive in `source` with its rendered block.
///
/// # Arguments
///
/// * `source` - reStructuredText document
/// * `config` - Project-wide defaults for directive options
/// * `format` - Output format of the build
///
/// # Returns
///
/// The expanded document. Text outside directives is kept as is.
///
/// # Errors
///
/// Returns the first directive failure, tagged with its 1-based line.
pub fn expand_document(
    source: &str,
    config: &Config,
    format: OutputFormat,
) -> Result<String, DocumentError> {
    let lines: Vec<&str> = source.lines().collect();
    let directives = find_directives(&lines)?;

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;

    for located in &directives {
        for line in &lines[cursor..located.start] {
            out.push_str(line);
            out.push('\n');
        }

        let block = located.directive.run(config).map_err(|source| DocumentError {
            line: located.start + 1,
            source,
        })?;
        out.push_str(&block.to_rst(format, &located.indent));
        cursor = located.end;
    }

    for line in &lines[cursor..] {
        out.push_str(line);
        out.push('\n');
    }
    if !source.ends_with('\n') && out.ends_with('\n') {
        out.pop();
    }

    tracing::debug!(directives = directives.len(), "document expanded");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_header() {
        assert_eq!(
            match_header(".. richterm:: ls -la"),
            Some(("", " ls -la"))
        );
        assert_eq!(match_header("   ..  richterm::"), Some(("   ", "")));
        assert_eq!(match_header(".. note::"), None);
        assert_eq!(match_header("richterm:: ls"), None);
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("   :prompt: [bold]$"), Some(("prompt", "[bold]$")));
        assert_eq!(parse_option("   :hide-command:"), Some(("hide-command", "")));
        assert_eq!(parse_option("   plain text"), None);
    }

    #[test]
    fn test_find_directives_with_options() {
        let source = "Intro\n\n.. richterm:: echo hi\n   :prompt: >\n   :hide-command:\n\nOutro\n";
        let lines: Vec<&str> = source.lines().collect();
        let found = find_directives(&lines).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 2);
        assert_eq!(found[0].end, 5);
        assert_eq!(found[0].directive.command, "echo hi");
        assert_eq!(found[0].directive.options.prompt.as_deref(), Some(">"));
        assert!(found[0].directive.options.hide_command);
    }

    #[test]
    fn test_find_directives_reports_line_of_bad_option() {
        let source = ".. richterm:: echo hi\n   :colour: red\n";
        let lines: Vec<&str> = source.lines().collect();
        let err = find_directives(&lines).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.source, DirectiveError::UnknownOption(_)));
    }

    #[test]
    fn test_literal_blocks_are_not_expanded() {
        let source = "Use it like this::\n\n   .. richterm:: sh -c \"exit 9\"\n\nDone.\n";
        let expanded = expand_document(source, &Config::default(), OutputFormat::Html).unwrap();
        assert_eq!(expanded, source);
    }

    #[test]
    fn test_code_block_bodies_are_not_expanded() {
        let source = ".. code-block:: rst\n\n   .. richterm:: false\n      :prompt: >\n\n.. richterm:: echo real\n";
        let lines: Vec<&str> = source.lines().collect();
        let found = find_directives(&lines).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 5);
        assert_eq!(found[0].directive.command, "echo real");
    }

    #[test]
    fn test_directive_inside_admonition_is_found() {
        let source = ".. note::\n\n   .. richterm:: echo hi\n      :hide-command:\n";
        let lines: Vec<&str> = source.lines().collect();
        let found = find_directives(&lines).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].indent, "   ");
        assert!(found[0].directive.options.hide_command);
    }

    #[test]
    fn test_comment_bodies_are_not_expanded() {
        let source = "..\n   .. richterm:: false\n\nText\n";
        let lines: Vec<&str> = source.lines().collect();
        assert!(find_directives(&lines).unwrap().is_empty());
    }

    #[test]
    fn test_directive_after_literal_block_is_found() {
        let source = "Example::\n\n   literal\n\n.. richterm:: echo hi\n";
        let lines: Vec<&str> = source.lines().collect();
        let found = find_directives(&lines).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 4);
    }

    #[test]
    fn test_document_without_directives_is_unchanged() {
        let source = "Title\n=====\n\n.. note:: nothing to run\n";
        let expanded = expand_document(source, &Config::default(), OutputFormat::Html).unwrap();
        assert_eq!(expanded, source);
    }
}
