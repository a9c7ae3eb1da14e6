// Rust guideline compliant 2026-10-17

//! POSIX shell quoting and word splitting for command lines.

use crate::{Error, Result};

/// Characters that never need quoting.
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c)
}

/// Quotes a single word so a POSIX shell reads it back unchanged.
///
/// # Arguments
/// * `word` - The word to quote
///
/// # Returns
/// The word itself when it is safe, otherwise a single-quoted form
pub fn quote(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }
    if word.chars().all(is_safe_char) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', "'\"'\"'"))
}

/// Joins `argv` into a command line suitable for display.
///
/// # Arguments
/// * `argv` - Program followed by its arguments
///
/// # Returns
/// A space-separated, shell-quoted command line
pub fn command_to_display<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(|word| quote(word.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a command line into words the way a POSIX shell would.
///
/// Supports single quotes, double quotes and backslash escapes. No
/// expansion of any kind is performed.
///
/// # Arguments
/// * `text` - The command line
///
/// # Returns
/// The list of words (empty for blank input)
///
/// # Errors
///
/// Returns `Error::InvalidCommandSyntax` for an unterminated quote or a
/// trailing backslash.
pub fn split_command(text: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => {
                            return Err(Error::InvalidCommandSyntax(
                                "No closing quotation".to_string(),
                            ))
                        }
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('\\' | '"' | '$' | '`')) => current.push(c),
                            Some('\n') => {}
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => {
                                return Err(Error::InvalidCommandSyntax(
                                    "No closing quotation".to_string(),
                                ))
                            }
                        },
                        Some(c) => current.push(c),
                        None => {
                            return Err(Error::InvalidCommandSyntax(
                                "No closing quotation".to_string(),
                            ))
                        }
                    }
                }
            }
            '\\' => match chars.next() {
                Some('\n') => {}
                Some(c) => {
                    in_word = true;
                    current.push(c);
                }
                None => {
                    return Err(Error::InvalidCommandSyntax(
                        "No escaped character".to_string(),
                    ))
                }
            },
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}
