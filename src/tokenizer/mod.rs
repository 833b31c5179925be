use crate::{SyntaxError, SyntaxErrorKind, Trace};
use std::fmt::{Display, Formatter};

#[cfg(test)]
mod __tests__;

/// One lexeme produced by [tokenize] together with the 1-based source
/// line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub line: usize,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' @ line {}", self.text, self.line)
    }
}

/// Splits `text` into a flat sequence of `(lexeme, line)` records. Line
/// numbering starts at 1 and increments on each newline;
/// `\r\n` counts as a single newline. The only failure this stage can
/// raise is an unterminated string at end of file. `trace` logs a line
/// per lexeme produced, mirroring [crate::Parser]'s dispatch trace.
pub fn tokenize(text: &str, address: &str, trace: Trace) -> Result<Vec<Lexeme>, SyntaxError> {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();

    let mut lexemes = Vec::new();
    let mut line = 1usize;
    let mut prev_was_cr = false;
    let mut i = 0usize;

    let mut word = String::new();
    let mut word_line = 0usize;

    macro_rules! push_lexeme {
        ($lexeme:expr) => {{
            let lexeme = $lexeme;
            trace.log_at(Trace::Dispatch, lexeme.line, format_args!("lexeme {}", lexeme));
            lexemes.push(lexeme);
        }};
    }

    macro_rules! flush_word {
        () => {
            if !word.is_empty() {
                push_lexeme!(Lexeme::new(std::mem::take(&mut word), word_line));
            }
        };
    }

    while i < n {
        let c = chars[i];
        match c {
            '\r' => {
                flush_word!();
                line += 1;
                prev_was_cr = true;
                i += 1;
            }
            '\n' => {
                flush_word!();
                if !prev_was_cr {
                    line += 1;
                }
                prev_was_cr = false;
                i += 1;
            }
            ' ' | '\t' => {
                flush_word!();
                prev_was_cr = false;
                i += 1;
            }
            '{' | '}' | '=' => {
                flush_word!();
                prev_was_cr = false;
                push_lexeme!(Lexeme::new(c.to_string(), line));
                i += 1;
            }
            '#' => {
                flush_word!();
                prev_was_cr = false;
                let (body, next_i) = scan_comment(&chars, i + 1);
                push_lexeme!(Lexeme::new("#", line));
                push_lexeme!(Lexeme::new(body, line));
                i = next_i;
            }
            '"' => {
                flush_word!();
                prev_was_cr = false;
                let start_line = line;
                match scan_string(&chars, i, &mut line) {
                    Some((lexeme_text, next_i)) => {
                        push_lexeme!(Lexeme::new(lexeme_text, start_line));
                        i = next_i;
                    }
                    None => {
                        let (partial, _) = scan_string_unterminated(&chars, i);
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::UnterminatedString,
                            address,
                            start_line,
                            &partial,
                        ));
                    }
                }
            }
            _ => {
                if word.is_empty() {
                    word_line = line;
                }
                word.push(c);
                prev_was_cr = false;
                i += 1;
            }
        }
    }
    flush_word!();
    Ok(lexemes)
}

/// Scans a comment body starting right after the `#`, stopping before
/// (not consuming) the next `\r`/`\n`, or at EOF.
fn scan_comment(chars: &[char], mut i: usize) -> (String, usize) {
    let mut body = String::new();
    while i < chars.len() && chars[i] != '\r' && chars[i] != '\n' {
        body.push(chars[i]);
        i += 1;
    }
    (body, i)
}

/// Scans a string lexeme starting at the opening quote `chars[start]`.
/// Returns the full lexeme text (including both quotes) and the index
/// just past the closing quote, or `None` if EOF was reached first.
/// A `"` closes the string unless the immediately preceding character
/// was `\`.
fn scan_string(chars: &[char], start: usize, line: &mut usize) -> Option<(String, usize)> {
    let mut text = String::new();
    text.push('"');
    let mut i = start + 1;
    let mut prev = '"';
    while i < chars.len() {
        let c = chars[i];
        text.push(c);
        if c == '"' && prev != '\\' {
            return Some((text, i + 1));
        }
        if c == '\n' && prev != '\r' {
            *line += 1;
        } else if c == '\r' {
            *line += 1;
        }
        prev = c;
        i += 1;
    }
    None
}

fn scan_string_unterminated(chars: &[char], start: usize) -> (String, usize) {
    let mut text = String::new();
    text.push('"');
    for &c in &chars[start + 1..] {
        text.push(c);
    }
    (text, chars.len())
}
