//! Selector tokenization into class names and verbatim text.
//! See: <https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point>

use crate::{Selector, SelectorPart};

/// Largest code point accepted from a hex escape.
const MAX_CODE_POINT: u32 = 0x0010_FFFF;

/// Tokenizer over a selector string.
struct SelectorTokenizer {
    /// Input decoded to chars so escapes can be read code point by code point.
    input: Vec<char>,
    /// Current cursor index into `input`.
    index: usize,
    /// Parts produced so far.
    parts: Vec<SelectorPart>,
}

impl SelectorTokenizer {
    #[inline]
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            index: 0,
            parts: Vec::new(),
        }
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.index.saturating_add(offset)).copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let current = self.input.get(self.index).copied();
        if current.is_some() {
            self.index = self.index.saturating_add(1);
        }
        current
    }

    /// Append text to the trailing verbatim part, starting one if needed.
    fn push_verbatim(&mut self, text: char) {
        if let Some(SelectorPart::Verbatim(last)) = self.parts.last_mut() {
            last.push(text);
        } else {
            self.parts.push(SelectorPart::Verbatim(text.to_string()));
        }
    }

    fn run(mut self) -> Vec<SelectorPart> {
        while let Some(current) = self.peek_at(0) {
            match current {
                '.' if self.peek_at(1).is_some_and(starts_identifier) => {
                    self.index = self.index.saturating_add(1);
                    let name = self.consume_name();
                    self.parts.push(SelectorPart::Class(name));
                }
                '[' => self.consume_bracketed(),
                '"' | '\'' => self.consume_string(current),
                '\\' => {
                    // Escapes outside class names are copied untouched.
                    self.bump();
                    self.push_verbatim('\\');
                    if let Some(escaped) = self.bump() {
                        self.push_verbatim(escaped);
                    }
                }
                _ => {
                    self.bump();
                    self.push_verbatim(current);
                }
            }
        }
        self.parts
    }

    /// Consume an identifier, resolving escapes.
    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(current) = self.peek_at(0) {
            if current == '\\' {
                self.bump();
                name.push(self.consume_escape());
            } else if is_name_char(current) {
                self.bump();
                name.push(current);
            } else {
                break;
            }
        }
        name
    }

    /// Consume the code point after a backslash.
    fn consume_escape(&mut self) -> char {
        let Some(first) = self.bump() else {
            return char::REPLACEMENT_CHARACTER;
        };
        let Some(first_digit) = first.to_digit(16) else {
            return first;
        };
        let mut value = first_digit;
        let mut digits = 1;
        while digits < 6 {
            let Some(digit) = self.peek_at(0).and_then(|next| next.to_digit(16)) else {
                break;
            };
            self.bump();
            value = value.saturating_mul(16).saturating_add(digit);
            digits += 1;
        }
        match self.peek_at(0) {
            Some('\r') => {
                self.bump();
                if self.peek_at(0) == Some('\n') {
                    self.bump();
                }
            }
            Some(' ' | '\t' | '\n' | '\u{c}') => {
                self.bump();
            }
            _ => {}
        }
        if value == 0 || value > MAX_CODE_POINT {
            return char::REPLACEMENT_CHARACTER;
        }
        char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Copy an attribute selector verbatim, honoring quotes and escapes.
    fn consume_bracketed(&mut self) {
        while let Some(current) = self.bump() {
            self.push_verbatim(current);
            match current {
                ']' => return,
                '"' | '\'' => self.copy_string_tail(current),
                '\\' => {
                    if let Some(escaped) = self.bump() {
                        self.push_verbatim(escaped);
                    }
                }
                _ => {}
            }
        }
    }

    fn consume_string(&mut self, quote: char) {
        self.bump();
        self.push_verbatim(quote);
        self.copy_string_tail(quote);
    }

    /// Copy string contents after the opening quote, up to and including the
    /// closing quote.
    fn copy_string_tail(&mut self, quote: char) {
        while let Some(current) = self.bump() {
            self.push_verbatim(current);
            if current == quote {
                return;
            }
            if current == '\\'
                && let Some(escaped) = self.bump()
            {
                self.push_verbatim(escaped);
            }
        }
    }
}

/// Whether `current` may continue an identifier.
#[inline]
fn is_name_char(current: char) -> bool {
    current.is_ascii_alphanumeric() || current == '-' || current == '_' || !current.is_ascii()
}

/// Whether `current` may begin the identifier of a class selector.
#[inline]
fn starts_identifier(current: char) -> bool {
    is_name_char(current) || current == '\\'
}

/// Split `input` into class names and verbatim selector text.
///
/// Parsing is permissive: anything that is not a class selector is kept as
/// written, so serializing an unmodified selector reproduces the input up to
/// class-name escaping.
pub fn parse_selector(input: &str) -> Selector {
    Selector::from_parts(SelectorTokenizer::new(input).run())
}
