//! Byte-level scanner for CLON text.
//!
//! Every byte is mapped to a [`Symbol`] through a 128-entry ASCII table built
//! at compile time; bytes at or above 128 are [`Symbol::Other`]. The scanner
//! tracks two offsets: the current position and the position of the last
//! extraction, so a token is simply the span between the two.

use crate::{
    parser::{Expected, ParseError},
    tree::Span,
};

/// Lexical category of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// End of the buffer, or a NUL byte
    EndOfInput,
    /// `' '`, `'\t'`, `'\n'`, `'\r'`
    Blank,
    /// `t`, the start of `true`
    LetterT,
    /// `f`, the start of `false`
    LetterF,
    /// Any other of `a..=z`
    Lower,
    /// `"`
    Quote,
    /// `0..=9`
    Digit,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Anything else, including every byte above 127
    Other,
}

impl Symbol {
    /// Whether the symbol may appear in a name
    pub fn is_name_part(self) -> bool {
        matches!(self, Symbol::Lower | Symbol::LetterT | Symbol::LetterF)
    }
}

const fn build_ascii_table() -> [Symbol; 128] {
    let mut table = [Symbol::Other; 128];

    let mut c = b'a';
    while c <= b'z' {
        table[c as usize] = Symbol::Lower;
        c += 1;
    }

    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = Symbol::Digit;
        d += 1;
    }

    table[b't' as usize] = Symbol::LetterT;
    table[b'f' as usize] = Symbol::LetterF;
    table[b'"' as usize] = Symbol::Quote;
    table[b'(' as usize] = Symbol::OpenParen;
    table[b')' as usize] = Symbol::CloseParen;
    table[b' ' as usize] = Symbol::Blank;
    table[b'\t' as usize] = Symbol::Blank;
    table[b'\n' as usize] = Symbol::Blank;
    table[b'\r' as usize] = Symbol::Blank;
    table[0] = Symbol::EndOfInput;
    table
}

static ASCII_TO_SYMBOL: [Symbol; 128] = build_ascii_table();

/// Map one byte to its lexical category.
pub fn classify_byte(byte: u8) -> Symbol {
    ASCII_TO_SYMBOL
        .get(byte as usize)
        .copied()
        .unwrap_or(Symbol::Other)
}

/// `[a-z]+`
pub fn is_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| classify_byte(b).is_name_part())
}

/// `[0-9]+`
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| classify_byte(b) == Symbol::Digit)
}

pub struct Scanner<'a> {
    input: &'a str,
    offset: usize,
    mark: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            offset: 0,
            mark: 0,
        }
    }

    /// Current byte offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether every byte has been consumed
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Category of the byte under the cursor
    pub fn classify(&self) -> Symbol {
        self.input
            .as_bytes()
            .get(self.offset)
            .map_or(Symbol::EndOfInput, |&b| classify_byte(b))
    }

    /// Move forward by `n` bytes, never past the end.
    pub fn advance(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.input.len());
    }

    /// Span between the last extraction and the cursor; resets the mark.
    pub fn extract(&mut self) -> Span {
        let span = Span::new(self.mark, self.offset);
        self.mark = self.offset;
        span
    }

    /// Drop everything scanned since the last extraction.
    pub fn ignore(&mut self) {
        self.mark = self.offset;
    }

    pub fn skip_blanks(&mut self) {
        while self.classify() == Symbol::Blank {
            self.advance(1);
        }
        self.ignore();
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.input
            .get(self.offset..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Text of a span produced by this scanner
    pub fn slice(&self, span: Span) -> &'a str {
        span.slice(self.input)
    }

    fn error(&self, expected: Expected) -> ParseError {
        ParseError::expected(expected, self.offset)
    }

    /// Consume one byte of category `symbol`.
    pub fn expect(&mut self, symbol: Symbol, expected: Expected) -> Result<(), ParseError> {
        if self.classify() != symbol {
            return Err(self.error(expected));
        }
        self.advance(1);
        self.ignore();
        Ok(())
    }

    /// `[a-z]+`
    pub fn scan_name(&mut self) -> Result<Span, ParseError> {
        self.ignore();
        if !self.classify().is_name_part() {
            return Err(self.error(Expected::Name));
        }
        while self.classify().is_name_part() {
            self.advance(1);
        }
        Ok(self.extract())
    }

    /// `true` or `false`
    pub fn scan_boolean(&mut self) -> Result<(bool, Span), ParseError> {
        self.ignore();
        let value = if self.starts_with("true") {
            self.advance(4);
            true
        } else if self.starts_with("false") {
            self.advance(5);
            false
        } else {
            return Err(self.error(Expected::Boolean));
        };
        Ok((value, self.extract()))
    }

    /// `"..."` without escapes. Returns the raw span (quotes included) and the
    /// content span (quotes stripped).
    pub fn scan_string(&mut self) -> Result<(Span, Span), ParseError> {
        self.ignore();
        if self.classify() != Symbol::Quote {
            return Err(self.error(Expected::Quote));
        }
        self.advance(1);

        loop {
            match self.classify() {
                Symbol::Quote => break,
                Symbol::EndOfInput => return Err(self.error(Expected::Quote)),
                _ => self.advance(1),
            }
        }
        self.advance(1);

        let raw = self.extract();
        let content = Span::new(raw.start + 1, raw.end - 1);
        Ok((raw, content))
    }

    /// `[0-9]+ ('.' [0-9]+)?`
    pub fn scan_number(&mut self) -> Result<Span, ParseError> {
        self.ignore();
        if self.classify() != Symbol::Digit {
            return Err(self.error(Expected::Digit));
        }
        self.skip_digits();

        if self.input.as_bytes().get(self.offset) == Some(&b'.') {
            self.advance(1);
            if self.classify() != Symbol::Digit {
                return Err(self.error(Expected::Digit));
            }
            self.skip_digits();
        }

        Ok(self.extract())
    }

    fn skip_digits(&mut self) {
        while self.classify() == Symbol::Digit {
            self.advance(1);
        }
    }
}

#[test]
fn test_ascii_table() {
    assert_eq!(classify_byte(b'a'), Symbol::Lower);
    assert_eq!(classify_byte(b't'), Symbol::LetterT);
    assert_eq!(classify_byte(b'f'), Symbol::LetterF);
    assert_eq!(classify_byte(b'7'), Symbol::Digit);
    assert_eq!(classify_byte(b'\r'), Symbol::Blank);
    assert_eq!(classify_byte(0), Symbol::EndOfInput);
    assert_eq!(classify_byte(b'A'), Symbol::Other);
    assert_eq!(classify_byte(b':'), Symbol::Other);
    assert_eq!(classify_byte(0xC3), Symbol::Other);
}

#[test]
fn test_extract_tracks_last_mark() {
    let mut scanner = Scanner::new("abc def");
    scanner.advance(3);
    let first = scanner.extract();
    assert_eq!(scanner.slice(first), "abc");

    scanner.skip_blanks();
    scanner.advance(3);
    let second = scanner.extract();
    assert_eq!(scanner.slice(second), "def");
    assert_eq!(scanner.classify(), Symbol::EndOfInput);
}
