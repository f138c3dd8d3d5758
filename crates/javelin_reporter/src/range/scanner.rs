//! A minimal Java tokenizer used to recover offsets the AST does not store.
//!
//! It only distinguishes what range recovery needs: identifiers, literals,
//! and single-character punctuation. Multi-character operators come out as
//! one token per byte, so `>>` and `>>>` close nested type arguments one
//! `>` at a time. Comments and whitespace are skipped.

use std::sync::Arc;
use thiserror::Error;

/// A scanning failure. Never escapes the range resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ScanError {
    #[error("unterminated literal starting at offset {0}")]
    UnterminatedLiteral(u32),
    #[error("unterminated comment starting at offset {0}")]
    UnterminatedComment(u32),
}

/// The coarse kind of a scanned token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum TokenKind {
    Identifier,
    Literal,
    Punct(u8),
}

/// A token with inclusive offsets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: u32,
    pub end: u32,
}

/// A resettable scanner over a shared source buffer.
///
/// Holds a cursor into one buffer at a time; [`reset_to`](Self::reset_to)
/// replaces both before every use.
#[derive(Debug)]
pub(crate) struct PositionScanner {
    source: Arc<str>,
    pos: usize,
    limit: usize,
}

impl PositionScanner {
    pub fn new() -> Self {
        Self {
            source: Arc::from(""),
            pos: 0,
            limit: 0,
        }
    }

    /// Points the scanner at `source[start..=end]`, clamped to the buffer.
    pub fn reset_to(&mut self, source: Arc<str>, start: u32, end: u32) {
        let len = source.len();
        self.limit = (end as usize).saturating_add(1).min(len);
        self.pos = (start as usize).min(self.limit);
        self.source = source;
    }

    fn bytes(&self) -> &[u8] {
        &self.source.as_bytes()[..self.limit]
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.limit {
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) -> Result<(), ScanError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(b), _) if b.is_ascii_whitespace() => self.advance(),
                (Some(b'/'), Some(b'/')) => {
                    while let Some(b) = self.peek() {
                        if b == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                (Some(b'/'), Some(b'*')) => {
                    let start = self.pos as u32;
                    self.advance();
                    self.advance();
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some(b'*'), Some(b'/')) => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            (Some(_), _) => self.advance(),
                            (None, _) => return Err(ScanError::UnterminatedComment(start)),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_quoted(&mut self, quote: u8) -> Result<(), ScanError> {
        let start = self.pos as u32;
        if quote == b'"' && self.peek_at(1) == Some(b'"') && self.peek_at(2) == Some(b'"') {
            return self.scan_text_block(start);
        }
        self.advance();
        loop {
            match self.peek() {
                Some(b'\\') => {
                    self.advance();
                    self.advance();
                }
                Some(b) if b == quote => {
                    self.advance();
                    return Ok(());
                }
                Some(b'\n') | None => return Err(ScanError::UnterminatedLiteral(start)),
                Some(_) => self.advance(),
            }
        }
    }

    fn scan_text_block(&mut self, start: u32) -> Result<(), ScanError> {
        for _ in 0..3 {
            self.advance();
        }
        loop {
            match (self.peek(), self.peek_at(1), self.peek_at(2)) {
                (Some(b'\\'), _, _) => {
                    self.advance();
                    self.advance();
                }
                (Some(b'"'), Some(b'"'), Some(b'"')) => {
                    for _ in 0..3 {
                        self.advance();
                    }
                    return Ok(());
                }
                (Some(_), _, _) => self.advance(),
                (None, _, _) => return Err(ScanError::UnterminatedLiteral(start)),
            }
        }
    }

    /// Returns the next token, or `None` at the end of the window.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.skip_trivia()?;
        let Some(b) = self.peek() else {
            return Ok(None);
        };
        let start = self.pos;
        let kind = if is_identifier_start(b) {
            while self.peek().is_some_and(is_identifier_part) {
                self.advance();
            }
            TokenKind::Identifier
        } else if b.is_ascii_digit() {
            while self
                .peek()
                .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
            {
                self.advance();
            }
            TokenKind::Literal
        } else if b == b'"' || b == b'\'' {
            self.scan_quoted(b)?;
            TokenKind::Literal
        } else {
            self.advance();
            TokenKind::Punct(b)
        };
        Ok(Some(Token {
            kind,
            start: start as u32,
            end: (self.pos - 1) as u32,
        }))
    }
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_identifier_part(b: u8) -> bool {
    is_identifier_start(b) || b.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        let mut scanner = PositionScanner::new();
        scanner.reset_to(Arc::from(src), 0, src.len() as u32);
        let mut out = Vec::new();
        while let Some(token) = scanner.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn splits_shift_operators() {
        let toks = tokens("a>>>b");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Punct(b'>'),
                TokenKind::Punct(b'>'),
                TokenKind::Punct(b'>'),
                TokenKind::Identifier,
            ]
        );
        assert_eq!(toks[3].start, 3);
    }

    #[test]
    fn skips_comments_and_literals() {
        let toks = tokens("x /* < */ \"<\" // >\n '>' y");
        assert_eq!(toks.len(), 4);
        assert_eq!(toks[1].kind, TokenKind::Literal);
        assert_eq!(toks[2].kind, TokenKind::Literal);
        assert_eq!(toks[3].start, 24);
    }

    #[test]
    fn identifier_offsets_are_inclusive() {
        let toks = tokens("  foo(bar)");
        assert_eq!((toks[0].start, toks[0].end), (2, 4));
        assert_eq!(toks[1].kind, TokenKind::Punct(b'('));
        assert_eq!((toks[2].start, toks[2].end), (6, 8));
    }

    #[test]
    fn text_block_is_one_literal() {
        let toks = tokens("\"\"\"\n a > b\n\"\"\" >");
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[1].kind, TokenKind::Punct(b'>'));
    }

    #[test]
    fn unterminated_string_errors() {
        let mut scanner = PositionScanner::new();
        scanner.reset_to(Arc::from("\"abc"), 0, 3);
        assert_eq!(
            scanner.next_token(),
            Err(ScanError::UnterminatedLiteral(0))
        );
    }

    #[test]
    fn unterminated_comment_errors() {
        let mut scanner = PositionScanner::new();
        scanner.reset_to(Arc::from("a /* b"), 0, 5);
        assert!(scanner.next_token().unwrap().is_some());
        assert_eq!(scanner.next_token(), Err(ScanError::UnterminatedComment(2)));
    }

    #[test]
    fn reset_clamps_window() {
        let mut scanner = PositionScanner::new();
        scanner.reset_to(Arc::from("ab cd"), 3, 100);
        let token = scanner.next_token().unwrap().unwrap();
        assert_eq!((token.start, token.end), (3, 4));
        assert_eq!(scanner.next_token().unwrap(), None);
    }
}
