use super::token::*;
use crate::source::*;
use log::trace;

/// Pull-based scanner: each call to [`Lexer::next_token`] classifies exactly one
/// lexeme, looking at most one byte past the current one.
pub struct Lexer {
    source: Source,
    position: usize,
    read_position: usize,
    current: Option<u8>,
    line: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            current: None,
            line: 1,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let character = match self.current {
            Some(character) => character,
            None => return self.make_token(TokenKind::EOF, start),
        };

        let kind = match character {
            b'=' => self.conditional_kind(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'!' => self.conditional_kind(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Star,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            c if is_letter(c) => return self.identifier(start),
            c if is_digit(c) => return self.number(start),
            c if !c.is_ascii() => {
                // Keep multi-byte characters whole so the lexeme stays valid text
                for _ in 1..self.source.char_width(start) {
                    self.read_char();
                }
                TokenKind::Illegal
            }
            _ => TokenKind::Illegal,
        };

        self.read_char();
        self.make_token(kind, start)
    }

    fn identifier(&mut self, start: usize) -> Token {
        self.read_while(is_letter);
        let kind = lookup_identifier(self.source.lexeme(start, self.position - start));
        self.make_token(kind, start)
    }

    fn number(&mut self, start: usize) -> Token {
        self.read_while(is_digit);
        self.make_token(TokenKind::Int, start)
    }

    fn conditional_kind(&mut self, next: u8, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_char() == Some(next) {
            self.read_char();
            matched
        } else {
            single
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') = self.current {
            if self.current == Some(b'\n') {
                self.line += 1;
            }
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) {
        while self.current.map_or(false, predicate) {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        self.current = self.source.byte(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.byte(self.read_position)
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        let span = Span::new(&self.source, start, self.position - start, self.line);
        let token = Token::new(kind, span);
        trace!(target: "lexer", "{}", token);
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first EOF, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_letter(character: u8) -> bool {
    character.is_ascii_alphabetic() || character == b'_'
}

fn is_digit(character: u8) -> bool {
    character.is_ascii_digit()
}
