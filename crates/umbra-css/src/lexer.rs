use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    /// Number with any `px` suffix already stripped.
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes from `#rgb`, `#rrggbb` or `#rrggbbaa`.
    Color([u8; 4]),
    /// `@name` reference, without the `@`.
    At(String),
    // Punctuation
    Comma,
    LParen,
    RParen,
    // Sentinel
    Eof,
}

/// A token together with the 1-based column where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    /// 1-based column of `pos`, counted in chars.
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let col = self.col;
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.col += 1;
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.col)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ',' => { self.advance(); Ok(Token::Comma) }
            '(' => { self.advance(); Ok(Token::LParen) }
            ')' => { self.advance(); Ok(Token::RParen) }
            '#' => self.lex_color(),
            '@' => self.lex_at(),
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(Token::Ident(self.lex_name().to_string())),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    /// Consumes `[A-Za-z0-9_-]*` and returns the slice.
    fn lex_name(&mut self) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '-') {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn lex_at(&mut self) -> Result<Token, ParseError> {
        self.advance(); // consume `@`
        let name = self.lex_name();
        if name.is_empty() {
            return Err(self.err("expected a color name after '@'"));
        }
        Ok(Token::At(name.to_string()))
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        self.advance(); // consume `#`
        let start = self.pos;
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
            count += 1;
        }
        let hex = &self.src[start..self.pos];
        // All chars were validated as ascii hex digits above.
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0) * 17;
        match count {
            3 => Ok(Token::Color([nibble(0), nibble(1), nibble(2), 255])),
            6 => Ok(Token::Color([byte(0), byte(2), byte(4), 255])),
            8 => Ok(Token::Color([byte(0), byte(2), byte(4), byte(6)])),
            n => Err(self.err(format!(
                "color literal must be #rgb, #rrggbb or #rrggbbaa, got {} digits",
                n
            ))),
        }
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        let mut digits = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            digits += 1;
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
                digits += 1;
            }
        }
        let s = &self.src[start..self.pos];
        if digits == 0 {
            return Err(self.err(format!("invalid number {:?}", s)));
        }
        let value = s
            .parse::<f32>()
            .map_err(|_| self.err(format!("invalid number {:?}", s)))?;

        match self.lex_name() {
            "" | "px" => Ok(Token::Number(value)),
            unit => Err(self.err(format!("unsupported unit {:?}", unit))),
        }
    }
}
