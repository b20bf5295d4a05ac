use crate::ast::{ColorExpr, LayerDecl, ShadowValue};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Most lengths a single layer accepts: offsets, blur radius, spread.
const MAX_LENGTHS: usize = 4;

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_col(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.col)
            .unwrap_or(1)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.current_col())
    }

    /// Error positioned at the token that was just consumed.
    fn err_prev(&self, msg: impl Into<String>) -> ParseError {
        let col = self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.col)
            .unwrap_or(1);
        ParseError::new(msg, col)
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    fn expect_number(&mut self) -> Result<f32, ParseError> {
        match self.advance() {
            Token::Number(n) => Ok(n),
            tok => Err(self.err_prev(format!("expected a number, got {:?}", tok))),
        }
    }

    fn is_ident(&self, word: &str) -> bool {
        matches!(self.peek(), Token::Ident(s) if s.eq_ignore_ascii_case(word))
    }

    // ── Shadow value ──────────────────────────────────────────────────────

    pub fn parse_shadow_value(&mut self) -> Result<ShadowValue, ParseError> {
        if self.is_ident("none") && self.peek_ahead(1) == &Token::Eof {
            self.advance();
            return Ok(ShadowValue::default());
        }

        let mut layers = Vec::new();
        loop {
            layers.push(self.parse_layer()?);
            match self.peek() {
                Token::Comma => { self.advance(); }
                Token::Eof => break,
                tok => return Err(self.err(format!("expected ',' or end of value, got {:?}", tok))),
            }
        }

        Ok(ShadowValue { layers })
    }

    // ── Layer ─────────────────────────────────────────────────────────────

    fn parse_layer(&mut self) -> Result<LayerDecl, ParseError> {
        let inset = if self.is_ident("inset") {
            self.advance();
            true
        } else {
            false
        };

        let mut lengths = [0i32; MAX_LENGTHS];
        let mut count = 0;
        while let Token::Number(n) = *self.peek() {
            if count == MAX_LENGTHS {
                return Err(self.err("too many lengths in shadow layer"));
            }
            if count == 2 && n < 0.0 {
                return Err(self.err("blur radius must not be negative"));
            }
            self.advance();
            // Fractional lengths truncate toward zero.
            lengths[count] = n.trunc() as i32;
            count += 1;
        }
        if count < 2 {
            return Err(self.err("expected horizontal and vertical offsets"));
        }

        let color = self.parse_color_expr()?;
        let [hoffset, voffset, radius, spread] = lengths;

        Ok(LayerDecl { inset, hoffset, voffset, radius, spread, color })
    }

    // ── Color ─────────────────────────────────────────────────────────────

    pub fn parse_color_value(&mut self) -> Result<ColorExpr, ParseError> {
        let color = self.parse_color_expr()?;
        self.expect_token(&Token::Eof)?;
        Ok(color)
    }

    fn parse_color_expr(&mut self) -> Result<ColorExpr, ParseError> {
        match self.advance() {
            Token::Color([r, g, b, a]) => Ok(ColorExpr::rgba(r, g, b, a as f32 / 255.0)),
            Token::At(name) => Ok(ColorExpr::Named(name)),
            Token::Ident(word) => match word.to_ascii_lowercase().as_str() {
                "rgb" if self.peek() == &Token::LParen => self.parse_rgb_args(false),
                "rgba" if self.peek() == &Token::LParen => self.parse_rgb_args(true),
                "transparent" => Ok(ColorExpr::rgba(0, 0, 0, 0.0)),
                "black" => Ok(ColorExpr::rgba(0, 0, 0, 1.0)),
                "white" => Ok(ColorExpr::rgba(255, 255, 255, 1.0)),
                _ => Err(self.err_prev(format!("unknown color {:?}", word))),
            },
            tok => Err(self.err_prev(format!("expected a color, got {:?}", tok))),
        }
    }

    /// Parses `(r, g, b)` or `(r, g, b, a)`; the function name is already consumed.
    fn parse_rgb_args(&mut self, with_alpha: bool) -> Result<ColorExpr, ParseError> {
        self.expect_token(&Token::LParen)?;
        let r = self.parse_channel()?;
        self.expect_token(&Token::Comma)?;
        let g = self.parse_channel()?;
        self.expect_token(&Token::Comma)?;
        let b = self.parse_channel()?;
        let a = if with_alpha {
            self.expect_token(&Token::Comma)?;
            self.expect_number()?.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.expect_token(&Token::RParen)?;
        Ok(ColorExpr::rgba(r, g, b, a))
    }

    fn parse_channel(&mut self) -> Result<u8, ParseError> {
        let n = self.expect_number()?;
        Ok(n.clamp(0.0, 255.0).round() as u8)
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a shadow value such as `"inset 0 1 2 rgba(0,0,0,0.5), 1 1 @shadow"`.
///
/// `none` yields a [`ShadowValue`] with no layers.
pub fn parse_shadow(src: &str) -> Result<ShadowValue, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_shadow_value()
}

/// Parse a single color such as `"#336699"`, `"rgba(0,0,0,0.5)"` or `"@accent"`.
pub fn parse_color(src: &str) -> Result<ColorExpr, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_color_value()
}
