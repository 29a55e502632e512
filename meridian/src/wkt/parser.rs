use std::iter::Peekable;

use meridian_types::geo::GeoPoint2d;
use meridian_types::{MultiPolygon, Polygon, Ring};

use super::lexer::{Lexer, Token, TokenKind};
use super::{number, point, MULTIPOLYGON, POLYGON};
use crate::error::MeridianError;

/// Recursive descent parser for the `POLYGON` / `MULTIPOLYGON` subset of WKT.
///
/// ```text
/// geometry     := "POLYGON" polygon | "MULTIPOLYGON" multipolygon
/// multipolygon := '(' polygon (',' polygon)* ')'
/// polygon      := '(' ring ')'
/// ring         := '(' pair (',' pair)* ')'
/// pair         := number number
/// ```
pub(crate) struct Parser<'a> {
    tokens: Peekable<Lexer<'a>>,
    text_len: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            tokens: Lexer::new(text).peekable(),
            text_len: text.len(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<MultiPolygon, MeridianError> {
        let keyword = match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Word(word),
                ..
            }) => word,
            Some(token) => {
                return Err(MeridianError::UnsupportedGeometryType(
                    token.kind.describe(),
                ))
            }
            None => return Err(MeridianError::UnsupportedGeometryType(String::new())),
        };

        if keyword != POLYGON && keyword != MULTIPOLYGON {
            return Err(MeridianError::UnsupportedGeometryType(keyword.to_string()));
        }

        // Dimension qualifiers (`Z`, `M`, `ZM`) and `EMPTY` geometries are not supported.
        if let Some(Token {
            kind: TokenKind::Word(qualifier),
            ..
        }) = self.tokens.peek()
        {
            return Err(MeridianError::UnsupportedGeometryType(format!(
                "{keyword} {qualifier}"
            )));
        }

        let geometry = if keyword == POLYGON {
            MultiPolygon::from(self.polygon()?)
        } else {
            self.multi_polygon()?
        };

        match self.tokens.next() {
            None => Ok(geometry),
            Some(token) => Err(self.syntax_error(
                Some(token),
                "end of text (only one geometry per document is allowed)",
            )),
        }
    }

    fn multi_polygon(&mut self) -> Result<MultiPolygon, MeridianError> {
        self.expect(TokenKind::LeftParen)?;
        let mut parts = vec![self.polygon()?];
        while self.next_is_comma()? {
            parts.push(self.polygon()?);
        }

        Ok(MultiPolygon::new(parts)?)
    }

    fn polygon(&mut self) -> Result<Polygon, MeridianError> {
        self.expect(TokenKind::LeftParen)?;
        let exterior = self.ring()?;
        if self.next_is_comma()? {
            return Err(MeridianError::UnsupportedGeometryType(format!(
                "{POLYGON} with interior rings"
            )));
        }

        Ok(Polygon::new(exterior))
    }

    fn ring(&mut self) -> Result<Ring, MeridianError> {
        self.expect(TokenKind::LeftParen)?;
        let mut points = vec![self.pair()?];
        while self.next_is_comma()? {
            points.push(self.pair()?);
        }

        Ok(Ring::new(points)?)
    }

    fn pair(&mut self) -> Result<GeoPoint2d, MeridianError> {
        let mut words = vec![];
        while let Some(Token {
            kind: TokenKind::Word(word),
            ..
        }) = self.tokens.peek()
        {
            words.push(*word);
            self.tokens.next();
        }

        match words.as_slice() {
            [lon, lat] => point(number(lon)?, number(lat)?),
            _ => Err(MeridianError::MalformedCoordinate(format!(
                "expected `lon lat`, got {:?}",
                words.join(" ")
            ))),
        }
    }

    /// Consumes either a comma (returning `true`) or a closing parenthesis (returning `false`).
    fn next_is_comma(&mut self) -> Result<bool, MeridianError> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Comma,
                ..
            }) => Ok(true),
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => Ok(false),
            other => Err(self.syntax_error(other, "',' or ')'")),
        }
    }

    fn expect(&mut self, kind: TokenKind<'_>) -> Result<(), MeridianError> {
        match self.tokens.next() {
            Some(token) if token.kind == kind => Ok(()),
            other => Err(self.syntax_error(other, &kind.describe())),
        }
    }

    fn syntax_error(&self, found: Option<Token<'_>>, expected: &str) -> MeridianError {
        match found {
            Some(token) => MeridianError::Syntax {
                offset: token.offset,
                message: format!("expected {expected}, found {}", token.kind.describe()),
            },
            None => MeridianError::Syntax {
                offset: self.text_len,
                message: format!("expected {expected}, found end of text"),
            },
        }
    }
}
