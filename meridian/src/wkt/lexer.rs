#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    LeftParen,
    RightParen,
    Comma,
    /// Keyword or number.
    Word(&'a str),
}

impl TokenKind<'_> {
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Word(w) => format!("{w:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset in the source text.
    pub offset: usize,
}

/// Splits WKT text into parentheses, commas and whitespace separated words.
pub(crate) struct Lexer<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        let trimmed = rest.trim_start();
        self.offset += rest.len() - trimmed.len();

        let offset = self.offset;
        let c = trimmed.chars().next()?;
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            _ => {
                let len = trimmed.find(is_delimiter).unwrap_or(trimmed.len());
                self.offset += len;
                return Some(Token {
                    kind: TokenKind::Word(&trimmed[..len]),
                    offset,
                });
            }
        };

        self.offset += c.len_utf8();
        Some(Token { kind, offset })
    }
}
