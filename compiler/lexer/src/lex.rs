use thiserror::Error;

use crate::cursor::Cursor;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    #[error("expected '{expected}', found '{found}'")]
    ExpectedChar { expected: char, found: char },
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unreadable number '{0}'")]
    InvalidNumber(String),
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// One lexical symbol of an expression. `End` is the `;` that closes the
/// expression; it never appears inside one.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Number(i64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    End,
}

/// Pulls lexemes out of a [`Cursor`] on demand. The parser decides what kind
/// of lexeme it wants next; nothing is tokenized ahead of time.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// The unconsumed tail of the input
    pub fn remainder(&self) -> &'a str {
        self.cursor.remainder()
    }

    /// Read one alphanumeric lexeme, or None if the next visible character
    /// cannot start one
    pub fn word(&mut self) -> Option<String> {
        self.cursor.skip_blank();

        let c = self.cursor.peek();
        if !(c.is_ascii_alphabetic() || c == '_') {
            return None;
        }

        Some(self.take_while(|c| c.is_ascii_alphanumeric() || c == '_').to_string())
    }

    /// Read one alphanumeric lexeme without consuming it. Reading the same
    /// lexeme again afterwards yields the same text.
    pub fn peek_word(&mut self) -> Option<String> {
        let saved = self.cursor.checkpoint();
        let word = self.word();
        self.cursor.reset(saved);

        word
    }

    /// Consume the next visible character
    pub fn punct(&mut self) -> Result<char, LexError> {
        self.cursor.skip_blank();
        self.cursor.advance().ok_or(LexError::UnexpectedEof)
    }

    /// Look at the next visible character without consuming it
    pub fn peek_punct(&mut self) -> Option<char> {
        self.cursor.skip_blank();

        if self.cursor.is_eof() {
            None
        } else {
            Some(self.cursor.peek())
        }
    }

    /// Consume the next visible character and require it to be `expected`
    pub fn expect_punct(&mut self, expected: char) -> Result<(), LexError> {
        let found = self.punct()?;

        if found == expected {
            Ok(())
        } else {
            Err(LexError::ExpectedChar { expected, found })
        }
    }

    /// Read one expression symbol: a number, an identifier, an arithmetic
    /// operator, or the `;` end marker
    pub fn token(&mut self) -> Result<Token, LexError> {
        self.cursor.skip_blank();

        if self.cursor.is_eof() {
            return Err(LexError::UnexpectedEof);
        }

        match self.cursor.peek() {
            ';' => {
                self.cursor.advance();
                Ok(Token::End)
            }
            '+' => {
                self.cursor.advance();
                Ok(Token::Plus)
            }
            '-' => {
                self.cursor.advance();
                Ok(Token::Minus)
            }
            '*' => {
                self.cursor.advance();
                Ok(Token::Star)
            }
            '/' => {
                self.cursor.advance();
                Ok(Token::Slash)
            }
            '%' => {
                self.cursor.advance();
                Ok(Token::Percent)
            }
            '0'..='9' => {
                // a digit directly followed by letters is one bad lexeme,
                // not a number and an identifier
                let text = self.take_while(|c| c.is_ascii_alphanumeric());

                match text.parse::<i64>() {
                    Ok(value) => Ok(Token::Number(value)),
                    Err(_) => Err(LexError::InvalidNumber(text.to_string())),
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let text = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');

                Ok(Token::Ident(text.to_string()))
            }
            c => Err(LexError::UnexpectedChar(c)),
        }
    }

    /// Consume characters matching the predicate and return them as a slice
    /// of the source
    fn take_while(&mut self, predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.cursor.remainder();
        self.cursor.advance_while(predicate);
        let taken = start.len() - self.cursor.remainder().len();

        &start[..taken]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_blank_and_punct() {
        let mut lexer = Lexer::new("fonction  somme(");

        assert_eq!(lexer.word(), Some("fonction".to_string()));
        assert_eq!(lexer.word(), Some("somme".to_string()));
        assert_eq!(lexer.word(), None);
        assert_eq!(lexer.punct(), Ok('('));
    }

    #[test]
    fn peek_word_consumes_nothing() {
        let mut lexer = Lexer::new("  entier a");

        assert_eq!(lexer.peek_word(), Some("entier".to_string()));
        assert_eq!(lexer.peek_word(), Some("entier".to_string()));
        assert_eq!(lexer.word(), Some("entier".to_string()));
        assert_eq!(lexer.word(), Some("a".to_string()));
    }

    #[test]
    fn expect_punct_mismatch() {
        let mut lexer = Lexer::new(" ;");

        assert_eq!(
            lexer.expect_punct('{'),
            Err(LexError::ExpectedChar {
                expected: '{',
                found: ';',
            })
        );
    }

    #[test]
    fn expect_punct_at_eof() {
        let mut lexer = Lexer::new("   ");

        assert_eq!(lexer.expect_punct('{'), Err(LexError::UnexpectedEof));
    }

    #[test]
    fn expression_symbols() {
        let mut lexer = Lexer::new("1 + 23 * x;");
        let expected = vec![
            Token::Number(1),
            Token::Plus,
            Token::Number(23),
            Token::Star,
            Token::Ident("x".to_string()),
            Token::End,
        ];

        let mut tokens = Vec::new();
        loop {
            let token = lexer.token().unwrap();
            let done = token == Token::End;
            tokens.push(token);
            if done {
                break;
            }
        }

        assert_eq!(tokens, expected);
    }

    #[test]
    fn number_glued_to_letters_is_unreadable() {
        let mut lexer = Lexer::new("12x;");

        assert_eq!(
            lexer.token(),
            Err(LexError::InvalidNumber("12x".to_string()))
        );
    }

    #[test]
    fn number_too_large_is_unreadable() {
        let mut lexer = Lexer::new("99999999999999999999;");

        assert!(matches!(lexer.token(), Err(LexError::InvalidNumber(_))));
    }

    #[test]
    fn unexpected_character() {
        let mut lexer = Lexer::new("@");

        assert_eq!(lexer.token(), Err(LexError::UnexpectedChar('@')));
    }

    #[test]
    fn eof_inside_expression() {
        let mut lexer = Lexer::new("1 + ");

        assert_eq!(lexer.token(), Ok(Token::Number(1)));
        assert_eq!(lexer.token(), Ok(Token::Plus));
        assert_eq!(lexer.token(), Err(LexError::UnexpectedEof));
    }

    #[test]
    fn remainder_tracks_consumption() {
        let mut lexer = Lexer::new("entier a = 1;");
        lexer.word();

        assert_eq!(lexer.remainder(), " a = 1;");
    }
}
