use std::str::Chars;

/// Peekable iterator over a char sequence
///
/// Next character can be peeked via 'peek' method
/// and position can be shifted by 'advance' method.
/// 'checkpoint' saves a position so a lookahead can be undone with 'reset'.
///
/// Pulled from rustc_lexer crate

pub struct Cursor<'a> {
    chars: Chars<'a>,
}

/// Saved cursor position. Feeding it back to 'reset' rewinds the cursor to
/// the exact state it had when the checkpoint was taken.
#[derive(Clone)]
pub struct Checkpoint<'a> {
    chars: Chars<'a>,
}

pub(crate) const EOF: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }

    /// The unconsumed tail of the input
    pub fn remainder(&self) -> &'a str {
        self.chars.as_str()
    }

    /// Peek at next character to be consumed
    pub fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    /// Checks if there are more characters to be consumed
    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Consume next character
    pub fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Consume characters while some predicate is true or until EOF is reached
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.peek()) && !self.is_eof() {
            self.advance();
        }
    }

    /// Consume whitespace up to the next visible character or EOF
    pub fn skip_blank(&mut self) {
        self.advance_while(|c| c.is_ascii_whitespace());
    }

    pub fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            chars: self.chars.clone(),
        }
    }

    pub fn reset(&mut self, checkpoint: Checkpoint<'a>) {
        self.chars = checkpoint.chars;
    }
}
