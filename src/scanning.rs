use crate::error_handling::*;
use crate::parsing::BinaryOperator;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    // raw digit run, validated by the yard once it knows an operand is due
    number(String),
    // `glued` when the name directly follows a digit, like `2x`
    identifier { name: String, glued: bool },
    operator(BinaryOperator),
    left_paren,
    right_paren,
}

/// Pull-based token source. `Ok(None)` marks the end of the expression.
pub trait Scanner {
    fn next_token(&mut self) -> Result<Option<Token>>;
}

/// Replays tokens that were produced elsewhere.
#[cfg(test)]
pub struct SimpleScanner {
    tokens: std::vec::IntoIter<Token>,
}

#[cfg(test)]
impl SimpleScanner {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self{tokens: tokens.into_iter()}
    }
}

#[cfg(test)]
impl Scanner for SimpleScanner {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.tokens.next())
    }
}

/// Scans expression text one token at a time. Digit and name runs come out
/// unchecked so the yard can report a misplaced operand before a malformed
/// one.
pub struct StringScanner<'a> {
    string: &'a str,
    index: usize,
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn is_identifier_part(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        Self{string, index: 0}
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn previous(&self) -> Option<char> {
        self.string[..self.index].chars().next_back()
    }

    // byte length of the run of characters matching `predicate`
    fn count<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        let view = self.view();
        view.char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(view.len(), |(i, _)| i)
    }

    fn take(&mut self, length: usize) -> &'a str {
        let content = &self.view()[..length];
        self.index += length;
        content
    }

    fn skip_whitespace(&mut self) {
        let count = self.count(char::is_whitespace);
        self.index += count;
    }

    fn get_number(&mut self) -> Token {
        let content = self.take(self.count(is_digit_or_dot));
        Token::number(content.into())
    }

    fn get_identifier(&mut self) -> Token {
        let glued = self.previous().is_some_and(|c| c.is_ascii_digit());
        let name = self.take(self.count(is_identifier_part));
        Token::identifier{name: name.into(), glued}
    }

    fn get_single(&mut self, character: char) -> Result<Token> {
        let token = match character {
            '(' => Token::left_paren,
            ')' => Token::right_paren,
            _ => match BinaryOperator::from_char(character) {
                Some(operator) => Token::operator(operator),
                None => {
                    return Err(CalcError::syntax(
                        self.string,
                        format!("unrecognized character '{}'", character),
                    ))
                }
            },
        };
        self.index += character.len_utf8();
        Ok(token)
    }
}

impl Scanner for StringScanner<'_> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        let Some(character) = self.view().chars().next() else {
            return Ok(None);
        };

        let token = if character.is_ascii_digit() {
            self.get_number()
        } else if character.is_alphabetic() {
            self.get_identifier()
        } else {
            self.get_single(character)?
        };
        tracing::trace!(?token, offset = self.index, "scanned");
        Ok(Some(token))
    }
}
