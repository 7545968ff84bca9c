//! Tokenizer algorithms per [§ 4.3](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms).

use super::token::Token;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Tokenizes one property value string. The full CSS Syntax 3 machine is cut
/// down to what value grammars produce: idents, functions, hashes, numeric
/// tokens, commas, parentheses, and single-character delims.
pub struct Tokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<Token>,
}

impl Tokenizer {
    /// Create a new tokenizer with the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Consume tokens until EOF.
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(token);
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> Token {
        // "Consume comments."
        self.consume_comments();

        // "Consume the next input code point."
        let Some(c) = self.consume() else {
            return Token::Eof;
        };

        match c {
            // "whitespace"
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            c if is_whitespace(c) => {
                self.consume_whitespace();
                Token::Whitespace
            }

            // "U+0023 NUMBER SIGN (#)"
            // "If the next input code point is an ident code point...
            // Consume an ident sequence, and set the <hash-token>'s value
            // to the returned string."
            '#' => {
                if self.peek().is_some_and(is_ident_code_point) {
                    let value = self.consume_ident_sequence();
                    Token::Hash(value)
                } else {
                    Token::Delim('#')
                }
            }

            // "U+0028 LEFT PARENTHESIS (()"
            '(' => Token::LeftParen,

            // "U+0029 RIGHT PARENTHESIS ())"
            ')' => Token::RightParen,

            // "U+002B PLUS SIGN (+)"
            // "If the input stream starts with a number, reconsume the
            // current input code point, consume a numeric token and return it."
            '+' => {
                if self.would_start_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    Token::Delim('+')
                }
            }

            // "U+002C COMMA (,)"
            ',' => Token::Comma,

            // "U+002D HYPHEN-MINUS (-)"
            '-' => {
                if self.would_start_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if self.peek().is_some_and(is_ident_start_code_point)
                    || self.peek() == Some('-')
                {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    Token::Delim('-')
                }
            }

            // "U+002E FULL STOP (.)"
            '.' => {
                if self.would_start_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    Token::Delim('.')
                }
            }

            // "digit"
            // "Reconsume the current input code point. Consume a numeric token and return it."
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            // "ident-start code point"
            // "Reconsume the current input code point. Consume an ident-like token and return it."
            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            // "anything else"
            // "Return a <delim-token> with its value set to the current input code point."
            c => Token::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// "If the next two input code points are U+002F SOLIDUS (/) followed by
    /// U+002A ASTERISK (*), consume them and all following code points up to
    /// and including the first U+002A ASTERISK (*) followed by U+002F
    /// SOLIDUS (/), or up to an EOF code point."
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            let _ = self.consume(); // /
            let _ = self.consume(); // *

            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        let _ = self.consume(); // /
                        break;
                    }
                    Some(_) => {}
                    None => break, // EOF
                }
            }
        }
    }

    /// Consume whitespace characters.
    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            let _ = self.consume();
        }
    }

    /// [§ 4.3.5 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> Token {
        // "Consume a number and let number be the result."
        let value = self.consume_number();

        // "If the next 3 input code points would start an ident sequence...
        // Consume an ident sequence. Set the <dimension-token>'s unit to the
        // returned value."
        if self.would_start_ident_sequence() {
            let unit = self.consume_ident_sequence();
            Token::Dimension { value, unit }
        }
        // "Otherwise, if the next input code point is U+0025 PERCENTAGE SIGN (%)..."
        else if self.peek() == Some('%') {
            let _ = self.consume();
            Token::Percentage(value)
        }
        // "Otherwise, create a <number-token>... and return it."
        else {
            Token::Number(value)
        }
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> Token {
        // "Consume an ident sequence, and let string be the result."
        let string = self.consume_ident_sequence();

        // "If the next input code point is U+0028 LEFT PARENTHESIS ((),
        // consume it. Return a <function-token> with its value set to string."
        if self.peek() == Some('(') {
            let _ = self.consume();
            Token::Function(string)
        } else {
            Token::Ident(string)
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        // "Let result initially be an empty string."
        let mut result = String::new();

        // "ident code point: Append the code point to result.
        // anything else: Reconsume the current input code point. Return result."
        while self.peek().is_some_and(is_ident_code_point) {
            if let Some(c) = self.consume() {
                result.push(c);
            }
        }

        result
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> f64 {
        // "Let repr be the empty string."
        let mut repr = String::new();

        // "If the next input code point is U+002B PLUS SIGN (+) or
        // U+002D HYPHEN-MINUS (-), consume it and append it to repr."
        if matches!(self.peek(), Some('+' | '-')) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
        }

        // "While the next input code point is a digit, consume it and append it to repr."
        self.consume_digits_into(&mut repr);

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit,
        // consume them, append them to repr."
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            if let Some(c) = self.consume() {
                repr.push(c); // .
            }
            self.consume_digits_into(&mut repr);
        }

        // "If the next 2 or 3 input code points are U+0045 (E) or U+0065 (e),
        // optionally followed by U+002D (-) or U+002B (+), followed by a digit,
        // consume them, append them to repr."
        if matches!(self.peek(), Some('e' | 'E')) {
            let next = self.peek_at(1);
            let has_sign = matches!(next, Some('+' | '-'));
            let digit_pos = if has_sign { 2 } else { 1 };

            if self.peek_at(digit_pos).is_some_and(|c| c.is_ascii_digit()) {
                if let Some(c) = self.consume() {
                    repr.push(c); // e or E
                }
                if has_sign {
                    if let Some(c) = self.consume() {
                        repr.push(c); // + or -
                    }
                }
                self.consume_digits_into(&mut repr);
            }
        }

        // "Convert repr to a number, and set the value to the returned value."
        repr.parse().unwrap_or(0.0)
    }

    /// Consume a run of digits, appending them to `repr`.
    fn consume_digits_into(&mut self, repr: &mut String) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn would_start_ident_sequence(&self) -> bool {
        match self.peek() {
            // "U+002D HYPHEN-MINUS: If the second code point is an ident-start
            // code point or a U+002D HYPHEN-MINUS, return true."
            Some('-') => {
                let second = self.peek_at(1);
                second.is_some_and(is_ident_start_code_point) || second == Some('-')
            }
            // "ident-start code point"
            Some(c) if is_ident_start_code_point(c) => true,
            // "anything else"
            _ => false,
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn would_start_number(&self) -> bool {
        match self.peek() {
            // "U+002B PLUS SIGN (+)" or "U+002D HYPHEN-MINUS (-)"
            Some('+' | '-') => {
                let second = self.peek_at(1);
                // "If the second code point is a digit, return true."
                if second.is_some_and(|c| c.is_ascii_digit()) {
                    return true;
                }
                // "Otherwise, if the second code point is U+002E FULL STOP (.)
                // and the third code point is a digit, return true."
                if second == Some('.') {
                    return self.peek_at(2).is_some_and(|c| c.is_ascii_digit());
                }
                false
            }
            // "U+002E FULL STOP (.)"
            Some('.') => self.peek_at(1).is_some_and(|c| c.is_ascii_digit()),
            // "digit"
            Some(c) if c.is_ascii_digit() => true,
            // "anything else"
            _ => false,
        }
    }

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char> {
        if self.position < self.input.len() {
            let c = self.input[self.position];
            self.position += 1;
            Some(c)
        } else {
            None
        }
    }

    /// Put back the last consumed character.
    fn reconsume(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
///
/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(input);
        tokenizer.run();
        tokenizer.into_tokens()
    }

    #[test]
    fn test_function_and_number() {
        let tokens = tokenize("rgb(255");
        assert_eq!(tokens.len(), 3);
        match &tokens[0] {
            Token::Function(name) => assert_eq!(name, "rgb"),
            other => panic!("Expected Function token, got {other}"),
        }
        assert_eq!(tokens[1], Token::Number(255.0));
    }

    #[test]
    fn test_dimension_and_percentage() {
        let tokens = tokenize("1.5turn 50%");
        assert_eq!(
            tokens[0],
            Token::Dimension {
                value: 1.5,
                unit: "turn".to_string()
            }
        );
        assert_eq!(tokens[2], Token::Percentage(50.0));
    }

    #[test]
    fn test_negative_and_exponent_numbers() {
        let tokens = tokenize("-0.5 1e2");
        assert_eq!(tokens[0], Token::Number(-0.5));
        assert_eq!(tokens[2], Token::Number(100.0));
    }

    #[test]
    fn test_em_unit_is_not_an_exponent() {
        let tokens = tokenize("1em");
        assert_eq!(
            tokens[0],
            Token::Dimension {
                value: 1.0,
                unit: "em".to_string()
            }
        );
    }

    #[test]
    fn test_dashed_ident() {
        let tokens = tokenize("closest-side -x");
        assert_eq!(tokens[0], Token::Ident("closest-side".to_string()));
        assert_eq!(tokens[2], Token::Ident("-x".to_string()));
    }

    #[test]
    fn test_hash() {
        let tokens = tokenize("#ff0000");
        match &tokens[0] {
            Token::Hash(value) => assert_eq!(value, "ff0000"),
            other => panic!("Expected Hash token, got {other}"),
        }
    }

    #[test]
    fn test_slash_is_delim() {
        let tokens = tokenize("0 / 1");
        assert_eq!(tokens[2], Token::Delim('/'));
    }

    #[test]
    fn test_comments_skipped() {
        let tokens = tokenize("red/*comment*/blue");
        assert_eq!(tokens[0], Token::Ident("red".to_string()));
        assert_eq!(tokens[1], Token::Ident("blue".to_string()));
    }
}
