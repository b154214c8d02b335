use crate::error_handling::*;

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Cursor over a single line of input.
///
/// The index is a byte offset into `string`; it only ever moves forward and
/// always sits on a character boundary.
pub struct StringScanner<'a> {
    string: &'a str,
    index: usize,
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        Self{string, index: 0}
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index == self.string.len()
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    /// Byte length of the leading run of characters satisfying `predicate`.
    fn count<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(self.view().len(), |(offset, _)| offset)
    }

    fn take(&mut self, length: usize) -> &'a str {
        let content = &self.view()[..length];
        self.index += length;
        content
    }

    pub fn skip_whitespace(&mut self) {
        let count = self.count(char::is_whitespace);
        self.index += count;
    }

    /// Consumes `expected` if it is the next non-whitespace character.
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.view().starts_with(expected) {
            self.index += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.view().chars().next()
    }

    pub fn identifier(&mut self) -> Result<&'a str> {
        self.skip_whitespace();
        let count = self.count(char::is_alphabetic);
        if count == 0 {
            return Err(CalcError::expected_identifier);
        }
        Ok(self.take(count))
    }

    pub fn number(&mut self) -> Result<f64> {
        self.skip_whitespace();
        let mut has_dot = false;
        for character in self.view().chars().take_while(|&c| is_digit_or_dot(c)) {
            if character == '.' {
                if has_dot {
                    return Err(CalcError::invalid_number_format);
                }
                has_dot = true;
            }
        }

        let count = self.count(is_digit_or_dot);
        if count == 0 {
            return Err(CalcError::expected_number);
        }
        let content = self.take(count);
        content.parse().map_err(|_| CalcError::invalid_number_literal(content.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eat_skips_whitespace_and_leaves_cursor_on_mismatch() {
        let mut scanner = StringScanner::new("  \t+ x");
        assert!(!scanner.eat('-'));
        assert_eq!(scanner.position(), 3);
        assert!(scanner.eat('+'));
        assert_eq!(scanner.position(), 4);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut scanner = StringScanner::new(" (");
        assert_eq!(scanner.peek(), Some('('));
        assert_eq!(scanner.peek(), Some('('));
        assert!(scanner.eat('('));
        assert_eq!(scanner.peek(), None);
        assert!(scanner.is_finished());
    }

    #[test]
    fn identifier_stops_at_non_letters() {
        let mut scanner = StringScanner::new(" sqrt2(");
        assert_eq!(scanner.identifier(), Ok("sqrt"));
        assert_eq!(scanner.peek(), Some('2'));
    }

    #[test]
    fn identifier_requires_a_letter() {
        let mut scanner = StringScanner::new("42");
        assert_eq!(scanner.identifier(), Err(CalcError::expected_identifier));
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn number_reads_digits_and_one_dot() {
        let mut scanner = StringScanner::new(" 3.25+1");
        assert_eq!(scanner.number(), Ok(3.25));
        assert_eq!(scanner.peek(), Some('+'));

        assert_eq!(StringScanner::new(".5").number(), Ok(0.5));
        assert_eq!(StringScanner::new("7.").number(), Ok(7.0));
    }

    #[test]
    fn number_errors() {
        assert_eq!(StringScanner::new("1.2.3").number(), Err(CalcError::invalid_number_format));
        assert_eq!(StringScanner::new("  ").number(), Err(CalcError::expected_number));
        assert_eq!(StringScanner::new("x").number(), Err(CalcError::expected_number));
        assert_eq!(
            StringScanner::new(".").number(),
            Err(CalcError::invalid_number_literal(".".into()))
        );
    }

    #[test]
    fn number_stops_at_non_decimal_numerals() {
        let mut scanner = StringScanner::new("3\u{b2}");
        assert_eq!(scanner.number(), Ok(3.0));
        assert_eq!(scanner.peek(), Some('\u{b2}'));

        assert_eq!(StringScanner::new("\u{bd}").number(), Err(CalcError::expected_number));
    }

    #[test]
    fn multibyte_whitespace_keeps_cursor_on_boundary() {
        let mut scanner = StringScanner::new("\u{3000}8");
        assert_eq!(scanner.number(), Ok(8.0));
        assert!(scanner.is_finished());
    }
}
