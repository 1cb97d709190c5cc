use crate::error::{Error, Result};

/// Maximum number of visible characters a session will accept: a 512-byte
/// buffer's worth (511 chars + terminator), enforced instead of assumed.
pub const MAX_INPUT_CHARS: usize = 511;

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t')
}

/// Counts maximal runs of non-whitespace characters. Whitespace here is the
/// narrow set {space, \n, \r, \t}; each transition from whitespace (or the
/// start of the string) into non-whitespace counts one word.
pub fn count_words(s: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in s.chars() {
        if is_word_separator(c) {
            in_word = false;
        } else if !in_word {
            count += 1;
            in_word = true;
        }
    }
    count
}

/// Capacity-bounded input buffer, edited only by append and trim.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(MAX_INPUT_CHARS)
    }
}

impl InputBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::new(),
            capacity,
        }
    }

    /// Appends one character, rejecting it when the buffer is full.
    pub fn push(&mut self, c: char) -> Result<()> {
        if self.chars.len() >= self.capacity {
            return Err(Error::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.chars.push(c);
        Ok(())
    }

    /// Trims the last character. A no-op on an empty buffer: backspace at
    /// index 0 is silently ignored, not an error.
    pub fn pop(&mut self) {
        self.chars.pop();
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_count_words_whitespace_only() {
        assert_eq!(count_words("  "), 0);
        assert_eq!(count_words(" \t\r\n"), 0);
    }

    #[test]
    fn test_count_words_multiple_separators() {
        assert_eq!(count_words("a b  c"), 3);
    }

    #[test]
    fn test_count_words_leading_and_trailing_space() {
        assert_eq!(count_words("  hello world  "), 2);
    }

    #[test]
    fn test_count_words_mixed_whitespace() {
        assert_eq!(count_words("one\ttwo\nthree\rfour"), 4);
    }

    #[test]
    fn test_count_words_pangram() {
        assert_eq!(count_words("How vexingly quick daft zebras jump!"), 5);
        assert_eq!(count_words("The quick brown fox jumps over the lazy dog."), 9);
    }

    #[test]
    fn test_count_words_punctuation_is_not_a_separator() {
        assert_eq!(count_words("Sphinx of black quartz, judge my vow."), 7);
    }

    #[test]
    fn test_buffer_push_and_read_back() {
        let mut buf = InputBuffer::new(8);
        buf.push('h').unwrap();
        buf.push('i').unwrap();

        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_string(), "hi");
        assert_eq!(buf.chars(), &['h', 'i']);
    }

    #[test]
    fn test_buffer_pop_trims_last() {
        let mut buf = InputBuffer::new(8);
        buf.push('a').unwrap();
        buf.push('b').unwrap();
        buf.pop();

        assert_eq!(buf.as_string(), "a");
    }

    #[test]
    fn test_buffer_pop_on_empty_is_noop() {
        let mut buf = InputBuffer::new(8);
        buf.pop();

        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_buffer_rejects_overflow() {
        let mut buf = InputBuffer::new(2);
        buf.push('a').unwrap();
        buf.push('b').unwrap();

        let err = buf.push('c').unwrap_err();
        assert!(matches!(err, Error::BufferOverflow { capacity: 2 }));
        // The rejected character must not have been written.
        assert_eq!(buf.as_string(), "ab");
    }

    #[test]
    fn test_buffer_default_capacity() {
        let buf = InputBuffer::default();
        assert_eq!(buf.capacity, MAX_INPUT_CHARS);
    }
}
