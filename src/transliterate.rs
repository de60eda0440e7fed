// This file is part of shaw.
//
// shaw is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// shaw is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io::BufRead;

use log::{debug, warn};

use crate::{
    clipboard::{Clipboard, ClipboardError},
    index::CodeIndex,
    letter::LetterTable,
};

pub const PROMPT: &str = "Enter the 2-digit codes for the shavian (50 - 7F):";

/// Splits a word into two character chunks, the last one may be a single
/// character.
#[must_use]
pub fn chunks(word: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let end = rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}

/// Reads lines until an empty line, a line that doesn't end in `\`, or the
/// end of the input.
///
/// The `\` is removed and every line is trimmed. Bytes that aren't UTF-8 are
/// replaced, not rejected.
#[must_use]
pub fn read_lines<R: BufRead>(mut reader: R) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();

        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                warn!("read_lines: {error}");
                break;
            }
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }

        let line = String::from_utf8_lossy(&buffer);
        if line.is_empty() {
            break;
        }

        if let Some(line) = line.strip_suffix('\\') {
            lines.push(line.trim().to_string());
        } else {
            lines.push(line.trim().to_string());
            break;
        }
    }

    lines
}

#[derive(Clone, Debug)]
pub struct Transliterator<'a> {
    index: CodeIndex<'a>,
}

impl<'a> Transliterator<'a> {
    #[must_use]
    pub fn new(table: &'a LetterTable) -> Self {
        Self {
            index: CodeIndex::new(table),
        }
    }

    /// Replaces every chunk that is a known code with its glyph. Every word is
    /// followed by a space and the line by a newline.
    #[must_use]
    pub fn line(&self, line: &str) -> String {
        let mut output = String::new();

        for word in line.split_whitespace() {
            for chunk in chunks(word) {
                match self.index.get(chunk) {
                    Some(letter) => output.push_str(&letter.glyph),
                    None => output.push_str(chunk),
                }
            }
            output.push(' ');
        }
        output.push('\n');

        debug!("{line:?} -> {output:?}");
        output
    }

    #[must_use]
    pub fn lines<S: AsRef<str>>(&self, lines: &[S]) -> String {
        lines.iter().map(|line| self.line(line.as_ref())).collect()
    }

    /// Transliterates `lines` and places the result on the clipboard.
    ///
    /// # Errors
    ///
    /// If the clipboard can't be written to.
    pub fn copy_to_clipboard<S: AsRef<str>>(
        &self,
        lines: &[S],
        clipboard: &mut dyn Clipboard,
    ) -> Result<String, ClipboardError> {
        let output = self.lines(lines);
        clipboard.set_text(&output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use crate::letter::{Category, Letter};

    use super::*;

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    struct FakeClipboard {
        text: Option<String>,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn table() -> LetterTable {
        LetterTable::new(vec![Letter {
            glyph: "𐑕".to_string(),
            name: "so".to_string(),
            code: "5A".to_string(),
            sound: "s".to_string(),
            category: Category::Consonant,
        }])
    }

    #[test]
    fn chunking() {
        assert_eq!(chunks("5A6B7"), ["5A", "6B", "7"]);
        assert_eq!(chunks("5A6B"), ["5A", "6B"]);
        assert_eq!(chunks("5"), ["5"]);
        assert!(chunks("").is_empty());
        assert_eq!(chunks("𐑕𐑕𐑕"), ["𐑕𐑕", "𐑕"]);
    }

    #[test]
    fn misses_pass_through() {
        let table = table();
        let transliterator = Transliterator::new(&table);

        assert_eq!(transliterator.line("5A 6B"), "𐑕 6B \n");
        assert_eq!(transliterator.line("5a6b7"), "𐑕6b7 \n");
        assert_eq!(transliterator.line("hello, world!"), "hello, world! \n");
    }

    #[test]
    fn whitespace() {
        let table = table();
        let transliterator = Transliterator::new(&table);

        assert_eq!(transliterator.line("  5A\t\t5A  "), "𐑕 𐑕 \n");
        assert_eq!(transliterator.line(""), "\n");
    }

    #[test]
    fn several_lines() {
        let table = table();
        let transliterator = Transliterator::new(&table);

        assert_eq!(transliterator.lines(&["5A5A", "6B"]), "𐑕𐑕 \n6B \n");
    }

    #[test]
    fn continuation() {
        let input = "5A 5A \\\n  6B\\\n5A\nignored\n";
        assert_eq!(read_lines(Cursor::new(input)), ["5A 5A", "6B", "5A"]);
    }

    #[test]
    fn empty_line_stops() {
        let input = "5A\\\n\n6B\n";
        assert_eq!(read_lines(Cursor::new(input)), ["5A"]);

        assert!(read_lines(Cursor::new("")).is_empty());
        assert!(read_lines(Cursor::new("\n5A\n")).is_empty());
    }

    #[test]
    fn end_of_input_stops() {
        assert_eq!(read_lines(Cursor::new("5A\\")), ["5A"]);
        assert_eq!(read_lines(Cursor::new("5A\r\n6B\r\n")), ["5A"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let input: &[u8] = b"5A \xff6B\\\n5A\n";
        assert_eq!(read_lines(Cursor::new(input)), ["5A \u{FFFD}6B", "5A"]);

        let table = table();
        let lines = read_lines(Cursor::new(&b"5A\xfe\n"[..]));
        assert_eq!(Transliterator::new(&table).lines(&lines), "𐑕\u{FFFD} \n");
    }

    #[test]
    fn read_errors_keep_what_was_read() {
        let input = Cursor::new(&b"5A\\\n6B\\\n"[..]).chain(BrokenPipe);
        assert_eq!(read_lines(BufReader::new(input)), ["5A", "6B"]);
    }

    #[test]
    fn copies() -> anyhow::Result<()> {
        let table = table();
        let mut clipboard = FakeClipboard { text: None };

        let output = Transliterator::new(&table).copy_to_clipboard(&["5A 6B"], &mut clipboard)?;
        assert_eq!(output, "𐑕 6B \n");
        assert_eq!(clipboard.text.as_deref(), Some("𐑕 6B \n"));

        Ok(())
    }
}
