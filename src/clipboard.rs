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

use std::io::{self, IsTerminal, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

pub trait Clipboard {
    /// # Errors
    ///
    /// If the text can't be placed on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard: standard output isn't a terminal")]
    NotATerminal,
    #[error("clipboard: {0}")]
    Io(#[from] io::Error),
}

/// Sets the clipboard of the terminal reading `writer`.
#[derive(Debug)]
pub struct Osc52<W: Write> {
    writer: W,
}

impl<W: Write> Osc52<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl Osc52<io::Stdout> {
    /// # Errors
    ///
    /// If standard output isn't a terminal.
    pub fn stdout() -> Result<Self, ClipboardError> {
        let stdout = io::stdout();

        if stdout.is_terminal() {
            Ok(Self::new(stdout))
        } else {
            Err(ClipboardError::NotATerminal)
        }
    }
}

impl<W: Write> Clipboard for Osc52<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
