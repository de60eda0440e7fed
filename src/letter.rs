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

use std::{fmt, str::FromStr};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::index::{canonical_code, canonical_name};

const SHAVIAN_JSON: &str = include_str!("shavian.json");

/// Every code is the last two hex digits of a code point starting with this.
pub const UNICODE_PREFIX: &str = "U+104";

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Consonant,
    Vowel,
    Compound,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consonant => write!(f, "consonant"),
            Self::Vowel => write!(f, "vowel"),
            Self::Compound => write!(f, "compound"),
        }
    }
}

/// The inverse of `Display`, ignoring case.
impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "consonant" => Ok(Self::Consonant),
            "vowel" => Ok(Self::Vowel),
            "compound" => Ok(Self::Compound),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Category!"
            ))),
        }
    }
}

/// One letter of the Shavian alphabet.
///
/// The field names on the wire are the ones the bundled `shavian.json` uses.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Letter {
    #[serde(rename = "letter")]
    pub glyph: String,
    pub name: String,
    pub code: String,
    pub sound: String,
    #[serde(rename = "type")]
    pub category: Category,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("load: the letter table is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("load: the code {0} is used by more than one letter")]
    DuplicateCode(String),
    #[error("load: the name {0} is used by more than one letter")]
    DuplicateName(String),
    #[error("load: the code {0} isn't two hex digits from 50 to 7F")]
    InvalidCode(String),
}

/// The letters, loaded once and never mutated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LetterTable {
    letters: Vec<Letter>,
}

impl LetterTable {
    /// Builds a table without validating it.
    #[must_use]
    pub fn new(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    /// The table bundled with the executable.
    ///
    /// # Errors
    ///
    /// If the bundled JSON is malformed.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json(SHAVIAN_JSON)
    }

    /// # Errors
    ///
    /// If the JSON doesn't parse, a code or name is used twice, or a code is
    /// outside of 50 to 7F.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let table = Self {
            letters: serde_json::from_str(json)?,
        };

        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), LoadError> {
        let mut codes = FxHashSet::default();
        let mut names = FxHashSet::default();

        for letter in &self.letters {
            if !is_valid_code(&letter.code) {
                return Err(LoadError::InvalidCode(letter.code.clone()));
            }
            if !codes.insert(canonical_code(&letter.code)) {
                return Err(LoadError::DuplicateCode(letter.code.clone()));
            }
            if !names.insert(canonical_name(&letter.name)) {
                return Err(LoadError::DuplicateName(letter.name.clone()));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in ascending code order, leaving the table as it was.
    #[must_use]
    pub fn sorted_by_code(&self) -> Vec<&Letter> {
        let mut letters: Vec<_> = self.letters.iter().collect();
        letters.sort_by(|a, b| a.code.cmp(&b.code));
        letters
    }

    /// # Errors
    ///
    /// If serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.letters)
    }
}

/// Two hex digits, the first one of 5, 6 or 7.
#[must_use]
pub fn is_valid_code(code: &str) -> bool {
    let mut chars = code.chars();

    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('5'..='7'), Some(digit), None) if digit.is_ascii_hexdigit()
    )
}
