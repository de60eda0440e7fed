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

use rustc_hash::FxHashMap;

use crate::letter::{Letter, LetterTable};

/// Codes are compared in upper case everywhere.
#[must_use]
pub fn canonical_code(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Names are compared in lower case everywhere.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.to_lowercase()
}

/// Letters by code. A later letter with the same code replaces an earlier one.
#[derive(Clone, Debug, Default)]
pub struct CodeIndex<'a> {
    letters: FxHashMap<String, &'a Letter>,
}

impl<'a> CodeIndex<'a> {
    #[must_use]
    pub fn new(table: &'a LetterTable) -> Self {
        let mut letters = FxHashMap::default();

        for letter in table.letters() {
            letters.insert(canonical_code(&letter.code), letter);
        }

        Self { letters }
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'a Letter> {
        self.letters.get(&canonical_code(code)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Letters by name. A later letter with the same name replaces an earlier one.
#[derive(Clone, Debug, Default)]
pub struct NameIndex<'a> {
    letters: FxHashMap<String, &'a Letter>,
}

impl<'a> NameIndex<'a> {
    #[must_use]
    pub fn new(table: &'a LetterTable) -> Self {
        let mut letters = FxHashMap::default();

        for letter in table.letters() {
            letters.insert(canonical_name(&letter.name), letter);
        }

        Self { letters }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Letter> {
        self.letters.get(&canonical_name(name)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LookupKey {
    Code,
    Name,
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl FromStr for LookupKey {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string {
            "code" => Ok(Self::Code),
            "name" => Ok(Self::Name),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a LookupKey!"
            ))),
        }
    }
}

/// Finds one letter, building the index `key` asks for.
#[must_use]
pub fn find<'a>(table: &'a LetterTable, key: LookupKey, value: &str) -> Option<&'a Letter> {
    match key {
        LookupKey::Code => CodeIndex::new(table).get(value),
        LookupKey::Name => NameIndex::new(table).get(value),
    }
}
