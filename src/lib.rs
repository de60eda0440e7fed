//! Transliterate two digit hex codes into the Shavian alphabet.
//!
//! Every Shavian letter lives at `U+10450` to `U+1047F`, so the last two hex
//! digits of its code point (`50` to `7F`) are enough to name it. The `shaw`
//! binary turns lines like `55 5A` into `𐑕 𐑚` and puts the result on the
//! clipboard.
//!
//! ## Commands
//!
//! * (none) - read codes from standard input and transliterate them
//! * list, ls - print the letter table as JSON
//! * find, f - find a letter by `name` or `code`
//! * table, t - print the letters with their names, sounds, codes and types
//! * unicode, u - print the letters in a grid by code
//! * help, h - print a usage line

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

#![deny(clippy::panic)]

pub mod clipboard;
pub mod index;
pub mod letter;
pub mod render;
pub mod transliterate;
pub mod utils;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 David Lawrence Campbell

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 David Lawrence Campbell
Licensed under the AGPLv3"
);
