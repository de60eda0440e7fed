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

use std::io::Write as _;

use clap::{CommandFactory, Parser, Subcommand};
use shaw::{COPYRIGHT, LONG_VERSION};

/// Shavian
///
/// With no command, reads two digit hex codes (50 - 7F) from standard input,
/// one line at a time while a line ends in '\', and copies the Shavian to the
/// clipboard.
#[derive(Parser, Debug)]
#[command(
    long_version = LONG_VERSION,
    about = "Transliterate two digit hex codes into the Shavian alphabet",
    disable_help_subcommand = true
)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Whether to log on the debug level
    #[arg(global = true, long)]
    pub debug: bool,

    /// Print the Shavian without copying it to the clipboard
    #[arg(global = true, long)]
    pub no_clipboard: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the letter table as JSON
    #[command(visible_alias = "ls")]
    List {
        /// Ignored
        #[arg(allow_hyphen_values = true, hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    /// Find a letter by name or code
    #[command(visible_alias = "f")]
    Find {
        /// name or code, then the value to look for
        #[arg(allow_hyphen_values = true)]
        arguments: Vec<String>,
    },

    /// Print the letters with their names, sounds, codes and types
    #[command(visible_alias = "t")]
    Table {
        /// Ignored
        #[arg(allow_hyphen_values = true, hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    /// Print the letters in a grid by code
    #[command(visible_alias = "u")]
    Unicode {
        /// Ignored
        #[arg(allow_hyphen_values = true, hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    /// Print a usage line
    #[command(visible_alias = "h")]
    Help {
        /// Ignored
        #[arg(allow_hyphen_values = true, hide = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    #[command(external_subcommand)]
    Other(Vec<String>),
}

impl Command {
    /// Arguments given after a command that takes none.
    pub(crate) fn ignored(&self) -> &[String] {
        match self {
            Self::List { rest }
            | Self::Table { rest }
            | Self::Unicode { rest }
            | Self::Help { rest } => rest,
            Self::Find { .. } | Self::Other(_) => &[],
        }
    }
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("shaw").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("shaw.1", buffer)?;
        Ok(())
    }
}
