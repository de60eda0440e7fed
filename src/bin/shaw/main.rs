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

mod command_line;

use std::{io, process::exit};

use clap::Parser;
use log::debug;
use shaw::{
    clipboard::Osc52,
    index::{self, LookupKey},
    letter::{LetterTable, UNICODE_PREFIX},
    render,
    transliterate::{self, PROMPT, Transliterator},
    utils,
};

use crate::command_line::{Args, Command};

const USAGE: &str = "shaw ([list|find|table|unicode|help])";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        return Args::generate_man_page();
    }

    let table = LetterTable::embedded()?;
    debug!("loaded {} letters", table.len());
    debug!("command: {:?}", args.command);

    if let Some(ignored) = args.command.as_ref().map(Command::ignored)
        && !ignored.is_empty()
    {
        debug!("ignoring the arguments {ignored:?}");
    }

    match args.command {
        None => interactive(&table, args.no_clipboard)?,
        Some(Command::List { .. }) => println!("{}", table.to_json_pretty()?),
        Some(Command::Find { arguments }) => find(&table, &arguments)?,
        Some(Command::Table { .. }) => print!("{}", render::attribute_table(&table)),
        Some(Command::Unicode { .. }) => {
            println!("unicode prefix: {UNICODE_PREFIX}");
            print!("{}", render::code_grid(&table));
        }
        Some(Command::Help { .. }) => println!("{USAGE}"),
        Some(Command::Other(_)) => {
            println!("{USAGE}");
            exit(1);
        }
    }

    Ok(())
}

fn find_usage() -> ! {
    println!("shaw f [{}|{}] <value>", LookupKey::Name, LookupKey::Code);
    exit(1);
}

fn find(table: &LetterTable, arguments: &[String]) -> anyhow::Result<()> {
    let [key, value] = arguments else {
        find_usage();
    };

    let Ok(key) = key.parse::<LookupKey>() else {
        find_usage();
    };

    match index::find(table, key, value) {
        Some(letter) => println!("{}", serde_json::to_string_pretty(letter)?),
        None => println!("no shavian found for {value}"),
    }

    Ok(())
}

fn interactive(table: &LetterTable, no_clipboard: bool) -> anyhow::Result<()> {
    print!("{}", render::code_grid(table));
    println!("{PROMPT}");

    let lines = transliterate::read_lines(io::stdin().lock());
    let transliterator = Transliterator::new(table);

    let output = if no_clipboard {
        transliterator.lines(&lines)
    } else {
        let mut clipboard = Osc52::stdout()?;
        transliterator.copy_to_clipboard(&lines, &mut clipboard)?
    };

    println!();
    println!("{output}");

    if !no_clipboard {
        println!("sent to the terminal clipboard (OSC 52)");
    }

    Ok(())
}
