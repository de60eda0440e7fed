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

use rustc_hash::FxHashMap;

use crate::{index::canonical_code, letter::LetterTable};

const PADDING: usize = 2;

const GRID_ROWS: [char; 3] = ['5', '6', '7'];
const GRID_COLUMNS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Right aligns every cell in its column, with at least `PADDING` spaces to
/// the left of it.
fn align_right(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or_default();
    let mut widths = vec![0; columns];

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for row in rows {
        for (cell, width) in row.iter().zip(&widths) {
            output.push_str(&format!("{cell:>width$}", width = width + PADDING));
        }
        output.push('\n');
    }

    output
}

/// One row per letter in code order: glyph, name, sound, code and category.
#[must_use]
pub fn attribute_table(table: &LetterTable) -> String {
    let header = ["Letter", "Name", "Sound", "Code", "Type"];

    let mut rows = vec![
        header.iter().map(ToString::to_string).collect(),
        header.iter().map(|title| "-".repeat(title.len())).collect(),
    ];

    for letter in table.sorted_by_code() {
        rows.push(vec![
            letter.glyph.clone(),
            letter.name.clone(),
            letter.sound.clone(),
            letter.code.clone(),
            letter.category.to_string(),
        ]);
    }

    align_right(&rows)
}

/// The glyphs laid out by the first (row) and second (column) digit of their
/// code. Codes without a letter are blank, codes off the grid are skipped.
#[must_use]
pub fn code_grid(table: &LetterTable) -> String {
    let mut cells = FxHashMap::default();

    for letter in table.sorted_by_code() {
        let code: Vec<char> = canonical_code(&letter.code).chars().collect();
        if let [row, column] = code[..] {
            cells.insert((row, column), letter.glyph.as_str());
        }
    }

    let mut header = vec![" ".to_string()];
    let mut underline = vec![" ".to_string()];
    for column in GRID_COLUMNS {
        header.push(format!(" {column}"));
        underline.push(" -".to_string());
    }

    let mut rows = vec![header, underline];
    for row in GRID_ROWS {
        let mut cells_in_row = vec![row.to_string()];
        for column in GRID_COLUMNS {
            let glyph = cells.get(&(row, column)).copied().unwrap_or_default();
            cells_in_row.push(glyph.to_string());
        }
        rows.push(cells_in_row);
    }

    let mut output = align_right(&rows);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use crate::letter::{Category, Letter, LetterTable};

    use super::*;

    fn letter(glyph: &str, name: &str, code: &str) -> Letter {
        Letter {
            glyph: glyph.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            sound: "ɪ".to_string(),
            category: Category::Vowel,
        }
    }

    #[test]
    fn attribute_table_reads_back() -> anyhow::Result<()> {
        let table = LetterTable::embedded()?;
        let rendered = attribute_table(&table);
        let mut lines = rendered.lines();

        let header: Vec<_> = lines.next().unwrap_or_default().split_whitespace().collect();
        assert_eq!(header, ["Letter", "Name", "Sound", "Code", "Type"]);
        let underline: Vec<_> = lines.next().unwrap_or_default().split_whitespace().collect();
        assert_eq!(underline, ["------", "----", "-----", "----", "----"]);

        let mut read_back = Vec::new();
        for line in lines {
            let columns: Vec<_> = line.split_whitespace().collect();
            assert_eq!(columns.len(), 5, "{line:?}");
            let [glyph, name, sound, code, category] = [
                columns[0], columns[1], columns[2], columns[3], columns[4],
            ];

            read_back.push(Letter {
                glyph: glyph.to_string(),
                name: name.to_string(),
                code: code.to_string(),
                sound: sound.to_string(),
                category: category.parse()?,
            });
        }

        let mut letters = table.letters().to_vec();
        letters.sort_by(|a, b| a.code.cmp(&b.code));
        assert_eq!(read_back, letters);

        Ok(())
    }

    #[test]
    fn attribute_table_alignment() {
        let table = LetterTable::new(vec![letter("b", "bb", "60"), letter("a", "a", "50")]);

        assert_eq!(
            attribute_table(&table),
            concat!(
                "  Letter  Name  Sound  Code   Type\n",
                "  ------  ----  -----  ----   ----\n",
                "       a     a      ɪ    50  vowel\n",
                "       b    bb      ɪ    60  vowel\n",
            )
        );
    }

    #[test]
    fn every_code_in_one_cell() -> anyhow::Result<()> {
        let table = LetterTable::embedded()?;
        let rendered = code_grid(&table);

        for letter in table.letters() {
            assert_eq!(rendered.matches(letter.glyph.as_str()).count(), 1);

            let mut code = letter.code.chars();
            let (row, column) = (code.next(), code.next());
            let line = rendered
                .lines()
                .find(|line| line.trim_start().starts_with(row.unwrap_or_default()))
                .unwrap_or_default();
            let cells: Vec<_> = line.split_whitespace().collect();
            let column = column.and_then(|c| c.to_digit(16)).unwrap_or_default();

            assert_eq!(cells[column as usize + 1], letter.glyph);
        }

        Ok(())
    }

    #[test]
    fn missing_codes_are_blank() {
        let table = LetterTable::new(vec![letter("𐑕", "so", "5a"), letter("?", "off", "9Z")]);
        let rendered = code_grid(&table);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].split_whitespace().count(), 16);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["5", "𐑕"]);
        assert_eq!(lines[3].trim(), "6");
        assert_eq!(lines[4].trim(), "7");
        assert_eq!(lines[5], "");
        assert!(!rendered.contains('?'));

        // the label column, then ten blank cells before A
        assert_eq!(
            lines[2],
            format!("  5{}{:>4}{}", " ".repeat(40), "𐑕", " ".repeat(20))
        );
    }
}
