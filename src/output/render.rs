//! Rendering of a table as text.
//!
//! Widths are counted in chars. Padding never cuts a value: a cell
//! longer than its column width is printed whole and pushes the next
//! cell to the right. Only the fixed-width style truncates, and it
//! keeps the tail of the value behind a [`TRUNCATION_MARKER`].
//!
//! A fixed width of 0 keeps no char at all: every cell prints as the
//! bare marker. This is not what negative slicing gives: `s[-0:]` is
//! the whole string, which would print the marker followed by the full
//! value.

use log::trace;
use std::io::{self, Write};

use super::Style;
use crate::table::Table;

/// Space appended to the natural width of a column.
pub const GUTTER: usize = 2;

/// Extra space reserved by the fixed-width style for the marker.
pub const FIXED_GUTTER: usize = 4;

/// Prefix of truncated cells.
pub const TRUNCATION_MARKER: &str = "..";

/// How the cells of a column are laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnLayout {
    /// Left-justify the cell and pad it to the given width.
    Pad(usize),
    /// Keep the last `keep` chars of the cell behind the truncation
    /// marker, then pad to the given width.
    TruncateStart { keep: usize, width: usize },
}

impl ColumnLayout {
    fn write_cell(&self, writer: &mut dyn Write, cell: &str) -> io::Result<()> {
        match *self {
            Self::Pad(width) => write!(writer, "{cell:<width$}"),
            Self::TruncateStart { keep, width } => {
                let cell = format!("{TRUNCATION_MARKER}{}", tail(cell, keep));
                write!(writer, "{cell:<width$}")
            }
        }
    }
}

/// Return the last `n` chars of the given string.
fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }

    match s.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

/// Length of the longest data cell of each column, header excluded.
pub fn natural_widths(table: &Table) -> Vec<usize> {
    (0..table.columns().len())
        .map(|i| {
            table
                .column_cells(i)
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or_default()
        })
        .collect()
}

/// Compute the layout of each column, or `None` for styles that do
/// not align columns.
pub fn layout(table: &Table, style: Style) -> Option<Vec<ColumnLayout>> {
    let fix_width = match style {
        Style::Tab => return None,
        Style::Aligned => None,
        Style::Fixed(width) => Some(width),
    };

    let widths = natural_widths(table);
    trace!("natural widths: {:?}", widths);

    let layout = widths
        .into_iter()
        .map(|width| width + GUTTER)
        .map(|width| match fix_width {
            None => ColumnLayout::Pad(width),
            Some(fix_width) if width < fix_width => ColumnLayout::Pad(width + FIXED_GUTTER),
            Some(fix_width) => ColumnLayout::TruncateStart {
                keep: fix_width,
                width: fix_width + FIXED_GUTTER,
            },
        })
        .collect::<Vec<_>>();
    trace!("layout: {:?}", layout);

    Some(layout)
}

/// Write the header then every row of the table in the given style.
pub fn render(table: &Table, style: Style, writer: &mut dyn Write) -> io::Result<()> {
    let lines = std::iter::once(table.columns()).chain(table.rows().iter().map(Vec::as_slice));

    match layout(table, style) {
        None => {
            for line in lines {
                writeln!(writer, "{}", line.join("\t"))?;
            }
        }
        Some(layout) => {
            for line in lines {
                for (cell, column) in line.iter().zip(&layout) {
                    column.write_cell(writer, cell)?;
                }
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

/// Render the table into a string.
pub fn render_to_string(table: &Table, style: Style) -> io::Result<String> {
    let mut buf = Vec::new();
    render(table, style, &mut buf).map(|()| String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            ["a", "b", "c"],
            vec![
                vec!["1".into(), "22".into(), "333".into()],
                vec!["4".into(), "5".into(), "6".into()],
            ],
        )
    }

    #[test]
    fn tail_counts_chars() {
        assert_eq!(tail("abcdefgh", 5), "defgh");
        assert_eq!(tail("abc", 5), "abc");
        assert_eq!(tail("abc", 3), "abc");
        assert_eq!(tail("abc", 0), "");
        assert_eq!(tail("héllo wörld", 4), "örld");
    }

    #[test]
    fn natural_widths_ignore_header() {
        let table = Table::new(["long header", "x"], vec![vec!["ab".into(), "".into()]]);
        assert_eq!(natural_widths(&table), vec![2, 0]);
    }

    #[test]
    fn natural_widths_of_empty_table() {
        let table = Table::new(["a", "b"], vec![]);
        assert_eq!(natural_widths(&table), vec![0, 0]);
    }

    #[test]
    fn tab_style() {
        assert_eq!(
            render_to_string(&table(), Style::Tab).unwrap(),
            "a\tb\tc\n1\t22\t333\n4\t5\t6\n"
        );
    }

    #[test]
    fn aligned_style() {
        assert_eq!(
            render_to_string(&table(), Style::Aligned).unwrap(),
            concat!(
                "a  b   c    \n",
                "1  22  333  \n",
                "4  5   6    \n",
            )
        );
    }

    #[test]
    fn aligned_style_does_not_cut_long_headers() {
        let table = Table::new(["name", "x"], vec![vec!["a".into(), "b".into()]]);
        assert_eq!(
            render_to_string(&table, Style::Aligned).unwrap(),
            "namex  \na  b  \n"
        );
    }

    #[test]
    fn fixed_style_keeps_narrow_columns() {
        assert_eq!(
            layout(&table(), Style::Fixed(10)).unwrap(),
            vec![
                ColumnLayout::Pad(7),
                ColumnLayout::Pad(8),
                ColumnLayout::Pad(9)
            ]
        );
        assert_eq!(
            render_to_string(&table(), Style::Fixed(10)).unwrap(),
            concat!(
                "a      b       c        \n",
                "1      22      333      \n",
                "4      5       6        \n",
            )
        );
    }

    #[test]
    fn fixed_style_truncates_wide_columns() {
        let table = Table::new(
            ["id", "path"],
            vec![
                vec!["1".into(), "abcdefgh".into()],
                vec!["2".into(), "xy".into()],
            ],
        );

        assert_eq!(
            render_to_string(&table, Style::Fixed(5)).unwrap(),
            concat!(
                "id     ..path   \n",
                "1      ..defgh  \n",
                "2      ..xy     \n",
            )
        );
    }

    #[test]
    fn fixed_style_clamps_at_exact_width() {
        // natural width 3 + gutter 2 reaches the fixed width
        let table = Table::new(["c"], vec![vec!["333".into()]]);
        assert_eq!(
            layout(&table, Style::Fixed(5)).unwrap(),
            vec![ColumnLayout::TruncateStart { keep: 5, width: 9 }]
        );
        assert_eq!(
            render_to_string(&table, Style::Fixed(5)).unwrap(),
            "..c      \n..333    \n"
        );
    }

    #[test]
    fn fixed_style_with_zero_width() {
        assert_eq!(
            render_to_string(&table(), Style::Fixed(0)).unwrap(),
            concat!(
                "..  ..  ..  \n",
                "..  ..  ..  \n",
                "..  ..  ..  \n",
            )
        );
    }

    #[test]
    fn header_only_table() {
        let table = Table::new(["ab", "c"], vec![]);
        assert_eq!(render_to_string(&table, Style::Aligned).unwrap(), "abc \n");
        assert_eq!(render_to_string(&table, Style::Tab).unwrap(), "ab\tc\n");
    }
}
