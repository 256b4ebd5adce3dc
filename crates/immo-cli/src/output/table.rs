use immo_core::PropertyRecord;
use immo_core::money::format_price;

pub const PROPERTY_HEADERS: [&str; 5] = [
    "Prix",
    "Ville",
    "Type de propriété",
    "Chambres",
    "Salles de bains",
];

const MIN_COLUMN_WIDTH: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One row per record, price formatted for display.
#[must_use]
pub fn render_property_table(records: &[PropertyRecord], options: TableOptions) -> String {
    let rows = records
        .iter()
        .map(|record| {
            vec![
                format_price(record.price),
                record.city.to_string(),
                record.property_type.to_string(),
                record.bedrooms.to_string(),
                record.bathrooms.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    let aligns = [Align::Right, Align::Left, Align::Left, Align::Right, Align::Right];
    render_entity_table(&PROPERTY_HEADERS, &aligns, &rows, options)
}

/// Render a simple aligned table for string rows.
///
/// Widths are counted in characters so accented values line up.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    aligns: &[Align],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, Align::Left))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(display_width(&header_line));
    let header_line = if options.color {
        format!("\u{1b}[1m{header_line}\u{1b}[0m")
    } else {
        header_line
    };

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let align = aligns.get(index).copied().unwrap_or(Align::Left);
                format_cell(&truncate_text(value, *width), *width, align)
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Shrink the widest column one step at a time until the table fits.
fn fit_widths(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn format_cell(value: &str, width: usize, align: Align) -> String {
    let pad = " ".repeat(width.saturating_sub(display_width(value)));
    match align {
        Align::Left => format!("{value}{pad}"),
        Align::Right => format!("{pad}{value}"),
    }
}

#[cfg(test)]
mod tests {
    use immo_core::{City, PropertyRecord, PropertyType};
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn property_table_formats_price_and_headers() {
        let table = render_property_table(
            &[
                PropertyRecord::new(200_000, City::Quebec, PropertyType::Condo, 2, 1),
                PropertyRecord::new(1_250_000, City::Montreal, PropertyType::Maison, 5, 3),
            ],
            PLAIN,
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Prix"));
        assert!(lines[0].contains("Type de propriété"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("  200 000 $"));
        assert!(lines[3].contains("1 250 000 $"));
        assert!(lines[3].contains("Montréal"));
    }

    #[test]
    fn accented_cells_keep_columns_aligned() {
        let table = render_property_table(
            &[
                PropertyRecord::new(1, City::Quebec, PropertyType::Loft, 1, 1),
                PropertyRecord::new(1, City::Toronto, PropertyType::Loft, 1, 1),
            ],
            PLAIN,
        );
        let widths: Vec<usize> = table.lines().skip(2).map(display_width).collect();
        assert_eq!(widths[0], widths[1]);
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["a very long cell value".to_string(), "x".to_string()]];
        let table = render_entity_table(
            &["first", "second"],
            &[Align::Left, Align::Left],
            &rows,
            TableOptions {
                max_width: Some(16),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("data row");
        assert!(display_width(row) <= 16);
        assert!(row.contains('…'));
    }

    #[test]
    fn color_only_decorates_header() {
        let table = render_property_table(
            &[PropertyRecord::new(1, City::Ottawa, PropertyType::Condo, 1, 1)],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.starts_with("\u{1b}[1m"));
        assert!(!table.lines().nth(2).expect("row").contains('\u{1b}'));
    }
}
