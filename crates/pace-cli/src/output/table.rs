#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    /// Bold the header row.
    pub color: bool,
}

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 4;

/// Render left-aligned text columns, right-aligning numeric cells.
///
/// Widths count characters, not bytes, so player names in CJK or with
/// accents line up.
#[must_use]
pub fn render_table(headers: &[String], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| char_len(cell))
                .max()
                .unwrap_or(0)
                .max(char_len(header))
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().map(String::as_str), &widths, |_| false);
    let divider = "-".repeat(char_len(&header_line));
    let header_line = if options.color {
        format!("\u{1b}[1m{header_line}\u{1b}[0m")
    } else {
        header_line
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = (0..widths.len()).map(|i| row.get(i).map_or("", String::as_str));
        lines.push(join_cells(cells, &widths, looks_numeric));
    }
    lines.join("\n")
}

fn join_cells<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_align: impl Fn(&str) -> bool,
) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| {
            let text = truncate(cell, width);
            let pad = " ".repeat(width.saturating_sub(char_len(&text)));
            if right_align(&text) {
                format!("{pad}{text}")
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Take one column off the widest column until the row fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN_WIDTH)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn truncate(value: &str, width: usize) -> String {
    if char_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}
