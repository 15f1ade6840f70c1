//! Padded pipe-delimited rows.

/// Appends one table row to `out`.
///
/// Widths are cumulative: the pad for column `i` runs until the visible width of
/// the row so far reaches the sum of `padding[..=i]`, so an overlong cell is
/// absorbed by the following columns' padding. A padding of 0 means the column
/// grows to its content. With `dashes`, content and padding are drawn as `-`
/// (the Markdown separator row). Widths count chars, not bytes.
///
/// # Panics
///
/// If `padding` and `row` differ in length.
pub fn render_row<S: AsRef<str>>(out: &mut String, padding: &[usize], row: &[S], dashes: bool) {
    assert_eq!(padding.len(), row.len(), "row length mismatch");

    let pad = if dashes { '-' } else { ' ' };
    let mut width = 0usize;
    let mut target = 0usize;
    for (col, &col_padding) in row.iter().zip(padding) {
        let col: &str = col.as_ref();
        out.push_str("| ");
        let n = col.chars().count();
        width += n;
        target += col_padding;
        if dashes {
            out.extend(std::iter::repeat('-').take(n));
        } else {
            out.push_str(col);
        }
        if col_padding != 0 {
            while width < target {
                out.push(pad);
                width += 1;
            }
        }
        if !col.is_empty() || col_padding != 0 {
            out.push(' ');
        }
    }
    out.push('|');
}
