//! Human-readable rendering.
//!
//! Every store and view implements `Display` as row-major nested brackets,
//! e.g. a 2x3 matrix of chars renders as `[[A, B], [A, B], [A, B]]`.
//! [`render`] adds number formatting and truncation of large matrices.
use std::fmt::{self, Write};

use num_traits::AsPrimitive;

use crate::config::{FormatConfig, Notation};
use crate::matrix::Matrix;

pub(crate) fn write_matrix<M>(matrix: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    M: Matrix + ?Sized,
    M::Elem: fmt::Display,
{
    f.write_char('[')?;
    for y in 0..matrix.rows() {
        if y > 0 {
            f.write_str(", ")?;
        }
        f.write_char('[')?;
        for x in 0..matrix.cols() {
            if x > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", matrix.cell(x, y))?;
        }
        f.write_char(']')?;
    }
    f.write_char(']')
}

/// Indices to show along one axis; `None` marks the elided middle.
fn visible(len: usize, limit: Option<usize>) -> Vec<Option<usize>> {
    match limit {
        Some(keep) if keep < len.saturating_sub(keep) => (0..keep)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - keep..len).map(Some))
            .collect(),
        _ => (0..len).map(Some).collect(),
    }
}

fn format_value(value: f64, notation: Notation) -> String {
    match notation {
        Notation::Plain => format!("{}", value),
        Notation::Fixed(places) => format!("{:.*}", places, value),
        Notation::Scientific(places) => format!("{:.*e}", places, value),
    }
}

/// Renders a numeric matrix according to `config`.
///
/// With `max_rows = Some(k)` and more than `2k` rows, only the first and
/// last `k` rows are printed, separated by `...`; `max_cols` does the same
/// within each row.
pub fn render<M>(matrix: &M, config: &FormatConfig) -> String
where
    M: Matrix,
    M::Elem: AsPrimitive<f64>,
{
    let rows = visible(matrix.rows(), config.max_rows);
    let cols = visible(matrix.cols(), config.max_cols);

    let mut out = String::from("[");
    for (i, y) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let Some(y) = *y else {
            out.push_str("...");
            continue;
        };
        out.push('[');
        for (j, x) in cols.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            match *x {
                Some(x) => out.push_str(&format_value(matrix.cell(x, y).as_(), config.notation)),
                None => out.push_str("..."),
            }
        }
        out.push(']');
    }
    out.push(']');
    out
}
