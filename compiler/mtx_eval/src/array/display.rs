//! numpy-style text form.
//!
//! Every cell of an array is padded to one common width. Float cells also
//! line up on the decimal point, and the whole array switches to exponent
//! form when a nonzero finite magnitude is very large or very small, or when
//! the largest is more than a thousand times the smallest.

use std::fmt;

use super::{Array, ArrayShape, DType};

const PRECISION: usize = 8;
const EXPONENT_ABOVE: f64 = 1e8;
const EXPONENT_BELOW: f64 = 1e-4;
const EXPONENT_SPREAD: f64 = 1e3;

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = format_cells(&self.data, self.dtype);
        match self.shape {
            ArrayShape::Vector(_) => write_row(f, &cells),
            ArrayShape::Matrix(0, _) => f.write_str("[]"),
            ArrayShape::Matrix(rows, cols) => {
                f.write_str("[")?;
                for row in 0..rows {
                    if row > 0 {
                        f.write_str("\n ")?;
                    }
                    write_row(f, &cells[row * cols..(row + 1) * cols])?;
                }
                f.write_str("]")
            }
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String]) -> fmt::Result {
    write!(f, "[{}]", cells.join(" "))
}

fn format_cells(values: &[f64], dtype: DType) -> Vec<String> {
    let cells: Vec<String> = match dtype {
        DType::Int => values.iter().map(|&x| (x as i64).to_string()).collect(),
        DType::Float if use_exponent(values) => exponent_cells(values),
        DType::Float => positional_cells(values),
    };
    let width = cells.iter().map(String::len).max().unwrap_or(0);
    cells
        .into_iter()
        .map(|cell| format!("{cell:>width$}"))
        .collect()
}

fn use_exponent(values: &[f64]) -> bool {
    let magnitudes = values
        .iter()
        .copied()
        .filter(|x| x.is_finite() && *x != 0.0)
        .map(f64::abs);
    let Some((min, max)) = magnitudes.fold(None, |range, x| match range {
        None => Some((x, x)),
        Some((min, max)) => Some((f64::min(min, x), f64::max(max, x))),
    }) else {
        return false;
    };
    max >= EXPONENT_ABOVE || min < EXPONENT_BELOW || max / min > EXPONENT_SPREAD
}

fn non_finite(x: f64) -> Option<String> {
    if x.is_nan() {
        Some("nan".to_string())
    } else if x.is_infinite() {
        Some(if x > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

/// `1.`, `0.5`, `0.33333333`; fractions padded on the right to align.
fn positional_cells(values: &[f64]) -> Vec<String> {
    let texts: Vec<String> = values
        .iter()
        .map(|&x| {
            non_finite(x).unwrap_or_else(|| {
                let text = format!("{x:.PRECISION$}");
                text.trim_end_matches('0').to_string()
            })
        })
        .collect();

    let frac_width = texts
        .iter()
        .filter_map(|text| text.split_once('.'))
        .map(|(_, frac)| frac.len())
        .max()
        .unwrap_or(0);
    texts
        .into_iter()
        .map(|text| match text.split_once('.') {
            Some((_, frac)) => {
                let pad = frac_width - frac.len();
                format!("{text}{:pad$}", "")
            }
            None => text,
        })
        .collect()
}

/// `1.5e-05`, `1.e+08`; mantissas zero-padded to a common digit count.
fn exponent_cells(values: &[f64]) -> Vec<String> {
    let parts: Vec<Result<(String, String), String>> = values
        .iter()
        .map(|&x| match non_finite(x) {
            Some(text) => Err(text),
            None => {
                let text = format!("{x:.PRECISION$e}");
                let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
                let mantissa = mantissa.trim_end_matches('0').to_string();
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                Ok((mantissa, format!("e{sign}{digits:0>2}")))
            }
        })
        .collect();

    let digits = parts
        .iter()
        .filter_map(|part| part.as_ref().ok())
        .filter_map(|(mantissa, _)| mantissa.split_once('.'))
        .map(|(_, frac)| frac.len())
        .max()
        .unwrap_or(0);
    parts
        .into_iter()
        .map(|part| match part {
            Ok((mantissa, exponent)) => {
                let frac = mantissa.split_once('.').map_or(0, |(_, frac)| frac.len());
                let zeros = "0".repeat(digits - frac);
                format!("{mantissa}{zeros}{exponent}")
            }
            Err(text) => text,
        })
        .collect()
}
