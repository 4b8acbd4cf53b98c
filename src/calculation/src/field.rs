//! Per-cell result arrays with explicit undefined cells.
//!
//! A [`Field`] cell is `None` when no feasible design exists at that grid
//! point. `None` propagates through every derivation and is never
//! replaced by a sentinel number inside the core.

use ndarray::{Array2, Zip};

/// 2-D result array aligned to a [`DesignGrid`](crate::grid::DesignGrid).
pub type Field = Array2<Option<f64>>;

/// Boolean feasibility mask, `true` where a design survives every check.
pub type Mask = Array2<bool>;

/// Invalidate every cell where `mask` is false.
pub fn apply_mask(field: &Field, mask: &Mask) -> Field {
    Zip::from(field)
        .and(mask)
        .map_collect(|&value, &keep| if keep { value } else { None })
}

/// Lift a dense array into a field, invalidating masked-out cells.
pub fn mask_dense(values: &Array2<f64>, mask: &Mask) -> Field {
    Zip::from(values)
        .and(mask)
        .map_collect(|&value, &keep| keep.then_some(value))
}

/// Lift a dense array into a field with every cell defined.
pub fn from_dense(values: &Array2<f64>) -> Field {
    values.mapv(Some)
}

/// Transform the defined cells, keep undefined cells undefined.
pub fn map_defined<F>(field: &Field, f: F) -> Field
where
    F: Fn(f64) -> f64,
{
    field.map(|value| value.map(&f))
}

pub fn defined_count(field: &Field) -> usize {
    field.iter().filter(|v| v.is_some()).count()
}

/// Minimum and maximum over the defined, finite cells.
pub fn defined_range(field: &Field) -> Option<(f64, f64)> {
    field
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
