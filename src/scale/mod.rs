//! Linear scales and extents.
//!
//! Every render pass rebuilds its scales from the freshly computed extents;
//! nothing here is cached across parameter changes.

mod linear;

pub use linear::LinearScale;

/// Compute the `[min, max]` extent of a value sequence.
///
/// Non-finite values are ignored. Returns `None` for an empty (or entirely
/// non-finite) input. A single distinct value yields a degenerate extent
/// (`min == max`), which [`LinearScale`] handles by mapping everything to the
/// start of its range.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    let mut bounds: Option<[f64; 2]> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        match &mut bounds {
            None => bounds = Some([v, v]),
            Some([min, max]) => {
                if v < *min {
                    *min = v;
                }
                if v > *max {
                    *max = v;
                }
            }
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_finds_bounds() {
        let e = extent([3.0, -1.0, 2.5, 0.0]).unwrap();
        assert_eq!(e, [-1.0, 3.0]);
    }

    #[test]
    fn extent_skips_non_finite() {
        let e = extent([f64::NAN, 1.0, f64::INFINITY, 4.0]).unwrap();
        assert_eq!(e, [1.0, 4.0]);
    }

    #[test]
    fn extent_of_nothing_is_none() {
        assert_eq!(extent([]), None);
        assert_eq!(extent([f64::NAN]), None);
    }

    #[test]
    fn extent_of_constant_is_degenerate() {
        assert_eq!(extent([7.0, 7.0, 7.0]), Some([7.0, 7.0]));
    }
}
