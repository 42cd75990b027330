//! Clamped linear domain→range mapping.

/// A pure linear mapping from a domain interval to a range interval.
///
/// The scale is ephemeral by design: render passes construct one from the
/// current extent and viewport, use it, and drop it. Parameter specs hold a
/// longer-lived one, but it is immutable after construction.
///
/// Reversed domains and ranges are supported (`d0 > d1` is fine); clamping
/// restricts inputs to `[min(d0, d1), max(d0, d1)]` before mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    clamp: bool,
    round: bool,
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            clamp: false,
            round: false,
        }
    }

    /// Clamp inputs to the domain before mapping.
    pub fn clamp(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Round mapped outputs to the nearest integer.
    pub fn round(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map `v` from the domain to the range.
    ///
    /// A degenerate domain (`d0 == d1`) maps every input to `r0`; there is
    /// no division by zero.
    pub fn map(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;

        if d0 == d1 {
            return if self.round { r0.round() } else { r0 };
        }

        // Explicit comparisons rather than f64::min/max: NaN must pass
        // through unclamped so callers can detect and reject it.
        let v = if self.clamp {
            let lo = d0.min(d1);
            let hi = d0.max(d1);
            if v < lo {
                lo
            } else if v > hi {
                hi
            } else {
                v
            }
        } else {
            v
        };

        let t = (v - d0) / (d1 - d0);
        let out = r0 + t * (r1 - r0);
        if self.round {
            out.round()
        } else {
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linearly_inside_domain() {
        let s = LinearScale::new([0.0, 10.0], [0.0, 100.0]);
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(5.0), 50.0);
        assert_eq!(s.map(10.0), 100.0);
        assert_eq!(s.map(2.5), 25.0);
    }

    #[test]
    fn extrapolates_without_clamp() {
        let s = LinearScale::new([0.0, 10.0], [0.0, 100.0]);
        assert_eq!(s.map(15.0), 150.0);
        assert_eq!(s.map(-5.0), -50.0);
    }

    #[test]
    fn clamp_pins_to_nearest_range_boundary() {
        let s = LinearScale::new([0.0, 10.0], [0.0, 100.0]).clamp();
        assert_eq!(s.map(15.0), 100.0);
        assert_eq!(s.map(-5.0), 0.0);
    }

    #[test]
    fn reversed_domain_and_range() {
        let s = LinearScale::new([10.0, 0.0], [0.0, 100.0]);
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(0.0), 100.0);

        let s = LinearScale::new([0.0, 10.0], [100.0, 0.0]).clamp();
        assert_eq!(s.map(-1.0), 100.0);
        assert_eq!(s.map(11.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = LinearScale::new([4.0, 4.0], [7.0, 99.0]);
        assert_eq!(s.map(4.0), 7.0);
        assert_eq!(s.map(-1000.0), 7.0);
        assert_eq!(s.map(f64::NAN), 7.0);
    }

    #[test]
    fn round_snaps_output() {
        let s = LinearScale::new([0.0, 3.0], [0.0, 10.0]).round();
        assert_eq!(s.map(1.0), 3.0);
        assert_eq!(s.map(2.0), 7.0);
    }

    #[test]
    fn nan_input_stays_nan() {
        let s = LinearScale::new([0.0, 1.0], [0.0, 1.0]).clamp();
        assert!(s.map(f64::NAN).is_nan());
    }
}
