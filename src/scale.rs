//! Scales: pure mappings from data values to pixel positions.

use std::fmt::Display;

// ---------------------------------------------------------------------------
// LinearScale
// ---------------------------------------------------------------------------

/// Continuous mapping from `domain` to `range` by linear interpolation.
///
/// Values outside the domain extrapolate past the range; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Map a domain value to the range.
    ///
    /// A zero-span domain sends every value to the middle of the range.
    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 - d0 == 0.0 { 0.5 } else { (x - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Map a range position back to the domain; the inverse of [`apply`].
    ///
    /// With a zero-span domain every position reads as that single value.
    ///
    /// [`apply`]: LinearScale::apply
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if r1 - r0 == 0.0 { 0.5 } else { (y - r0) / (r1 - r0) };
        d0 + t * (d1 - d0)
    }

    /// Roughly `count` round tick values inside the domain, at steps of
    /// 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || d0.is_nan() || d1.is_nan() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }
        let (start, stop) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        let Some(spec) = TickSpec::new(start, stop, count as f64) else {
            return Vec::new();
        };
        let mut ticks: Vec<f64> = (spec.i1..=spec.i2).map(|i| spec.value(i)).collect();
        if d1 < d0 {
            ticks.reverse();
        }
        ticks
    }

    /// Distance between consecutive ticks for `count`.
    pub fn tick_step(&self, count: usize) -> Option<f64> {
        let (d0, d1) = self.domain;
        let (start, stop) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        if count == 0 || start == stop {
            return None;
        }
        TickSpec::new(start, stop, count as f64).map(|spec| spec.step())
    }

    /// Tick labels with just enough decimals to tell the ticks apart.
    pub fn tick_labels(&self, count: usize) -> Vec<String> {
        let decimals = self
            .tick_step(count)
            .map(|step| (-step.abs().log10().floor()).max(0.0) as usize)
            .unwrap_or(0);
        self.ticks(count)
            .into_iter()
            .map(|t| format!("{t:.decimals$}"))
            .collect()
    }
}

/// Integer tick indices `i1..=i2` and the increment between them. A negative
/// increment stands for its reciprocal, which keeps small steps exact.
#[derive(Debug, Clone, Copy)]
struct TickSpec {
    i1: i64,
    i2: i64,
    inc: f64,
}

impl TickSpec {
    fn new(start: f64, stop: f64, count: f64) -> Option<Self> {
        const E10: f64 = 7.0710678118654755; // sqrt(50)
        const E5: f64 = 3.1622776601683795; // sqrt(10)
        const E2: f64 = std::f64::consts::SQRT_2;

        let step = (stop - start) / count.max(0.0);
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= E10 {
            10.0
        } else if error >= E5 {
            5.0
        } else if error >= E2 {
            2.0
        } else {
            1.0
        };

        let (mut i1, mut i2, inc);
        if power < 0.0 {
            let pos = 10f64.powf(-power) / factor;
            i1 = js_round(start * pos);
            i2 = js_round(stop * pos);
            if i1 / pos < start {
                i1 += 1.0;
            }
            if i2 / pos > stop {
                i2 -= 1.0;
            }
            inc = -pos;
        } else {
            inc = 10f64.powf(power) * factor;
            i1 = js_round(start / inc);
            i2 = js_round(stop / inc);
            if i1 * inc < start {
                i1 += 1.0;
            }
            if i2 * inc > stop {
                i2 -= 1.0;
            }
        }

        if i2 < i1 && (0.5..2.0).contains(&count) {
            return Self::new(start, stop, count * 2.0);
        }
        if !(i2 >= i1) || !inc.is_finite() {
            return None;
        }
        Some(TickSpec {
            i1: i1 as i64,
            i2: i2 as i64,
            inc,
        })
    }

    fn value(&self, i: i64) -> f64 {
        if self.inc < 0.0 {
            i as f64 / -self.inc
        } else {
            i as f64 * self.inc
        }
    }

    fn step(&self) -> f64 {
        if self.inc < 0.0 {
            1.0 / -self.inc
        } else {
            self.inc
        }
    }
}

/// Round half up, so tick indices agree for negative domains.
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

// ---------------------------------------------------------------------------
// BandScale
// ---------------------------------------------------------------------------

/// Categorical mapping that splits the range into equal bands, one per
/// domain entry, separated by `padding_inner` (a fraction of the step).
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: PartialEq> BandScale<K> {
    /// Build a band scale; duplicate categories keep their first position.
    pub fn new(categories: impl IntoIterator<Item = K>, range: (f64, f64), padding_inner: f64) -> Self {
        let mut domain: Vec<K> = Vec::new();
        for category in categories {
            if !domain.contains(&category) {
                domain.push(category);
            }
        }

        let padding_inner = padding_inner.clamp(0.0, 1.0);
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - padding_inner).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding_inner)) * 0.5;
        let bandwidth = step * (1.0 - padding_inner);

        BandScale {
            domain,
            range,
            start,
            step,
            bandwidth,
        }
    }

    /// Left edge of the category's band, `None` outside the domain.
    pub fn apply(&self, category: &K) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == category)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Width of every band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }
}

#[cfg(test)]
impl<K: PartialEq> BandScale<K> {
    /// Distance between the left edges of neighbouring bands.
    pub fn step(&self) -> f64 {
        self.step
    }
}

// ---------------------------------------------------------------------------
// Axis ticks
// ---------------------------------------------------------------------------

/// A labelled position along an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// A scale an axis can be drawn for.
pub trait AxisScale {
    /// Pixel extent the axis line spans.
    fn range(&self) -> (f64, f64);
    /// Tick positions and labels; `count` is a hint continuous scales use.
    fn axis_ticks(&self, count: usize) -> Vec<Tick>;
}

impl AxisScale for LinearScale {
    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn axis_ticks(&self, count: usize) -> Vec<Tick> {
        self.ticks(count)
            .into_iter()
            .zip(self.tick_labels(count))
            .map(|(value, label)| Tick {
                position: self.apply(value),
                label,
            })
            .collect()
    }
}

impl<K: PartialEq + Display> AxisScale for BandScale<K> {
    fn range(&self) -> (f64, f64) {
        self.range
    }

    /// One tick per category, at the middle of its band.
    fn axis_ticks(&self, _count: usize) -> Vec<Tick> {
        self.domain
            .iter()
            .enumerate()
            .map(|(i, k)| Tick {
                position: self.start + self.step * i as f64 + self.bandwidth / 2.0,
                label: k.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linear_maps_domain_ends_to_range_ends() {
        let x = LinearScale::new((1.0, 6.9), (0.0, 500.0));
        assert_eq!(x.apply(1.0), 0.0);
        assert_eq!(x.apply(6.9), 500.0);

        let y = LinearScale::new((0.1, 2.5), (300.0, 0.0));
        assert_eq!(y.apply(0.1), 300.0);
        assert_eq!(y.apply(2.5), 0.0);
        assert!(y.apply(1.0) < y.apply(0.5), "larger values plot higher");
    }

    #[test]
    fn linear_extrapolates() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_relative_eq!(s.apply(15.0), 150.0);
        assert_relative_eq!(s.apply(-5.0), -50.0);
    }

    #[test]
    fn zero_span_domain_maps_to_the_middle() {
        let s = LinearScale::new((3.0, 3.0), (300.0, 0.0));
        assert_eq!(s.apply(3.0), 150.0);
        assert_eq!(s.apply(100.0), 150.0);
        assert_eq!(s.ticks(10), vec![3.0]);
        assert_eq!(s.invert(150.0), 3.0);
        assert_eq!(s.invert(0.0), 3.0);
    }

    #[test]
    fn invert_undoes_apply() {
        let y = LinearScale::new((0.1, 2.5), (300.0, 0.0));
        for v in [0.1, 0.2, 1.3, 2.5, 4.0, -1.0] {
            assert_relative_eq!(y.invert(y.apply(v)), v, epsilon = 1e-12);
        }
        assert_relative_eq!(y.invert(300.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(y.invert(150.0), 1.3, epsilon = 1e-12);
    }

    #[test]
    fn nice_ticks() {
        let s = LinearScale::new((0.0, 6.9), (300.0, 0.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.len(), 14);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[1], 0.5);
        assert_eq!(ticks[13], 6.5);
        assert_eq!(s.tick_labels(10)[..3], ["0.0", "0.5", "1.0"]);

        let wide = LinearScale::new((0.0, 100.0), (0.0, 500.0));
        assert_eq!(wide.ticks(10), (0..=10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
        assert_eq!(wide.tick_labels(10)[1], "10");

        let reversed = LinearScale::new((2.0, 0.0), (0.0, 1.0));
        assert_eq!(reversed.ticks(2), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn axis_ticks_are_positioned_by_the_scale() {
        let s = LinearScale::new((0.0, 10.0), (300.0, 0.0));
        let ticks = s.axis_ticks(5);
        assert_eq!(ticks.first().unwrap().position, 300.0);
        assert_eq!(ticks.last().unwrap().position, 0.0);
        assert_eq!(ticks.last().unwrap().label, "10");
    }

    #[test]
    fn band_layout_for_three_categories() {
        let band = BandScale::new(["a", "b", "c"], (0.0, 300.0), 0.1);
        let step = 300.0 / 2.9;

        assert_relative_eq!(band.step(), step, epsilon = 1e-9);
        assert_relative_eq!(band.bandwidth(), step * 0.9, epsilon = 1e-9);
        assert_relative_eq!(band.apply(&"a").unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(band.apply(&"b").unwrap(), step, epsilon = 1e-9);
        assert_relative_eq!(band.apply(&"c").unwrap(), 2.0 * step, epsilon = 1e-9);
        assert_relative_eq!(band.apply(&"c").unwrap() + band.bandwidth(), 300.0, epsilon = 1e-9);
        assert_eq!(band.apply(&"z"), None);
    }

    #[test]
    fn band_domain_deduplicates_in_first_seen_order() {
        let band = BandScale::new(["b", "a", "b"], (0.0, 100.0), 0.0);
        assert_eq!(band.domain(), ["b", "a"]);
        assert_relative_eq!(band.bandwidth(), 50.0);

        let ticks = band.axis_ticks(10);
        assert_eq!(ticks[0].label, "b");
        assert_relative_eq!(ticks[0].position, 25.0);
        assert_relative_eq!(ticks[1].position, 75.0);
    }

    #[test]
    fn single_band_is_centred() {
        let band = BandScale::new(["only"], (0.0, 100.0), 0.1);
        assert_relative_eq!(band.bandwidth(), 90.0);
        assert_relative_eq!(band.apply(&"only").unwrap(), 5.0);
    }
}
