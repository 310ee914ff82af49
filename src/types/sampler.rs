use crate::types::color::Color;
use na::{Point3, Vector3};
use rand::Rng;

pub trait Sampler<T> {
    fn sample(&self, rng: &mut impl Rng) -> T;
}

/// Uniform scalar over the closed interval `[min, max]`.
pub struct RangeSampler {
    min: f32,
    max: f32,
}

impl RangeSampler {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn up_to(max: f32) -> Self {
        Self::new(0.0, max)
    }

    pub fn unit() -> Self {
        Self::up_to(1.0)
    }
}

impl Sampler<f32> for RangeSampler {
    fn sample(&self, rng: &mut impl Rng) -> f32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Points in the axis-aligned box `[-extent, extent]` around the origin.
/// Scales a unit draw rather than sampling `-extent..=extent` directly, so
/// extents near `f32::MAX` stay in range.
pub struct BoxSampler {
    extent: Vector3<f32>,
}

impl BoxSampler {
    pub fn new(x_max: f32, y_max: f32, z_max: f32) -> Self {
        Self {
            extent: Vector3::new(x_max, y_max, z_max),
        }
    }
}

impl Sampler<Point3<f32>> for BoxSampler {
    fn sample(&self, rng: &mut impl Rng) -> Point3<f32> {
        let x = self.extent.x * rng.gen_range(-1.0_f32..=1.0);
        let y = self.extent.y * rng.gen_range(-1.0_f32..=1.0);
        let z = self.extent.z * rng.gen_range(-1.0_f32..=1.0);

        Point3::new(x, y, z)
    }
}

/// Directions drawn per axis from `[-1, 1]`. No normalization, the zero
/// vector is a legal sample.
pub struct CubeSampler;

impl Sampler<Vector3<f32>> for CubeSampler {
    fn sample(&self, rng: &mut impl Rng) -> Vector3<f32> {
        let x = rng.gen_range(-1.0_f32..=1.0);
        let y = rng.gen_range(-1.0_f32..=1.0);
        let z = rng.gen_range(-1.0_f32..=1.0);

        Vector3::new(x, y, z)
    }
}

pub struct ColorSampler;

impl Sampler<Color> for ColorSampler {
    fn sample(&self, rng: &mut impl Rng) -> Color {
        Color::new(rng.gen(), rng.gen(), rng.gen())
    }
}

/// Two-stage draw: a Bernoulli gate at `ratio`, then a uniform magnitude in
/// `[0, max]`. Gated-out samples are exactly zero.
pub struct EmissiveSampler {
    ratio: f64,
    magnitude: RangeSampler,
}

impl EmissiveSampler {
    /// `ratio` must lie in `[0, 1]`.
    pub fn new(ratio: f64, max: f32) -> Self {
        Self {
            ratio,
            magnitude: RangeSampler::up_to(max),
        }
    }
}

impl Sampler<f32> for EmissiveSampler {
    fn sample(&self, rng: &mut impl Rng) -> f32 {
        if rng.gen_bool(self.ratio) {
            self.magnitude.sample(rng)
        } else {
            0.0
        }
    }
}
