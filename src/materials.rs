use crate::textures::ColorTexture;
use crate::types::color::Color;
use crate::types::sampler::{ColorSampler, EmissiveSampler, RangeSampler, Sampler};
use rand::Rng;
use serde::Serialize;

/// Material fields shared by every primitive record. Unset scalars are left
/// out of the document so the renderer falls back to its own defaults.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Surface {
    color: ColorTexture,
    #[serde(skip_serializing_if = "Option::is_none")]
    metalness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roughness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emissive: Option<f32>,
}

impl Surface {
    pub fn new(color: impl Into<ColorTexture>) -> Self {
        Self {
            color: color.into(),
            metalness: None,
            roughness: None,
            emissive: None,
        }
    }

    pub fn textured(path: impl Into<String>) -> Self {
        Self::new(ColorTexture::image(path))
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = Some(metalness);
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = Some(roughness);
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = Some(emissive);
        self
    }

    pub fn color(&self) -> &ColorTexture {
        &self.color
    }

    pub fn metalness(&self) -> Option<f32> {
        self.metalness
    }

    pub fn roughness(&self) -> Option<f32> {
        self.roughness
    }

    pub fn emissive(&self) -> Option<f32> {
        self.emissive
    }
}

impl From<Color> for Surface {
    fn from(color: Color) -> Self {
        Surface::new(color)
    }
}

/// Fully random surface: every field is set.
pub struct SurfaceSampler {
    unit: RangeSampler,
    emissive: EmissiveSampler,
}

impl SurfaceSampler {
    pub fn new(emissive: EmissiveSampler) -> Self {
        Self {
            unit: RangeSampler::unit(),
            emissive,
        }
    }
}

impl Sampler<Surface> for SurfaceSampler {
    fn sample(&self, rng: &mut impl Rng) -> Surface {
        let color = ColorSampler.sample(rng);
        let metalness = self.unit.sample(rng);
        let roughness = self.unit.sample(rng);
        let emissive = self.emissive.sample(rng);

        Surface::new(color)
            .with_metalness(metalness)
            .with_roughness(roughness)
            .with_emissive(emissive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unset_fields_are_omitted() {
        let surface = Surface::new(Color::gray(200)).with_roughness(1.0);
        let json = serde_json::to_value(&surface).unwrap();
        assert_eq!(json, serde_json::json!({"color": [200, 200, 200], "roughness": 1.0}));
    }

    #[test]
    fn sampled_surface_is_complete() {
        let mut rng = StdRng::seed_from_u64(9);
        let sampler = SurfaceSampler::new(EmissiveSampler::new(0.5, 2.0));
        for _ in 0..100 {
            let surface = sampler.sample(&mut rng);
            assert!(matches!(surface.color(), ColorTexture::Solid(_)));
            assert!((0.0..=1.0).contains(&surface.metalness().unwrap()));
            assert!((0.0..=1.0).contains(&surface.roughness().unwrap()));
            assert!((0.0..=2.0).contains(&surface.emissive().unwrap()));
        }
    }
}
