use na::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Scene, SceneBuilder};
use crate::camera::Camera;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::materials::SurfaceSampler;
use crate::objects::{cone::Cone, cylinder::Cylinder, plane::Plane, sphere::Sphere, Primitive};
use crate::types::sampler::{BoxSampler, CubeSampler, EmissiveSampler, RangeSampler, Sampler};

/// Randomly populated test scene: a fixed camera looking down +z, then the
/// configured number of spheres, cylinders, cones and planes, in that order.
pub struct RandomScene<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl RandomScene<StdRng> {
    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RandomScene<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }
}

struct Samplers {
    position: BoxSampler,
    radius: RangeSampler,
    height: RangeSampler,
    surface: SurfaceSampler,
}

impl Samplers {
    fn new(config: &GeneratorConfig) -> Self {
        Self {
            position: BoxSampler::new(config.x_max, config.y_max, config.z_max),
            radius: RangeSampler::up_to(config.radius_max),
            height: RangeSampler::up_to(config.height_max),
            surface: SurfaceSampler::new(EmissiveSampler::new(
                config.emissive_ratio,
                config.emissive_max,
            )),
        }
    }

    fn placement(&self, rng: &mut impl Rng) -> (Point3<f32>, Vector3<f32>) {
        (self.position.sample(rng), CubeSampler.sample(rng))
    }

    fn sphere(&self, rng: &mut impl Rng) -> Sphere {
        let (pos, dir) = self.placement(rng);
        let radius = self.radius.sample(rng);
        Sphere::new(pos, dir, radius, self.surface.sample(rng))
    }

    fn cylinder(&self, rng: &mut impl Rng) -> Cylinder {
        let (pos, dir) = self.placement(rng);
        let radius = self.radius.sample(rng);
        let height = self.height.sample(rng);
        Cylinder::new(pos, dir, radius, height, self.surface.sample(rng))
    }

    fn cone(&self, rng: &mut impl Rng) -> Cone {
        let (pos, dir) = self.placement(rng);
        let radius = self.radius.sample(rng);
        let height = self.height.sample(rng);
        Cone::new(pos, dir, radius, height, self.surface.sample(rng))
    }

    fn plane(&self, rng: &mut impl Rng) -> Plane {
        let (pos, dir) = self.placement(rng);
        Plane::new(pos, dir, self.surface.sample(rng))
    }
}

impl<R: Rng> SceneBuilder for RandomScene<R> {
    fn build_camera(&self) -> Camera {
        Camera::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0), 60.0)
    }

    fn build(&mut self) -> Scene {
        let mut scene = Scene::new(self.build_camera());
        let samplers = Samplers::new(&self.config);
        let rng = &mut self.rng;

        for _ in 0..self.config.sphere_nb {
            scene.add(Primitive::Sphere(samplers.sphere(rng)));
        }
        for _ in 0..self.config.cylinder_nb {
            scene.add(Primitive::Cylinder(samplers.cylinder(rng)));
        }
        for _ in 0..self.config.cone_nb {
            scene.add(Primitive::Cone(samplers.cone(rng)));
        }
        for _ in 0..self.config.plane_nb {
            scene.add(Primitive::Plane(samplers.plane(rng)));
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Object;

    fn config(s: usize, c: usize, n: usize, p: usize) -> GeneratorConfig {
        GeneratorConfig {
            sphere_nb: s,
            cylinder_nb: c,
            cone_nb: n,
            plane_nb: p,
            seed: Some(1234),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn grouped_order() {
        let scene = RandomScene::from_config(config(2, 3, 1, 2)).unwrap().build();
        let kinds: Vec<&str> = scene.primitives().iter().map(Primitive::kind).collect();
        assert_eq!(
            kinds,
            ["sphere", "sphere", "cylinder", "cylinder", "cylinder", "cone", "plane", "plane"]
        );
        assert_eq!(scene.record_count(), 9);
    }

    #[test]
    fn fixed_camera() {
        let scene = RandomScene::from_config(config(0, 0, 0, 0)).unwrap().build();
        assert_eq!(scene.camera().pos(), Point3::new(0.0, 0.0, -10.0));
        assert_eq!(scene.camera().dir(), Vector3::z());
        assert_eq!(scene.camera().fov(), 60.0);
        assert!(scene.primitives().is_empty());
    }

    #[test]
    fn same_seed_same_scene() {
        let a = RandomScene::from_config(config(3, 3, 3, 3)).unwrap().build();
        let b = RandomScene::from_config(config(3, 3, 3, 3)).unwrap().build();
        assert_eq!(a, b);
    }

    #[test]
    fn positions_respect_per_axis_bounds() {
        let mut cfg = config(50, 0, 0, 50);
        cfg.x_max = 1.0;
        cfg.y_max = 0.0;
        cfg.z_max = 300.0;
        let scene = RandomScene::from_config(cfg).unwrap().build();
        for p in scene.primitives() {
            let pos = p.pos();
            assert!(pos.x.abs() <= 1.0);
            assert_eq!(pos.y, 0.0);
            assert!(pos.z.abs() <= 300.0);
        }
    }

    #[test]
    fn near_max_extent_builds() {
        let mut cfg = config(1, 0, 0, 1);
        cfg.x_max = 3.0e38;
        let scene = RandomScene::from_config(cfg).unwrap().build();
        assert!(scene.primitives().iter().all(|p| p.pos().x.abs() <= 3.0e38));
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut cfg = config(1, 0, 0, 0);
        cfg.emissive_ratio = -0.1;
        assert!(RandomScene::from_config(cfg).is_err());
    }
}
