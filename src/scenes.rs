use crate::camera::Camera;
use crate::objects::Primitive;
use crate::textures::Skybox;
use serde::ser::{Serialize, SerializeSeq, Serializer};

pub mod flashback;
pub mod random;

pub trait SceneBuilder {
    fn build_camera(&self) -> Camera;
    fn build(&mut self) -> Scene;
}

/// A scene document: optional skybox, the camera, then primitives in
/// insertion order. Serializes as a flat JSON array of tagged records.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    skybox: Option<Skybox>,
    camera: Camera,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            skybox: None,
            camera,
            primitives: Vec::new(),
        }
    }

    pub fn with_skybox(mut self, skybox: Skybox) -> Self {
        self.skybox = Some(skybox);
        self
    }

    pub fn add(&mut self, primitive: Primitive) {
        log::debug!("Adding {}", primitive.kind());
        self.primitives.push(primitive);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn skybox(&self) -> Option<&Skybox> {
        self.skybox.as_ref()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of records in the serialized document.
    pub fn record_count(&self) -> usize {
        self.skybox.is_some() as usize + 1 + self.primitives.len()
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Header<'a> {
    Skybox(&'a Skybox),
    Camera(&'a Camera),
}

impl Serialize for Scene {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.record_count()))?;
        if let Some(skybox) = &self.skybox {
            seq.serialize_element(&Header::Skybox(skybox))?;
        }
        seq.serialize_element(&Header::Camera(&self.camera))?;
        for primitive in &self.primitives {
            seq.serialize_element(primitive)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Surface;
    use crate::objects::sphere::Sphere;
    use crate::types::color::Color;
    use na::{Point3, Vector3};

    fn camera() -> Camera {
        Camera::new(Point3::origin(), Vector3::z(), 70.0)
    }

    #[test]
    fn camera_only() {
        let scene = Scene::new(camera());
        let json = serde_json::to_value(&scene).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "camera");
        assert_eq!(scene.record_count(), 1);
    }

    #[test]
    fn skybox_precedes_camera() {
        let mut scene = Scene::new(camera()).with_skybox(Skybox::new("skybox/night.jpg"));
        scene.add(Primitive::Sphere(Sphere::new(
            Point3::origin(),
            Vector3::x(),
            1.0,
            Surface::new(Color::gray(10)),
        )));

        let json = serde_json::to_value(&scene).unwrap();
        let kinds: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["skybox", "camera", "sphere"]);
        assert_eq!(json[0]["color"], "skybox/night.jpg");
        assert_eq!(scene.record_count(), 3);
    }
}
