use na::{Point3, Vector3};
use serde::Serialize;

/// Viewpoint record. `fov` is in degrees; the renderer normalizes `dir`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Camera {
    pos: Point3<f32>,
    dir: Vector3<f32>,
    fov: f32,
}

impl Camera {
    pub fn new(pos: Point3<f32>, dir: Vector3<f32>, fov: f32) -> Self {
        Self { pos, dir, fov }
    }

    pub fn pos(&self) -> Point3<f32> {
        self.pos
    }

    pub fn dir(&self) -> Vector3<f32> {
        self.dir
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_vectors_as_arrays() {
        let camera = Camera::new(Point3::new(0.0, 0.0, -10.0), Vector3::z(), 60.0);
        let json = serde_json::to_value(camera).unwrap();
        assert_eq!(json, serde_json::json!({"pos": [0.0, 0.0, -10.0], "dir": [0.0, 0.0, 1.0], "fov": 60.0}));
    }
}
