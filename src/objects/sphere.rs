use super::Object;
use crate::materials::Surface;
use na::{Point3, Vector3};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sphere {
    pub pos: Point3<f32>,
    pub dir: Vector3<f32>,
    pub radius: f32,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Sphere {
    pub fn new(pos: Point3<f32>, dir: Vector3<f32>, radius: f32, surface: Surface) -> Self {
        Self {
            pos,
            dir,
            radius,
            surface,
        }
    }
}

impl Object for Sphere {
    fn pos(&self) -> Point3<f32> {
        self.pos
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
