use super::Object;
use crate::materials::Surface;
use na::{Point3, Vector3};
use serde::Serialize;

/// Finite cylinder along `dir`, based at `pos`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cylinder {
    pub pos: Point3<f32>,
    pub dir: Vector3<f32>,
    pub radius: f32,
    pub height: f32,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Cylinder {
    pub fn new(
        pos: Point3<f32>,
        dir: Vector3<f32>,
        radius: f32,
        height: f32,
        surface: Surface,
    ) -> Self {
        Self {
            pos,
            dir,
            radius,
            height,
            surface,
        }
    }
}

impl Object for Cylinder {
    fn pos(&self) -> Point3<f32> {
        self.pos
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
