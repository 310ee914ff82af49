use super::Object;
use crate::materials::Surface;
use na::{Point3, Vector3};
use serde::Serialize;

/// Infinite plane through `pos`; `dir` is its normal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plane {
    pub pos: Point3<f32>,
    pub dir: Vector3<f32>,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Plane {
    pub fn new(pos: Point3<f32>, dir: Vector3<f32>, surface: Surface) -> Self {
        Self { pos, dir, surface }
    }
}

impl Object for Plane {
    fn pos(&self) -> Point3<f32> {
        self.pos
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
