use super::Object;
use crate::materials::Surface;
use na::{Point3, Vector3};
use serde::Serialize;

/// Flat quad spanned by `dir_w` (scaled to `width`) and `dir_l` (scaled to
/// `length`) from the corner `pos`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rectangle {
    pub pos: Point3<f32>,
    pub dir_w: Vector3<f32>,
    pub dir_l: Vector3<f32>,
    pub length: f32,
    pub width: f32,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Rectangle {
    pub fn new(
        pos: Point3<f32>,
        dir_w: Vector3<f32>,
        dir_l: Vector3<f32>,
        length: f32,
        width: f32,
        surface: Surface,
    ) -> Self {
        Self {
            pos,
            dir_w,
            dir_l,
            length,
            width,
            surface,
        }
    }
}

impl Object for Rectangle {
    fn pos(&self) -> Point3<f32> {
        self.pos
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
