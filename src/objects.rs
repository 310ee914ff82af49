pub mod cone;
pub mod cylinder;
pub mod plane;
pub mod rectangle;
pub mod sphere;

use crate::materials::Surface;
use na::Point3;
use serde::Serialize;

use cone::Cone;
use cylinder::Cylinder;
use plane::Plane;
use rectangle::Rectangle;
use sphere::Sphere;

pub trait Object {
    fn pos(&self) -> Point3<f32>;
    fn surface(&self) -> &Surface;
}

/// A renderable record. Serializes with a `"type"` discriminator so the
/// renderer can dispatch on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Cone(Cone),
    Plane(Plane),
    Rectangle(Rectangle),
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cylinder(_) => "cylinder",
            Primitive::Cone(_) => "cone",
            Primitive::Plane(_) => "plane",
            Primitive::Rectangle(_) => "rectangle",
        }
    }

    fn as_object(&self) -> &dyn Object {
        match self {
            Primitive::Sphere(s) => s,
            Primitive::Cylinder(c) => c,
            Primitive::Cone(c) => c,
            Primitive::Plane(p) => p,
            Primitive::Rectangle(r) => r,
        }
    }
}

impl Object for Primitive {
    fn pos(&self) -> Point3<f32> {
        self.as_object().pos()
    }

    fn surface(&self) -> &Surface {
        self.as_object().surface()
    }
}
