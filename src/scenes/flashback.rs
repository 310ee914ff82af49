use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::ImageFormat;
use na::{Point3, Vector3};
use serde::Deserialize;

use super::{Scene, SceneBuilder};
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::materials::Surface;
use crate::objects::{plane::Plane, rectangle::Rectangle, Primitive};
use crate::textures::Skybox;
use crate::types::color::Color;

/// How the screenshots are laid out along +z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashbackLayout {
    /// Lit room of four planes, each picture framed and topped by a bar,
    /// one every 20 units.
    #[default]
    Gallery,
    /// Night skybox, bare pictures one every 10 units.
    Corridor,
}

impl FromStr for FlashbackLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gallery" => Ok(FlashbackLayout::Gallery),
            "corridor" => Ok(FlashbackLayout::Corridor),
            _ => Err(Error::InvalidConfig(format!(
                "unknown flashback layout '{}' (expected 'gallery' or 'corridor')",
                s
            ))),
        }
    }
}

impl fmt::Display for FlashbackLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashbackLayout::Gallery => write!(f, "gallery"),
            FlashbackLayout::Corridor => write!(f, "corridor"),
        }
    }
}

/// Counts the PNG files in `dir`; pictures are referenced as `<n>.png`.
pub fn count_images(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut count = 0;
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && matches!(ImageFormat::from_path(&path), Ok(ImageFormat::Png)) {
            count += 1;
        } else {
            log::debug!("Skipping '{}'", path.display());
        }
    }

    Ok(count)
}

fn texture_path(index: usize) -> String {
    format!("flashback/{}.png", index + 1)
}

pub struct FlashbackScene {
    layout: FlashbackLayout,
    image_count: usize,
}

impl FlashbackScene {
    pub fn new(layout: FlashbackLayout, image_count: usize) -> Self {
        Self {
            layout,
            image_count,
        }
    }

    fn add_room(scene: &mut Scene) {
        let wall = Color::gray(200);
        let floor = Color::gray(255);

        let planes = [
            (Point3::new(-5.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), Surface::new(wall)),
            (
                Point3::new(5.0, 0.0, 0.0),
                Vector3::new(-1.0, 0.0, 0.0),
                Surface::new(wall).with_emissive(1.0),
            ),
            (Point3::new(0.0, -5.0, 0.0), Vector3::new(0.0, 1.0, 0.0), Surface::new(floor)),
            (Point3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0), Surface::new(floor)),
        ];

        for (pos, dir, surface) in planes {
            scene.add(Primitive::Plane(Plane::new(pos, dir, surface.with_roughness(1.0))));
        }
    }

    fn add_framed_picture(scene: &mut Scene, index: usize) {
        let z = index as f32 * 20.0 + 20.0;
        let dir_w = Vector3::new(0.2, 0.0, -1.0);
        let dir_l = Vector3::new(0.0, 1.0, 0.0);
        let black = Color::gray(0);

        let picture = Rectangle::new(
            Point3::new(4.0, 0.0, z),
            dir_w,
            dir_l,
            4.5,
            8.0,
            Surface::textured(texture_path(index)),
        );
        let frame = Rectangle::new(
            Point3::new(4.002, 0.0, z + 0.01),
            dir_w,
            dir_l,
            4.7,
            8.2,
            Surface::new(black),
        );
        let bar = Rectangle::new(
            Point3::new(4.01, 3.0, z),
            dir_w,
            dir_l,
            4.0,
            0.25,
            Surface::new(black),
        );

        scene.add(Primitive::Rectangle(picture));
        scene.add(Primitive::Rectangle(frame));
        scene.add(Primitive::Rectangle(bar));
    }

    fn add_bare_picture(scene: &mut Scene, index: usize) {
        let picture = Rectangle::new(
            Point3::new(4.0, 0.0, index as f32 * 10.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            4.5,
            8.0,
            Surface::textured(texture_path(index)),
        );
        scene.add(Primitive::Rectangle(picture));
    }
}

impl SceneBuilder for FlashbackScene {
    fn build_camera(&self) -> Camera {
        match self.layout {
            FlashbackLayout::Gallery => Camera::new(Point3::origin(), Vector3::z(), 70.0),
            FlashbackLayout::Corridor => {
                Camera::new(Point3::new(-3.5, 0.0, 0.0), Vector3::x(), 70.0)
            }
        }
    }

    fn build(&mut self) -> Scene {
        let camera = self.build_camera();

        match self.layout {
            FlashbackLayout::Gallery => {
                let mut scene = Scene::new(camera);
                Self::add_room(&mut scene);
                for i in 0..self.image_count {
                    Self::add_framed_picture(&mut scene, i);
                }
                scene
            }
            FlashbackLayout::Corridor => {
                let mut scene =
                    Scene::new(camera).with_skybox(Skybox::new("skybox/skybox_night.jpg"));
                for i in 0..self.image_count {
                    Self::add_bare_picture(&mut scene, i);
                }
                scene
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Object;
    use crate::textures::ColorTexture;

    #[test]
    fn parses_layout_names() {
        assert_eq!("gallery".parse::<FlashbackLayout>().unwrap(), FlashbackLayout::Gallery);
        assert_eq!("corridor".parse::<FlashbackLayout>().unwrap(), FlashbackLayout::Corridor);
        assert!("hallway".parse::<FlashbackLayout>().is_err());
        assert_eq!(FlashbackLayout::Corridor.to_string(), "corridor");
    }

    #[test]
    fn gallery_record_count() {
        let scene = FlashbackScene::new(FlashbackLayout::Gallery, 3).build();
        assert_eq!(scene.record_count(), 1 + 4 + 3 * 3);
        assert!(scene.skybox().is_none());
    }

    #[test]
    fn gallery_pictures_advance_along_z() {
        let scene = FlashbackScene::new(FlashbackLayout::Gallery, 2).build();
        let pictures: Vec<&Primitive> = scene
            .primitives()
            .iter()
            .filter(|p| matches!(p.surface().color(), ColorTexture::Image(_)))
            .collect();

        assert_eq!(pictures.len(), 2);
        assert_eq!(pictures[0].pos().z, 20.0);
        assert_eq!(pictures[1].pos().z, 40.0);
        assert_eq!(
            pictures[1].surface().color(),
            &ColorTexture::image("flashback/2.png")
        );
    }

    #[test]
    fn only_one_room_wall_emits() {
        let scene = FlashbackScene::new(FlashbackLayout::Gallery, 0).build();
        let emissive: Vec<Option<f32>> =
            scene.primitives().iter().map(|p| p.surface().emissive()).collect();
        assert_eq!(emissive, [None, Some(1.0), None, None]);
    }

    #[test]
    fn corridor_layout() {
        let scene = FlashbackScene::new(FlashbackLayout::Corridor, 4).build();
        assert_eq!(scene.record_count(), 2 + 4);
        assert_eq!(
            scene.skybox().map(Skybox::color),
            Some(&ColorTexture::image("skybox/skybox_night.jpg"))
        );

        let zs: Vec<f32> = scene.primitives().iter().map(|p| p.pos().z).collect();
        assert_eq!(zs, [0.0, 10.0, 20.0, 30.0]);
        assert_eq!(scene.camera().pos(), Point3::new(-3.5, 0.0, 0.0));
    }
}
