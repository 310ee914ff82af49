use crate::types::color::Color;
use serde::Serialize;

/// What the renderer paints a surface with: a flat color, or an image
/// looked up relative to its texture root.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorTexture {
    Solid(Color),
    Image(String),
}

impl From<Color> for ColorTexture {
    fn from(color: Color) -> Self {
        ColorTexture::Solid(color)
    }
}

impl ColorTexture {
    pub fn image(path: impl Into<String>) -> Self {
        ColorTexture::Image(path.into())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Skybox {
    color: ColorTexture,
}

impl Skybox {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            color: ColorTexture::image(path),
        }
    }

    pub fn color(&self) -> &ColorTexture {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_forms() {
        let solid = serde_json::to_string(&ColorTexture::from(Color::gray(0))).unwrap();
        let image = serde_json::to_string(&ColorTexture::image("flashback/1.png")).unwrap();
        assert_eq!(solid, "[0,0,0]");
        assert_eq!(image, "\"flashback/1.png\"");
    }
}
