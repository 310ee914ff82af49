use serde::Serialize;

/// 8-bit RGB, written as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color([u8; 3]);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn gray(v: u8) -> Self {
        Self([v, v, v])
    }
}

pub trait ColorOps {
    fn get_r(&self) -> u8;
    fn get_g(&self) -> u8;
    fn get_b(&self) -> u8;
}

impl ColorOps for Color {
    fn get_r(&self) -> u8 {
        self.0[0]
    }

    fn get_g(&self) -> u8 {
        self.0[1]
    }

    fn get_b(&self) -> u8 {
        self.0[2]
    }
}
