extern crate nalgebra as na;

pub mod camera;
pub mod config;
pub mod error;
pub mod export;
pub mod materials;
pub mod objects;
pub mod scenes;
pub mod screenshots;
pub mod textures;
pub mod types;

pub use error::{Error, Result};
