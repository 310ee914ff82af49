pub mod color;
pub mod sampler;
