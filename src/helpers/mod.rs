pub mod bits;
pub mod wheel;
