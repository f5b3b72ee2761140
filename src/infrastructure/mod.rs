pub mod background;
pub mod wire;
