pub mod background;
pub mod padding;
pub mod slice;
