pub mod png;
pub mod text;
