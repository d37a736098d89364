pub mod bar;
pub mod color;
