//! Statement layout: page geometry, pagination, row text and rendering

pub mod config;
pub mod paginate;
pub mod render;
pub mod rows;

pub use config::*;
pub use paginate::*;
pub use render::*;
pub use rows::*;
