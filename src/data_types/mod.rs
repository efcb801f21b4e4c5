pub mod color;
pub mod datasource;
pub mod position;
pub mod selection;

pub use color::*;
pub use datasource::*;
pub use position::*;
pub use selection::*;
