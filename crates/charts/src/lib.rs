pub mod color;
pub mod config;
pub mod labels;
pub mod presets;
pub mod series;
pub mod tooltip;

pub use color::*;
pub use config::*;
pub use labels::*;
pub use presets::*;
pub use series::*;
