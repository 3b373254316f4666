pub mod config;
pub mod framework;
pub mod step;

pub use config::*;
pub use framework::*;
pub use step::*;
