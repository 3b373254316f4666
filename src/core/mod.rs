pub mod assemble;
pub mod classifier;
pub mod format;
pub mod naming;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use assemble::*;
pub use classifier::*;
pub use format::*;
pub use naming::*;
pub use parser::*;
pub use pipeline::*;
pub use render::*;
