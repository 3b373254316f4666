pub mod config;
pub mod generate;
pub mod init;
pub mod preview;

pub use config::*;
pub use generate::*;
pub use init::*;
pub use preview::*;
