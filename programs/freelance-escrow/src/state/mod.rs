pub mod config;
pub mod dispute;
pub mod enums;
pub mod job;

pub use config::*;
pub use dispute::*;
pub use enums::*;
pub use job::*;
