pub mod config;
pub mod error;
pub mod logging;
pub mod registration;

pub use config::*;
pub use error::*;
pub use registration::*;
