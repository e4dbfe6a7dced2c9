pub mod engine;
pub mod registry;
pub mod traits;
pub mod types;

pub use engine::*;
pub use registry::*;
pub use traits::*;
pub use types::*;
