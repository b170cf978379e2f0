mod labels;
mod name;
mod sample;
mod types;

pub use labels::*;
pub use name::*;
pub use sample::*;
pub use types::*;
