mod character_splitter;
mod error;
mod options;
mod text_splitter;

pub use character_splitter::*;
pub use error::*;
pub use options::*;
pub use text_splitter::*;
