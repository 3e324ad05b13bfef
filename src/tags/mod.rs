mod reader;
mod tag_error;

pub use reader::*;
pub use tag_error::ReadError;
