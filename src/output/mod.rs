mod writer;

pub use writer::{write_compact, write_full};
