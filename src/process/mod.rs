#[allow(clippy::module_inception)]
mod process;

pub use process::*;
