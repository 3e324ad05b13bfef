pub mod configuration;
pub mod foundation;
pub mod logging;
pub mod output;
pub mod post_process;
pub mod process;
pub mod startup;
pub mod tags;

pub use configuration::*;
pub use foundation::catalog::*;
pub use process::process_root;
pub use tags::{LoftyTagReader, ReadError, TagReader, TrackTags};
