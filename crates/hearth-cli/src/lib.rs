pub mod cli;
pub mod gallery;
pub mod logging;

pub use gallery::gallery;
