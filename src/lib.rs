mod classifier;
mod db;
mod error;
mod label;
mod registry;
mod types;

pub use classifier::BrowserClassifier;
pub use error::{Error, Result};
pub use registry::{BrowserProfile, BrowserRegistry};
pub use types::*;
