//! Instance ingestion: the text file format and random generation.

mod generate;
mod instance;

pub use generate::{random_instance, random_instance_with, GeneratorConfig};
pub use instance::Instance;
