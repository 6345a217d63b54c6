mod errors;
mod json_loader;

pub use errors::LoadError;
pub use json_loader::load_dataset;
