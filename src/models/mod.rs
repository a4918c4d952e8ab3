// Module exports for models

pub mod selection;
pub mod settings;
