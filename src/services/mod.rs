// Service module exports

pub mod locale;
pub mod settings;
