// Shared helpers for colors and weekday arithmetic

pub mod color;
pub mod date;
