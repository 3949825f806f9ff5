// Module exports for models

pub mod color;
pub mod quote;
pub mod settings;
