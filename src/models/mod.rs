// Module exports for models

pub mod granularity;
pub mod selection;
pub mod settings;
