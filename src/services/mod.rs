// Service module exports

pub mod palette;
pub mod quotes;
pub mod random;
pub mod settings;
pub mod share;
pub mod view_state;
