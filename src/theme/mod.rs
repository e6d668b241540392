//! Theme for Tati Nails.

mod styles;

pub use styles::GLOBAL_STYLES;
