//! Page components for Tati Nails.

mod landing;

pub use landing::Landing;
