pub mod category_discoverer;

pub use category_discoverer::*;
