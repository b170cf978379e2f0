mod converter;

pub use converter::*;
