pub mod cliopt;
pub mod collector;
pub mod convert;
pub mod error;
pub mod model;
pub mod output;
pub mod registry;
