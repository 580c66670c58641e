pub mod export;

pub use export::{BookSnapshot, Exporter};
