// Application layer: the budget book that owns categories by name, and
// the reports rendered over them.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
