//! Dataset validation and transformation
//!
//! Everything here runs once, before the search loop begins; the dataset
//! is shared read-only across all search iterations afterwards.

pub mod encoder;
pub mod scaler;
pub mod validate;

pub use encoder::DummyEncoder;
pub use scaler::Scaler;
pub use validate::resolve_training_columns;
