//! Feature-subset enumeration and the hyperparameter search loop

pub mod combinations;
pub mod search;

pub use combinations::generate_combinations;
pub use search::{
    KnnReport, LinearReport, ModelScore, OptimisedScore, SearchEngine, SearchResults,
    FEATURE_NAME_SEPARATOR,
};
