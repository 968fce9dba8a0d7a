pub mod engine;
pub mod error;
pub mod synonyms;
pub mod types;

pub use engine::RecommendEngine;
pub use error::{RecommendError, RecommendErrorKind};
pub use synonyms::SynonymTable;
pub use types::{
    DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, RecommendContext, RecommendWeights, Recommendation,
    clamp_limit,
};
