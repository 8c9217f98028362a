//! Ranking handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult,
};
