// Resume screening engine
// Implements: skill matching, experience/education heuristics, aggregation, ranking.
// Text normalization lives in crate::nlp; document decoding goes through ingest only.

pub mod aggregate;
pub mod education;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod ingest;
pub mod skill_match;
