//! Signal evaluation: factor assembly, weighted scoring, and decisions.

pub mod decision;
pub mod engine;
pub mod factors;
pub mod scorer;

pub use decision::{decide, Confirmations, Decision};
pub use factors::compute_factors;
pub use scorer::total_score;
