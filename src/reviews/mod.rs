//! The one dynamic feature of the site: a single-attempt, grounded fetch of
//! real patient reviews, with silent fallback to the static mock catalog.

pub mod board;
pub mod extract;
pub mod mock;
pub mod model;
pub mod service;

pub use board::{BoardState, ReviewBoard, ReviewPhase};
pub use mock::mock_reviews;
pub use model::{AiReviewAnalysis, KeyTheme, Review, ReviewSource};
pub use service::ReviewService;
