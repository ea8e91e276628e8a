//! Fusion: combining two same-class units into a stronger one.
//!
//! - `RecipeBook`: authored pair and self-upgrade recipes
//! - `Category`: thematic grouping that biases procedural results
//! - `FusionResolver`: the resolution algorithm, with memoized results
//! - `alchemy_result`: what a full set of alchemy slots distills into

pub mod alchemy;
pub mod category;
pub mod recipes;
pub mod resolver;

pub use alchemy::alchemy_result;
pub use category::Category;
pub use recipes::RecipeBook;
pub use resolver::FusionResolver;
