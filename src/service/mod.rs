//! OpeningService: validated CRUD over an `OpeningStore`.

mod openings;
mod validation;
pub use openings::{ListPolicy, OpeningService};
pub use validation::OpeningValidator;
