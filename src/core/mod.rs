pub mod columnar;
pub mod digits;
pub mod harness;
pub mod iterative;
pub mod reducer;

pub use crate::domain::model::{CaseOutcome, Scenario, SuiteReport};
pub use crate::domain::ports::PairwiseAdder;
pub use crate::utils::error::Result;
