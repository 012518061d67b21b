pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use self::core::{
    columnar::ColumnarAdder, harness::SuiteRunner, iterative::IterativeAdder, reducer::add,
};
pub use config::CliConfig;
pub use domain::model::{CaseOutcome, Scenario, SuiteReport};
pub use domain::ports::PairwiseAdder;
pub use utils::error::{Result, SumError};
