pub mod executor;
pub mod report;
pub mod types;

pub use executor::run_tests;
pub use report::{all_passed, flatten, summarize};
pub use types::{CaseResult, FlatCase, GroupResult, ResultNode, RunSummary};
