pub mod assertion;
pub mod logger;
pub mod registry;
pub mod runner;

// Re-export commonly used types
pub use assertion::{expect, AssertError, AssertResult, Promise, Value};
pub use registry::Registry;
pub use runner::{
    all_passed, flatten, run_tests, summarize, CaseResult, FlatCase, GroupResult, ResultNode,
    RunSummary,
};
pub use serde_json::json;
