mod evaluator;
mod matchers;
/// 断言模块 - 提供值与 promise 的匹配器
mod types;

pub use matchers::{expect, Expectation, Not, Rejects, Resolves};
pub use types::{AssertError, AssertResult, IntoSubject, Promise, Subject, Value};
