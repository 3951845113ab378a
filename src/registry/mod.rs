mod builder;
/// 注册模块 - 提供 describe/it 与生命周期钩子的注册树
mod types;

pub use builder::Registry;
pub use types::{BodyFuture, Case, Group, HookFn, HookKind, Node, TestFn};
