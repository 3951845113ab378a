use std::future::Future;
use std::pin::Pin;

use tracing::{debug, warn};

use super::types::{CaseResult, GroupResult};
use crate::registry::{Group, HookKind, Node, Registry};

/// 执行注册树中的全部测试
///
/// 严格按注册顺序执行，一个钩子或用例运行结束后才开始下一个，
/// 不做并发也不做重排。永远返回结果树，自身没有失败路径。
pub async fn run_tests(registry: &Registry) -> GroupResult {
    run_group(registry.root()).await
}

/// 递归执行单个分组
///
/// 钩子抛错在这里被拦下：保留已得到的部分结果，
/// 追加一个名为 "Error in hooks" 的合成失败用例，
/// 分组其余工作不再执行。错误不会越过分组边界。
fn run_group(group: &Group) -> Pin<Box<dyn Future<Output = GroupResult> + Send + '_>> {
    Box::pin(async move {
        debug!("Running group '{}'", group.name());
        let mut result = GroupResult::new(group.name());
        if let Err(e) = run_group_inner(group, &mut result).await {
            warn!("Hook failed in group '{}': {}", group.name(), e);
            result.push_case(CaseResult::hook_failure(e.to_string()));
        }
        result
    })
}

async fn run_group_inner(group: &Group, result: &mut GroupResult) -> anyhow::Result<()> {
    for hook in group.hooks(HookKind::BeforeAll) {
        hook().await?;
    }

    for node in group.children() {
        match node {
            Node::Case(case) => {
                for hook in group.hooks(HookKind::BeforeEach) {
                    hook().await?;
                }

                // 用例体的错误只影响本用例
                match case.run().await {
                    Ok(()) => result.push_case(CaseResult::pass(case.name())),
                    Err(e) => result.push_case(CaseResult::fail(case.name(), e.to_string())),
                }

                for hook in group.hooks(HookKind::AfterEach) {
                    hook().await?;
                }
            }
            Node::Group(child) => {
                let nested = run_group(child).await;
                result.push_group(nested);
            }
        }
    }

    for hook in group.hooks(HookKind::AfterAll) {
        hook().await?;
    }

    Ok(())
}
