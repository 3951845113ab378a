use super::types::{FlatCase, GroupResult, ResultNode, RunSummary};

/// 整棵结果树是否没有失败用例
///
/// 只有 passed 为 false 的用例算失败；标记缺失的用例按通过处理。
pub fn all_passed(result: &GroupResult) -> bool {
    result.children.iter().all(|node| match node {
        ResultNode::Case(case) => case.passed != Some(false),
        ResultNode::Group(group) => all_passed(group),
    })
}

/// 深度优先展平叶子用例
///
/// 分组本身不产生条目。标记缺失的用例展平为失败，
/// 与 all_passed 的宽松口径刻意不同。
pub fn flatten(result: &GroupResult) -> Vec<FlatCase> {
    let mut cases = Vec::new();
    collect(result, &mut cases);
    cases
}

fn collect(result: &GroupResult, cases: &mut Vec<FlatCase>) {
    for node in &result.children {
        match node {
            ResultNode::Case(case) => cases.push(FlatCase {
                name: case.name.clone(),
                passed: case.passed.unwrap_or(false),
            }),
            ResultNode::Group(group) => collect(group, cases),
        }
    }
}

/// 汇总整棵结果树的通过与失败数量
pub fn summarize(result: &GroupResult) -> RunSummary {
    RunSummary::from_cases(&flatten(result))
}
