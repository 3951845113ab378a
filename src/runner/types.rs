use serde::{Deserialize, Serialize};

/// 单个用例的执行结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    /// 用例名称
    pub name: String,

    /// 是否通过，尚未执行的用例为 None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,

    /// 失败消息（如果失败）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CaseResult {
    /// 通过的用例
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: Some(true),
            error_message: None,
        }
    }

    /// 失败的用例
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: Some(false),
            error_message: Some(message.into()),
        }
    }

    /// 钩子失败时的合成结果，固定命名为 "Error in hooks"
    pub fn hook_failure(message: impl Into<String>) -> Self {
        Self::fail("Error in hooks", message)
    }

    /// 尚未执行的用例
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: None,
            error_message: None,
        }
    }
}

/// 结果树节点：嵌套分组或叶子用例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultNode {
    Group(GroupResult),
    Case(CaseResult),
}

/// 分组的执行结果
///
/// 结构与注册树一一对应，子结果按执行顺序排列。
/// 钩子失败产生的合成用例排在被中止分组已有结果之后。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResult {
    /// 分组名称
    pub name: String,

    /// 子结果
    pub children: Vec<ResultNode>,
}

impl GroupResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub(crate) fn push_case(&mut self, case: CaseResult) {
        self.children.push(ResultNode::Case(case));
    }

    pub(crate) fn push_group(&mut self, group: GroupResult) {
        self.children.push(ResultNode::Group(group));
    }
}

/// 展平后的叶子用例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatCase {
    /// 用例名称
    pub name: String,

    /// 是否通过，缺失的标记按失败处理
    pub passed: bool,
}

/// 测试摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_cases(cases: &[FlatCase]) -> Self {
        let passed = cases.iter().filter(|c| c.passed).count();
        Self {
            total: cases.len(),
            passed,
            failed: cases.len() - passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_result_constructors() {
        let pass = CaseResult::pass("ok");
        assert_eq!(pass.passed, Some(true));
        assert_eq!(pass.error_message, None);

        let fail = CaseResult::fail("bad", "boom");
        assert_eq!(fail.passed, Some(false));
        assert_eq!(fail.error_message.as_deref(), Some("boom"));

        let hook = CaseResult::hook_failure("setup exploded");
        assert_eq!(hook.name, "Error in hooks");
        assert_eq!(hook.passed, Some(false));

        let pending = CaseResult::pending("later");
        assert_eq!(pending.passed, None);
    }

    #[test]
    fn test_result_tree_serializes_without_empty_fields() {
        let mut group = GroupResult::new("root");
        group.push_case(CaseResult::pass("a"));
        group.push_case(CaseResult::fail("b", "oops"));

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "root",
                "children": [
                    {"Case": {"name": "a", "passed": true}},
                    {"Case": {"name": "b", "passed": false, "error_message": "oops"}},
                ]
            })
        );
    }

    #[test]
    fn test_summary_counts() {
        let cases = vec![
            FlatCase { name: "a".to_string(), passed: true },
            FlatCase { name: "b".to_string(), passed: false },
            FlatCase { name: "c".to_string(), passed: true },
        ];
        let summary = RunSummary::from_cases(&cases);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
    }
}
