use serde_json::Value;

use super::evaluator;
use super::types::{AssertError, AssertResult, IntoSubject, Subject};

/// 构建断言
pub fn expect(subject: impl IntoSubject) -> Expectation {
    Expectation {
        subject: subject.into_subject(),
    }
}

/// 断言包装器
///
/// 同步匹配器借用主体，可在同一个包装器上多次调用；
/// `resolves()` / `rejects()` 需要等待主体，因此取得所有权。
#[derive(Debug)]
pub struct Expectation {
    subject: Subject,
}

impl Expectation {
    /// 严格相等：类型与内容都一致
    pub fn to_be(&self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if matches!(&self.subject, Subject::Value(v) if evaluator::strict_eq(v, &expected)) {
            Ok(())
        } else {
            Err(self.mismatch(format!("to be {expected}")))
        }
    }

    /// 宽松相等：数字与数字字符串互等
    pub fn to_equal(&self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if matches!(&self.subject, Subject::Value(v) if evaluator::loose_eq(v, &expected)) {
            Ok(())
        } else {
            Err(self.mismatch(format!("to equal {expected}")))
        }
    }

    /// 非空断言：仅 null 失败
    pub fn to_exist(&self) -> AssertResult {
        match &self.subject {
            Subject::Value(Value::Null) => Err(self.mismatch("to exist".to_string())),
            _ => Ok(()),
        }
    }

    /// 真值断言
    pub fn to_be_truthy(&self) -> AssertResult {
        match &self.subject {
            Subject::Value(v) if !evaluator::is_truthy(v) => {
                Err(self.mismatch("to be truthy".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// 假值断言（promise 视为真值）
    pub fn to_be_falsy(&self) -> AssertResult {
        match &self.subject {
            Subject::Value(v) if !evaluator::is_truthy(v) => Ok(()),
            _ => Err(self.mismatch("to be falsy".to_string())),
        }
    }

    /// 主体必须是 Promise
    pub fn to_be_promise(&self) -> AssertResult {
        match &self.subject {
            Subject::Promise(_) => Ok(()),
            Subject::Value(_) => Err(self.mismatch("to be a Promise".to_string())),
        }
    }

    /// 包含断言：数组按成员严格相等，字符串按子串
    pub fn to_contain(&self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        let Subject::Value(v) = &self.subject else {
            return Err(AssertError::NotContainable {
                subject: self.subject.describe(),
            });
        };
        match evaluator::contains(v, &expected) {
            Some(true) => Ok(()),
            Some(false) => Err(self.mismatch(format!("to contain {expected}"))),
            None => Err(AssertError::NotContainable {
                subject: self.subject.describe(),
            }),
        }
    }

    /// 深度结构相等
    pub fn to_deep_equal(&self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if matches!(&self.subject, Subject::Value(v) if evaluator::deep_eq(v, &expected)) {
            Ok(())
        } else {
            Err(self.mismatch(format!("to deep equal {expected}")))
        }
    }

    /// 取反形式，仅覆盖 to_be / to_equal / to_be_promise
    pub fn not(&self) -> Not<'_> {
        Not { inner: self }
    }

    /// 等待主体后对解析值断言
    pub fn resolves(self) -> Resolves {
        Resolves {
            subject: self.subject,
        }
    }

    /// 等待主体并断言其拒绝
    pub fn rejects(self) -> Rejects {
        Rejects {
            subject: self.subject,
        }
    }

    fn mismatch(&self, clause: String) -> AssertError {
        AssertError::Mismatch(format!("Expected {} {}", self.subject.describe(), clause))
    }
}

/// 取反断言
#[derive(Debug)]
pub struct Not<'a> {
    inner: &'a Expectation,
}

impl Not<'_> {
    /// 严格不相等
    pub fn to_be(&self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if matches!(&self.inner.subject, Subject::Value(v) if evaluator::strict_eq(v, &expected)) {
            Err(self.inner.mismatch(format!("not to be {expected}")))
        } else {
            Ok(())
        }
    }

    /// 宽松不相等
    pub fn to_equal(&self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if matches!(&self.inner.subject, Subject::Value(v) if evaluator::loose_eq(v, &expected)) {
            Err(self.inner.mismatch(format!("not to equal {expected}")))
        } else {
            Ok(())
        }
    }

    /// 主体不允许是 Promise
    pub fn to_be_promise(&self) -> AssertResult {
        match &self.inner.subject {
            Subject::Promise(_) => Err(self.inner.mismatch("not to be a Promise".to_string())),
            Subject::Value(_) => Ok(()),
        }
    }
}

/// 解析值断言
///
/// 普通值解析为自身；promise 被拒绝时直接以拒绝消息失败。
#[derive(Debug)]
pub struct Resolves {
    subject: Subject,
}

impl Resolves {
    /// 解析值严格相等
    pub async fn to_be(self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        let resolved = self.settle().await?;
        if evaluator::strict_eq(&resolved, &expected) {
            Ok(())
        } else {
            Err(AssertError::Mismatch(format!(
                "Expected resolved value {resolved} to be {expected}"
            )))
        }
    }

    /// 解析值宽松相等
    pub async fn to_equal(self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        let resolved = self.settle().await?;
        if evaluator::loose_eq(&resolved, &expected) {
            Ok(())
        } else {
            Err(AssertError::Mismatch(format!(
                "Expected resolved value {resolved} to equal {expected}"
            )))
        }
    }

    async fn settle(self) -> Result<Value, AssertError> {
        match self.subject {
            Subject::Value(value) => Ok(value),
            Subject::Promise(promise) => {
                promise
                    .settle()
                    .await
                    .map_err(|e| AssertError::Rejected {
                        message: e.to_string(),
                    })
            }
        }
    }
}

/// 拒绝断言
#[derive(Debug)]
pub struct Rejects {
    subject: Subject,
}

impl Rejects {
    /// 拒绝消息必须与期望完全一致
    pub async fn to_throw(self, expected: impl Into<String>) -> AssertResult {
        let expected = expected.into();
        let Subject::Promise(promise) = self.subject else {
            // 普通值等待后直接解析，等价于成功的 promise
            return Err(AssertError::DidNotThrow {
                expected: quote(&expected),
            });
        };
        match promise.settle().await {
            Ok(_) => Err(AssertError::DidNotThrow {
                expected: quote(&expected),
            }),
            Err(e) => {
                let actual = e.to_string();
                if actual == expected {
                    Ok(())
                } else {
                    Err(AssertError::WrongRejection {
                        expected: quote(&expected),
                        actual: quote(&actual),
                    })
                }
            }
        }
    }
}

/// 消息中的 JSON 字符串形式（带引号与转义）
fn quote(s: &str) -> String {
    Value::from(s).to_string()
}
