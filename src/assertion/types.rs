use std::fmt;
use std::future::Future;
use std::pin::Pin;

pub use serde_json::Value;

/// 断言错误类型
///
/// 匹配器失败时返回携带完整消息的错误，消息中嵌入了
/// 主体值与期望值的 JSON 序列化表示。结果树中的失败详情
/// 全部来自这条消息。
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssertError {
    /// 匹配失败（消息在调用处格式化）
    #[error("{0}")]
    Mismatch(String),

    /// to_contain 的主体不是数组或字符串
    #[error("Expected {subject} to be an array or string")]
    NotContainable { subject: String },

    /// resolves 断言在等待主体时被拒绝
    #[error("{message}")]
    Rejected { message: String },

    /// rejects 断言：promise 实际上成功了
    #[error("Expected promise to throw {expected}, but it resolved")]
    DidNotThrow { expected: String },

    /// rejects 断言：拒绝消息与期望不一致
    #[error("Expected promise to throw {expected}, but it threw {actual}")]
    WrongRejection { expected: String, actual: String },
}

/// 断言结果：通过为 Ok(())，失败携带消息
pub type AssertResult = std::result::Result<(), AssertError>;

type PromiseFuture = Pin<Box<dyn Future<Output = anyhow::Result<Value>> + Send>>;

/// 可等待的断言主体
///
/// 封装一个最终产生值、或以错误拒绝的 future。
/// 通过 `resolves()` / `rejects()` 匹配器消费。
pub struct Promise {
    fut: PromiseFuture,
}

impl Promise {
    /// 从任意 future 构造
    pub fn new<F, T>(fut: F) -> Self
    where
        F: Future<Output = anyhow::Result<T>> + Send + 'static,
        T: Into<Value>,
    {
        Self {
            fut: Box::pin(async move { fut.await.map(Into::into) }),
        }
    }

    /// 立即以给定值成功
    pub fn resolve(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(async move { Ok(value) })
    }

    /// 立即以给定消息拒绝
    pub fn reject(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            fut: Box::pin(async move { Err(anyhow::anyhow!(message)) }),
        }
    }

    /// 等待主体敲定
    pub(crate) async fn settle(self) -> anyhow::Result<Value> {
        self.fut.await
    }
}

impl fmt::Debug for Promise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Promise")
    }
}

/// 断言主体：普通值或 Promise
#[derive(Debug)]
pub enum Subject {
    Value(Value),
    Promise(Promise),
}

impl Subject {
    /// 失败消息中使用的序列化表示
    ///
    /// 普通值序列化为 JSON；promise 没有可序列化的值，固定为 `<promise>`。
    pub(crate) fn describe(&self) -> String {
        match self {
            Subject::Value(value) => value.to_string(),
            Subject::Promise(_) => "<promise>".to_string(),
        }
    }
}

/// 可作为 expect 主体的类型
pub trait IntoSubject {
    fn into_subject(self) -> Subject;
}

impl IntoSubject for Subject {
    fn into_subject(self) -> Subject {
        self
    }
}

impl IntoSubject for Promise {
    fn into_subject(self) -> Subject {
        Subject::Promise(self)
    }
}

impl IntoSubject for Value {
    fn into_subject(self) -> Subject {
        Subject::Value(self)
    }
}

/// None 映射为 null
impl<T: Into<Value>> IntoSubject for Option<T> {
    fn into_subject(self) -> Subject {
        Subject::Value(self.map_or(Value::Null, Into::into))
    }
}

impl<T: Into<Value>> IntoSubject for Vec<T> {
    fn into_subject(self) -> Subject {
        Subject::Value(Value::Array(self.into_iter().map(Into::into).collect()))
    }
}

macro_rules! impl_into_subject {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoSubject for $ty {
            fn into_subject(self) -> Subject {
                Subject::Value(Value::from(self))
            }
        }
    )*};
}

impl_into_subject!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, &str);
