use serde_json::Value;

/// 严格相等：类型一致且内容相等
///
/// 整数与浮点数视为不同表示（5 不严格等于 5.0），跨类型组合恒不相等。
pub(crate) fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// 宽松相等：严格相等，或双方都能转成数字且数值相等
///
/// 数字字符串参与数值比较（5 等于 "5"），布尔转换为 1/0。
/// null 只与 null 宽松相等。
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    if a == b {
        return true;
    }
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// 数值强制转换
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// 真值判断
///
/// null、false、0、空字符串为假；数组和对象恒为真（包括空的）。
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 深度结构相等
///
/// 对象：键集合一致且各键的值递归相等；
/// 数组：长度一致且逐项递归相等；
/// 其余按基本值相等处理，类型不同的组合不相等。
pub(crate) fn deep_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, va)| b.get(k).is_some_and(|vb| deep_eq(va, vb)))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_eq(x, y))
        }
        _ => a == b,
    }
}

/// 包含判断
///
/// 数组按严格相等做成员检查；字符串做子串检查，
/// 非字符串的期望值先序列化为字符串。
/// 主体既不是数组也不是字符串时返回 None。
pub(crate) fn contains(subject: &Value, expected: &Value) -> Option<bool> {
    match subject {
        Value::Array(items) => Some(items.iter().any(|item| item == expected)),
        Value::String(s) => {
            let needle = match expected {
                Value::String(e) => e.clone(),
                other => other.to_string(),
            };
            Some(s.contains(&needle))
        }
        _ => None,
    }
}
