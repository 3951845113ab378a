use ruspec::{expect, json, AssertError, Promise};

/// 算术断言的基本通过与失败
#[test]
fn test_arithmetic_expectations() {
    assert!(expect(1 + 1).to_be(2).is_ok());

    // 失败消息同时给出实际值与期望值
    let message = expect(1 + 1).to_be(3).unwrap_err().to_string();
    assert_eq!(message, "Expected 2 to be 3");
    assert!(message.contains('2'));
    assert!(message.contains('3'));
}

/// 严格相等与宽松相等的分界
#[test]
fn test_strict_vs_loose_equality() {
    assert!(expect(5).to_be(5).is_ok());
    assert!(expect(5).to_be("5").is_err());
    assert!(expect(5).to_be(5.0).is_err());

    assert!(expect(5).to_equal("5").is_ok());
    assert!(expect(true).to_equal(1).is_ok());
    assert!(expect(json!(null)).to_equal(0).is_err());
}

/// 任意主体对 to_be 与其取反恰好通过其一
#[test]
fn test_to_be_exclusivity() {
    let values = [
        json!(null),
        json!(0),
        json!(1),
        json!("1"),
        json!(""),
        json!([1]),
        json!({"a": 1}),
    ];
    for value in &values {
        for expected in &values {
            let e = expect(value.clone());
            let direct = e.to_be(expected.clone()).is_ok();
            let negated = e.not().to_be(expected.clone()).is_ok();
            assert_ne!(direct, negated, "value {value} vs expectation {expected}");

            let loose = e.to_equal(expected.clone()).is_ok();
            let loose_negated = e.not().to_equal(expected.clone()).is_ok();
            assert_ne!(loose, loose_negated, "value {value} vs expectation {expected}");
        }
    }
}

/// 同一无环结构与自身深度相等
#[test]
fn test_deep_equal_reflexivity() {
    let subjects = [
        json!(null),
        json!(5),
        json!("text"),
        json!([1, [2, 3], {"k": "v"}]),
        json!({"user": {"id": 7, "tags": ["a", "b"]}, "active": true}),
    ];
    for subject in subjects {
        assert!(
            expect(subject.clone()).to_deep_equal(subject.clone()).is_ok(),
            "subject {subject}"
        );
    }
}

/// 深度相等区分结构差异
#[test]
fn test_deep_equal_detects_differences() {
    let base = json!({"id": 1, "tags": ["a", "b"]});
    assert!(expect(base.clone()).to_deep_equal(json!({"id": 1, "tags": ["a"]})).is_err());
    assert!(expect(base.clone()).to_deep_equal(json!({"id": 1})).is_err());
    assert!(expect(json!([1, 2])).to_deep_equal(json!([2, 1])).is_err());
}

/// 数组成员与子串包含
#[test]
fn test_contain_scenarios() {
    assert!(expect(vec![1, 2, 3]).to_contain(2).is_ok());
    assert!(expect(vec![1, 2, 3]).to_contain(4).is_err());
    assert!(expect("hello").to_contain("ell").is_ok());
    assert!(expect("hello").to_contain("elo").is_err());
}

/// 不可包含的主体给出专门的错误
#[test]
fn test_contain_on_unsupported_subject() {
    let err = expect(42).to_contain(4).unwrap_err();
    assert!(matches!(err, AssertError::NotContainable { .. }));
    assert_eq!(err.to_string(), "Expected 42 to be an array or string");
}

/// promise 主体的识别与取反
#[test]
fn test_promise_detection() {
    assert!(expect(Promise::resolve(1)).to_be_promise().is_ok());
    assert!(expect(1).to_be_promise().is_err());
    assert!(expect(1).not().to_be_promise().is_ok());
    assert!(expect(Promise::resolve(1)).not().to_be_promise().is_err());
}

/// 解析值断言走完整的等待路径
#[tokio::test]
async fn test_resolves_scenarios() {
    let promise = Promise::new(async {
        tokio::task::yield_now().await;
        Ok(21 * 2)
    });
    assert!(expect(promise).resolves().to_be(42).await.is_ok());

    // 普通值等待后解析为自身
    assert!(expect(7).resolves().to_be(7).await.is_ok());

    let message = expect(Promise::resolve(2))
        .resolves()
        .to_be(3)
        .await
        .unwrap_err()
        .to_string();
    assert_eq!(message, "Expected resolved value 2 to be 3");

    // 被拒绝的 promise 以拒绝消息失败
    let message = expect(Promise::reject("connection refused"))
        .resolves()
        .to_equal(1)
        .await
        .unwrap_err()
        .to_string();
    assert_eq!(message, "connection refused");
}

/// 拒绝断言要求消息完全一致
#[tokio::test]
async fn test_rejects_scenarios() {
    assert!(
        expect(Promise::reject("oops"))
            .rejects()
            .to_throw("oops")
            .await
            .is_ok()
    );

    let message = expect(Promise::reject("oops"))
        .rejects()
        .to_throw("nope")
        .await
        .unwrap_err()
        .to_string();
    assert_eq!(message, "Expected promise to throw \"nope\", but it threw \"oops\"");

    let message = expect(Promise::resolve(1))
        .rejects()
        .to_throw("oops")
        .await
        .unwrap_err()
        .to_string();
    assert_eq!(message, "Expected promise to throw \"oops\", but it resolved");
}

/// 断言结果可以用 ? 在用例体中串联
#[tokio::test]
async fn test_assert_results_compose_with_question_mark() {
    async fn body() -> anyhow::Result<()> {
        expect(2 + 2).to_be(4)?;
        expect("harness").to_contain("ness")?;
        expect(Some(1)).to_exist()?;
        Ok(())
    }
    assert!(body().await.is_ok());

    async fn failing_body() -> anyhow::Result<()> {
        expect(2 + 2).to_be(5)?;
        Ok(())
    }
    let err = failing_body().await.unwrap_err();
    assert_eq!(err.to_string(), "Expected 4 to be 5");
}
