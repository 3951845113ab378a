use ruspec::registry::{Node, Registry};
use ruspec::{all_passed, expect, flatten};

fn group_names(registry: &Registry) -> Vec<&str> {
    registry
        .root()
        .children()
        .iter()
        .filter_map(|node| match node {
            Node::Group(group) => Some(group.name()),
            Node::Case(_) => None,
        })
        .collect()
}

/// 同层重复注册同名分组只保留第二次的内容
#[test]
fn test_describe_twice_keeps_single_group() {
    let mut registry = Registry::new();
    registry.describe("G", |r| {
        r.it("stale one", || async { Ok(()) });
        r.it("stale two", || async { Ok(()) });
    });
    registry.describe("G", |r| {
        r.it("fresh", || async { Ok(()) });
    });

    assert_eq!(group_names(&registry), ["G"]);

    let children: Vec<&str> = registry
        .root()
        .children()
        .iter()
        .filter_map(|node| match node {
            Node::Group(group) => Some(group),
            Node::Case(_) => None,
        })
        .flat_map(|group| group.children())
        .map(|node| match node {
            Node::Case(case) => case.name(),
            Node::Group(group) => group.name(),
        })
        .collect();
    assert_eq!(children, ["fresh"]);
}

/// 重新注册的分组排到同级末尾，其余兄弟顺序不变
#[test]
fn test_reregistered_group_moves_behind_siblings() {
    let mut registry = Registry::new();
    registry.describe("alpha", |_| {});
    registry.describe("beta", |_| {});
    registry.describe("alpha", |_| {});

    assert_eq!(group_names(&registry), ["beta", "alpha"]);
}

/// 注册器各自独立，互不影响
#[tokio::test]
async fn test_registries_run_independently() {
    let mut passing = Registry::new();
    passing.it("fine", || async { Ok(()) });

    let mut failing = Registry::new();
    failing.it("broken", || async { anyhow::bail!("broken on purpose") });

    assert!(all_passed(&passing.run().await));
    assert!(!all_passed(&failing.run().await));
}

/// 同一注册树可以连续执行多次，结果一致
#[tokio::test]
async fn test_rerun_produces_same_results() {
    let mut registry = Registry::new();
    registry.describe("math", |r| {
        r.it("adds", || async {
            expect(2 + 2).to_be(4)?;
            Ok(())
        });
        r.it("overshoots", || async {
            expect(2 + 2).to_be(5)?;
            Ok(())
        });
    });

    let first = registry.run().await;
    let second = registry.run().await;
    assert_eq!(first, second);
    assert_eq!(flatten(&first), flatten(&second));
}

/// 模块重载流程：reset 后重新注册即可重跑
#[tokio::test]
async fn test_reset_supports_reload_cycle() {
    fn register_suite(registry: &mut Registry) {
        registry.describe("suite", |r| {
            r.it("works", || async {
                expect("status").to_contain("stat")?;
                Ok(())
            });
        });
    }

    let mut registry = Registry::new();
    register_suite(&mut registry);
    let before_reload = registry.run().await;
    assert!(all_passed(&before_reload));

    // 模块卸载时清空注册树
    registry.reset();
    assert!(registry.root().children().is_empty());

    // 重新加载后注册同一套用例
    register_suite(&mut registry);
    let after_reload = registry.run().await;
    assert_eq!(flatten(&before_reload), flatten(&after_reload));
}
