// 快速上手示例：注册一个套件、执行并打印结果树
use ruspec::{all_passed, expect, json, logger, summarize, GroupResult, Promise, Registry, ResultNode};

#[tokio::main]
async fn main() {
    logger::init();

    println!("🧪 ruspec - 声明式测试套件示例\n");
    println!("{}\n", "=".repeat(60));

    // 1. 注册套件
    println!("📋 步骤 1: 注册测试套件");
    let mut registry = Registry::new();

    registry.describe("calculator", |r| {
        r.it("adds numbers", || async {
            expect(2 + 3).to_be(5)?;
            Ok(())
        });
        r.it("compares loosely", || async {
            expect(10).to_equal("10")?;
            Ok(())
        });
        r.it("overshoots on purpose", || async {
            expect(2 + 2).to_be(5)?;
            Ok(())
        });
    });

    registry.describe("inventory", |r| {
        r.before_each(|| async {
            // 每个用例前可以准备共享环境
            Ok(())
        });
        r.it("tracks items", || async {
            expect(json!(["apple", "pear"])).to_contain("apple")?;
            Ok(())
        });
        r.it("loads asynchronously", || async {
            let lookup = Promise::new(async {
                tokio::task::yield_now().await;
                Ok(2)
            });
            expect(lookup).resolves().to_be(2).await?;
            Ok(())
        });
    });

    println!("   ✅ 注册了 {} 个顶层节点\n", registry.root().children().len());

    // 2. 执行
    println!("🚀 步骤 2: 执行全部用例");
    let results = registry.run().await;

    // 3. 按结果树展示
    println!("\n📊 步骤 3: 结果");
    print_group(&results, 0);

    let summary = summarize(&results);
    println!(
        "\n   共 {} 个用例：{} 通过，{} 失败",
        summary.total, summary.passed, summary.failed
    );

    println!("\n{}", "=".repeat(60));
    if all_passed(&results) {
        println!("🎉 全部通过");
    } else {
        println!("⚠️  存在失败用例");
    }
}

/// 递归打印结果树，失败用例附带错误消息
fn print_group(group: &GroupResult, depth: usize) {
    if group.name != "root" {
        println!("{}📁 {}", "  ".repeat(depth), group.name);
    }
    for node in &group.children {
        match node {
            ResultNode::Group(child) => print_group(child, depth + 1),
            ResultNode::Case(case) => {
                let pad = "  ".repeat(depth + 1);
                let mark = if case.passed == Some(false) { "❌" } else { "✅" };
                println!("{pad}{mark} {}", case.name);
                if let Some(message) = &case.error_message {
                    println!("{pad}   {message}");
                }
            }
        }
    }
}
