// 模块重载示例：同名分组重新注册即替换，reset 清空整棵树
use ruspec::{expect, flatten, logger, summarize, GroupResult, Registry};

fn register_v1(registry: &mut Registry) {
    registry.describe("billing", |r| {
        r.it("rounds totals", || async {
            // v1 的断言有误
            expect(19.99).to_be(20.0)?;
            Ok(())
        });
    });
}

fn register_v2(registry: &mut Registry) {
    registry.describe("billing", |r| {
        r.it("rounds totals", || async {
            expect(19.99).to_be(19.99)?;
            Ok(())
        });
        r.it("accepts string amounts", || async {
            expect("42").to_equal(42)?;
            Ok(())
        });
    });
}

#[tokio::main]
async fn main() {
    logger::init();

    println!("🔄 ruspec - 模块重载示例\n");
    println!("{}\n", "=".repeat(60));

    let mut registry = Registry::new();

    // 1. 首次加载
    println!("📦 步骤 1: 加载 v1 并执行");
    register_v1(&mut registry);
    report(&registry.run().await);

    // 2. 同名分组重新注册即完成替换，旧用例不会残留
    println!("\n🔁 步骤 2: 热替换为 v2 后重新执行");
    register_v2(&mut registry);
    report(&registry.run().await);

    // 3. 卸载
    println!("\n🧹 步骤 3: reset 清空注册树");
    registry.reset();
    report(&registry.run().await);

    println!("\n{}", "=".repeat(60));
}

fn report(results: &GroupResult) {
    for case in flatten(results) {
        let mark = if case.passed { "✅" } else { "❌" };
        println!("   {} {}", mark, case.name);
    }
    let summary = summarize(results);
    println!(
        "   共 {} 个用例：{} 通过，{} 失败",
        summary.total, summary.passed, summary.failed
    );
}
