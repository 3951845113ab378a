use std::future::Future;

use super::types::{BodyFuture, Case, Group, HookKind, TestFn};
use crate::runner::{self, GroupResult};

/// 测试注册器
///
/// 持有注册树和指向当前分组的游标。注册阶段完全同步，
/// 执行阶段只读树；借用规则保证两者不会交错。
/// 多个注册器互相独立，可在同一进程内并存。
pub struct Registry {
    root: Group,
    // 从根到当前分组的子节点下标路径，只由 describe 维护
    cursor: Vec<usize>,
}

impl Registry {
    /// 创建空注册器
    pub fn new() -> Self {
        Self {
            root: Group::new("root"),
            cursor: Vec::new(),
        }
    }

    /// 注册分组并进入其作用域
    ///
    /// body 在新分组作为当前分组期间同步执行，可继续嵌套注册；
    /// 返回前恢复原来的当前分组。重新注册同名分组会替换旧分组，
    /// 新分组排到同级末尾。
    pub fn describe(&mut self, name: impl Into<String>, body: impl FnOnce(&mut Registry)) {
        let index = self.current_mut().insert_group(Group::new(name));
        self.cursor.push(index);
        body(self);
        self.cursor.pop();
    }

    /// 注册用例
    pub fn it<F, Fut>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.current_mut()
            .add_case(Case::new(name.into(), wrap(body), false));
    }

    /// 注册带 only 标记的用例
    ///
    /// 标记只被记录，执行器不做过滤，所有用例照常执行。
    pub fn it_only<F, Fut>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.current_mut()
            .add_case(Case::new(name.into(), wrap(body), true));
    }

    /// 注册分组级前置钩子，分组执行前运行一次
    pub fn before_all<F, Fut>(&mut self, hook: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.current_mut().add_hook(HookKind::BeforeAll, wrap(hook));
    }

    /// 注册用例级前置钩子，本分组每个直属用例前运行
    pub fn before_each<F, Fut>(&mut self, hook: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.current_mut().add_hook(HookKind::BeforeEach, wrap(hook));
    }

    /// 注册分组级后置钩子，分组执行完运行一次
    pub fn after_all<F, Fut>(&mut self, hook: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.current_mut().add_hook(HookKind::AfterAll, wrap(hook));
    }

    /// 注册用例级后置钩子，本分组每个直属用例后运行
    pub fn after_each<F, Fut>(&mut self, hook: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.current_mut().add_hook(HookKind::AfterEach, wrap(hook));
    }

    /// 只读访问注册树的根分组
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// 执行全部测试并返回结果树
    pub async fn run(&self) -> GroupResult {
        runner::run_tests(self).await
    }

    /// 清空根分组的子节点（模块重载场景）
    ///
    /// 根分组上已注册的钩子保留，重载方自行决定是否重新注册。
    pub fn reset(&mut self) {
        self.root.clear_children();
        self.cursor.clear();
    }

    fn current_mut(&mut self) -> &mut Group {
        let mut group = &mut self.root;
        for &index in &self.cursor {
            group = match group.child_group_mut(index) {
                Some(child) => child,
                // 游标只由 describe 维护，必然指向分组节点
                None => unreachable!("registration cursor desynced from tree"),
            };
        }
        group
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap<F, Fut>(body: F) -> TestFn
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Box::new(move || -> BodyFuture { Box::pin(body()) })
}
