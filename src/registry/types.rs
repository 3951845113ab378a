use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// 用例体与钩子体产生的 future
pub type BodyFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// 测试用例体：每次调用产生一个新的 future，支持重复执行
pub type TestFn = Box<dyn Fn() -> BodyFuture + Send + Sync>;

/// 生命周期钩子体
pub type HookFn = Box<dyn Fn() -> BodyFuture + Send + Sync>;

/// 钩子种类
///
/// all 钩子在分组级别各执行一次，each 钩子围绕每个直属用例执行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    BeforeAll,
    BeforeEach,
    AfterAll,
    AfterEach,
}

/// 单个测试用例
///
/// `only` 标记被记录但当前不参与过滤，所有用例都会执行。
pub struct Case {
    name: String,
    body: TestFn,
    only: bool,
}

impl Case {
    pub(crate) fn new(name: String, body: TestFn, only: bool) -> Self {
        Self { name, body, only }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn only(&self) -> bool {
        self.only
    }

    /// 产生用例体的一次新执行
    pub(crate) fn run(&self) -> BodyFuture {
        (self.body)()
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("name", &self.name)
            .field("only", &self.only)
            .finish_non_exhaustive()
    }
}

/// 注册树节点：子分组或用例
#[derive(Debug)]
pub enum Node {
    Group(Group),
    Case(Case),
}

/// 分组（describe 块）
///
/// 子节点保持注册顺序；同级分组名唯一，由名字索引维护。
pub struct Group {
    name: String,
    children: Vec<Node>,
    // 同级分组的名字索引，重新注册同名分组时替换旧的
    group_index: HashMap<String, usize>,
    before_all: Vec<HookFn>,
    before_each: Vec<HookFn>,
    after_all: Vec<HookFn>,
    after_each: Vec<HookFn>,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            group_index: HashMap::new(),
            before_all: Vec::new(),
            before_each: Vec::new(),
            after_all: Vec::new(),
            after_each: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 按注册顺序返回子节点
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn hooks(&self, kind: HookKind) -> &[HookFn] {
        match kind {
            HookKind::BeforeAll => &self.before_all,
            HookKind::BeforeEach => &self.before_each,
            HookKind::AfterAll => &self.after_all,
            HookKind::AfterEach => &self.after_each,
        }
    }

    pub(crate) fn add_hook(&mut self, kind: HookKind, hook: HookFn) {
        match kind {
            HookKind::BeforeAll => self.before_all.push(hook),
            HookKind::BeforeEach => self.before_each.push(hook),
            HookKind::AfterAll => self.after_all.push(hook),
            HookKind::AfterEach => self.after_each.push(hook),
        }
    }

    pub(crate) fn add_case(&mut self, case: Case) {
        self.children.push(Node::Case(case));
    }

    /// 追加子分组并返回其下标
    ///
    /// 已存在同名分组时先移除旧的，新分组总是排在末尾。
    /// 同名用例不受影响。
    pub(crate) fn insert_group(&mut self, group: Group) -> usize {
        if let Some(old) = self.group_index.remove(group.name()) {
            self.children.remove(old);
            // 移除导致后续下标左移一位
            for index in self.group_index.values_mut() {
                if *index > old {
                    *index -= 1;
                }
            }
        }
        let index = self.children.len();
        self.group_index.insert(group.name().to_string(), index);
        self.children.push(Node::Group(group));
        index
    }

    pub(crate) fn child_group_mut(&mut self, index: usize) -> Option<&mut Group> {
        match self.children.get_mut(index) {
            Some(Node::Group(group)) => Some(group),
            _ => None,
        }
    }

    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
        self.group_index.clear();
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
