pub mod aggregate;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// 副作用管道：迭代的同时积累并暴露一个计算结果。
pub trait SideEffectPipe {
    type SideEffect;

    fn side_effect(&self) -> Self::SideEffect;
}

/// 可追加单个元素并可正向遍历的容器。
///
/// 遍历顺序与去重策略由容器自身决定，例如`Vec`保持插入顺序，`BTreeSet`排序并去重。
pub trait Collection<S> {
    fn add(&mut self, item: S);

    /// 按容器的遍历顺序复制出全部元素。
    fn replay(&self) -> Vec<S>;

    fn size(&self) -> usize;
}

impl<S, C> Collection<S> for C
where
    S: Clone,
    C: Extend<S>,
    for<'a> &'a C: IntoIterator<Item = &'a S>,
{
    fn add(&mut self, item: S) {
        self.extend(std::iter::once(item));
    }

    fn replay(&self) -> Vec<S> {
        IntoIterator::into_iter(self).cloned().collect()
    }

    fn size(&self) -> usize {
        IntoIterator::into_iter(self).count()
    }
}

/// 副作用句柄，调用方与管道共享同一个容器。
///
/// 克隆句柄不会复制容器。管道只向容器追加数据，从不移除。
///
/// # Panics
///
/// 调用方若在调用管道的`has_next`/`next`时仍持有`borrow`/`borrow_mut`返回的引用，管道写入容器时会panic。
/// 上游在被拉取时读取句柄是允许的，此时可以看到已拉取的部分数据。
#[derive(Debug, Default)]
pub struct SideEffect<C> {
    inner: Rc<RefCell<C>>,
}

impl<C> Clone for SideEffect<C> {
    fn clone(&self) -> Self {
        SideEffect { inner: Rc::clone(&self.inner) }
    }
}

impl<C> SideEffect<C> {
    pub fn new(collection: C) -> SideEffect<C> {
        SideEffect { inner: Rc::new(RefCell::new(collection)) }
    }

    pub fn borrow(&self) -> Ref<'_, C> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.inner.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &SideEffect<C>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// 仅当没有其他句柄（包括管道持有的句柄）时取回容器。
    pub fn try_unwrap(self) -> Result<C, SideEffect<C>> {
        Rc::try_unwrap(self.inner).map(RefCell::into_inner).map_err(|inner| SideEffect { inner })
    }
}
