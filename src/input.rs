use crate::config::{Config, limit_of, skip_of};
use std::fmt::{Debug, Formatter};
use std::iter::Peekable;

/// 管道的上游数据源。
///
/// 对任意迭代器的惰性包装，只能向前消费，不可回退。
/// 提供与管道一致的拉取协议：`has_next`判断是否还有数据，`next`取出下一个数据。
pub struct Starts<S> {
    iter: Peekable<Box<dyn Iterator<Item = S>>>,
}

impl<S> Starts<S> {
    pub fn new(iter: impl IntoIterator<Item = S> + 'static) -> Starts<S>
    where
        S: 'static,
    {
        Starts { iter: (Box::new(iter.into_iter()) as Box<dyn Iterator<Item = S>>).peekable() }
    }

    /// 按照配置限定上游，先`Skip`再`Limit`。
    pub fn with_configs(iter: impl IntoIterator<Item = S> + 'static, configs: &[Config]) -> Starts<S>
    where
        S: 'static,
    {
        let iter = iter.into_iter().skip(skip_of(configs));
        match limit_of(configs) {
            Some(limit) => Starts::new(iter.take(limit)),
            None => Starts::new(iter),
        }
    }

    /// 没有任何数据的上游，用于稍后通过`Pipe::set_starts`绑定。
    pub fn empty() -> Starts<S>
    where
        S: 'static,
    {
        Starts::new(std::iter::empty())
    }

    pub fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }
}

impl<S> Iterator for Starts<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<S> Debug for Starts<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Starts").finish_non_exhaustive()
    }
}
