use crate::input::Starts;
use crate::op::{Collection, SideEffect, SideEffectPipe};
use crate::pipe::{Operator, Pipe};
use log::debug;
use std::vec::IntoIter;

pub type AggregatorPipe<S, C> = Pipe<S, S, Aggregator<S, C>>;

/// 聚合算子：首次需要输出时一次性读完上游，全部写入副作用容器，再按容器的遍历顺序重新输出。
///
/// 读取上游的过程不可中断，因此在第一次`has_next`/`next`返回后，副作用容器中已包含上游的全部数据，
/// 与下游已经输出了多少无关；在此之前容器保持调用方提供时的原样。
///
/// 需要提前终止时，应在上游限定数量，例如`Starts::with_configs`。
#[derive(Debug)]
pub struct Aggregator<S, C> {
    aggregate: SideEffect<C>,
    replay: Option<IntoIter<S>>,
}

impl<S, C> Aggregator<S, C>
where
    C: Collection<S>,
{
    pub fn new(aggregate: SideEffect<C>) -> Aggregator<S, C> {
        Aggregator { aggregate, replay: None }
    }

    pub fn into_pipe(self, starts: Starts<S>) -> AggregatorPipe<S, C> {
        Pipe::with_starts(self, starts)
    }

    pub fn side_effect(&self) -> SideEffect<C> {
        self.aggregate.clone()
    }

    pub fn is_materialized(&self) -> bool {
        self.replay.is_some()
    }

    fn materialize(&self, starts: &mut Starts<S>) -> IntoIter<S> {
        let mut count = 0usize;
        // 逐个写入，拉取上游期间不持有容器的借用
        for start in starts {
            self.aggregate.borrow_mut().add(start);
            count += 1;
        }
        let aggregate = self.aggregate.borrow();
        debug!("Aggregated {} elements from upstream, collection size: {}", count, aggregate.size());
        aggregate.replay().into_iter()
    }
}

impl<S, C> Operator<S, S> for Aggregator<S, C>
where
    C: Collection<S>,
{
    fn set_next(&mut self, starts: &mut Starts<S>) -> Option<S> {
        if self.replay.is_none() {
            self.replay = Some(self.materialize(starts));
        }
        self.replay.as_mut().and_then(|replay| replay.next())
    }
}

impl<S, C> SideEffectPipe for AggregatorPipe<S, C>
where
    C: Collection<S>,
{
    type SideEffect = SideEffect<C>;

    fn side_effect(&self) -> SideEffect<C> {
        self.operator().side_effect()
    }
}
