use crate::PipeRes;
use crate::err::PipeErr;
use crate::input::Starts;
use log::{debug, trace};
use std::iter::FusedIterator;

/// 管道算子：从上游计算下一个输出。
///
/// 返回`Some`表示暂存一个输出；返回`None`表示上游和算子内部缓冲都已耗尽，
/// 之后管道不会再调用此方法。
pub trait Operator<S, E> {
    fn set_next(&mut self, starts: &mut Starts<S>) -> Option<E>;
}

/// 惰性拉取的管道。
///
/// `has_next`和`next`由算子的`set_next`统一派生：
/// - 连续多次`has_next`不会跳过或重复数据；
/// - 一旦耗尽，`has_next`始终返回`false`，`next`始终失败。
#[derive(Debug)]
pub struct Pipe<S, E, O> {
    operator: O,
    starts: Starts<S>,
    next_end: Option<E>,
    done: bool,
}

impl<S, E, O> Pipe<S, E, O>
where
    O: Operator<S, E>,
{
    /// 创建尚未绑定上游的管道，需要通过`set_starts`提供数据源。
    pub fn new(operator: O) -> Pipe<S, E, O>
    where
        S: 'static,
    {
        Pipe::with_starts(operator, Starts::empty())
    }

    pub fn with_starts(operator: O, starts: Starts<S>) -> Pipe<S, E, O> {
        Pipe { operator, starts, next_end: None, done: false }
    }

    /// 替换上游数据源，不影响已暂存的输出和耗尽状态。
    pub fn set_starts(&mut self, starts: Starts<S>) {
        debug!("Replacing upstream of pipe, exhausted: {}", self.done);
        self.starts = starts;
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    pub fn has_next(&mut self) -> bool {
        if self.next_end.is_some() {
            return true;
        }
        if self.done {
            return false;
        }
        match self.operator.set_next(&mut self.starts) {
            Some(end) => {
                trace!("Staged next element of pipe");
                self.next_end = Some(end);
                true
            }
            None => {
                trace!("Pipe exhausted");
                self.done = true;
                false
            }
        }
    }

    pub fn next(&mut self) -> PipeRes<E> {
        if self.has_next() { self.next_end.take().ok_or(PipeErr::NoSuchElement) } else { Err(PipeErr::NoSuchElement) }
    }

    /// 管道不支持修改上游数据。
    pub fn remove(&mut self) -> PipeRes<()> {
        Err(PipeErr::Unsupported("remove"))
    }
}

impl<S, E, O> Iterator for Pipe<S, E, O>
where
    O: Operator<S, E>,
{
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        Pipe::next(self).ok()
    }
}

impl<S, E, O> FusedIterator for Pipe<S, E, O> where O: Operator<S, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::cell::Cell;
    use std::rc::Rc;

    /// 原样输出，同时记录`set_next`的调用次数。
    struct Identity {
        calls: Rc<Cell<usize>>,
    }

    impl<S> Operator<S, S> for Identity {
        fn set_next(&mut self, starts: &mut Starts<S>) -> Option<S> {
            self.calls.set(self.calls.get() + 1);
            starts.next()
        }
    }

    /// 只保留偶数并转为字符串。
    struct EvenText;

    impl Operator<i32, String> for EvenText {
        fn set_next(&mut self, starts: &mut Starts<i32>) -> Option<String> {
            starts.find(|start| start % 2 == 0).map(|start| start.to_string())
        }
    }

    fn identity(values: Vec<i32>) -> (Pipe<i32, i32, Identity>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (Pipe::with_starts(Identity { calls: calls.clone() }, Starts::new(values)), calls)
    }

    #[test]
    fn test_pull_protocol() {
        let (mut pipe, _) = identity(vec![1, 2, 3]);
        assert!(pipe.has_next());
        assert_eq!(Ok(1), pipe.next());
        assert!(pipe.has_next());
        assert_eq!(Ok(2), pipe.next());
        assert_eq!(Ok(3), pipe.next());
        assert!(!pipe.has_next());
        assert_eq!(Err(PipeErr::NoSuchElement), pipe.next());
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let (mut pipe, calls) = identity(vec![]);
        assert!(!pipe.has_next());
        for _ in 0..5 {
            assert!(!pipe.has_next());
            assert_eq!(Err(PipeErr::NoSuchElement), pipe.next());
        }
        // 耗尽后不再调用算子
        assert_eq!(1, calls.get());
    }

    #[test]
    fn test_exhaustion_survives_new_starts() {
        let (mut pipe, _) = identity(vec![1]);
        assert_eq!(vec![1], pipe.by_ref().collect_vec());
        pipe.set_starts(Starts::new(vec![2, 3]));
        assert!(!pipe.has_next());
        assert_eq!(Err(PipeErr::NoSuchElement), pipe.next());
    }

    #[test]
    fn test_has_next_no_skip_no_duplicate() {
        let (mut pipe, calls) = identity(vec![7, 8]);
        for _ in 0..4 {
            assert!(pipe.has_next());
        }
        assert_eq!(1, calls.get());
        assert_eq!(Ok(7), pipe.next());
        assert!(pipe.has_next());
        assert!(pipe.has_next());
        assert_eq!(Ok(8), pipe.next());
        assert_eq!(2, calls.get());
    }

    #[test]
    fn test_next_without_has_next() {
        let (mut pipe, _) = identity(vec![4, 5]);
        assert_eq!(Ok(4), pipe.next());
        assert_eq!(Ok(5), pipe.next());
        assert_eq!(Err(PipeErr::NoSuchElement), pipe.next());
    }

    #[test]
    fn test_remove_unsupported() {
        let (mut pipe, _) = identity(vec![1]);
        assert_eq!(Err(PipeErr::Unsupported("remove")), pipe.remove());
        // 上游不受影响
        assert_eq!(Ok(1), pipe.next());
    }

    #[test]
    fn test_operator_changes_type() {
        let mut pipe: Pipe<i32, String, EvenText> = Pipe::with_starts(EvenText, Starts::new(1..=6));
        assert_eq!(vec!["2", "4", "6"], pipe.by_ref().collect_vec());
        assert!(!pipe.has_next());
    }

    #[test]
    fn test_late_starts() {
        let mut pipe: Pipe<i32, String, EvenText> = Pipe::new(EvenText);
        pipe.set_starts(Starts::new(vec![10, 11, 12]));
        assert_eq!(Ok("10".to_owned()), pipe.next());
        assert_eq!(Ok("12".to_owned()), pipe.next());
        assert!(!pipe.has_next());
    }

    #[test]
    fn test_pipe_as_starts() {
        let (inner, _) = identity((1..=8).collect());
        let mut outer: Pipe<i32, String, EvenText> = Pipe::with_starts(EvenText, Starts::new(inner));
        assert_eq!(vec!["2", "4", "6", "8"], outer.by_ref().collect_vec());
    }
}
