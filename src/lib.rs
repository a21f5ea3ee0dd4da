//! 惰性、按需拉取的管道。
//!
//! 每个管道持有一个上游数据源（[`Starts`]），由算子（[`Operator`]）逐个计算输出；
//! [`Pipe`]在此之上提供统一的`has_next`/`next`拉取协议。
//!
//! [`Aggregator`]是一个副作用管道：首次拉取时读完整个上游并写入调用方提供的容器，
//! 之后按容器的遍历顺序重新输出，同时通过[`SideEffect`]句柄暴露该容器。
//!
//! [`Config`]仅用于限定上游数量（`Skip`/`Limit`，见[`Starts::with_configs`]），是提前终止聚合的唯一方式。
//!
//! ```
//! use sefpipe::{Aggregator, SideEffect, SideEffectPipe, Starts};
//!
//! let handle = SideEffect::new(Vec::<i32>::new());
//! let mut pipe = Aggregator::new(handle.clone()).into_pipe(Starts::new(vec![1, 2, 3]));
//! assert!(handle.borrow().is_empty());
//! assert_eq!(Ok(1), pipe.next());
//! assert_eq!(vec![1, 2, 3], *pipe.side_effect().borrow());
//! assert_eq!(vec![2, 3], pipe.collect::<Vec<_>>());
//! ```
//!
//! ```
//! use sefpipe::{Aggregator, Config, SideEffect, Starts};
//!
//! let handle = SideEffect::new(Vec::<i32>::new());
//! let pipe = Aggregator::new(handle.clone()).into_pipe(Starts::with_configs(0i32.., &[Config::Skip(1), Config::Limit(2)]));
//! assert_eq!(vec![1, 2], pipe.collect::<Vec<i32>>());
//! assert_eq!(vec![1, 2], *handle.borrow());
//! ```

mod config;
mod err;
mod input;
mod op;
mod pipe;

pub use config::Config;
pub use err::PipeErr;
pub use input::Starts;
pub use op::aggregate::{Aggregator, AggregatorPipe};
pub use op::{Collection, SideEffect, SideEffectPipe};
pub use pipe::{Operator, Pipe};

pub type PipeRes<T> = Result<T, PipeErr>;
