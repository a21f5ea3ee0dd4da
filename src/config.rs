/// 上游数据源的限定配置，按`Skip`、`Limit`的顺序生效。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Config {
    /// 丢弃上游的前N个数据。
    Skip(usize),
    /// 最多从上游读取N个数据。
    Limit(usize),
}

#[inline]
pub(crate) fn skip_of(configs: &[Config]) -> usize {
    configs.iter().rev().find_map(|c| if let Config::Skip(n) = c { Some(*n) } else { None }).unwrap_or(0)
}

#[inline]
pub(crate) fn limit_of(configs: &[Config]) -> Option<usize> {
    configs.iter().rev().find_map(|c| if let Config::Limit(n) = c { Some(*n) } else { None })
}
