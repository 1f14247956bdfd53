use tracing::warn;

/// Outcome of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    /// The markup this strategy looks for is absent. Expected, not an error.
    Miss,
    Failed(String),
}

impl<T> Resolution<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Resolution::Miss, Resolution::Found)
    }
}

impl<T> From<Result<Option<T>, String>> for Resolution<T> {
    fn from(value: Result<Option<T>, String>) -> Self {
        match value {
            Ok(option) => option.into(),
            Err(e) => Resolution::Failed(e),
        }
    }
}

/// A named extraction attempt over some context.
pub type Strategy<C, T> = (&'static str, fn(&C) -> Resolution<T>);

/// What a `Failed` strategy does to the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Return the failure to the caller without trying later strategies.
    Stop,
    /// Log it and move on to the next strategy.
    Continue,
}

/// Run `strategies` in order and return the first `Found`.
pub fn first_found<C, T>(context: &C, strategies: &[Strategy<C, T>], on_failure: OnFailure) -> Resolution<T> {
    for (label, strategy) in strategies {
        match strategy(context) {
            Resolution::Found(value) => return Resolution::Found(value),
            Resolution::Miss => {}
            Resolution::Failed(reason) => match on_failure {
                OnFailure::Stop => return Resolution::Failed(format!("{}: {}", label, reason)),
                OnFailure::Continue => warn!("{} error: {}", label, reason),
            },
        }
    }
    Resolution::Miss
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miss(_: &u32) -> Resolution<String> {
        Resolution::Miss
    }

    fn boom(_: &u32) -> Resolution<String> {
        Resolution::Failed("stale element".to_string())
    }

    fn echo(n: &u32) -> Resolution<String> {
        Resolution::Found(n.to_string())
    }

    fn never(_: &u32) -> Resolution<String> {
        Resolution::Found("should not run".to_string())
    }

    #[test]
    fn earliest_success_wins() {
        let chain: [Strategy<u32, String>; 3] = [("miss", miss), ("echo", echo), ("never", never)];
        assert_eq!(first_found(&7, &chain, OnFailure::Stop), Resolution::Found("7".to_string()));
    }

    #[test]
    fn all_misses_is_miss() {
        let chain: [Strategy<u32, String>; 2] = [("a", miss), ("b", miss)];
        assert_eq!(first_found(&1, &chain, OnFailure::Continue), Resolution::Miss);
        assert_eq!(first_found::<u32, String>(&1, &[], OnFailure::Stop), Resolution::Miss);
    }

    #[test]
    fn failure_policy_decides_whether_to_continue() {
        let chain: [Strategy<u32, String>; 2] = [("first", boom), ("second", echo)];
        assert_eq!(first_found(&3, &chain, OnFailure::Continue), Resolution::Found("3".to_string()));
        assert_eq!(
            first_found(&3, &chain, OnFailure::Stop),
            Resolution::Failed("first: stale element".to_string())
        );
    }

    #[test]
    fn conversions_from_option_and_result() {
        assert_eq!(Resolution::from(Some(1)), Resolution::Found(1));
        assert_eq!(Resolution::<i32>::from(None), Resolution::Miss);
        let err: Result<Option<i32>, String> = Err("bad".to_string());
        assert_eq!(Resolution::from(err), Resolution::Failed("bad".to_string()));
        assert_eq!(Resolution::Found(2).found(), Some(2));
        assert_eq!(Resolution::<i32>::Miss.found(), None);
    }
}
