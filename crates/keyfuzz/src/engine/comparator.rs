//! Result ordering

use std::cmp::Ordering;

use super::ResultWrapper;

/// Orders wrapped results before projection. The sort is stable, so
/// `Ordering::Equal` keeps collection order.
pub trait Comparator<T>: Send + Sync {
    fn compare(&self, a: &ResultWrapper<'_, T>, b: &ResultWrapper<'_, T>) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&ResultWrapper<'_, T>, &ResultWrapper<'_, T>) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &ResultWrapper<'_, T>, b: &ResultWrapper<'_, T>) -> Ordering {
        self(a, b)
    }
}

/// Ascending score, closest match first
#[derive(Debug, Clone, Copy, Default)]
pub struct ByScore;

impl<T> Comparator<T> for ByScore {
    fn compare(&self, a: &ResultWrapper<'_, T>, b: &ResultWrapper<'_, T>) -> Ordering {
        a.result.score.cmp(&b.result.score)
    }
}
