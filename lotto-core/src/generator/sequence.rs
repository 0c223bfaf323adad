use std::iter::FusedIterator;

/// Lazy sequence of a fixed number of values pulled from a producer.
///
/// Each element is computed only when the iterator is advanced. Once
/// exhausted it stays exhausted; build a new one to generate again.
pub struct Sequence<F> {
    remaining: usize,
    producer: F,
}

impl<F> Sequence<F> {
    pub fn new(count: usize, producer: F) -> Self {
        Self {
            remaining: count,
            producer,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T, F> Iterator for Sequence<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.producer)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, F: FnMut() -> T> ExactSizeIterator for Sequence<F> {}

impl<T, F: FnMut() -> T> FusedIterator for Sequence<F> {}

impl<F> std::fmt::Debug for Sequence<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Sequence of `count` values, each produced by calling `producer`
pub fn generate<T, F>(count: usize, producer: F) -> Sequence<F>
where
    F: FnMut() -> T,
{
    Sequence::new(count, producer)
}
