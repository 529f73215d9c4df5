use rand::{Rng, rng};

/// Presentation order for one session: a permutation of question indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayQueue {
    order: Vec<usize>,
}

impl PlayQueue {
    /// Shuffle `0..count` with the thread-local generator.
    #[must_use]
    pub fn shuffled(count: usize) -> Self {
        Self::shuffled_with(count, &mut rng())
    }

    /// Shuffle `0..count` with the given generator.
    ///
    /// Fisher–Yates: walk `i` from the back and swap with a uniform `j` in `[0, i]`,
    /// so every ordering is equally likely for a uniform source.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..count).collect();
        for i in (1..count).rev() {
            let j = rng.random_range(0..=i);
            order.swap(i, j);
        }
        Self { order }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Question index at queue position `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}
