// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{strategy::Strategy, trace::trace_event, vector::BoundedVector};

impl<T: Copy, const N: usize> BoundedVector<T, N> {
    /// Copies `min(N, src.len())` elements from `src` into the front of the
    /// vector and returns that count.
    ///
    /// Slots past the copied prefix keep their values; source elements past
    /// `N` are dropped.
    #[inline]
    pub fn copy_from(&mut self, src: &[T]) -> usize {
        self.copy_from_with(Strategy::Bulk, src)
    }

    /// [`copy_from`](Self::copy_from) with an explicit strategy.
    pub fn copy_from_with(&mut self, strategy: Strategy, src: &[T]) -> usize {
        let n = src.len().min(N);
        strategy.copy_prefix(&mut self.data, src, n);
        if n < src.len() {
            trace_event!(requested = src.len(), stored = n, capacity = N, "truncating copy");
        }
        n
    }

    /// Sets every slot to `value`.
    ///
    /// Single-byte elements take the bulk path; wider ones are filled
    /// element by element.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.fill_with(Strategy::for_fill::<T>(), value);
    }

    /// [`fill`](Self::fill) with an explicit strategy.
    #[inline]
    pub fn fill_with(&mut self, strategy: Strategy, value: T) {
        strategy.fill(&mut self.data, value);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedVector, Strategy};

    use proptest::prelude::{any, proptest};

    #[test]
    fn test_copy_from_shorter_keeps_tail() {
        let mut v: BoundedVector<i32, 5> = BoundedVector::filled(-1);
        assert_eq!(v.copy_from(&[1, 2]), 2);
        assert_eq!(v.data(), &[1, 2, -1, -1, -1]);
    }

    #[test]
    fn test_copy_from_longer_truncates() {
        let mut v: BoundedVector<i32, 3> = BoundedVector::new();
        assert_eq!(v.copy_from(&[1, 2, 3, 4, 5]), 3);
        assert_eq!(v.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_copy_into_zero_capacity() {
        let mut v: BoundedVector<i32, 0> = BoundedVector::new();
        assert_eq!(v.copy_from(&[1, 2]), 0);
        v.fill(3);
        assert!(v.is_empty());
    }

    #[test]
    fn test_fill_sets_every_slot() {
        let mut bytes: BoundedVector<u8, 7> = BoundedVector::new();
        bytes.fill(0xAB);
        assert_eq!(bytes.data(), &[0xAB; 7]);

        let mut wide: BoundedVector<(u16, bool), 4> = BoundedVector::new();
        wide.fill((9, true));
        assert!(wide.iter().all(|x| *x == (9, true)));
    }

    #[test]
    fn test_fill_with_each_strategy() {
        for s in [Strategy::ElementWise, Strategy::Bulk] {
            let mut v: BoundedVector<u64, 4> = BoundedVector::new();
            v.fill_with(s, u64::MAX);
            assert_eq!(v, [u64::MAX; 4], "{s:?}");
        }
    }

    fn strategies_agree<const N: usize>(src: &[u32], seed: u32) {
        let mut each: BoundedVector<u32, N> = BoundedVector::filled(seed);
        let mut bulk = each;
        assert_eq!(
            each.copy_from_with(Strategy::ElementWise, src),
            bulk.copy_from_with(Strategy::Bulk, src)
        );
        assert_eq!(each, bulk, "copy N={N}");

        each.fill_with(Strategy::ElementWise, !seed);
        bulk.fill_with(Strategy::Bulk, !seed);
        assert_eq!(each, bulk, "fill N={N}");
    }

    proptest! {
        #[test]
        fn test_elementwise_and_bulk_produce_identical_vectors(
            src in proptest::collection::vec(any::<u32>(), 0..80),
            seed in any::<u32>(),
        ) {
            strategies_agree::<1>(&src, seed);
            strategies_agree::<2>(&src, seed);
            strategies_agree::<3>(&src, seed);
            strategies_agree::<8>(&src, seed);
            strategies_agree::<17>(&src, seed);
            strategies_agree::<32>(&src, seed);
            strategies_agree::<64>(&src, seed);
        }
    }
}
