// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    element::Element,
    strategy::Strategy,
    string::{BoundedString, stored_len},
    trace::trace_event,
};

impl<E: Element, const N: usize> BoundedString<E, N> {
    /// Copies all of `src` under the truncation rule and returns the number of
    /// content elements stored.
    ///
    /// - `src.len() < N`: everything, then a terminator.
    /// - `src.len() == N`: everything, no terminator (saturated).
    /// - `src.len() > N`: the first `N - 1` elements, then a terminator.
    ///
    /// Elements after the new terminator keep their previous values.
    #[inline]
    pub fn copy(&mut self, src: &[E]) -> usize {
        self.copy_with(Strategy::Bulk, src)
    }

    /// Like [`copy`](Self::copy), limited to the first `min(count, src.len())` elements.
    #[inline]
    pub fn copy_counted(&mut self, src: &[E], count: usize) -> usize {
        self.copy_counted_with(Strategy::Bulk, src, count)
    }

    /// Copies until a terminator is read from `src` or `N - 1` elements were
    /// copied, then writes a terminator.
    ///
    /// This is the `strcpy`-style path: the result is never saturated and no
    /// more than `N - 1` source elements are read. A source without a
    /// terminator is bounded by its slice length.
    #[inline]
    pub fn copy_until_nul(&mut self, src: &[E]) -> usize {
        self.copy_until_nul_with(Strategy::Bulk, src)
    }

    /// Copies the content of another bounded string of any capacity.
    #[inline]
    pub fn copy_from_bounded<const M: usize>(&mut self, other: &BoundedString<E, M>) -> usize {
        self.copy(other.as_slice())
    }

    /// [`copy`](Self::copy) with an explicit strategy.
    #[inline]
    pub fn copy_with(&mut self, strategy: Strategy, src: &[E]) -> usize {
        self.copy_counted_with(strategy, src, src.len())
    }

    /// [`copy_counted`](Self::copy_counted) with an explicit strategy.
    pub fn copy_counted_with(&mut self, strategy: Strategy, src: &[E], count: usize) -> usize {
        let requested = count.min(src.len());
        let n = stored_len(requested, N);
        strategy.copy_prefix(&mut self.buf, src, n);
        self.terminate(n);
        if n < requested {
            trace_event!(requested, stored = n, capacity = N, "truncating copy");
        }
        n
    }

    /// [`copy_until_nul`](Self::copy_until_nul) with an explicit strategy.
    pub fn copy_until_nul_with(&mut self, strategy: Strategy, src: &[E]) -> usize {
        if N == 0 {
            return 0;
        }
        let limit = src.len().min(N - 1);
        let n = strategy.nul_prefix(src, limit);
        strategy.copy_prefix(&mut self.buf, src, n);
        self.buf[n] = E::NUL;
        if n == limit && limit < src.len() && !src[limit].is_nul() {
            trace_event!(stored = n, capacity = N, "truncating terminator-delimited copy");
        }
        n
    }

    /// Sets all `N` slots to `value`; no terminator slot is reserved.
    #[inline]
    pub fn fill(&mut self, value: E) {
        self.fill_with(Strategy::Bulk, value);
    }

    /// [`fill`](Self::fill) with an explicit strategy.
    #[inline]
    pub fn fill_with(&mut self, strategy: Strategy, value: E) {
        strategy.fill(&mut self.buf, value);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedString, Strategy};

    use proptest::prelude::{any, proptest};

    const STRATEGIES: [Strategy; 2] = [Strategy::ElementWise, Strategy::Bulk];

    #[test]
    fn test_copy_length_rule_for_small_capacities() {
        fn check<const N: usize>() {
            for len in 0..N + 4 {
                let src: std::vec::Vec<u8> = (1..=len as u8).collect();
                let mut s: BoundedString<u8, N> = BoundedString::new();
                let n = s.copy(&src);
                let expected = if len == N { N } else { len.min(N - 1) };
                assert_eq!(n, expected, "N={N} len={len}");
                assert_eq!(s.length(), expected, "N={N} len={len}");
                assert_eq!(s.as_slice(), &src[..expected]);
                if expected < N {
                    assert_eq!(s.as_buffer()[expected], 0);
                } else {
                    assert!(s.is_saturated());
                }
            }
        }
        check::<1>();
        check::<2>();
        check::<3>();
        check::<7>();
        check::<16>();
    }

    #[test]
    fn test_copy_leaves_tail_untouched() {
        let mut s: BoundedString<u8, 8> = BoundedString::filled(b'#');
        assert_eq!(s.copy(b"ab"), 2);
        assert_eq!(s.as_buffer(), b"ab\0#####");
        assert_eq!(s.copy(b"wxyz"), 4);
        assert_eq!(s.as_buffer(), b"wxyz\0###");
    }

    #[test]
    fn test_copy_counted() {
        let mut s: BoundedString<u8, 8> = BoundedString::new();
        assert_eq!(s.copy_counted(b"abcdef", 3), 3);
        assert_eq!(s.as_slice(), b"abc");
        assert_eq!(s.copy_counted(b"ab", 30), 2);
        assert_eq!(s.as_slice(), b"ab");
        assert_eq!(s.copy_counted(b"0123456789", 8), 8);
        assert!(s.is_saturated());
        assert_eq!(s.copy_counted(b"0123456789", 9), 7);
        assert_eq!(s.as_buffer(), b"0123456\0");
    }

    #[test]
    fn test_copy_until_nul() {
        let mut s: BoundedString<u8, 6> = BoundedString::filled(b'-');
        assert_eq!(s.copy_until_nul(b"ab\0cd"), 2);
        assert_eq!(s.as_buffer(), b"ab\0---");

        // a source that would fit exactly still leaves room for the terminator
        assert_eq!(s.copy_until_nul(b"abcdef"), 5);
        assert_eq!(s.as_buffer(), b"abcde\0");
        assert!(!s.is_saturated());

        assert_eq!(s.copy_until_nul(b""), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_copy_until_nul_capacity_one() {
        let mut s: BoundedString<u8, 1> = BoundedString::filled(b'z');
        assert_eq!(s.copy_until_nul(b"abc"), 0);
        assert_eq!(s.as_buffer(), &[0]);
    }

    #[test]
    fn test_copy_from_bounded() {
        let src: BoundedString<u8, 5> = BoundedString::from_array(b"abcde");
        let mut dst: BoundedString<u8, 5> = BoundedString::new();
        assert_eq!(dst.copy_from_bounded(&src), 5);
        assert!(dst.is_saturated());

        let mut small: BoundedString<u8, 3> = BoundedString::new();
        assert_eq!(small.copy_from_bounded(&src), 2);
        assert_eq!(small.as_buffer(), b"ab\0");
    }

    #[test]
    fn test_fill_has_no_terminator() {
        let mut s: BoundedString<u8, 4> = BoundedString::from_array(b"ab");
        s.fill(b'x');
        assert_eq!(s.as_buffer(), b"xxxx");
        assert!(s.is_saturated());
        assert_eq!(s.length(), 4);

        s.fill_with(Strategy::ElementWise, 0);
        assert!(s.is_empty());
        assert_eq!(s.as_buffer(), &[0; 4]);
    }

    #[test]
    fn test_strategies_agree_on_wide_elements() {
        let src = ['α', 'β', '\0', 'γ', 'δ', 'ε', 'ζ'];
        for count in 0..=src.len() {
            let mut bulk: BoundedString<char, 5> = BoundedString::filled('?');
            let mut each = bulk;
            let a = bulk.copy_counted_with(Strategy::Bulk, &src, count);
            let b = each.copy_counted_with(Strategy::ElementWise, &src, count);
            assert_eq!(a, b);
            assert_eq!(bulk.as_buffer(), each.as_buffer());
        }
    }

    /// Runs `copy`, `copy_counted`, `copy_until_nul` and `fill` under both
    /// strategies from the same starting buffer and compares the results.
    fn strategies_agree<const N: usize>(src: &[u8], count: usize, seed: u8) {
        let start: BoundedString<u8, N> = BoundedString::filled(seed);

        let mut results = [start; 2];
        let mut stored = [0usize; 2];
        for (i, s) in STRATEGIES.iter().enumerate() {
            stored[i] = results[i].copy_with(*s, src);
        }
        assert_eq!(stored[0], stored[1], "copy N={N}");
        assert_eq!(results[0].as_buffer(), results[1].as_buffer(), "copy N={N}");

        let mut results = [start; 2];
        for (i, s) in STRATEGIES.iter().enumerate() {
            stored[i] = results[i].copy_counted_with(*s, src, count);
        }
        assert_eq!(stored[0], stored[1], "copy_counted N={N}");
        assert_eq!(results[0].as_buffer(), results[1].as_buffer(), "copy_counted N={N}");

        let mut results = [start; 2];
        for (i, s) in STRATEGIES.iter().enumerate() {
            stored[i] = results[i].copy_until_nul_with(*s, src);
        }
        assert_eq!(stored[0], stored[1], "copy_until_nul N={N}");
        assert_eq!(results[0].as_buffer(), results[1].as_buffer(), "copy_until_nul N={N}");

        let mut results = [start; 2];
        for (i, s) in STRATEGIES.iter().enumerate() {
            results[i].fill_with(*s, seed.wrapping_add(1));
        }
        assert_eq!(results[0].as_buffer(), results[1].as_buffer(), "fill N={N}");

        // the const constructor is the element-wise path
        let mut runtime: BoundedString<u8, N> = BoundedString::new();
        runtime.copy(src);
        assert_eq!(BoundedString::<u8, N>::from_slice(src).as_buffer(), runtime.as_buffer());
    }

    macro_rules! for_capacities {
        ($src:expr, $count:expr, $seed:expr; $($n:literal)*) => {
            $( strategies_agree::<$n>($src, $count, $seed); )*
        };
    }

    proptest! {
        #[test]
        fn test_elementwise_and_bulk_produce_identical_buffers(
            src in proptest::collection::vec(any::<u8>(), 0..80),
            count in 0usize..96,
            seed in any::<u8>(),
        ) {
            for_capacities!(&src, count, seed;
                1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
                17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
                33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
                49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
            );
        }
    }
}
