//! Formal verification for the bounds laws of arrays, iterators and sections
//! using Kani.
//!
//! These proofs only run with Kani and are isolated from normal compilation
//! and testing.

#[cfg(any(doc, kani))]
pub mod kani_verification {
    use crate::*;

    const N: usize = 4;

    fn sample() -> FixedArray<u8, N> {
        FixedArray::from_fn(|i| i as u8)
    }

    /// `at(i)` succeeds exactly when `i < N` and then yields element `i`.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(6))]
    pub fn verify_fixed_array_at_law() {
        let a = sample();
        let index: usize = kani::any();
        match a.at(index) {
            Ok(value) => {
                assert!(index < N);
                assert_eq!(usize::from(*value), index);
            }
            Err(err) => {
                assert!(index >= N);
                assert!(err.is_range_error());
            }
        }
    }

    /// An in-range advance followed by the same regress returns home.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(6))]
    pub fn verify_advance_regress_round_trip() {
        let a = sample();
        let start: usize = kani::any();
        let n: usize = kani::any();
        kani::assume(start <= N);
        kani::assume(n <= N - start);

        let Ok(mut it) = BoundsCheckedIterator::at(&a, start) else {
            panic!("start within bounds");
        };
        assert!(it.advance(n).is_ok());
        assert!(it.regress(n).is_ok());
        assert_eq!(it.position(), start);
    }

    /// A move that would leave `[0, N]` fails and changes nothing.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(6))]
    pub fn verify_failed_move_leaves_iterator_unchanged() {
        let a = sample();
        let start: usize = kani::any();
        let delta: isize = kani::any();
        kani::assume(start <= N);

        let Ok(mut it) = BoundsCheckedIterator::at(&a, start) else {
            panic!("start within bounds");
        };
        let target = (start as isize).checked_add(delta);
        let in_range = matches!(target, Some(t) if (0..=N as isize).contains(&t));
        let moved = it.offset(delta);
        assert_eq!(moved.is_ok(), in_range);
        if !in_range {
            assert_eq!(it.position(), start);
        }
    }

    /// `subsection(pos, n)` fails past the end and otherwise clamps `n`.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(6))]
    pub fn verify_subsection_clamps() {
        let a = sample();
        let section = a.checked_section();
        let pos: usize = kani::any();
        let n: usize = kani::any();

        match section.subsection(pos, n) {
            Ok(sub) => {
                assert!(pos <= N);
                assert_eq!(sub.len(), n.min(N - pos));
            }
            Err(_) => assert!(pos > N),
        }
    }

    /// The cursor predicates agree with the position for every placement.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(6))]
    pub fn verify_cursor_predicates() {
        let a = sample();
        let position: usize = kani::any();
        kani::assume(position <= N);

        let Ok(it) = BoundsCheckedIterator::at(&a, position) else {
            panic!("position within bounds");
        };
        let cursor = AugmentedCursorIterator::from(it);
        assert_eq!(cursor.has_next(), position < N);
        assert_eq!(cursor.has_previous(), position > 0);
        assert_eq!(cursor.points_to_end_marker(), position == N);
        assert_eq!(cursor.points_to_item(), cursor.has_next());
    }
}
