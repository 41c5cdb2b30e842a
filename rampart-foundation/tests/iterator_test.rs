#![allow(clippy::unwrap_used)]
//! Checked, cursor and strong iterators across handle kinds.

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use rampart_foundation::prelude::*;

#[test]
fn test_walk_forward_then_back() {
    let a = FixedArray::new(['a', 'b', 'c']);
    let mut it = BoundsCheckedIterator::begin(&a).unwrap();
    let mut seen = Vec::new();
    while !it.is_end().unwrap() {
        seen.push(it.get().unwrap());
        it.advance(1).unwrap();
    }
    assert_eq!(seen, ['a', 'b', 'c']);

    let err = it.advance(1).unwrap_err();
    assert_eq!(err.code, codes::POSITION_OUT_OF_RANGE);
    assert_eq!(it.position(), 3);
    assert_eq!(it.item().unwrap_err(), Error::END_MARKER);

    it.regress(3).unwrap();
    assert_eq!(it.item().unwrap(), &'a');
    assert!(it.regress(1).is_err());
    assert!(it.offset(isize::MIN).is_err());
    assert_eq!(it.position(), 0);
}

#[test]
fn test_offsets_and_distance() {
    let data = [10, 20, 30, 40];
    let first = BoundsCheckedIterator::begin(&data).unwrap();
    let mut it = BoundsCheckedIterator::at(&data, 2).unwrap();

    assert_eq!(it.get_at_offset(-2).unwrap(), 10);
    assert_eq!(it.item_at_offset(1).unwrap(), &40);
    assert_eq!(it.item_at_offset(2).unwrap_err(), Error::END_MARKER);
    assert!(it.with_item_at_offset(3, |x| *x).is_err());

    assert_eq!(first.distance_to(&it).unwrap(), 2);
    assert_eq!(it.distance_to(&first).unwrap(), -2);
    assert!(first < it);

    it.offset(-1).unwrap();
    assert_eq!(it.remaining().unwrap(), 3);
    assert!(BoundsCheckedIterator::at(&data, 5).is_err());
}

#[test]
fn test_iterators_of_different_targets_do_not_mix() {
    let a = [1, 2, 3];
    let b = [1, 2, 3];
    let ia = BoundsCheckedIterator::begin(&a).unwrap();
    let ib = BoundsCheckedIterator::begin(&b).unwrap();

    assert!(!ia.same_target(&ib));
    assert_ne!(ia, ib);
    assert_eq!(ia.partial_cmp(&ib), None);
    assert_eq!(ia.compare(&ib).unwrap_err().code, codes::TARGET_MISMATCH);
    assert_eq!(ia.distance_to(&ib).unwrap_err().code, codes::TARGET_MISMATCH);
}

#[test]
fn test_borrowed_handles_reseat() {
    let a: &[i32] = &[1, 2, 3];
    let b: &[i32] = &[4, 5];
    let mut it = BoundsCheckedIterator::begin(a).unwrap();
    it.assign(BoundsCheckedIterator::end(b).unwrap()).unwrap();
    assert_eq!(it.position(), 2);
    assert!(it.is_end().unwrap());
}

#[test]
fn test_shared_handles_outlive_the_borrow() {
    let shared = Rc::new(FixedArray::new([5u16, 6, 7]));
    let it = {
        let local = Rc::clone(&shared);
        BoundsCheckedIterator::at(local, 1).unwrap()
    };
    assert_eq!(it.item().unwrap(), &6);
    assert_eq!(it.target_len(), 3);

    let strong = it.clone().into_strong();
    assert_eq!(strong.as_slice(), &[6, 7]);
    assert_eq!(BoundsCheckedIterator::from(strong), it);

    let threaded = Arc::new([1u8, 2, 3]);
    let worker = {
        let handle = Arc::clone(&threaded);
        std::thread::spawn(move || {
            let first = StrongContiguousIterator::begin(handle.clone());
            let last = StrongContiguousIterator::end(handle);
            fast_path::count_if(&first, &last, |x| x % 2 == 1).unwrap()
        })
    };
    assert_eq!(worker.join().unwrap(), 2);
}

#[test]
fn test_weak_handle_reports_dangling() {
    let strong = Rc::new(vec![1, 2, 3]);
    let mut it = BoundsCheckedIterator::begin(Rc::downgrade(&strong)).unwrap();
    it.advance(1).unwrap();
    assert_eq!(it.get().unwrap(), 2);

    drop(strong);
    assert_eq!(it.get().unwrap_err(), Error::DANGLING);
    assert_eq!(it.size().unwrap_err(), Error::DANGLING);
    assert!(it.advance(1).unwrap_err().is_dereference_error());
    assert_eq!(it.position(), 1);
    assert!(BoundsCheckedIterator::end(it.into_handle()).is_err());
}

#[test]
fn test_cursor_walk() {
    let a = FixedArray::new([1, 2, 3]);
    let mut cursor = a.cursor();
    assert!(!cursor.has_previous());
    assert!(cursor.set_to_previous().is_err());

    let mut total = 0;
    while cursor.has_next() {
        total += cursor.item().unwrap();
        cursor.set_to_next().unwrap();
    }
    assert_eq!(total, 6);
    assert!(cursor.points_to_end_marker());
    assert!(!cursor.points_to_item());
    assert_eq!(cursor.previous_item().unwrap(), &3);
    assert_eq!(cursor.set_to_next().unwrap_err().code, codes::POSITION_OUT_OF_RANGE);

    cursor.set_to_previous().unwrap();
    assert_eq!(cursor.get().unwrap(), 3);
    assert_eq!(cursor.get_previous().unwrap(), 2);
}

#[test]
fn test_cursor_over_dangling_weak_is_inert() {
    let strong = Rc::new(VecDeque::from([1, 2]));
    let mut cursor = AugmentedCursorIterator::begin(Rc::downgrade(&strong)).unwrap();
    assert!(cursor.has_next());
    drop(strong);
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
    assert!(!cursor.points_to_end_marker());
    assert!(cursor.set_to_next().is_err());
    assert_eq!(cursor.with_item(|x| *x).unwrap_err(), Error::DANGLING);
}

#[test]
fn test_strong_iterator_slices() {
    let a = FixedArray::new([1, 2, 3, 4, 5]);
    let first = StrongContiguousIterator::at(&a, 1).unwrap();
    let last = StrongContiguousIterator::at(&a, 4).unwrap();
    assert_eq!(first.as_slice_to(&last).unwrap(), &[2, 3, 4]);
    assert_eq!(last.as_slice_to(&first).unwrap_err().code, codes::REVERSED_RANGE);

    let other = a.clone();
    let foreign = StrongContiguousIterator::end(&other);
    assert_eq!(first.as_slice_to(&foreign).unwrap_err().code, codes::TARGET_MISMATCH);

    assert!(first.is_valid());
    assert_eq!(first.remaining(), 4);
    assert_eq!(first.into_iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
    assert_eq!(a.strong_begin().into_iter().rev().next(), Some(&5));
}
