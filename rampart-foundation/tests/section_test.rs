#![allow(clippy::unwrap_used)]
//! Section views: construction, narrowing, search and comparison.

use std::rc::Rc;

use rampart_foundation::prelude::*;

#[test]
fn test_construction_bounds() {
    let a = FixedArray::new([1, 2, 3, 4]);
    let start = BoundsCheckedIterator::at(&a, 1).unwrap();
    assert_eq!(Section::new(start, 3).unwrap().len(), 3);
    let err = Section::new(start, 4).unwrap_err();
    assert_eq!(err.code, codes::SECTION_COUNT_OUT_OF_RANGE);

    let end = StrongContiguousIterator::end(&a);
    assert!(StrongSection::new(end, 0).unwrap().is_empty());

    let whole = StrongSection::from_handle(&a).unwrap();
    assert_eq!(whole.as_slice(), a.as_slice());
}

#[test]
fn test_sections_over_every_handle_kind() {
    let fixed = FixedArray::new([2, 4, 6]);
    let shared = Rc::new(vec![2, 4, 6]);
    let weak = Rc::downgrade(&shared);

    let s1 = fixed.section();
    let s2 = Section::from_handle(Rc::clone(&shared)).unwrap();
    let s3 = Section::from_handle(weak).unwrap();

    assert!(s1.equal(&s2).unwrap());
    assert!(s2.equal(&s3).unwrap());
    assert_eq!(s3.find(&6).unwrap(), Some(2));
    assert_eq!(s3.get(1).unwrap(), 4);

    drop(s2);
    drop(shared);
    assert_eq!(s3.find(&6).unwrap_err(), Error::DANGLING);
    assert_eq!(s3.get(0).unwrap_err(), Error::DANGLING);
    assert_eq!(s3.len(), 3);
}

#[test]
fn test_narrowing_chain() {
    let a: FixedArray<usize, 8> = FixedArray::from_fn(|i| i * i);
    let s = a.section();

    let mut mid = s.subsection(2, 5).unwrap();
    assert_eq!(mid.as_slice(), &[4, 9, 16, 25, 36]);
    mid.remove_prefix(1).unwrap();
    mid.remove_suffix(2).unwrap();
    assert_eq!(mid.as_slice(), &[9, 16]);
    assert_eq!(mid.begin().position(), 3);
    assert_eq!(mid.end().unwrap().position(), 5);

    assert!(mid.remove_prefix(3).is_err());
    assert_eq!(mid.first(1).unwrap().at(0).unwrap(), &9);
    assert_eq!(mid.last(1).unwrap().at(0).unwrap(), &16);
    assert!(mid.last(3).is_err());

    let inner = mid.subsection(1, 100).unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner.subsection(1, 1).unwrap().len(), 0);
    assert_eq!(
        inner.subsection(2, 0).unwrap_err().code,
        codes::INVALID_SUBSECTION
    );
}

#[test]
fn test_search_family_on_checked_sections() {
    let text = FixedArray::new(*b"hello, world");
    let s = text.checked_section();

    assert_eq!(s.find(&b'o').unwrap(), Some(4));
    assert_eq!(s.rfind(&b'o').unwrap(), Some(8));
    assert_eq!(s.find(&b'z').unwrap(), None);
    assert_eq!(s.find_if(|c| c.is_ascii_punctuation()).unwrap(), Some(5));
    assert_eq!(s.rfind_if(u8::is_ascii_whitespace).unwrap(), Some(6));
    assert_eq!(s.find_first_of(b"wr").unwrap(), Some(7));
    assert_eq!(s.find_last_of(b"lo").unwrap(), Some(10));
    assert_eq!(s.find_first_not_of(b"hel").unwrap(), Some(4));
    assert_eq!(s.find_last_not_of(b"dlr").unwrap(), Some(8));
    assert!(s.contains(&b',').unwrap());

    let needle = FixedArray::new(*b"world");
    assert_eq!(s.find_section(&needle.section()).unwrap(), Some(7));
    let missing = FixedArray::new(*b"worlds");
    assert_eq!(s.find_section(&missing.section()).unwrap(), None);
    let empty = FixedArray::<u8, 0>::default();
    assert_eq!(s.find_section(&empty.section()).unwrap(), Some(0));
}

#[test]
fn test_prefix_suffix_and_ordering() {
    let a = FixedArray::new([1, 2, 3, 4]);
    let b = FixedArray::new([1, 2]);
    let c = FixedArray::new([3, 4]);
    let s = a.section();

    assert!(s.starts_with(&1).unwrap());
    assert!(s.ends_with(&4).unwrap());
    assert!(s.starts_with_section(&b.checked_section()).unwrap());
    assert!(s.ends_with_section(&c.section()).unwrap());
    assert!(!s.ends_with_section(&b.section()).unwrap());
    assert!(!b.section().starts_with_section(&s).unwrap());

    assert_eq!(s.compare(&b.section()).unwrap(), Some(Ordering::Greater));
    assert_eq!(b.section().compare(&c.section()).unwrap(), Some(Ordering::Less));
    assert_eq!(s.compare(&s).unwrap(), Some(Ordering::Equal));
    assert!(!s.equal(&b.section()).unwrap());

    let empty = s.subsection(4, 0).unwrap();
    assert!(!empty.starts_with(&1).unwrap());
    assert!(!empty.ends_with(&4).unwrap());
    assert!(empty.at(0).is_err());
}

#[test]
fn test_mutable_section_kernels() {
    let mut a = FixedArray::new([9, 4, 7, 1, 3, 8]);
    {
        let mut s = a.section_mut();
        s.subsection_mut(0, 3).unwrap().sort().unwrap();
        s.subsection_mut(3, 3).unwrap().sort_by(|x, y| y.cmp(x)).unwrap();
        assert_eq!(s.as_section().to_vec().unwrap(), vec![4, 7, 9, 8, 3, 1]);
        s.reverse().unwrap();
        s.transform_in_place(|x| *x *= 10).unwrap();
        assert_eq!(s.at(0).unwrap(), &10);
        assert!(s.at(6).is_err());
    }
    assert_eq!(a.as_slice(), &[10, 30, 80, 90, 70, 40]);

    let mut v = vec![1, 2, 3, 4, 5];
    let mut s = RandomAccessSectionMut::new(&mut v, 1, 3).unwrap();
    s.fill(&0).unwrap();
    s.swap(0, 2).unwrap();
    assert_eq!(v, [1, 0, 0, 0, 5]);
}

#[test]
fn test_caged_section_over_temporary() {
    let longest = unwrap_caged(caged_section(&vec![3, 9, 2, 9]), |s| {
        let first = s.begin();
        let last = s.end().unwrap();
        fast_path::max_element(&first, &last).unwrap().position()
    });
    assert_eq!(longest, 1);

    let sum = unwrap_caged(
        caged_section(&FixedArray::new([1, 2, 3, 4])).narrowed(1, 2).unwrap(),
        |s| s.iter().sum::<i32>(),
    );
    assert_eq!(sum, 5);
}
