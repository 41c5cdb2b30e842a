#![allow(clippy::unwrap_used)]
//! FixedArray behaviour through the public API.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rampart_foundation::prelude::*;
use rampart_sync::RawExclusive;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_checked_access_reports_range_errors() {
    let mut a = FixedArray::<u32, 4>::from_fn(|i| (i as u32) * 10);

    assert_eq!(a.at(3).unwrap(), &30);
    let err = a.at(4).unwrap_err();
    assert!(err.is_range_error());
    assert_eq!(err.code, codes::INDEX_OUT_OF_RANGE);

    *a.at_mut(0).unwrap() = 5;
    *a.back_mut().unwrap() += 1;
    assert_eq!(a.as_slice(), &[5, 10, 20, 31]);
    assert_eq!(a.front().unwrap(), &5);
    assert!(a.get(9).is_none());
}

#[test]
fn test_zero_capacity_array() {
    let mut a = FixedArray::<String, 0>::default();
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 0);
    assert_eq!(a.front().unwrap_err().code, codes::EMPTY_CONTAINER);
    assert_eq!(a.back_mut().unwrap_err().code, codes::EMPTY_CONTAINER);
    assert!(a.at(0).is_err());
    assert!(a.fill(String::from("x")).is_ok());
    assert_eq!(a.begin(), a.end());
}

#[test]
fn test_construction_from_slices() {
    let exact = FixedArray::<u8, 3>::try_from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(exact.into_inner(), [1, 2, 3]);

    let err = FixedArray::<u8, 3>::try_from_slice(&[1, 2]).unwrap_err();
    assert_eq!(err.code, codes::CAPACITY_MISMATCH);

    let padded = FixedArray::<u8, 4>::try_from_slice_padded(&[7]).unwrap();
    assert_eq!(padded.as_slice(), &[7, 0, 0, 0]);
    assert!(FixedArray::<u8, 1>::try_from_slice_padded(&[1, 2]).is_err());

    let from_list = FixedArray::<i64, 5>::padded([-1, -2]);
    assert_eq!(from_list.as_slice(), &[-1, -2, 0, 0, 0]);

    let converted: FixedArray<u8, 2> = [9u8, 8].as_slice().try_into().unwrap();
    assert_eq!(converted, FixedArray::from([9, 8]));
}

#[test]
fn test_structural_operations_rejected_while_locked() {
    let mut a = FixedArray::new([1, 2, 3]);
    let mut b = FixedArray::new([4, 5, 6]);

    a.structure_lock().raw_acquire();
    let err = a.fill(0).unwrap_err();
    assert!(err.is_structure_error());
    assert!(a.assign(&b).is_err());
    assert!(b.swap(&mut a).is_err());
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(b.as_slice(), &[4, 5, 6]);

    // Element access is not structural and keeps working.
    *a.at_mut(1).unwrap() = 20;
    a.structure_lock().raw_release();

    a.swap(&mut b).unwrap();
    assert_eq!(a.as_slice(), &[4, 5, 6]);
    assert_eq!(b.as_slice(), &[1, 20, 3]);
    assert!(!a.structure_lock().is_held());
    assert!(!b.structure_lock().is_held());
}

#[test]
fn test_section_kernels_rejected_while_locked() {
    let mut a = FixedArray::new([3, 1, 2]);

    a.structure_lock().raw_acquire();
    assert_eq!(a.section_mut().fill(&9).unwrap_err().code, codes::STRUCTURE_REENTRANCY);
    assert_eq!(a.section_mut().sort().unwrap_err().code, codes::STRUCTURE_REENTRANCY);
    assert_eq!(a.section_mut().reverse().unwrap_err().code, codes::STRUCTURE_REENTRANCY);
    let err = a.section_mut().transform_in_place(|x| *x += 1).unwrap_err();
    assert_eq!(err, Error::STRUCTURE_LOCKED);
    assert_eq!(a.as_slice(), &[3, 1, 2]);

    // Element access through the section stays available.
    a.section_mut().swap(0, 2).unwrap();
    assert_eq!(a.as_slice(), &[2, 1, 3]);
    a.structure_lock().raw_release();

    a.section_mut().sort().unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    a.section_mut().reverse().unwrap();
    assert_eq!(a.as_slice(), &[3, 2, 1]);
    a.section_mut().transform_in_place(|x| *x *= 10).unwrap();
    assert_eq!(a.as_slice(), &[30, 20, 10]);
    a.section_mut().fill(&9).unwrap();
    assert_eq!(a.as_slice(), &[9, 9, 9]);
    assert!(!a.structure_lock().is_held());
}

#[test]
fn test_subsection_kernels_share_the_lock() {
    let mut a = FixedArray::new([5, 4, 3, 2, 1]);
    {
        let mut whole = a.section_mut();
        let mut middle = whole.subsection_mut(1, 3).unwrap();
        middle.sort().unwrap();
    }
    assert_eq!(a.as_slice(), &[5, 2, 3, 4, 1]);

    a.structure_lock().raw_acquire();
    {
        let mut whole = a.section_mut();
        let mut tail = whole.subsection_mut(3, 2).unwrap();
        assert!(tail.reverse().unwrap_err().is_structure_error());
    }
    a.structure_lock().raw_release();
    assert_eq!(a.as_slice(), &[5, 2, 3, 4, 1]);
}

/// Set in the child process spawned by `test_drop_while_locked_aborts`.
#[cfg(feature = "std")]
const DROP_LOCKED_CHILD: &str = "RAMPART_DROP_LOCKED_CHILD";

#[cfg(feature = "std")]
#[test]
fn test_drop_while_locked_aborts() {
    use std::process::Command;

    if std::env::var_os(DROP_LOCKED_CHILD).is_some() {
        let a = FixedArray::new([1u8, 2]);
        a.structure_lock().raw_acquire();
        drop(a);
        println!("survived drop");
        return;
    }

    let output = Command::new(std::env::current_exe().unwrap())
        .args(["--exact", "test_drop_while_locked_aborts", "--nocapture", "--test-threads=1"])
        .env(DROP_LOCKED_CHILD, "1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("survived drop"), "{stdout}");
    assert!(stderr.contains("[Structure][E3001]"), "{stderr}");
}

#[test]
fn test_assignment_and_value_semantics() {
    let mut a = FixedArray::new([String::from("a"), String::from("b")]);
    let b = FixedArray::new([String::from("x"), String::from("y")]);

    a.assign(&b).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    a.assign_from(FixedArray::new([String::from("z"), String::new()])).unwrap();
    assert!(a > b);
    assert_eq!(format!("{a:?}"), r#"["z", ""]"#);

    let c = a.clone();
    assert_eq!(c.cmp(&a), Ordering::Equal);
}

#[test]
fn test_iteration_forms() {
    let mut a = FixedArray::new([1, 2, 3]);
    for x in &mut a {
        *x *= 2;
    }
    assert_eq!((&a).into_iter().sum::<i32>(), 12);
    assert_eq!(a.at(2).unwrap(), &6);
    *a.at_mut(0).unwrap() = 0;
    assert_eq!(a.at_mut(3).unwrap_err().code, codes::INDEX_OUT_OF_RANGE);
    let doubled = a.map(|x| x * 10);
    assert_eq!(doubled.into_iter().collect::<Vec<_>>(), vec![0, 40, 60]);
}

#[test]
fn test_handle_producers_agree() {
    let a = FixedArray::new([3, 1, 2]);
    assert_eq!(a.begin().position(), 0);
    assert_eq!(a.end().position(), 3);
    assert_eq!(a.strong_end().as_checked(), &a.end());
    assert!(a.cursor().has_next());
    assert_eq!(a.section().as_slice(), a.as_slice());
    assert_eq!(a.checked_section().len(), 3);
}
