// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Integration tests for the rampart-error crate.

#[cfg(test)]
mod tests {
    use rampart_error::{
        check_index, check_position, codes, ensure, kinds, Error, ErrorCategory, Result,
    };

    #[test]
    fn test_error_creation() {
        let error = Error::new(ErrorCategory::Range, codes::INDEX_OUT_OF_RANGE, "Test error");
        assert!(error.is_range_error());
        assert_eq!(error.code, codes::INDEX_OUT_OF_RANGE);
        assert_eq!(error.category, ErrorCategory::Range);
    }

    #[test]
    fn test_result_with_error() {
        let result: Result<i32> = Err(Error::END_MARKER);
        assert!(result.is_err());

        let error = result.err().unwrap();
        assert!(error.is_dereference_error());
    }

    #[test]
    fn test_question_mark_converts_kinds() {
        fn locked() -> Result<()> {
            Err::<(), _>(kinds::structure_locked_error())?;
            Ok(())
        }
        assert_eq!(locked().unwrap_err(), Error::STRUCTURE_LOCKED);
    }

    #[test]
    fn test_ensure_macro() {
        fn bounded(i: usize) -> Result<usize> {
            ensure!(i < 3, kinds::out_of_range_error("i >= 3"));
            Ok(i)
        }
        assert_eq!(bounded(2), Ok(2));
        assert_eq!(bounded(3).unwrap_err().message, "i >= 3");
    }

    #[test]
    fn test_bound_helpers_agree() {
        for len in 0..5usize {
            for i in 0..7usize {
                assert_eq!(check_index(i, len, "i").is_ok(), i < len);
                assert_eq!(check_position(i, len, "p").is_ok(), i <= len);
            }
        }
    }

    #[test]
    fn test_every_factory_passes_integrity() {
        let all = [
            Error::index_out_of_range("a"),
            Error::position_out_of_range("a"),
            Error::invalid_subsection("a"),
            Error::section_count_out_of_range("a"),
            Error::target_mismatch("a"),
            Error::reseat_rejected("a"),
            Error::empty_container("a"),
            Error::capacity_mismatch("a"),
            Error::reversed_range("a"),
            Error::position_overflow("a"),
            Error::end_marker_dereference("a"),
            Error::dangling_target("a"),
            Error::element_unavailable("a"),
            Error::structure_reentrancy("a"),
            Error::structure_held_at_destruction("a"),
            Error::lock_contended("a"),
        ];
        for error in all {
            assert!(error.validate_integrity(), "{error}");
        }
    }
}
