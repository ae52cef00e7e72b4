use super::core::first_difference;
use super::*;

#[test]
fn test_identical_outputs() {
    let result = verify_determinism(|| vec![1u8, 2, 3], 3);
    assert!(result.is_deterministic);
    assert_eq!(result.runs, 3);
    assert_eq!(result.output_size, 3);
    assert_eq!(result.hash, compute_hash(&[1, 2, 3]));
}

#[test]
fn test_detects_changing_output() {
    let counter = std::cell::Cell::new(0u8);
    let result = verify_determinism(
        || {
            counter.set(counter.get() + 1);
            vec![7u8, counter.get()]
        },
        2,
    );
    assert!(!result.is_deterministic);
    let diff = result.diff_info.unwrap();
    assert_eq!(diff.offset, 1);
    assert_eq!(diff.expected, Some(1));
    assert_eq!(diff.actual, Some(2));
    assert_eq!(diff.run_index, 1);
    assert_eq!(diff.before, vec![7]);
}

#[test]
fn test_length_mismatch() {
    let diff = first_difference(&[1, 2, 3], &[1, 2], 4).unwrap();
    assert_eq!(diff.offset, 2);
    assert_eq!(diff.expected, Some(3));
    assert_eq!(diff.actual, None);
    assert!(diff.to_string().contains("<end>"));

    assert!(first_difference(&[1, 2], &[1, 2], 1).is_none());
}

#[test]
fn test_hash_determinism() {
    assert!(verify_hash_determinism(&[]));
    assert!(verify_hash_determinism(&["a".to_string(), "a".to_string()]));
    assert!(!verify_hash_determinism(&["a".to_string(), "b".to_string()]));
}

#[test]
#[should_panic(expected = "Non-deterministic output detected")]
fn test_assert_deterministic_panics() {
    let counter = std::cell::Cell::new(0u8);
    assert_deterministic(2, || {
        counter.set(counter.get() + 1);
        vec![counter.get()]
    });
}

crate::test_determinism!(macro_constant_output, { b"waymark".to_vec() });
