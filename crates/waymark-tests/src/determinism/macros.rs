//! Test-generating macro for determinism checks.

/// Generates a `#[test]` that runs an expression several times and asserts
/// byte-identical output. The expression must produce something that
/// implements `AsRef<[u8]>`.
///
/// ```rust,ignore
/// use waymark_tests::test_determinism;
///
/// test_determinism!(builtin_records, {
///     records_json(&CollectionConfig::builtin(), "seed")
/// });
///
/// test_determinism!(builtin_summary, runs = 5, {
///     summary_json(&CollectionConfig::builtin(), "seed")
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        $crate::test_determinism!($name, runs = 3, $generate);
    };

    ($name:ident, runs = $runs:expr, $generate:expr) => {
        #[test]
        fn $name() {
            let result = $crate::determinism::verify_determinism(
                || {
                    let output = $generate;
                    let bytes: &[u8] = output.as_ref();
                    bytes.to_vec()
                },
                $runs,
            );
            result.assert_deterministic();
        }
    };
}
