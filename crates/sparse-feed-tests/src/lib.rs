pub mod fixtures;
pub mod smoke;

/// Expands to one `#[test]` per smoke check, so downstream crates that feed
/// sparse inputs can run the whole conversion suite with a single line.
#[macro_export]
macro_rules! define_sparse_feed_tests {
    ($module:ident) => {
        #[cfg(test)]
        mod $module {
            use $crate::smoke;

            #[test]
            fn full_batch_matches_expected() {
                smoke::full_batch_matches_expected();
            }

            #[test]
            fn single_sample_matches_expected() {
                smoke::single_sample_matches_expected();
            }

            #[test]
            fn zeros_are_skipped() {
                smoke::zeros_are_skipped();
            }

            #[test]
            fn mismatched_shapes_fail() {
                smoke::mismatched_shapes_fail();
            }

            #[test]
            fn dynamic_axis_ignores_sequence_length() {
                smoke::dynamic_axis_ignores_sequence_length();
            }

            #[test]
            fn conversion_is_pure() {
                smoke::conversion_is_pure(7);
            }
        }
    };
}
