// Reference name normalization.
//
// Purely structural: one leading `&` and one trailing `;` are removed when
// both are present. Case is never folded.

/// Strip `&...;` markup from a reference, yielding the candidate canonical
/// name. Input that is not wrapped on both sides is returned unchanged.
pub fn normalize_name(reference: &str) -> &str {
    reference
        .strip_prefix('&')
        .and_then(|rest| rest.strip_suffix(';'))
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_reference_is_stripped() {
        assert_eq!(normalize_name("&copy;"), "copy");
        assert_eq!(normalize_name("&AMP;"), "AMP");
    }

    #[test]
    fn bare_name_is_unchanged() {
        assert_eq!(normalize_name("amp"), "amp");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn half_wrapped_reference_is_unchanged() {
        assert_eq!(normalize_name("&amp"), "&amp");
        assert_eq!(normalize_name("amp;"), "amp;");
    }

    #[test]
    fn lone_delimiters_are_unchanged() {
        assert_eq!(normalize_name("&"), "&");
        assert_eq!(normalize_name(";"), ";");
    }

    #[test]
    fn empty_wrapping_yields_empty_name() {
        assert_eq!(normalize_name("&;"), "");
    }

    #[test]
    fn only_one_delimiter_pair_is_removed() {
        assert_eq!(normalize_name("&&amp;;"), "&amp;");
        assert_eq!(normalize_name("&;;"), ";");
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(normalize_name("&Copy;"), "Copy");
        assert_ne!(normalize_name("&COPY;"), normalize_name("&copy;"));
    }

    #[test]
    fn non_ascii_is_compared_structurally() {
        assert_eq!(normalize_name("&\u{00E9}t\u{00E9};"), "\u{00E9}t\u{00E9}");
        assert_eq!(normalize_name("a\0b"), "a\0b");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unwrapped_input_is_identity(s in "\\PC*") {
                prop_assume!(!(s.starts_with('&') && s.ends_with(';')));
                prop_assert_eq!(normalize_name(&s), s.as_str());
            }

            #[test]
            fn wrapping_then_normalizing_restores_name(name in "\\PC*") {
                let wrapped = format!("&{name};");
                prop_assert_eq!(normalize_name(&wrapped), name.as_str());
            }
        }
    }
}
