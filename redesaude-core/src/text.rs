/// Substring test that ignores letter case.
///
/// Both sides are lowercased as a whole; there is no trimming
/// and no folding of diacritics (`"saúde"` does not match `"saude"`).
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_ignoring_case() {
        assert!(contains_ignore_case("Rua A, Boa Vista", "boa vista"));
        assert!(contains_ignore_case("Rua A, Boa Vista", "BOA VISTA"));
        assert!(contains_ignore_case("AV. CAXANGÁ, MADALENA", "caxangá"));
        assert!(contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn should_not_normalize() {
        assert!(!contains_ignore_case("Rua A, Boa Vista", " boa vista "));
        assert!(!contains_ignore_case("Caxangá", "caxanga"));
        assert!(!contains_ignore_case("Boa  Vista", "boa vista"));
    }
}
