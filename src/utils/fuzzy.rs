// Fuzzy matching for "did you mean" suggestions on unknown ids and names

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single rolling row instead of the full matrix
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)      // deletion
                .min(curr[j] + 1)               // insertion
                .min(prev[j] + cost);           // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Check if s2 is a substring of s1 (case-insensitive)
pub fn is_substring_match(s1: &str, s2: &str) -> bool {
    s1.to_lowercase().contains(&s2.to_lowercase())
}

/// Find near matches for `search` among `candidates`
///
/// Candidates within `max_distance` edits match directly. Longer candidates
/// containing the search text also match, prefixes ranking ahead of other
/// substrings. Returns up to 5 matches, closest first.
pub fn find_near_matches<S: AsRef<str>>(
    search: &str,
    candidates: &[S],
    max_distance: usize,
) -> Vec<(String, usize)> {
    let search_lower = search.to_lowercase();
    let mut matches: Vec<(String, usize)> = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let candidate_lower = candidate.to_lowercase();

        let distance = levenshtein_distance(&search_lower, &candidate_lower);
        if distance <= max_distance {
            matches.push((candidate.to_string(), distance));
            continue;
        }

        if !search_lower.is_empty()
            && search_lower.len() < candidate_lower.len()
            && is_substring_match(candidate, search)
        {
            let extra = candidate_lower.len() - search_lower.len();
            let substring_distance = if candidate_lower.starts_with(&search_lower) {
                extra
            } else {
                extra + 1
            };
            if substring_distance <= max_distance + 2 {
                matches.push((candidate.to_string(), substring_distance.min(max_distance)));
            }
        }
    }

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    matches.into_iter().take(5).collect()
}

/// Names of the near matches, for error messages
pub fn suggest<S: AsRef<str>>(search: &str, candidates: &[S], max_distance: usize) -> Vec<String> {
    find_near_matches(search, candidates, max_distance)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("c001", "c01"), 1);
    }

    #[test]
    fn test_is_substring_match() {
        assert!(is_substring_match("conv001", "conv"));
        assert!(is_substring_match("knowledge-source", "SOURCE"));
        assert!(!is_substring_match("risk", "priority"));
    }

    #[test]
    fn test_find_near_matches_ids() {
        let ids = ["c001", "c002", "c003", "c004"];
        let matches = find_near_matches("c005", &ids, 1);
        assert_eq!(matches.len(), 4);
        assert!(matches.iter().all(|(_, d)| *d == 1));

        let matches = find_near_matches("C001", &ids, 1);
        assert_eq!(matches[0], ("c001".to_string(), 0));

        assert!(find_near_matches("zzzzzz", &ids, 1).is_empty());
    }

    #[test]
    fn test_find_near_matches_substring() {
        let domains = ["knowledge-source", "conversation", "activity", "activity-kind"];
        let names = suggest("activ", &domains, 2);
        assert_eq!(names.first().map(String::as_str), Some("activity"));
        let names = suggest("conversaton", &domains, 2);
        assert_eq!(names, vec!["conversation".to_string()]);
    }

    #[test]
    fn test_empty_search_matches_nothing_by_substring() {
        let ids = ["conv001"];
        assert!(find_near_matches("", &ids, 2).is_empty());
    }

    #[test]
    fn test_at_most_five() {
        let ids: Vec<String> = (1..=9).map(|i| format!("conv00{}", i)).collect();
        assert_eq!(find_near_matches("conv000", &ids, 1).len(), 5);
    }
}
