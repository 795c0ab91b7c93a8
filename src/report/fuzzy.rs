//! Name suggestions for failed lookups

/// Suggests close matches for a name that was not found
pub trait NameSuggester {
    /// Up to `limit` distinct candidates, best first
    fn suggest(&self, query: &str, candidates: &[&str], limit: usize) -> Vec<String>;
}

/// Never suggests anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuggester;

impl NameSuggester for NoSuggester {
    fn suggest(&self, _query: &str, _candidates: &[&str], _limit: usize) -> Vec<String> {
        Vec::new()
    }
}

/// Closest names by Jaro-Winkler similarity over case-folded names.
///
/// A candidate containing the query scores 1.0, and a candidate is scored by
/// its best word as well as its whole name. There is no cutoff: the top
/// `limit` distinct names are always returned.
#[cfg(feature = "fuzzy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzySuggester;

#[cfg(feature = "fuzzy")]
impl FuzzySuggester {
    fn similarity(query: &str, name: &str) -> f64 {
        let name = name.to_lowercase();
        if name.contains(query) {
            return 1.0;
        }
        name.split([' ', '-'])
            .map(|word| strsim::jaro_winkler(query, word))
            .fold(strsim::jaro_winkler(query, &name), f64::max)
    }
}

#[cfg(feature = "fuzzy")]
impl NameSuggester for FuzzySuggester {
    fn suggest(&self, query: &str, candidates: &[&str], limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = candidates
            .iter()
            .map(|&name| (Self::similarity(&query, name), name))
            .collect();
        // stable, so equal scores keep roster order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut names: Vec<String> = Vec::new();
        for (_, name) in scored {
            if names.len() == limit {
                break;
            }
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

/// Suggester for the compiled feature set
pub fn default_suggester() -> Box<dyn NameSuggester> {
    #[cfg(feature = "fuzzy")]
    {
        Box::new(FuzzySuggester)
    }
    #[cfg(not(feature = "fuzzy"))]
    {
        Box::new(NoSuggester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_suggester_is_silent() {
        assert!(NoSuggester.suggest("Pikachu", &["Pikachu"], 5).is_empty());
    }

    #[cfg(feature = "fuzzy")]
    #[test]
    fn test_fuzzy_suggests_close_names() {
        let names = ["Charizard", "Charmander", "Charmeleon", "Bulbasaur", "Charizard"];
        let suggestions = FuzzySuggester.suggest("charizrd", &names, 3);

        assert_eq!(suggestions[0], "Charizard");
        assert_eq!(suggestions.iter().filter(|s| *s == "Charizard").count(), 1);
        assert!(!suggestions.contains(&"Bulbasaur".to_string()));
    }

    #[cfg(feature = "fuzzy")]
    #[test]
    fn test_fuzzy_partial_names() {
        let names = [
            "Charizard",
            "Charmander",
            "Charmeleon",
            "Bulbasaur",
            "Venusaur",
            "Mr Mime",
        ];
        let mime = FuzzySuggester.suggest("mime", &names, 5);
        assert_eq!(mime.len(), 5);
        assert_eq!(mime[0], "Mr Mime");

        assert_eq!(FuzzySuggester.suggest("zard", &names, 5)[0], "Charizard");
        assert_eq!(FuzzySuggester.suggest("MIEM", &names, 1), ["Mr Mime"]);
    }

    #[cfg(feature = "fuzzy")]
    #[test]
    fn test_fuzzy_respects_limit() {
        let names = ["Aaa", "Aab", "Aac", "Aad"];
        assert_eq!(FuzzySuggester.suggest("zz", &names, 2).len(), 2);
        assert!(FuzzySuggester.suggest("zz", &[], 2).is_empty());
    }
}
