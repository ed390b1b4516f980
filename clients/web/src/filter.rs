//! Local search over the fetched media list
//!
//! The category filter narrows first, then the query is matched
//! approximately across title, category, director, and year. Results keep
//! the best-match-first order the fuzzy scores give them.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::models::MediaEntry;

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Filter the entry list by exact category and fuzzy query
pub fn filter_entries(entries: &[MediaEntry], query: &str, category: &str) -> Vec<MediaEntry> {
    let by_category = entries
        .iter()
        .filter(|entry| {
            category == ALL_CATEGORIES || entry.category.eq_ignore_ascii_case(category)
        })
        .cloned();

    let query = query.trim();
    if query.is_empty() {
        return by_category.collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, MediaEntry)> = by_category
        .filter_map(|entry| match_score(&matcher, &entry, query).map(|score| (score, entry)))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, entry)| entry).collect()
}

/// Best fuzzy score of the query across the searchable fields
fn match_score(matcher: &SkimMatcherV2, entry: &MediaEntry, query: &str) -> Option<i64> {
    let fields = [
        Some(entry.title.as_str()),
        Some(entry.category.as_str()),
        entry.director.as_deref(),
        entry.year.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .filter_map(|field| matcher.fuzzy_match(field, query))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str, director: Option<&str>, year: Option<&str>) -> MediaEntry {
        MediaEntry {
            id: title.to_lowercase(),
            title: title.to_string(),
            category: category.to_string(),
            director: director.map(str::to_string),
            budget: None,
            location: None,
            duration: None,
            year: year.map(str::to_string),
            image: None,
            user_id: "owner".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn sample() -> Vec<MediaEntry> {
        vec![
            entry("Dune", "Movie", Some("Denis Villeneuve"), Some("2021")),
            entry("The Godfather", "Movie", Some("Francis Ford Coppola"), Some("1972")),
            entry("Severance", "TV Show", None, Some("2022")),
            entry("Planet Earth", "Documentary", None, Some("2006")),
        ]
    }

    #[test]
    fn test_empty_query_applies_category_only() {
        let entries = sample();

        let all = filter_entries(&entries, "", ALL_CATEGORIES);
        assert_eq!(all.len(), 4);

        let movies = filter_entries(&entries, "", "Movie");
        assert_eq!(movies.len(), 2);
        assert!(movies.iter().all(|e| e.category == "Movie"));

        let shows = filter_entries(&entries, "  ", "TV Show");
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].title, "Severance");
    }

    #[test]
    fn test_fuzzy_match_on_title() {
        let entries = sample();

        let hits = filter_entries(&entries, "godfthr", ALL_CATEGORIES);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Godfather");
    }

    #[test]
    fn test_fuzzy_match_on_director_and_year() {
        let entries = sample();

        let by_director = filter_entries(&entries, "villeneuve", ALL_CATEGORIES);
        assert!(by_director.iter().any(|e| e.title == "Dune"));

        let by_year = filter_entries(&entries, "1972", ALL_CATEGORIES);
        assert_eq!(by_year.len(), 1);
        assert_eq!(by_year[0].title, "The Godfather");
    }

    #[test]
    fn test_category_narrows_before_query() {
        let entries = sample();

        // "Severance" matches the query but is filtered out by category
        let hits = filter_entries(&entries, "severance", "Movie");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let entries = sample();
        assert!(filter_entries(&entries, "zzzzqqqq", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_better_match_sorts_first() {
        let entries = vec![
            entry("Dune", "Movie", None, None),
            entry("Dune: Part Two", "Movie", None, None),
            entry("Dumbo", "Movie", None, None),
        ];

        let hits = filter_entries(&entries, "dune", ALL_CATEGORIES);
        assert!(hits.len() >= 2);
        assert_eq!(hits[0].title, "Dune");
    }
}
