use crate::domain::models::CommandEntry;

/// Reduce the catalog to the entries matching `query`, as indices into
/// `catalog` (an index may appear twice; the appended first entry can
/// duplicate a match).
///
/// Rules, in order:
/// - trimmed-empty query: identity, catalog order preserved;
/// - case-insensitive containment over title and description;
/// - no match at all: the fallback set (entries flagged `is_default`);
/// - otherwise the catalog's first entry is appended so the search
///   affordance stays reachable.
///
/// Pure function; matching is literal, so no query can error.
#[must_use]
pub fn filter_commands(catalog: &[CommandEntry], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..catalog.len()).collect();
    }

    let needle = query.to_lowercase();
    let mut matches: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            c.title.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect();

    if matches.is_empty() {
        return catalog
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_default)
            .map(|(i, _)| i)
            .collect();
    }

    if !catalog.is_empty() {
        matches.push(0);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CommandAction, CommandEntry, LocalAction};

    fn entry(title: &str, description: &str, is_default: bool) -> CommandEntry {
        let mut entry = CommandEntry::builtin(
            title,
            description,
            "·",
            CommandAction::Local(LocalAction::WebSearch),
        );
        entry.is_default = is_default;
        entry
    }

    fn sample_catalog() -> Vec<CommandEntry> {
        vec![
            entry("Search", "Search the web for a query", true),
            entry("New tab", "Open a new tab", false),
            entry("Close tab", "Close the current tab", false),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter_commands(&catalog, ""), vec![0, 1, 2]);
        assert_eq!(filter_commands(&catalog, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn match_is_case_insensitive_over_title_and_description() {
        let catalog = sample_catalog();
        // "CLOSE" hits "Close tab" by title; first entry appended.
        assert_eq!(filter_commands(&catalog, "CLOSE"), vec![2, 0]);
        // "open" only appears in "New tab"'s description.
        assert_eq!(filter_commands(&catalog, "open"), vec![1, 0]);
    }

    #[test]
    fn no_match_returns_the_fallback_set() {
        let catalog = sample_catalog();
        assert_eq!(filter_commands(&catalog, "zzzznomatch"), vec![0]);
    }

    #[test]
    fn no_match_and_no_default_returns_empty() {
        let catalog = vec![entry("New tab", "Open a new tab", false)];
        assert_eq!(filter_commands(&catalog, "zzz"), Vec::<usize>::new());
    }

    #[test]
    fn first_entry_appended_even_when_it_already_matched() {
        let catalog = sample_catalog();
        assert_eq!(filter_commands(&catalog, "search"), vec![0, 0]);
    }

    #[test]
    fn tab_matches_both_tab_commands() {
        let catalog = sample_catalog();
        assert_eq!(filter_commands(&catalog, "tab"), vec![1, 2, 0]);
    }

    #[test]
    fn regex_metacharacters_are_treated_literally() {
        let catalog = sample_catalog();
        // An unescapable-regex query must degrade to containment, not error.
        assert_eq!(filter_commands(&catalog, "(unclosed["), vec![0]);

        let mut weird = sample_catalog();
        weird.push(entry("C++ docs", "Open cppreference", false));
        assert_eq!(filter_commands(&weird, "c++"), vec![3, 0]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert_eq!(filter_commands(&[], ""), Vec::<usize>::new());
        assert_eq!(filter_commands(&[], "anything"), Vec::<usize>::new());
    }
}
