use super::{Category, Snippet, Subcategory};

/// A filtered view into the catalog. Holds references into the `'static`
/// data; the catalog itself is never copied or mutated.
#[derive(Debug)]
pub struct CategoryView {
    pub category: &'static Category,
    pub subcategories: Vec<SubcategoryView>,
}

#[derive(Debug)]
pub struct SubcategoryView {
    pub subcategory: &'static Subcategory,
    pub snippets: Vec<&'static Snippet>,
}

/// Derives the view to render for a search term. Pure: same inputs, same
/// output, no side effects; cheap enough to run on every keystroke.
///
/// An empty term yields the full catalog in its original order. A non-empty
/// term (whitespace is not trimmed) keeps a snippet when the lowercased term
/// is a substring of its lowercased title, description, or any tag, then
/// prunes subcategories and categories left without snippets. Ordering of the
/// survivors matches the catalog at every level. Only snippet-level fields
/// are matched; subcategory and category metadata is not consulted.
pub fn filter_library(library: &'static [Category], search_term: &str) -> Vec<CategoryView> {
    if search_term.is_empty() {
        return library
            .iter()
            .map(|category| CategoryView {
                category,
                subcategories: category
                    .subcategories
                    .iter()
                    .map(|subcategory| SubcategoryView {
                        subcategory,
                        snippets: subcategory.snippets.iter().collect(),
                    })
                    .collect(),
            })
            .collect();
    }

    let needle = search_term.to_lowercase();
    library
        .iter()
        .filter_map(|category| {
            let subcategories: Vec<SubcategoryView> = category
                .subcategories
                .iter()
                .filter_map(|subcategory| {
                    let snippets: Vec<&'static Snippet> = subcategory
                        .snippets
                        .iter()
                        .filter(|snippet| snippet_matches(snippet, &needle))
                        .collect();
                    if snippets.is_empty() {
                        None
                    } else {
                        Some(SubcategoryView {
                            subcategory,
                            snippets,
                        })
                    }
                })
                .collect();
            if subcategories.is_empty() {
                None
            } else {
                Some(CategoryView {
                    category,
                    subcategories,
                })
            }
        })
        .collect()
}

fn snippet_matches(snippet: &Snippet, needle: &str) -> bool {
    snippet.title.to_lowercase().contains(needle)
        || snippet.description.to_lowercase().contains(needle)
        || snippet
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryIcon, LIBRARY};
    use pretty_assertions::assert_eq;

    static HOOK_SNIPPETS: [Snippet; 2] = [
        Snippet {
            id: "use-state-hook",
            title: "useState with Complex State",
            description: "Managing complex state with useState hook",
            code: "const [state, setState] = useState(initial);",
            language: "typescript",
            filename: Some("UserProfile.tsx"),
            tags: &["useState", "useCallback", "typescript"],
        },
        Snippet {
            id: "custom-hooks",
            title: "Custom Hooks Collection",
            description: "Reusable custom hooks for common functionality",
            code: "function useLocalStorage(key) { /* ... */ }",
            language: "typescript",
            filename: Some("CustomHooks.tsx"),
            tags: &["custom-hooks", "localStorage"],
        },
    ];

    static FIXTURE: [Category; 1] = [Category {
        id: "react",
        title: "React",
        description: "React patterns",
        icon: CategoryIcon::Code,
        subcategories: &[Subcategory {
            id: "hooks",
            title: "Hooks",
            description: "Hook patterns",
            tags: &["subcategory-only-tag"],
            snippets: &HOOK_SNIPPETS,
        }],
    }];

    fn snippet_ids(view: &[CategoryView]) -> Vec<&'static str> {
        view.iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.snippets.iter())
            .map(|s| s.id)
            .collect()
    }

    #[test]
    fn tag_match_keeps_only_the_matching_snippet() {
        let view = filter_library(&FIXTURE, "typescript");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].category.id, "react");
        assert_eq!(view[0].subcategories.len(), 1);
        assert_eq!(view[0].subcategories[0].subcategory.id, "hooks");
        assert_eq!(snippet_ids(&view), vec!["use-state-hook"]);
    }

    #[test]
    fn title_and_description_match_case_insensitively() {
        assert_eq!(snippet_ids(&filter_library(&FIXTURE, "CUSTOM HOOKS")), vec!["custom-hooks"]);
        assert_eq!(snippet_ids(&filter_library(&FIXTURE, "reusable")), vec!["custom-hooks"]);
        assert_eq!(
            snippet_ids(&filter_library(&FIXTURE, "localstorage")),
            vec!["custom-hooks"]
        );
    }

    #[test]
    fn substring_not_whole_word() {
        assert_eq!(snippet_ids(&filter_library(&FIXTURE, "usestate")).len(), 1);
        assert_eq!(snippet_ids(&filter_library(&FIXTURE, "useS")).len(), 1);
    }

    #[test]
    fn no_match_yields_empty_view() {
        assert!(filter_library(&FIXTURE, "zzz-no-match").is_empty());
        assert!(filter_library(LIBRARY, "zzz-no-match").is_empty());
    }

    #[test]
    fn subcategory_tags_are_not_searched() {
        // Matching is pinned at the snippet level; a tag that only exists on
        // the subcategory finds nothing.
        assert!(filter_library(&FIXTURE, "subcategory-only-tag").is_empty());
    }

    #[test]
    fn empty_term_is_the_identity_view() {
        let view = filter_library(LIBRARY, "");
        assert_eq!(view.len(), LIBRARY.len());
        for (category_view, category) in view.iter().zip(LIBRARY) {
            assert!(std::ptr::eq(category_view.category, category));
            assert_eq!(category_view.subcategories.len(), category.subcategories.len());
            for (subcategory_view, subcategory) in
                category_view.subcategories.iter().zip(category.subcategories)
            {
                assert!(std::ptr::eq(subcategory_view.subcategory, subcategory));
                assert_eq!(subcategory_view.snippets.len(), subcategory.snippets.len());
            }
        }
    }

    #[test]
    fn whitespace_term_is_filtered_literally() {
        // No trimming: a lone space matches only fields containing a space.
        let view = filter_library(&FIXTURE, " ");
        assert_eq!(snippet_ids(&view).len(), 2);
        assert!(filter_library(&FIXTURE, "   ").is_empty());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        // "use" matches both fixture snippets (title / description).
        assert_eq!(
            snippet_ids(&filter_library(&FIXTURE, "hook")),
            vec!["use-state-hook", "custom-hooks"]
        );

        // Against the real catalog: surviving categories keep their relative
        // positions.
        let view = filter_library(LIBRARY, "a");
        let original_positions: Vec<usize> = view
            .iter()
            .map(|c| {
                LIBRARY
                    .iter()
                    .position(|original| std::ptr::eq(c.category, original))
                    .unwrap()
            })
            .collect();
        let mut sorted = original_positions.clone();
        sorted.sort_unstable();
        assert_eq!(original_positions, sorted);
    }

    #[test]
    fn every_surviving_snippet_satisfies_the_predicate() {
        let term = "docker";
        let view = filter_library(LIBRARY, term);
        for category_view in &view {
            for subcategory_view in &category_view.subcategories {
                assert!(!subcategory_view.snippets.is_empty());
                for snippet in &subcategory_view.snippets {
                    assert!(snippet_matches(snippet, term));
                }
            }
        }
        // And nothing gets dropped that should match.
        let matched = snippet_ids(&view).len();
        let expected = LIBRARY
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.snippets.iter())
            .filter(|s| snippet_matches(s, term))
            .count();
        assert_eq!(matched, expected);
    }
}
