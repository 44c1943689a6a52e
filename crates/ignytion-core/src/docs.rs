//! Documentation catalog and the local search filter on the docs view

/// A group of documentation links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [&'static str],
}

pub static DOC_CATEGORIES: [DocCategory; 4] = [
    DocCategory {
        title: "Getting Started",
        description: "Installation and first project",
        links: &[
            "Installation Guide",
            "First Chip Tutorial",
            "Platform Overview",
            "System Requirements",
        ],
    },
    DocCategory {
        title: "EDA Tools",
        description: "Synthesis and verification",
        links: &[
            "Yosys Synthesis",
            "Verilator Simulation",
            "Timing Analysis",
            "Verification Guide",
        ],
    },
    DocCategory {
        title: "180nm PDK",
        description: "Process design kit details",
        links: &["PDK Overview", "Standard Cells", "Design Rules", "I/O Pads"],
    },
    DocCategory {
        title: "Python Workflows",
        description: "Automation and scripting",
        links: &[
            "Python DSL Guide",
            "GenAI Integration",
            "CI/CD Setup",
            "API Reference",
        ],
    },
];

/// A category narrowed down to the links that match a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMatch {
    pub category: &'static DocCategory,
    pub links: Vec<&'static str>,
}

/// Filter the catalog by a case-insensitive substring query
///
/// A category whose title matches keeps all of its links; otherwise only the
/// matching links are kept and categories left empty are dropped. A blank
/// query returns the whole catalog.
pub fn search(categories: &'static [DocCategory], query: &str) -> Vec<DocMatch> {
    let needle = query.trim().to_lowercase();

    categories
        .iter()
        .filter_map(|category| {
            let links: Vec<&'static str> =
                if needle.is_empty() || category.title.to_lowercase().contains(&needle) {
                    category.links.to_vec()
                } else {
                    category
                        .links
                        .iter()
                        .copied()
                        .filter(|link| link.to_lowercase().contains(&needle))
                        .collect()
                };

            (!links.is_empty()).then_some(DocMatch { category, links })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_returns_everything() {
        let all = search(&DOC_CATEGORIES, "  ");
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].links.len(), 4);
    }

    #[test]
    fn test_query_filters_links() {
        let matches = search(&DOC_CATEGORIES, "GUIDE");
        let links: Vec<_> = matches.iter().flat_map(|m| m.links.clone()).collect();
        assert_eq!(
            links,
            ["Installation Guide", "Verification Guide", "Python DSL Guide"]
        );
    }

    #[test]
    fn test_title_match_keeps_category() {
        let matches = search(&DOC_CATEGORIES, "pdk");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category.title, "180nm PDK");
        assert_eq!(matches[0].links.len(), 4);
    }

    #[test]
    fn test_no_match() {
        assert!(search(&DOC_CATEGORIES, "quantum").is_empty());
    }
}
