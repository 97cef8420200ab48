use crate::Milestone;

/// Category selections that mean "no category filter".
pub const ALL_CATEGORIES: [&str; 2] = ["Todas", "All"];

/// Category and free-text criteria, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneQuery {
    category: Option<String>,
    /// Lowercased search text.
    search: Option<String>,
}

impl MilestoneQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive category match. The "Todas"/"All" selections
    /// clear the filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!ALL_CATEGORIES.contains(&category.as_str())).then_some(category);
        self
    }

    /// Case-insensitive substring of the title, or substring of the number.
    /// Empty text clears the filter.
    pub fn with_search(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        self.search = (!text.is_empty()).then(|| text.to_lowercase());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    pub fn matches(&self, milestone: &Milestone) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| milestone.category == category);

        let search_ok = self.search.as_deref().map_or(true, |needle| {
            milestone.title.to_lowercase().contains(needle)
                || milestone.number.to_string().contains(needle)
        });

        category_ok && search_ok
    }
}

/// Milestones matching `query`, in input order.
pub fn filter_milestones<'a>(
    milestones: &'a [Milestone],
    query: &MilestoneQuery,
) -> Vec<&'a Milestone> {
    milestones.iter().filter(|m| query.matches(m)).collect()
}
