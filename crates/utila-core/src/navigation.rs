//! Navigation and filter state for the tool dashboard
//!
//! The UI presents exactly one view at a time: the dashboard grid, a single
//! tool, or a static page. That focus is a sum type, so "tool and page open
//! at once" is unrepresentable. Filtering is a pure function of the catalog,
//! the selected category, and the search query.

use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, find_tool, Category, StaticPage, Tool};

/// Category selection, either the sentinel "All" or one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, tool: &Tool) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => tool.category == *cat,
        }
    }
}

/// The single view currently presented to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Dashboard,
    /// A tool is open. The id is kept verbatim; an id not present in the
    /// catalog resolves to no tool and the host renders nothing.
    Tool(String),
    Page(StaticPage),
}

/// UI navigation state: category selection, search query, and focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    category: CategoryFilter,
    search: String,
    focus: Focus,
}

impl NavigationState {
    /// Initial state: dashboard, all categories, empty search
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Select a category and return to the dashboard
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.focus = Focus::Dashboard;
    }

    /// Update the search query verbatim (no trimming)
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Open a tool by id. Ids normally come from the catalog itself; an
    /// unknown id is kept but resolves to nothing.
    pub fn open_tool(&mut self, id: impl Into<String>) {
        self.focus = Focus::Tool(id.into());
    }

    /// Open a static page
    pub fn open_page(&mut self, page: StaticPage) {
        self.focus = Focus::Page(page);
    }

    /// Return to the dashboard with all categories. The search query is
    /// deliberately preserved across navigating home.
    pub fn go_home(&mut self) {
        self.focus = Focus::Dashboard;
        self.category = CategoryFilter::All;
    }

    /// The currently focused tool, if the focused id exists in the catalog
    pub fn active_tool(&self) -> Option<&'static Tool> {
        match &self.focus {
            Focus::Tool(id) => find_tool(id),
            _ => None,
        }
    }

    /// The currently focused static page, if any
    pub fn active_page(&self) -> Option<StaticPage> {
        match &self.focus {
            Focus::Page(page) => Some(*page),
            _ => None,
        }
    }

    /// The tools visible under the current category and search filter
    pub fn visible_tools(&self) -> Vec<&'static Tool> {
        filter_tools(catalog(), self.category, &self.search)
    }
}

/// Filter tools by category and case-insensitive substring match over
/// name and description. Catalog order is preserved.
pub fn filter_tools(
    tools: &'static [Tool],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'static Tool> {
    let needle = query.to_lowercase();
    tools
        .iter()
        .filter(|tool| {
            let matches_search = tool.name.to_lowercase().contains(&needle)
                || tool.description.to_lowercase().contains(&needle);
            category.matches(tool) && matches_search
        })
        .collect()
}
