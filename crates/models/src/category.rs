use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Closed set of classification tags. New categories are a code change,
/// never a runtime event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Health,
    Other,
}

/// Display metadata for one category. Static table, never created or
/// destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Infallible: every variant has an entry in the table.
    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::Food => &CategoryInfo {
                label: "Food & Dining",
                color: "hsl(30, 90%, 55%)",
                icon: "🍔",
            },
            Category::Transport => &CategoryInfo {
                label: "Transport",
                color: "hsl(200, 80%, 50%)",
                icon: "🚗",
            },
            Category::Entertainment => &CategoryInfo {
                label: "Entertainment",
                color: "hsl(280, 70%, 60%)",
                icon: "🎬",
            },
            Category::Utilities => &CategoryInfo {
                label: "Utilities",
                color: "hsl(45, 85%, 50%)",
                icon: "💡",
            },
            Category::Shopping => &CategoryInfo {
                label: "Shopping",
                color: "hsl(320, 70%, 55%)",
                icon: "🛍️",
            },
            Category::Health => &CategoryInfo {
                label: "Health",
                color: "hsl(160, 84%, 39%)",
                icon: "💊",
            },
            Category::Other => &CategoryInfo {
                label: "Other",
                color: "hsl(215, 20%, 65%)",
                icon: "📦",
            },
        }
    }

    /// Lowercase identifier, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Active list filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c.name()),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}
