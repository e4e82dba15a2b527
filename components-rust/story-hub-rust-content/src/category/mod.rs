use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(JsonSchema, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Architecture,
    Design,
    Technology,
    Business,
    Art,
    Community,
    Other,
}

impl Category {
    const ALL: [Category; 7] = [
        Category::Architecture,
        Category::Design,
        Category::Technology,
        Category::Business,
        Category::Art,
        Category::Community,
        Category::Other,
    ];

    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Architecture => "Архитектура",
            Category::Design => "Дизайн",
            Category::Technology => "Технологии",
            Category::Business => "Бизнес",
            Category::Art => "Искусство",
            Category::Community => "Сообщество",
            Category::Other => "Другое",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Architecture => "building.2",
            Category::Design => "paintbrush",
            Category::Technology => "laptopcomputer",
            Category::Business => "briefcase",
            Category::Art => "palette",
            Category::Community => "person.3",
            Category::Other => "circle.grid.hex",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Category::Architecture => "architecture",
            Category::Design => "design",
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Art => "art",
            Category::Community => "community",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Accepts either the kebab-case key or the display label, ignoring case.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.key() == value || c.label().to_lowercase() == value)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}
