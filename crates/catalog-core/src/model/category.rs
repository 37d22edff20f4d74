/// Fixed classification of a product
///
/// `Unknown` is the sentinel for anything outside the closed set. Mapping
/// input that names no member degrades to `Unknown` instead of failing, so
/// the set can grow without breaking stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
    Truck,
}

impl Category {
    /// Every member, sentinel included
    pub const ALL: [Category; 7] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
        Category::Truck,
    ];

    /// Canonical column value for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
            Category::Truck => "TRUCK",
        }
    }

    /// Look up a category by name, case-insensitively
    ///
    /// Names outside the closed set map to `Unknown`.
    pub fn from_name(name: &str) -> Category {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Category::Unknown)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
