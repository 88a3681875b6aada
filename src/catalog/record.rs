/// Canonical country entry every upstream payload shape is normalized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Rendering key. Country code when upstream provides one, else the display name.
    pub id: String,
    /// Searchable name. Never empty.
    pub display_name: String,
    /// Flag image location. Empty when upstream has none.
    pub flag_image_url: String,
}

impl CountryRecord {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        flag_image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            flag_image_url: flag_image_url.into(),
        }
    }

    pub fn has_flag(&self) -> bool {
        !self.flag_image_url.is_empty()
    }
}
