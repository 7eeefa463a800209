//! The fixed category set served by both remote models.
//!
//! The service returns labels with diacritics stripped; the UI shows them
//! restored. The mapping is static and bijective, ten entries, never
//! user-editable.

/// One of the ten news categories the remote models can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PoliticsSociety,
    Lifestyle,
    Science,
    Business,
    Law,
    Health,
    World,
    Sports,
    Culture,
    InformationTechnology,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::PoliticsSociety,
        Category::Lifestyle,
        Category::Science,
        Category::Business,
        Category::Law,
        Category::Health,
        Category::World,
        Category::Sports,
        Category::Culture,
        Category::InformationTechnology,
    ];

    /// Diacritic-stripped form, exactly as the service emits it.
    pub fn api_label(&self) -> &'static str {
        match self {
            Category::PoliticsSociety => "Chinh tri Xa hoi",
            Category::Lifestyle => "Doi song",
            Category::Science => "Khoa hoc",
            Category::Business => "Kinh doanh",
            Category::Law => "Phap luat",
            Category::Health => "Suc khoe",
            Category::World => "The gioi",
            Category::Sports => "The thao",
            Category::Culture => "Van hoa",
            Category::InformationTechnology => "Vi tinh",
        }
    }

    /// Diacritic-restored form shown to users.
    pub fn display_label(&self) -> &'static str {
        match self {
            Category::PoliticsSociety => "Chính trị Xã hội",
            Category::Lifestyle => "Đời sống",
            Category::Science => "Khoa học",
            Category::Business => "Kinh doanh",
            Category::Law => "Pháp luật",
            Category::Health => "Sức khỏe",
            Category::World => "Thế giới",
            Category::Sports => "Thể thao",
            Category::Culture => "Văn hóa",
            Category::InformationTechnology => "Vi tính",
        }
    }

    /// Short English description embedded in assistant replies.
    pub fn description(&self) -> &'static str {
        match self {
            Category::PoliticsSociety => "Politics and Society",
            Category::Lifestyle => "Lifestyle",
            Category::Science => "Science",
            Category::Business => "Business",
            Category::Law => "Law",
            Category::Health => "Health",
            Category::World => "World",
            Category::Sports => "Sports",
            Category::Culture => "Culture",
            Category::InformationTechnology => "Information Technology",
        }
    }

    /// Resolve a service label to a category.
    ///
    /// Returns `None` for labels outside the fixed set; callers decide
    /// whether to pass the raw label through verbatim.
    pub fn from_api_label(label: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.api_label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_label_round_trip() {
        for category in Category::ALL {
            let resolved = Category::from_api_label(category.api_label());
            assert_eq!(resolved, Some(category));
        }
    }

    #[test]
    fn test_unknown_label_has_no_category() {
        assert_eq!(Category::from_api_label("Am nhac"), None);
        assert_eq!(Category::from_api_label(""), None);
    }

    #[test]
    fn test_business_mapping() {
        let category = Category::from_api_label("Kinh doanh").unwrap();
        // "Kinh doanh" carries no diacritics, so both forms coincide
        assert_eq!(category.display_label(), "Kinh doanh");
        assert_eq!(category.description(), "Business");
    }

    #[test]
    fn test_display_labels_are_unique() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a != b {
                    assert_ne!(a.display_label(), b.display_label());
                }
            }
        }
    }
}
