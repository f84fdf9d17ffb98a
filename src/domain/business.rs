use serde::Deserialize;

pub const UNKNOWN_PRICE: i32 = -1;

/// One business as reported by the search API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessListing {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub url: String,
}

/// The (name, price, categories) triple stamped on every review of a business.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessProfile {
    pub name: String,
    pub price: i32,
    pub categories: String,
}

/// What the caller already knows about a business before parsing a page.
///
/// An empty hint marks a first page: the name and price come from the page
/// and the categories come from the page unless supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessHint {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub categories: Option<String>,
}

impl BusinessHint {
    pub fn with_categories(categories: Option<&str>) -> Self {
        BusinessHint {
            categories: categories.map(|c| c.to_string()),
            ..Default::default()
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.name.is_none()
    }
}

impl From<&BusinessProfile> for BusinessHint {
    fn from(profile: &BusinessProfile) -> Self {
        BusinessHint {
            name: Some(profile.name.clone()),
            price: Some(profile.price),
            categories: Some(profile.categories.clone()),
        }
    }
}
