use serde::Serialize;

use super::business::BusinessProfile;

/// One row of the output table. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub name: String,
    pub price: i32,
    pub categories: String,
    pub user: String,
    pub date: String,
    pub rate: f64,
    pub text: String,
}

impl Review {
    pub fn new(
        profile: &BusinessProfile,
        user: String,
        date: String,
        rate: f64,
        text: String,
    ) -> Self {
        Review {
            name: profile.name.clone(),
            price: profile.price,
            categories: profile.categories.clone(),
            user,
            date,
            rate,
            text,
        }
    }
}
