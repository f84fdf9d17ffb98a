use rand::{rngs::StdRng, SeedableRng};

use crate::domain::review::Review;

/// State owned by one run: the seeded random source behind the page delays
/// and every review gathered so far.
pub struct RunContext {
    rng: StdRng,
    reviews: Vec<Review>,
}

impl RunContext {
    pub fn new(seed: u64) -> Self {
        RunContext {
            rng: StdRng::seed_from_u64(seed),
            reviews: vec![],
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn extend(&mut self, reviews: Vec<Review>) {
        self.reviews.extend(reviews);
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn into_reviews(self) -> Vec<Review> {
        self.reviews
    }
}
