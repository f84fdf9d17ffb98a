pub mod business;
pub mod review;
pub mod review_page;
