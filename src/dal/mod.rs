pub mod category_file;
pub mod credential_file;
pub mod review_table;
