pub mod books;
pub mod validation;

pub use books::BookService;
pub use validation::validate_payload;
