pub mod books;
pub mod common;

pub use books::book_routes;
pub use common::common_routes;
