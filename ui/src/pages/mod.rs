//! Pages of the application. QR Studio has exactly one.

mod studio_page;

pub use studio_page::studio_page;
