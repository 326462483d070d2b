pub mod filter_panel;
pub mod navbar;
pub mod pagination;
pub mod product_card;
pub mod product_grid;
pub mod search_bar;

pub use filter_panel::FilterPanel;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use search_bar::SearchBar;
