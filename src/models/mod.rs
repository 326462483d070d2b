pub mod pagination;
pub mod product;
pub mod query;
pub mod user;

pub use pagination::{page_window, PageItem, PaginationView, SearchInfo};
pub use product::{Product, ProductDraft};
pub use query::{FilterSet, ListingQuery, SortBy, SortOrder};
pub use user::{AdminUserPatch, ProfileUpdate, User};
