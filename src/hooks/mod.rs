pub mod use_categories;
pub mod use_listing;
pub mod use_route;
pub mod use_session;
pub mod use_suggestions;

pub use use_categories::use_categories;
pub use use_listing::use_listing;
pub use use_route::{use_route, RouteState};
pub use use_session::{use_session, UseSessionHandle};
pub use use_suggestions::{use_suggestions, UseSuggestionsHandle};
