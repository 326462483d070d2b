// ============================================================================
// VIEWS - Pantallas completas montadas por el router
// ============================================================================

pub mod admin_view;
pub mod app;
pub mod login_view;
pub mod my_products_view;
pub mod not_found_view;
pub mod product_detail_view;
pub mod product_form_view;
pub mod products_view;
pub mod profile_view;
pub mod register_view;

pub use admin_view::AdminView;
pub use app::App;
pub use login_view::LoginView;
pub use my_products_view::MyProductsView;
pub use not_found_view::NotFoundView;
pub use product_detail_view::ProductDetailView;
pub use product_form_view::ProductFormView;
pub use products_view::ProductsView;
pub use profile_view::ProfileView;
pub use register_view::RegisterView;
