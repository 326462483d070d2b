// ============================================================================
// STATE MODULE - Stores compartidos con ReactiveState + notificaciones
// ============================================================================
// Los stores viven como singletons thread_local (WASM es single-thread) y
// se reparten clonados; los clones comparten estado y subscribers.
// ============================================================================

pub mod listing_store;
pub mod reactivity;
pub mod session_store;

pub use listing_store::{ListingScope, ListingState, ListingStore};
pub use reactivity::{ReactiveState, SubscriptionId};
pub use session_store::{AuthEvent, AuthSnapshot, SessionStore};

thread_local! {
    static SESSION_STORE: SessionStore = SessionStore::new();
    static CATALOG_STORE: ListingStore = ListingStore::new(ListingScope::Catalog);
    static MY_PRODUCTS_STORE: ListingStore = ListingStore::new(ListingScope::Mine);
    static ADMIN_PRODUCTS_STORE: ListingStore = ListingStore::new(ListingScope::AdminAll);
}

pub fn session_store() -> SessionStore {
    SESSION_STORE.with(|store| store.clone())
}

pub fn catalog_store() -> ListingStore {
    CATALOG_STORE.with(|store| store.clone())
}

pub fn my_products_store() -> ListingStore {
    MY_PRODUCTS_STORE.with(|store| store.clone())
}

pub fn admin_products_store() -> ListingStore {
    ADMIN_PRODUCTS_STORE.with(|store| store.clone())
}
