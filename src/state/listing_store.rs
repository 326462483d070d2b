// ============================================================================
// LISTING STORE - Estado de los listados de productos
// ============================================================================
// Hay un store por ámbito: catálogo público, "mis productos" y el listado
// completo de admin. Cada fetch reserva un epoch; solo la respuesta del
// fetch más reciente puede escribir el estado.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{ListingQuery, PaginationView, Product, SearchInfo};
use crate::services::ApiClient;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::state::session_store;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListingScope {
    /// Catálogo público; con `q` pasa por el endpoint de búsqueda
    Catalog,
    /// Productos del usuario autenticado
    Mine,
    /// Todo el catálogo, incluidos productos desactivados (solo admin)
    AdminAll,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ListingState {
    pub query: ListingQuery,
    pub products: Vec<Product>,
    pub pagination: PaginationView,
    pub search_info: Option<SearchInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
    epoch: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            query: ListingQuery::default(),
            products: Vec::new(),
            pagination: PaginationView::default(),
            search_info: None,
            is_loading: false,
            error: None,
            epoch: 0,
        }
    }
}

impl ListingState {
    /// Arranca un fetch nuevo y devuelve su epoch. Invalida de paso
    /// cualquier respuesta anterior aún en vuelo.
    pub fn begin_fetch(&mut self, query: ListingQuery) -> u64 {
        self.epoch += 1;
        self.query = query;
        self.is_loading = true;
        self.error = None;
        self.epoch
    }

    /// Reemplazo completo del resultado. Devuelve false si el fetch ya
    /// fue superado por otro más nuevo.
    pub fn apply_success(
        &mut self,
        epoch: u64,
        products: Vec<Product>,
        pagination: PaginationView,
        search_info: Option<SearchInfo>,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.products = products;
        self.pagination = pagination;
        self.search_info = search_info;
        self.is_loading = false;
        self.error = None;
        true
    }

    /// El fallo también reemplaza: listado vacío y paginación a cero
    pub fn apply_failure(&mut self, epoch: u64, message: String) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.products = Vec::new();
        self.pagination = PaginationView::default();
        self.search_info = None;
        self.is_loading = false;
        self.error = Some(message);
        true
    }
}

#[derive(Clone)]
pub struct ListingStore {
    scope: ListingScope,
    state: Rc<ReactiveState<ListingState>>,
    api: ApiClient,
}

impl ListingStore {
    pub fn new(scope: ListingScope) -> Self {
        Self {
            scope,
            state: Rc::new(ReactiveState::new(ListingState::default())),
            api: ApiClient::new(),
        }
    }

    pub fn scope(&self) -> ListingScope {
        self.scope
    }

    pub fn snapshot(&self) -> ListingState {
        self.state.snapshot()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    /// Carga el listado para `query`, eligiendo endpoint según el ámbito.
    /// Un 401 con token delega en el session store antes de reportar.
    pub async fn load(&self, query: ListingQuery) {
        let epoch = self.state.update(|state| state.begin_fetch(query.clone()));
        let token = session_store().token();

        let result = match self.scope {
            ListingScope::Catalog if !query.q.trim().is_empty() => self
                .api
                .search_products(token.as_deref(), &query)
                .await
                .map(|r| (r.products, r.pagination, Some(r.search_info))),
            ListingScope::Catalog => self
                .api
                .list_products(token.as_deref(), &query)
                .await
                .map(|r| (r.products, r.pagination, None)),
            ListingScope::Mine => match token.as_deref() {
                Some(token) => self
                    .api
                    .list_my_products(token, &query)
                    .await
                    .map(|r| (r.products, r.pagination, None)),
                None => Err(ApiError::Unauthorized),
            },
            ListingScope::AdminAll => match token.as_deref() {
                Some(token) => self
                    .api
                    .admin_list_products(token, &query)
                    .await
                    .map(|r| (r.products, r.pagination, None)),
                None => Err(ApiError::Unauthorized),
            },
        };

        let applied = match result {
            Ok((products, pagination, search_info)) => self.state.update(|state| {
                state.apply_success(epoch, products, pagination, search_info)
            }),
            Err(error) => {
                if matches!(error, ApiError::Unauthorized) {
                    session_store().token_rejected();
                }
                let message = error.user_message();
                self.state
                    .update(|state| state.apply_failure(epoch, message))
            }
        };
        if !applied {
            log::info!("🕓 Respuesta de listado obsoleta descartada");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price: 10.0,
            category: Some("Electronics".to_string()),
            tags: None,
            created_by: Some(1),
            creator_username: Some("ana".to_string()),
            created_at: None,
            updated_at: None,
            is_active: true,
        }
    }

    fn sample_page() -> PaginationView {
        PaginationView {
            page: 2,
            per_page: 12,
            total: 30,
            pages: 3,
            has_prev: true,
            has_next: true,
            prev_num: Some(1),
            next_num: Some(3),
        }
    }

    #[test]
    fn begin_fetch_sets_loading_and_clears_error() {
        let mut state = ListingState::default();
        state.error = Some("antes".to_string());
        let epoch = state.begin_fetch(ListingQuery::default());
        assert!(state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(epoch, 1);
    }

    #[test]
    fn success_replaces_the_whole_result() {
        let mut state = ListingState::default();
        let epoch = state.begin_fetch(ListingQuery::default());
        assert!(state.apply_success(
            epoch,
            vec![sample_product(1, "Mouse"), sample_product(2, "Teclado")],
            sample_page(),
            None,
        ));

        let epoch = state.begin_fetch(ListingQuery::default().with_page(3));
        assert!(state.apply_success(epoch, vec![sample_product(9, "Silla")], sample_page(), None));
        // reemplazo, no acumulación
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].id, 9);
        assert!(!state.is_loading);
    }

    #[test]
    fn failure_empties_products_and_zeroes_pagination() {
        let mut state = ListingState::default();
        let epoch = state.begin_fetch(ListingQuery::default());
        assert!(state.apply_success(
            epoch,
            vec![sample_product(1, "Mouse")],
            sample_page(),
            None,
        ));

        let epoch = state.begin_fetch(ListingQuery::default().with_page(2));
        assert!(state.apply_failure(epoch, "sin red".to_string()));
        assert_eq!(state.products, Vec::new());
        assert_eq!(state.pagination, PaginationView::default());
        assert_eq!(state.search_info, None);
        assert_eq!(state.error.as_deref(), Some("sin red"));
        assert!(!state.is_loading);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = ListingState::default();
        let old_epoch = state.begin_fetch(ListingQuery::default());
        let new_epoch = state.begin_fetch(ListingQuery::default().with_page(2));

        assert!(!state.apply_success(
            old_epoch,
            vec![sample_product(1, "Viejo")],
            sample_page(),
            None,
        ));
        assert!(state.products.is_empty());
        assert!(state.is_loading);

        assert!(!state.apply_failure(old_epoch, "tarde".to_string()));
        assert_eq!(state.error, None);

        assert!(state.apply_success(
            new_epoch,
            vec![sample_product(2, "Nuevo")],
            sample_page(),
            None,
        ));
        assert_eq!(state.products[0].id, 2);
    }

    #[test]
    fn search_info_only_survives_while_searching() {
        let mut state = ListingState::default();
        let query = ListingQuery::default().with_search("mouse");
        let epoch = state.begin_fetch(query.clone());
        assert!(state.apply_success(
            epoch,
            vec![sample_product(1, "Mouse")],
            sample_page(),
            Some(SearchInfo {
                query: "mouse".to_string(),
                total_found: 1,
                total_products: 30,
            }),
        ));
        assert!(state.search_info.is_some());

        let epoch = state.begin_fetch(query.with_search(""));
        assert!(state.apply_success(epoch, Vec::new(), PaginationView::default(), None));
        assert_eq!(state.search_info, None);
    }
}
