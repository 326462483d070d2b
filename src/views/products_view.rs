// ============================================================================
// PRODUCTS VIEW - Catálogo público sincronizado con la URL
// ============================================================================
// La URL es la única fuente de verdad del listado: los handlers calculan el
// siguiente query string y navegan; el efecto sobre `search` relanza la
// carga. Así atrás/adelante del navegador reproducen búsquedas anteriores.
// ============================================================================

use yew::prelude::*;

use crate::components::{FilterPanel, Pagination, ProductGrid, SearchBar};
use crate::hooks::{use_categories, use_listing};
use crate::models::{FilterSet, ListingQuery};
use crate::state::catalog_store;
use crate::utils::navigation::navigate;

#[derive(Properties, PartialEq)]
pub struct ProductsViewProps {
    /// Query string actual (con `?` inicial o vacío)
    pub search: String,
}

#[function_component(ProductsView)]
pub fn products_view(props: &ProductsViewProps) -> Html {
    let listing = use_listing(&catalog_store());
    let categories = use_categories();
    let current = ListingQuery::from_query_string(&props.search);

    // cada cambio del query string relanza la carga
    use_effect_with(props.search.clone(), move |search| {
        let query = ListingQuery::from_query_string(search);
        wasm_bindgen_futures::spawn_local(async move {
            catalog_store().load(query).await;
        });
        || ()
    });

    let on_search = {
        let search = props.search.clone();
        Callback::from(move |text: String| {
            let next = ListingQuery::from_query_string(&search).with_search(&text);
            navigate(&format!("/products?{}", next.to_query_string()));
        })
    };

    let on_filters = {
        let search = props.search.clone();
        Callback::from(move |filters: FilterSet| {
            let next = ListingQuery::from_query_string(&search).with_filters(&filters);
            navigate(&format!("/products?{}", next.to_query_string()));
        })
    };

    let on_clear_filters = {
        let on_filters = on_filters.clone();
        Callback::from(move |_: ()| {
            on_filters.emit(FilterSet::default());
        })
    };

    let on_page = {
        let search = props.search.clone();
        let pages = listing.pagination.pages;
        Callback::from(move |page: u32| {
            // fuera de rango no se navega
            if page < 1 || page > pages {
                return;
            }
            let next = ListingQuery::from_query_string(&search).with_page(page);
            navigate(&format!("/products?{}", next.to_query_string()));
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <div class="products-view">
            <div class="products-toolbar">
                <SearchBar initial={current.q.clone()} on_search={on_search} />
            </div>
            <div class="products-layout">
                <FilterPanel
                    query={current.clone()}
                    categories={categories}
                    on_apply={on_filters}
                    on_clear={on_clear_filters}
                />
                <section class="products-content">
                    if let Some(info) = &listing.search_info {
                        <p class="results-summary">
                            {format!(
                                "{} resultados para \"{}\" (catálogo de {} productos)",
                                info.total_found, info.query, info.total_products
                            )}
                        </p>
                    } else if !listing.is_loading && listing.error.is_none() {
                        <p class="results-summary">
                            {format!("{} productos", listing.pagination.total)}
                        </p>
                    }
                    <ProductGrid
                        products={listing.products.clone()}
                        is_loading={listing.is_loading}
                        error={listing.error.clone()}
                    />
                    <Pagination pagination={listing.pagination.clone()} on_page={on_page} />
                </section>
            </div>
        </div>
    }
}
