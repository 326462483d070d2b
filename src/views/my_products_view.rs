use yew::prelude::*;

use crate::components::{Pagination, ProductGrid};
use crate::hooks::use_listing;
use crate::models::ListingQuery;
use crate::state::my_products_store;
use crate::utils::navigation::navigate;

#[function_component(MyProductsView)]
pub fn my_products_view() -> Html {
    let listing = use_listing(&my_products_store());

    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            my_products_store().load(ListingQuery::default()).await;
        });
        || ()
    });

    let on_page = {
        let pages = listing.pagination.pages;
        let query = listing.query.clone();
        Callback::from(move |page: u32| {
            if page < 1 || page > pages {
                return;
            }
            let query = query.with_page(page);
            wasm_bindgen_futures::spawn_local(async move {
                my_products_store().load(query).await;
            });
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let go_new = Callback::from(|_: MouseEvent| navigate("/products/new"));

    html! {
        <div class="my-products-view">
            <div class="view-header">
                <h1>{"Mis productos"}</h1>
                <button class="btn-primary" onclick={go_new}>{"➕ Publicar producto"}</button>
            </div>
            if !listing.is_loading && listing.error.is_none() {
                <p class="results-summary">
                    {format!("{} productos publicados", listing.pagination.total)}
                </p>
            }
            <ProductGrid
                products={listing.products.clone()}
                is_loading={listing.is_loading}
                error={listing.error.clone()}
            />
            <Pagination pagination={listing.pagination.clone()} on_page={on_page} />
        </div>
    }
}
