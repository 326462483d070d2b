use yew::prelude::*;

use crate::components::ProductCard;
use crate::models::Product;

#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
    pub products: Vec<Product>,
    pub is_loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    if props.is_loading {
        return html! {
            <div class="grid-status">
                <div class="spinner"></div>
                <p>{"Cargando productos..."}</p>
            </div>
        };
    }

    if let Some(error) = &props.error {
        return html! {
            <div class="grid-status error-banner">
                <p>{format!("❌ {}", error)}</p>
            </div>
        };
    }

    if props.products.is_empty() {
        return html! {
            <div class="grid-status">
                <p>{"No se encontraron productos"}</p>
            </div>
        };
    }

    html! {
        <div class="product-grid">
            { for props.products.iter().map(|product| html! {
                <ProductCard key={product.id} product={product.clone()} />
            })}
        </div>
    }
}
