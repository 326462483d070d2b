use yew::prelude::*;

use crate::models::Product;
use crate::utils::format::format_price;
use crate::utils::navigation::navigate;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let p = &props.product;

    let onclick = {
        let id = p.id;
        Callback::from(move |_: MouseEvent| {
            navigate(&format!("/products/{}", id));
        })
    };

    let description = p.description.as_deref().unwrap_or("");
    let short_description: String = if description.chars().count() > 120 {
        let cut: String = description.chars().take(120).collect();
        format!("{}…", cut.trim_end())
    } else {
        description.to_string()
    };

    html! {
        <div class={classes!("product-card", (!p.is_active).then_some("inactive"))} onclick={onclick}>
            <div class="product-card-header">
                <h3 class="product-name">{&p.name}</h3>
                <span class="product-price">{format_price(p.price)}</span>
            </div>
            if let Some(category) = &p.category {
                <span class="product-category">{category}</span>
            }
            if !short_description.is_empty() {
                <p class="product-description">{short_description}</p>
            }
            <div class="product-tags">
                { for p.tag_list().into_iter().map(|tag| html! {
                    <span key={tag.clone()} class="product-tag">{tag}</span>
                })}
            </div>
            if let Some(creator) = &p.creator_username {
                <div class="product-footer">
                    <span class="product-creator">{format!("Publicado por {}", creator)}</span>
                </div>
            }
        </div>
    }
}
