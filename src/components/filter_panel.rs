use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{FilterSet, ListingQuery, SortBy, SortOrder};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    /// Estado vigente, para sembrar los campos al (re)sincronizar la URL
    pub query: ListingQuery,
    pub categories: Vec<String>,
    /// Aplica el panel completo; lo que no esté aquí se descarta
    pub on_apply: Callback<FilterSet>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let category = use_state(|| props.query.category.clone());
    let min_price = use_state(|| price_field(props.query.min_price));
    let max_price = use_state(|| price_field(props.query.max_price));
    let sort_by = use_state(|| props.query.sort_by.as_str().to_string());
    let sort_order = use_state(|| props.query.sort_order.as_str().to_string());

    // cuando la URL cambia (navegación, limpiar) los campos vuelven a ella
    {
        let category = category.clone();
        let min_price = min_price.clone();
        let max_price = max_price.clone();
        let sort_by = sort_by.clone();
        let sort_order = sort_order.clone();
        use_effect_with(props.query.clone(), move |query| {
            category.set(query.category.clone());
            min_price.set(price_field(query.min_price));
            max_price.set(price_field(query.max_price));
            sort_by.set(query.sort_by.as_str().to_string());
            sort_order.set(query.sort_order.as_str().to_string());
            || ()
        });
    }

    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            category.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_min = {
        let min_price = min_price.clone();
        Callback::from(move |e: InputEvent| {
            min_price.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_max = {
        let max_price = max_price.clone();
        Callback::from(move |e: InputEvent| {
            max_price.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_sort_by = {
        let sort_by = sort_by.clone();
        Callback::from(move |e: Event| {
            sort_by.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_sort_order = {
        let sort_order = sort_order.clone();
        Callback::from(move |e: Event| {
            sort_order.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_apply = {
        let category = category.clone();
        let min_price = min_price.clone();
        let max_price = max_price.clone();
        let sort_by = sort_by.clone();
        let sort_order = sort_order.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            on_apply.emit(FilterSet {
                category: (*category).clone(),
                min_price: min_price.parse::<f64>().ok(),
                max_price: max_price.parse::<f64>().ok(),
                sort_by: SortBy::from_key(&sort_by).unwrap_or_default(),
                sort_order: SortOrder::from_key(&sort_order).unwrap_or_default(),
            });
        })
    };

    let on_clear = props.on_clear.reform(|_: MouseEvent| ());

    html! {
        <aside class="filter-panel">
            <h3>{"Filtros"}</h3>

            <div class="filter-group">
                <label for="filter-category">{"Categoría"}</label>
                <select id="filter-category" value={(*category).clone()} onchange={on_category}>
                    <option value="" selected={category.is_empty()}>{"Todas"}</option>
                    { for props.categories.iter().map(|name| html! {
                        <option
                            key={name.clone()}
                            value={name.clone()}
                            selected={*name == *category}
                        >
                            {name}
                        </option>
                    })}
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-min">{"Precio mínimo"}</label>
                <input
                    id="filter-min"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    value={(*min_price).clone()}
                    oninput={on_min}
                />
            </div>

            <div class="filter-group">
                <label for="filter-max">{"Precio máximo"}</label>
                <input
                    id="filter-max"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Sin límite"
                    value={(*max_price).clone()}
                    oninput={on_max}
                />
            </div>

            <div class="filter-group">
                <label for="filter-sort">{"Ordenar por"}</label>
                <select id="filter-sort" value={(*sort_by).clone()} onchange={on_sort_by}>
                    <option value="created_at" selected={*sort_by == "created_at"}>{"Más recientes"}</option>
                    <option value="name" selected={*sort_by == "name"}>{"Nombre"}</option>
                    <option value="price" selected={*sort_by == "price"}>{"Precio"}</option>
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-order">{"Orden"}</label>
                <select id="filter-order" value={(*sort_order).clone()} onchange={on_sort_order}>
                    <option value="desc" selected={*sort_order == "desc"}>{"Descendente"}</option>
                    <option value="asc" selected={*sort_order == "asc"}>{"Ascendente"}</option>
                </select>
            </div>

            <div class="filter-actions">
                <button type="button" class="btn-primary" onclick={on_apply}>{"Aplicar"}</button>
                <button type="button" class="btn-secondary" onclick={on_clear}>{"Limpiar"}</button>
            </div>
        </aside>
    }
}

fn price_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
