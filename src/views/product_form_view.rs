// ============================================================================
// PRODUCT FORM VIEW - Alta y edición de productos
// ============================================================================
// Mismo formulario para crear y editar. Si la validación o el backend
// fallan, el error se muestra y los campos se conservan tal cual.
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::error::ApiError;
use crate::models::{Product, ProductDraft};
use crate::services::ApiClient;
use crate::state::session_store;
use crate::utils::navigation::navigate;

#[derive(Clone, PartialEq, Default)]
struct FormFields {
    name: String,
    description: String,
    price: String,
    category: String,
    tags: String,
}

impl From<Product> for FormFields {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description.unwrap_or_default(),
            price: product.price.to_string(),
            category: product.category.unwrap_or_default(),
            tags: product.tags.unwrap_or_default(),
        }
    }
}

fn validate(fields: &FormFields) -> Result<ProductDraft, String> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err("El nombre es obligatorio".to_string());
    }
    let price: f64 = fields
        .price
        .trim()
        .parse()
        .map_err(|_| "El precio no es válido".to_string())?;
    if price < 0.0 || !price.is_finite() {
        return Err("El precio no puede ser negativo".to_string());
    }
    Ok(ProductDraft {
        name: name.to_string(),
        description: fields.description.trim().to_string(),
        price,
        category: fields.category.trim().to_string(),
        tags: fields.tags.trim().to_string(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ProductFormViewProps {
    /// `None` crea un producto nuevo; `Some(id)` edita uno existente
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(ProductFormView)]
pub fn product_form_view(props: &ProductFormViewProps) -> Html {
    let fields = use_state(FormFields::default);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let is_submitting = use_state(|| false);
    let saved = use_state(|| false);

    // en modo edición se precargan los campos del producto
    {
        let fields = fields.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                is_loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let token = session_store().token();
                    match ApiClient::new().get_product(token.as_deref(), id).await {
                        Ok(product) => fields.set(FormFields::from(product)),
                        Err(api_error) => {
                            if matches!(api_error, ApiError::Unauthorized) {
                                session_store().token_rejected();
                            }
                            error.set(Some(api_error.user_message()));
                        }
                    }
                    is_loading.set(false);
                });
            }
            || ()
        });
    }

    let edit_field = |apply: fn(&mut FormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*fields).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            fields.set(next);
        })
    };

    let on_name = edit_field(|f, v| f.name = v);
    let on_price = edit_field(|f, v| f.price = v);
    let on_category = edit_field(|f, v| f.category = v);
    let on_tags = edit_field(|f, v| f.tags = v);
    let on_description = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*fields).clone();
            next.description = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let saved = saved.clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate(&fields) {
                Err(message) => error.set(Some(message)),
                Ok(draft) => {
                    error.set(None);
                    is_submitting.set(true);
                    let error = error.clone();
                    let is_submitting = is_submitting.clone();
                    let saved = saved.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let Some(token) = session_store().token() else {
                            error.set(Some("Sesión expirada".to_string()));
                            is_submitting.set(false);
                            return;
                        };
                        let result = match id {
                            Some(id) => ApiClient::new().update_product(&token, id, &draft).await,
                            None => ApiClient::new().create_product(&token, &draft).await,
                        };
                        match result {
                            Ok(response) => {
                                saved.set(true);
                                TimeoutFuture::new(1500).await;
                                navigate(&format!("/products/{}", response.product.id));
                            }
                            Err(api_error) => {
                                if matches!(api_error, ApiError::Unauthorized) {
                                    session_store().token_rejected();
                                }
                                error.set(Some(api_error.user_message()));
                                is_submitting.set(false);
                            }
                        }
                    });
                }
            }
        })
    };

    let on_cancel = {
        let id = props.id;
        Callback::from(move |_: MouseEvent| match id {
            Some(id) => navigate(&format!("/products/{}", id)),
            None => navigate("/products"),
        })
    };

    if *is_loading {
        return html! {
            <div class="detail-status">
                <div class="spinner"></div>
                <p>{"Cargando producto..."}</p>
            </div>
        };
    }

    let title = if props.id.is_some() { "Editar producto" } else { "Publicar producto" };

    html! {
        <div class="product-form-view">
            <h1>{title}</h1>
            if let Some(message) = &*error {
                <div class="error-banner"><p>{format!("❌ {}", message)}</p></div>
            }
            if *saved {
                <div class="success-banner"><p>{"✅ Producto guardado"}</p></div>
            }
            <form class="product-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="product-name">{"Nombre *"}</label>
                    <input
                        id="product-name"
                        type="text"
                        placeholder="Nombre del producto"
                        value={fields.name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div class="form-group">
                    <label for="product-description">{"Descripción"}</label>
                    <textarea
                        id="product-description"
                        rows="4"
                        placeholder="Describe el producto"
                        value={fields.description.clone()}
                        oninput={on_description}
                    />
                </div>
                <div class="form-group">
                    <label for="product-price">{"Precio *"}</label>
                    <input
                        id="product-price"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        value={fields.price.clone()}
                        oninput={on_price}
                    />
                </div>
                <div class="form-group">
                    <label for="product-category">{"Categoría"}</label>
                    <input
                        id="product-category"
                        type="text"
                        placeholder="Electronics, Furniture..."
                        value={fields.category.clone()}
                        oninput={on_category}
                    />
                </div>
                <div class="form-group">
                    <label for="product-tags">{"Etiquetas"}</label>
                    <input
                        id="product-tags"
                        type="text"
                        placeholder="separadas, por, comas"
                        value={fields.tags.clone()}
                        oninput={on_tags}
                    />
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
                    <button type="submit" class="btn-primary" disabled={*is_submitting || *saved}>
                        {if *is_submitting { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
