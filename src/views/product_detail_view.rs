// ============================================================================
// PRODUCT DETAIL VIEW - Ficha de producto con borrado en dos pasos
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::error::ApiError;
use crate::hooks::use_session;
use crate::models::Product;
use crate::services::ApiClient;
use crate::state::session_store;
use crate::utils::format::{format_date, format_price};
use crate::utils::navigation::navigate;

#[derive(Clone, PartialEq)]
enum DetailStatus {
    Loading,
    Ready(Box<Product>),
    NotFound,
    Failed(String),
}

#[derive(Clone, Copy, PartialEq)]
enum DeleteStage {
    Hidden,
    /// Modal pidiendo confirmación
    Confirming,
    Deleting,
    /// Confirmación de éxito antes de volver al catálogo
    Done,
}

#[derive(Properties, PartialEq)]
pub struct ProductDetailViewProps {
    pub id: i64,
}

#[function_component(ProductDetailView)]
pub fn product_detail_view(props: &ProductDetailViewProps) -> Html {
    let session = use_session();
    let status = use_state(|| DetailStatus::Loading);
    let delete_stage = use_state(|| DeleteStage::Hidden);
    let delete_error = use_state(|| None::<String>);

    {
        let status = status.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            status.set(DetailStatus::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let token = session_store().token();
                match ApiClient::new().get_product(token.as_deref(), id).await {
                    Ok(product) => status.set(DetailStatus::Ready(Box::new(product))),
                    Err(ApiError::NotFound) => status.set(DetailStatus::NotFound),
                    Err(error) => {
                        if matches!(error, ApiError::Unauthorized) {
                            session_store().token_rejected();
                        }
                        status.set(DetailStatus::Failed(error.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let go_back = Callback::from(|_: MouseEvent| navigate("/products"));

    let open_confirm = {
        let delete_stage = delete_stage.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_: MouseEvent| {
            delete_error.set(None);
            delete_stage.set(DeleteStage::Confirming);
        })
    };

    let cancel_delete = {
        let delete_stage = delete_stage.clone();
        Callback::from(move |_: MouseEvent| delete_stage.set(DeleteStage::Hidden))
    };

    let confirm_delete = {
        let delete_stage = delete_stage.clone();
        let delete_error = delete_error.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            let delete_stage = delete_stage.clone();
            let delete_error = delete_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(token) = session_store().token() else {
                    delete_error.set(Some("Sesión expirada".to_string()));
                    delete_stage.set(DeleteStage::Hidden);
                    return;
                };
                delete_stage.set(DeleteStage::Deleting);
                match ApiClient::new().delete_product(&token, id).await {
                    Ok(_) => {
                        delete_stage.set(DeleteStage::Done);
                        TimeoutFuture::new(1500).await;
                        navigate("/products");
                    }
                    Err(error) => {
                        if matches!(error, ApiError::Unauthorized) {
                            session_store().token_rejected();
                        }
                        delete_error.set(Some(error.user_message()));
                        delete_stage.set(DeleteStage::Hidden);
                    }
                }
            });
        })
    };

    let body = match &*status {
        DetailStatus::Loading => html! {
            <div class="detail-status">
                <div class="spinner"></div>
                <p>{"Cargando producto..."}</p>
            </div>
        },
        DetailStatus::NotFound => html! {
            <div class="detail-status not-found">
                <div class="not-found-icon">{"🔍"}</div>
                <h2>{"Producto no encontrado"}</h2>
                <p>{"El producto no existe o ya no está disponible."}</p>
                <button class="btn-primary" onclick={go_back.clone()}>{"Volver al catálogo"}</button>
            </div>
        },
        DetailStatus::Failed(message) => html! {
            <div class="detail-status error-banner">
                <p>{format!("❌ {}", message)}</p>
                <button class="btn-secondary" onclick={go_back.clone()}>{"Volver al catálogo"}</button>
            </div>
        },
        DetailStatus::Ready(product) => {
            let snapshot = (*session.state).clone();
            let can_edit = snapshot
                .user
                .as_ref()
                .map(|user| product.is_owned_by(user.id) || user.is_admin())
                .unwrap_or(false);

            let on_edit = {
                let id = product.id;
                Callback::from(move |_: MouseEvent| navigate(&format!("/products/{}/edit", id)))
            };

            html! {
                <article class="product-detail">
                    if !product.is_active {
                        <div class="inactive-notice">{"⚠️ Este producto está desactivado"}</div>
                    }
                    if let Some(error) = &*delete_error {
                        <div class="error-banner"><p>{format!("❌ {}", error)}</p></div>
                    }
                    <div class="detail-header">
                        <h1>{&product.name}</h1>
                        <span class="detail-price">{format_price(product.price)}</span>
                    </div>
                    if let Some(category) = &product.category {
                        <span class="product-category">{category}</span>
                    }
                    if let Some(description) = &product.description {
                        <p class="detail-description">{description}</p>
                    }
                    <div class="product-tags">
                        { for product.tag_list().into_iter().map(|tag| html! {
                            <span key={tag.clone()} class="product-tag">{tag}</span>
                        })}
                    </div>
                    <dl class="detail-meta">
                        if let Some(creator) = &product.creator_username {
                            <div><dt>{"Publicado por"}</dt><dd>{creator}</dd></div>
                        }
                        if let Some(created_at) = &product.created_at {
                            <div><dt>{"Publicado"}</dt><dd>{format_date(created_at)}</dd></div>
                        }
                        if let Some(updated_at) = &product.updated_at {
                            <div><dt>{"Actualizado"}</dt><dd>{format_date(updated_at)}</dd></div>
                        }
                    </dl>
                    if can_edit {
                        <div class="detail-actions">
                            <button class="btn-primary" onclick={on_edit}>{"✏️ Editar"}</button>
                            <button class="btn-danger" onclick={open_confirm.clone()}>{"🗑️ Eliminar"}</button>
                        </div>
                    }
                </article>
            }
        }
    };

    html! {
        <div class="product-detail-view">
            {body}
            {
                match *delete_stage {
                    DeleteStage::Hidden => html! {},
                    DeleteStage::Confirming | DeleteStage::Deleting => html! {
                        <div class="modal-backdrop">
                            <div class="modal">
                                <h3>{"¿Eliminar este producto?"}</h3>
                                <p>{"Dejará de aparecer en el catálogo."}</p>
                                <div class="modal-actions">
                                    <button
                                        class="btn-secondary"
                                        onclick={cancel_delete.clone()}
                                        disabled={*delete_stage == DeleteStage::Deleting}
                                    >
                                        {"Cancelar"}
                                    </button>
                                    <button
                                        class="btn-danger"
                                        onclick={confirm_delete.clone()}
                                        disabled={*delete_stage == DeleteStage::Deleting}
                                    >
                                        {if *delete_stage == DeleteStage::Deleting { "Eliminando..." } else { "Sí, eliminar" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    },
                    DeleteStage::Done => html! {
                        <div class="modal-backdrop">
                            <div class="modal success">
                                <p>{"✅ Producto eliminado"}</p>
                            </div>
                        </div>
                    },
                }
            }
        </div>
    }
}
