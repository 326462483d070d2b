// ============================================================================
// ADMIN VIEW - Gestión de usuarios y catálogo completo
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{Pagination, ProductGrid};
use crate::error::ApiError;
use crate::hooks::use_listing;
use crate::models::{AdminUserPatch, ListingQuery, User};
use crate::services::ApiClient;
use crate::state::{admin_products_store, session_store};
use crate::utils::format::format_datetime;

const ROLES: [&str; 3] = ["user", "moderator", "admin"];

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Users,
    Products,
}

#[function_component(AdminView)]
pub fn admin_view() -> Html {
    let tab = use_state(|| AdminTab::Users);
    let users = use_state(Vec::<User>::new);
    let users_loading = use_state(|| false);
    let users_error = use_state(|| None::<String>);
    let listing = use_listing(&admin_products_store());

    // usuarios al montar
    {
        let users = users.clone();
        let users_loading = users_loading.clone();
        let users_error = users_error.clone();
        use_effect_with((), move |_| {
            users_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let Some(token) = session_store().token() else {
                    users_loading.set(false);
                    return;
                };
                match ApiClient::new().admin_list_users(&token).await {
                    Ok(list) => {
                        users.set(list);
                        users_error.set(None);
                    }
                    Err(error) => {
                        if matches!(error, ApiError::Unauthorized) {
                            session_store().token_rejected();
                        }
                        users_error.set(Some(error.user_message()));
                    }
                }
                users_loading.set(false);
            });
            || ()
        });
    }

    // catálogo completo (incluye inactivos) al montar
    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            admin_products_store().load(ListingQuery::default()).await;
        });
        || ()
    });

    let apply_patch = {
        let users = users.clone();
        let users_error = users_error.clone();
        Callback::from(move |(id, patch): (i64, AdminUserPatch)| {
            let users = users.clone();
            let users_error = users_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(token) = session_store().token() else {
                    users_error.set(Some("Sesión expirada".to_string()));
                    return;
                };
                match ApiClient::new().admin_update_user(&token, id, &patch).await {
                    Ok(response) => {
                        let mut next = (*users).clone();
                        if let Some(slot) = next.iter_mut().find(|u| u.id == id) {
                            *slot = response.user;
                        }
                        users.set(next);
                        users_error.set(None);
                    }
                    Err(error) => {
                        if matches!(error, ApiError::Unauthorized) {
                            session_store().token_rejected();
                        }
                        users_error.set(Some(error.user_message()));
                    }
                }
            });
        })
    };

    let on_products_page = {
        let pages = listing.pagination.pages;
        let query = listing.query.clone();
        Callback::from(move |page: u32| {
            if page < 1 || page > pages {
                return;
            }
            let query = query.with_page(page);
            wasm_bindgen_futures::spawn_local(async move {
                admin_products_store().load(query).await;
            });
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let select_users = {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(AdminTab::Users))
    };
    let select_products = {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(AdminTab::Products))
    };

    let current_user_id = session_store().snapshot().user.map(|u| u.id);

    html! {
        <div class="admin-view">
            <h1>{"👑 Administración"}</h1>
            <div class="admin-tabs">
                <button
                    class={classes!("tab-button", (*tab == AdminTab::Users).then_some("active"))}
                    onclick={select_users}
                >
                    {"Usuarios"}
                </button>
                <button
                    class={classes!("tab-button", (*tab == AdminTab::Products).then_some("active"))}
                    onclick={select_products}
                >
                    {"Productos"}
                </button>
            </div>

            if *tab == AdminTab::Users {
                if let Some(message) = &*users_error {
                    <div class="error-banner"><p>{format!("❌ {}", message)}</p></div>
                }
                if *users_loading {
                    <div class="detail-status">
                        <div class="spinner"></div>
                        <p>{"Cargando usuarios..."}</p>
                    </div>
                } else {
                    <table class="users-table">
                        <thead>
                            <tr>
                                <th>{"Usuario"}</th>
                                <th>{"Email"}</th>
                                <th>{"Rol"}</th>
                                <th>{"Estado"}</th>
                                <th>{"Último acceso"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|user| {
                                user_row(user, current_user_id, &apply_patch)
                            }) }
                        </tbody>
                    </table>
                }
            } else {
                <ProductGrid
                    products={listing.products.clone()}
                    is_loading={listing.is_loading}
                    error={listing.error.clone()}
                />
                <Pagination pagination={listing.pagination.clone()} on_page={on_products_page} />
            }
        </div>
    }
}

fn user_row(
    user: &User,
    current_user_id: Option<i64>,
    apply_patch: &Callback<(i64, AdminUserPatch)>,
) -> Html {
    let id = user.id;
    // editarse a sí mismo desde esta tabla invita a perder el acceso
    let is_self = current_user_id == Some(id);

    let on_role = {
        let apply_patch = apply_patch.clone();
        Callback::from(move |e: Event| {
            let role = e.target_unchecked_into::<HtmlSelectElement>().value();
            apply_patch.emit((
                id,
                AdminUserPatch {
                    role: Some(role),
                    is_active: None,
                },
            ));
        })
    };

    let on_toggle = {
        let apply_patch = apply_patch.clone();
        let target = !user.is_active;
        Callback::from(move |_: MouseEvent| {
            apply_patch.emit((
                id,
                AdminUserPatch {
                    role: None,
                    is_active: Some(target),
                },
            ));
        })
    };

    html! {
        <tr key={id.to_string()} class={classes!((!user.is_active).then_some("inactive"))}>
            <td>{&user.username}</td>
            <td>{&user.email}</td>
            <td>
                <select onchange={on_role} disabled={is_self}>
                    { for ROLES.iter().map(|role| html! {
                        <option value={*role} selected={user.role == *role}>{role}</option>
                    }) }
                </select>
            </td>
            <td>
                { if user.is_active { "Activo" } else { "Inactivo" } }
            </td>
            <td>
                { user.last_login.as_deref().map(format_datetime).unwrap_or_else(|| "Nunca".to_string()) }
            </td>
            <td>
                <button class="btn-secondary" onclick={on_toggle} disabled={is_self}>
                    { if user.is_active { "Desactivar" } else { "Activar" } }
                </button>
            </td>
        </tr>
    }
}
