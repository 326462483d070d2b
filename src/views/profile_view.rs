use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::error::ApiError;
use crate::hooks::use_session;
use crate::models::ProfileUpdate;
use crate::services::ApiClient;
use crate::state::session_store;
use crate::utils::format::{format_date, format_datetime};

#[derive(Clone, PartialEq)]
enum Feedback {
    Success(String),
    Error(String),
}

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let session = use_session();
    let snapshot = (*session.state).clone();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let is_submitting = use_state(|| false);
    let feedback = use_state(|| None::<Feedback>);

    // el perfil puede llegar después (hidratación); sembrar cuando esté
    {
        let email = email.clone();
        use_effect_with(snapshot.user.clone(), move |user| {
            if let Some(user) = user {
                email.set(user.email.clone());
            }
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let feedback = feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let update = ProfileUpdate {
                email: {
                    let trimmed = email.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                },
                password: {
                    if password.is_empty() {
                        None
                    } else {
                        Some((*password).clone())
                    }
                },
            };
            if update.email.is_none() && update.password.is_none() {
                feedback.set(Some(Feedback::Error("No hay cambios que guardar".to_string())));
                return;
            }

            is_submitting.set(true);
            let password = password.clone();
            let is_submitting = is_submitting.clone();
            let feedback = feedback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(token) = session_store().token() else {
                    feedback.set(Some(Feedback::Error("Sesión expirada".to_string())));
                    is_submitting.set(false);
                    return;
                };
                match ApiClient::new().update_profile(&token, &update).await {
                    Ok(response) => {
                        session_store().update_user(response.user);
                        password.set(String::new());
                        feedback.set(Some(Feedback::Success("✅ Perfil actualizado".to_string())));
                    }
                    Err(error) => {
                        if matches!(error, ApiError::Unauthorized) {
                            session_store().token_rejected();
                        }
                        feedback.set(Some(Feedback::Error(error.user_message())));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let Some(user) = snapshot.user else {
        return html! {
            <div class="detail-status">
                <div class="spinner"></div>
                <p>{"Cargando perfil..."}</p>
            </div>
        };
    };

    html! {
        <div class="profile-view">
            <h1>{"Mi perfil"}</h1>
            <div class="profile-card">
                <dl class="detail-meta">
                    <div><dt>{"Usuario"}</dt><dd>{&user.username}</dd></div>
                    <div><dt>{"Rol"}</dt><dd><span class="role-badge">{&user.role}</span></dd></div>
                    if let Some(created_at) = &user.created_at {
                        <div><dt>{"Miembro desde"}</dt><dd>{format_date(created_at)}</dd></div>
                    }
                    if let Some(last_login) = &user.last_login {
                        <div><dt>{"Último acceso"}</dt><dd>{format_datetime(last_login)}</dd></div>
                    }
                </dl>
            </div>

            {
                match &*feedback {
                    Some(Feedback::Success(message)) => html! {
                        <div class="success-banner"><p>{message}</p></div>
                    },
                    Some(Feedback::Error(message)) => html! {
                        <div class="error-banner"><p>{format!("❌ {}", message)}</p></div>
                    },
                    None => html! {},
                }
            }

            <form class="profile-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="profile-email">{"Email"}</label>
                    <input
                        id="profile-email"
                        type="email"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-group">
                    <label for="profile-password">{"Nueva contraseña"}</label>
                    <input
                        id="profile-password"
                        type="password"
                        placeholder="Dejar en blanco para no cambiarla"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                </div>
                <button type="submit" class="btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "Guardando..." } else { "Guardar cambios" }}
                </button>
            </form>
        </div>
    }
}
