use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::utils::navigation::navigate;

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let session = use_session();
    let snapshot = (*session.state).clone();
    let local_error = use_state(|| None::<String>);

    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // el registro encadena un login: al autenticarse nos vamos al catálogo
    use_effect_with(snapshot.is_authenticated, move |authenticated| {
        if *authenticated {
            navigate("/");
        }
        || ()
    });

    let onsubmit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let local_error = local_error.clone();
        let register = session.register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(username_input), Some(email_input), Some(password_input), Some(confirm_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let username = username_input.value().trim().to_string();
            let email = email_input.value().trim().to_string();
            let password = password_input.value();
            let confirm = confirm_input.value();

            if username.chars().count() < 3 {
                local_error.set(Some("El usuario necesita al menos 3 caracteres".to_string()));
                return;
            }
            if password.chars().count() < 6 {
                local_error.set(Some("La contraseña necesita al menos 6 caracteres".to_string()));
                return;
            }
            if password != confirm {
                local_error.set(Some("Las contraseñas no coinciden".to_string()));
                return;
            }

            local_error.set(None);
            register.emit((username, email, password));
        })
    };

    let go_login = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate("/login");
    });

    // el error local (validación) tiene prioridad sobre el del backend
    let error = (*local_error).clone().or_else(|| snapshot.error.clone());

    html! {
        <div class="auth-view">
            <div class="auth-card">
                <h1>{"Crear cuenta"}</h1>
                if let Some(message) = error {
                    <div class="error-banner"><p>{format!("❌ {}", message)}</p></div>
                }
                <form class="auth-form" onsubmit={onsubmit}>
                    <div class="form-group">
                        <label for="register-username">{"Usuario"}</label>
                        <input
                            id="register-username"
                            type="text"
                            placeholder="Elige un usuario"
                            ref={username_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">{"Email"}</label>
                        <input
                            id="register-email"
                            type="email"
                            placeholder="tu@email.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-password">{"Contraseña"}</label>
                        <input
                            id="register-password"
                            type="password"
                            placeholder="Mínimo 6 caracteres"
                            ref={password_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-confirm">{"Repite la contraseña"}</label>
                        <input
                            id="register-confirm"
                            type="password"
                            placeholder="Otra vez"
                            ref={confirm_ref}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled={snapshot.is_loading}>
                        {if snapshot.is_loading { "Creando cuenta..." } else { "Registrarse" }}
                    </button>
                </form>
                <p class="auth-footer">
                    {"¿Ya tienes cuenta? "}
                    <a href="/login" onclick={go_login}>{"Inicia sesión"}</a>
                </p>
            </div>
        </div>
    }
}
