use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::utils::navigation::navigate;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let snapshot = (*session.state).clone();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    // errores de un intento anterior no deben quedar colgados
    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // con sesión ya iniciada este formulario sobra
    use_effect_with(snapshot.is_authenticated, move |authenticated| {
        if *authenticated {
            navigate("/");
        }
        || ()
    });

    let onsubmit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let login = session.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let password = password_input.value();
                if username.trim().is_empty() || password.is_empty() {
                    return;
                }
                login.emit((username.trim().to_string(), password));
            }
        })
    };

    let go_register = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate("/register");
    });

    html! {
        <div class="auth-view">
            <div class="auth-card">
                <h1>{"Iniciar sesión"}</h1>
                if let Some(error) = &snapshot.error {
                    <div class="error-banner"><p>{format!("❌ {}", error)}</p></div>
                }
                <form class="auth-form" onsubmit={onsubmit}>
                    <div class="form-group">
                        <label for="login-username">{"Usuario o email"}</label>
                        <input
                            id="login-username"
                            type="text"
                            placeholder="Tu usuario"
                            ref={username_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Contraseña"}</label>
                        <input
                            id="login-password"
                            type="password"
                            placeholder="Tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled={snapshot.is_loading}>
                        {if snapshot.is_loading { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="auth-footer">
                    {"¿Sin cuenta? "}
                    <a href="/register" onclick={go_register}>{"Regístrate"}</a>
                </p>
            </div>
        </div>
    }
}
