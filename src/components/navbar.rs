use yew::prelude::*;

use crate::hooks::use_session;
use crate::utils::navigation::navigate;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let snapshot = (*session.state).clone();

    let link = |path: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate(path);
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigate("/");
        })
    };

    let is_admin = snapshot
        .user
        .as_ref()
        .map(|user| user.is_admin())
        .unwrap_or(false);

    html! {
        <header class="navbar">
            <a class="navbar-brand" href="/" onclick={link("/")}>
                {"🛒 Marketplace"}
            </a>
            <nav class="navbar-links">
                <a href="/" onclick={link("/")}>{"Productos"}</a>
                if snapshot.is_authenticated {
                    <a href="/my-products" onclick={link("/my-products")}>{"Mis productos"}</a>
                    <a href="/products/new" onclick={link("/products/new")}>{"Publicar"}</a>
                    if is_admin {
                        <a href="/admin" onclick={link("/admin")}>{"Admin"}</a>
                    }
                    <a class="navbar-user" href="/profile" onclick={link("/profile")}>
                        {snapshot.user.as_ref().map(|u| u.username.clone()).unwrap_or_else(|| "Perfil".to_string())}
                    </a>
                    <button class="btn-logout" onclick={on_logout}>{"Salir"}</button>
                } else {
                    <a href="/login" onclick={link("/login")}>{"Entrar"}</a>
                    <a class="navbar-cta" href="/register" onclick={link("/register")}>{"Registrarse"}</a>
                }
            </nav>
        </header>
    }
}
