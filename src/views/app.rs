// ============================================================================
// APP - Raíz de la aplicación: sesión, ruteo y layout
// ============================================================================

use yew::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_route, use_session};
use crate::state::{session_store, AuthSnapshot};
use crate::utils::navigation::Route;
use crate::views::{
    AdminView, LoginView, MyProductsView, NotFoundView, ProductDetailView, ProductFormView,
    ProductsView, ProfileView, RegisterView,
};

#[function_component(App)]
pub fn app() -> Html {
    let route_state = use_route();
    let session = use_session();
    let snapshot = (*session.state).clone();

    // validar el token guardado contra el backend al arrancar
    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            session_store().bootstrap().await;
        });
        || ()
    });

    let main = match route_state.route {
        Route::Products => html! { <ProductsView search={route_state.search.clone()} /> },
        Route::ProductDetail(id) => html! { <ProductDetailView id={id} /> },
        Route::ProductNew => require_session(&snapshot, html! { <ProductFormView /> }),
        Route::ProductEdit(id) => {
            require_session(&snapshot, html! { <ProductFormView id={Some(id)} /> })
        }
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Profile => require_session(&snapshot, html! { <ProfileView /> }),
        Route::MyProducts => require_session(&snapshot, html! { <MyProductsView /> }),
        Route::Admin => require_admin(&snapshot),
        Route::NotFound => html! { <NotFoundView /> },
    };

    html! {
        <>
            <Navbar />
            <main class="app-main">
                { main }
            </main>
        </>
    }
}

// Las rutas privadas muestran el login en el sitio en vez de redirigir:
// al autenticarse, el mismo render vuelve a evaluar la ruta pedida.
fn require_session(snapshot: &AuthSnapshot, inner: Html) -> Html {
    if snapshot.is_authenticated {
        inner
    } else {
        html! { <LoginView /> }
    }
}

fn require_admin(snapshot: &AuthSnapshot) -> Html {
    if !snapshot.is_authenticated {
        return html! { <LoginView /> };
    }
    match &snapshot.user {
        // token hidratado pero perfil aún en vuelo
        None => html! {
            <div class="detail-status">
                <div class="spinner"></div>
                <p>{"Cargando sesión..."}</p>
            </div>
        },
        Some(user) if user.is_admin() => html! { <AdminView /> },
        Some(_) => html! {
            <div class="forbidden-view">
                <span class="not-found-icon">{"🔒"}</span>
                <h1>{"Acceso restringido"}</h1>
                <p>{"Esta sección requiere permisos de administrador."}</p>
            </div>
        },
    }
}
