use yew::prelude::*;

use crate::state::{session_store, AuthSnapshot};

/// Sesión compartida: snapshot reactivo + acciones
pub struct UseSessionHandle {
    pub state: UseStateHandle<AuthSnapshot>,
    pub login: Callback<(String, String)>,
    pub register: Callback<(String, String, String)>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(|| session_store().snapshot());

    // Espejo del store: cada cambio re-renderiza a quien use el hook
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let store = session_store();
            let id = store.subscribe({
                let state = state.clone();
                let store = store.clone();
                move || state.set(store.snapshot())
            });
            move || store.unsubscribe(id)
        });
    }

    let login = Callback::from(move |(username, password): (String, String)| {
        wasm_bindgen_futures::spawn_local(async move {
            session_store().login(&username, &password).await;
        });
    });

    let register = Callback::from(move |(username, email, password): (String, String, String)| {
        wasm_bindgen_futures::spawn_local(async move {
            // el fallo ya queda reflejado en el snapshot para el formulario
            let _ = session_store().register(&username, &email, &password).await;
        });
    });

    let logout = Callback::from(move |_: ()| {
        wasm_bindgen_futures::spawn_local(async move {
            session_store().logout().await;
        });
    });

    let clear_error = Callback::from(move |_: ()| {
        session_store().clear_error();
    });

    UseSessionHandle {
        state,
        login,
        register,
        logout,
        clear_error,
    }
}
