use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::session_store;

/// Categorías en uso para el panel de filtros. Se piden una vez al montar;
/// si fallan, el selector simplemente queda vacío.
#[hook]
pub fn use_categories() -> Vec<String> {
    let categories = use_state(Vec::new);

    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let token = session_store().token();
                match ApiClient::new().list_categories(token.as_deref()).await {
                    Ok(list) => categories.set(list),
                    Err(error) => {
                        log::warn!("⚠️ No se pudieron cargar las categorías: {}", error)
                    }
                }
            });
            || ()
        });
    }

    (*categories).clone()
}
