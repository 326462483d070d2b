use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::error::ApiError;
use crate::services::{should_fetch_suggestions, ApiClient, Sequencer, SUGGESTIONS_DEBOUNCE_MS};
use crate::state::session_store;

pub struct UseSuggestionsHandle {
    pub suggestions: UseStateHandle<Vec<String>>,
    pub on_input: Callback<String>,
    pub clear: Callback<()>,
}

/// Autocompletado del buscador: debounce de 300 ms y last-write-wins.
/// Cada tecla emite un número de petición; las respuestas que ya no son
/// la última se tiran.
#[hook]
pub fn use_suggestions() -> UseSuggestionsHandle {
    let suggestions = use_state(Vec::new);
    let sequencer = (*use_state(Sequencer::new)).clone();

    let on_input = {
        let suggestions = suggestions.clone();
        let sequencer = sequencer.clone();
        Callback::from(move |text: String| {
            // reservar el turno antes del corte corto: teclear de vuelta
            // a una letra también invalida lo que esté en vuelo
            let request_id = sequencer.issue();
            if !should_fetch_suggestions(&text) {
                suggestions.set(Vec::new());
                return;
            }

            let suggestions = suggestions.clone();
            let sequencer = sequencer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(SUGGESTIONS_DEBOUNCE_MS).await;
                if !sequencer.is_current(request_id) {
                    return;
                }

                let token = session_store().token();
                match ApiClient::new()
                    .get_suggestions(token.as_deref(), text.trim())
                    .await
                {
                    Ok(list) => {
                        if sequencer.is_current(request_id) {
                            suggestions.set(list);
                        }
                    }
                    Err(error) => {
                        if matches!(error, ApiError::Unauthorized) {
                            session_store().token_rejected();
                        }
                        log::warn!("⚠️ Sugerencias no disponibles: {}", error);
                        if sequencer.is_current(request_id) {
                            suggestions.set(Vec::new());
                        }
                    }
                }
            });
        })
    };

    let clear = {
        let suggestions = suggestions.clone();
        let sequencer = sequencer.clone();
        Callback::from(move |_: ()| {
            sequencer.issue();
            suggestions.set(Vec::new());
        })
    };

    UseSuggestionsHandle {
        suggestions,
        on_input,
        clear,
    }
}
