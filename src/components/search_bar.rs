use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_suggestions;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Texto con el que arranca el campo (el `q` que ya viene en la URL)
    pub initial: String,
    /// Se emite al enviar el formulario o elegir una sugerencia.
    /// Cadena vacía significa "quitar la búsqueda".
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let text = use_state(|| props.initial.clone());
    let autocomplete = use_suggestions();

    // atrás/adelante del navegador cambian la URL por fuera del campo
    {
        let text = text.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            text.set(initial.clone());
            || ()
        });
    }

    let oninput = {
        let text = text.clone();
        let on_input = autocomplete.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            text.set(value.clone());
            on_input.emit(value);
        })
    };

    let onsubmit = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        let clear = autocomplete.clear.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            clear.emit(());
            on_search.emit((*text).clone());
        })
    };

    let onclear = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        let clear = autocomplete.clear.clone();
        Callback::from(move |_: MouseEvent| {
            text.set(String::new());
            clear.emit(());
            on_search.emit(String::new());
        })
    };

    let onfocus = {
        let text = text.clone();
        let on_input = autocomplete.on_input.clone();
        Callback::from(move |_: FocusEvent| {
            on_input.emit((*text).clone());
        })
    };

    // el click en una sugerencia llega después del blur; el retardo le
    // deja hueco antes de cerrar el desplegable
    let onblur = {
        let clear = autocomplete.clear.clone();
        Callback::from(move |_: FocusEvent| {
            let clear = clear.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(150).await;
                clear.emit(());
            });
        })
    };

    html! {
        <form class="search-bar" onsubmit={onsubmit}>
            <div class="search-field">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar productos..."
                    value={(*text).clone()}
                    oninput={oninput}
                    onfocus={onfocus}
                    onblur={onblur}
                />
                if !text.is_empty() {
                    <button type="button" class="search-clear" onclick={onclear}>{"✕"}</button>
                }
                <button type="submit" class="search-submit">{"🔍"}</button>
            </div>
            if !autocomplete.suggestions.is_empty() {
                <ul class="search-suggestions">
                    { for autocomplete.suggestions.iter().map(|suggestion| {
                        let onclick = {
                            let suggestion = suggestion.clone();
                            let text = text.clone();
                            let on_search = props.on_search.clone();
                            let clear = autocomplete.clear.clone();
                            Callback::from(move |_: MouseEvent| {
                                text.set(suggestion.clone());
                                clear.emit(());
                                on_search.emit(suggestion.clone());
                            })
                        };
                        html! {
                            <li key={suggestion.clone()} class="search-suggestion" onclick={onclick}>
                                {suggestion}
                            </li>
                        }
                    })}
                </ul>
            }
        </form>
    }
}
