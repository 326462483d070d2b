use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::navigation::{current_path, current_search, parse_path, Route, ROUTECHANGE_EVENT};

#[derive(Clone, PartialEq)]
pub struct RouteState {
    pub route: Route,
    pub search: String,
}

fn read_location() -> RouteState {
    RouteState {
        route: parse_path(&current_path()),
        search: current_search(),
    }
}

/// Ruta activa, reactiva a `navigate` y al botón atrás del navegador.
/// Pensado para montarse una sola vez en el componente raíz.
#[hook]
pub fn use_route() -> RouteState {
    let state = use_state(read_location);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let on_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
                state.set(read_location());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("popstate", on_change.as_ref().unchecked_ref());
                let _ = window.add_event_listener_with_callback(
                    ROUTECHANGE_EVENT,
                    on_change.as_ref().unchecked_ref(),
                );
            }
            // vive tanto como la app
            on_change.forget();
            || ()
        });
    }

    (*state).clone()
}
