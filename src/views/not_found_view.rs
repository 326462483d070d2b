use yew::prelude::*;

use crate::utils::navigation::navigate;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    let go_home = Callback::from(|_: MouseEvent| navigate("/products"));

    html! {
        <div class="not-found-view">
            <span class="not-found-icon">{"🔍"}</span>
            <h1>{"404"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <button class="btn-primary" onclick={go_home}>{"Ir al catálogo"}</button>
        </div>
    }
}
