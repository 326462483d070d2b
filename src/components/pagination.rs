use yew::prelude::*;

use crate::models::{page_window, PageItem, PaginationView};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub pagination: PaginationView,
    pub on_page: Callback<u32>,
}

/// Control de páginas con ventana deslizante. Con una sola página no
/// se pinta nada.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let p = &props.pagination;
    if p.pages <= 1 {
        return html! {};
    }

    let go = |target: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };

    html! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled={!p.has_prev}
                onclick={go(p.page.saturating_sub(1))}
            >
                {"‹ Anterior"}
            </button>
            { for page_window(p.page, p.pages).into_iter().enumerate().map(|(i, item)| match item {
                PageItem::Page(n) => html! {
                    <button
                        key={format!("p{}", n)}
                        class={classes!("page-btn", (n == p.page).then_some("active"))}
                        onclick={go(n)}
                    >
                        {n}
                    </button>
                },
                PageItem::Ellipsis => html! {
                    <span key={format!("e{}", i)} class="page-ellipsis">{"…"}</span>
                },
            })}
            <button
                class="page-btn"
                disabled={!p.has_next}
                onclick={go(p.page + 1)}
            >
                {"Siguiente ›"}
            </button>
        </nav>
    }
}
