use yew::prelude::*;

use crate::state::{ListingState, ListingStore};

/// Espejo reactivo de un listing store (catálogo, míos o admin)
#[hook]
pub fn use_listing(store: &ListingStore) -> ListingState {
    let state = use_state(|| store.snapshot());

    {
        let state = state.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let id = store.subscribe({
                let state = state.clone();
                let store = store.clone();
                move || state.set(store.snapshot())
            });
            move || store.unsubscribe(id)
        });
    }

    (*state).clone()
}
