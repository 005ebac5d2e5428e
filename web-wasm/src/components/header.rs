//! Header component

use crate::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();

    view! {
        <header class="d-flex justify-content-between align-items-center mb-4">
            <h1 class="h3 mb-0">"🛒 Lista de Compras"</h1>
            <button
                id="themeToggle"
                class="btn btn-outline-secondary"
                title="Alternar tema"
                on:click=move |_| theme.toggle()
            >
                {move || theme.theme.get().toggle_icon()}
            </button>
        </header>
    }
}
