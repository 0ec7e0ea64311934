//! Signed-in account area: sidebar plus the selected section.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::user_sidebar::UserSidebar;
use crate::state::auth::SessionHandle;
use crate::state::sidebar::{MENU_ITEMS, is_active_path};

/// Account layout. Navigation after logout belongs to the sidebar alone;
/// a signed-out visitor just sees a notice.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let pathname = use_location().pathname;
    let sidebar_open = RwSignal::new(false);
    let signed_out = move || session.state.with(|s| !s.loading && s.user.is_none());

    let section = move || {
        pathname.with(|current| {
            MENU_ITEMS
                .iter()
                .find(|item| is_active_path(current, item.path))
                .map_or("Home", |item| item.label)
        })
    };

    view! {
        <div class="account-page">
            <UserSidebar open=sidebar_open/>
            <main class="account-page__content">
                <button class="account-page__menu" title="Open menu" on:click=move |_| sidebar_open.set(true)>
                    "\u{2630}"
                </button>
                <h1 class="account-page__title">{section}</h1>
                <Show when=signed_out>
                    <p class="account-page__signed-out">"You are signed out."</p>
                </Show>
            </main>
        </div>
    }
}
