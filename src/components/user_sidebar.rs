//! Account-area navigation drawer with profile header and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::StorefrontConfig;
use crate::state::auth::{SessionHandle, logout_and_redirect};
use crate::state::sidebar::{ACCOUNT_HOME_PATH, MENU_ITEMS, PROFILE_PATH, is_active_path};
use crate::util::format::user_initials;

/// User account sidebar.
///
/// `open` drives the mobile drawer; desktop layouts keep it visible through
/// CSS regardless. Requires a [`SessionHandle`] in context.
#[component]
pub fn UserSidebar(open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let user = move || session.state.with(|s| s.user.clone().unwrap_or_default());
    let initials = move || user_initials(&user());
    let full_name = move || user().display_name();
    let account_type = move || user().account_type.unwrap_or_default();

    let on_avatar = {
        let navigate = navigate.clone();
        move |_| {
            navigate(PROFILE_PATH, NavigateOptions::default());
            open.set(false);
        }
    };

    let on_back_home = {
        let navigate = navigate.clone();
        move |_| navigate(ACCOUNT_HOME_PATH, NavigateOptions::default())
    };

    let redirect = config.logout_redirect;
    let on_logout = move |_| {
        leptos::logging::log!("logging out, redirecting to {redirect}");
        logout_and_redirect(&session, &redirect, |path| {
            navigate(path, NavigateOptions::default());
        });
    };

    let links = MENU_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            let active = move || pathname.with(|current| is_active_path(current, path));
            view! {
                <a
                    href=path
                    class="user-sidebar__link"
                    class:user-sidebar__link--active=active
                    aria-current=move || active().then_some("page")
                    on:click=move |_| open.set(false)
                >
                    <span class="user-sidebar__icon">{item.icon}</span>
                    <span class="user-sidebar__label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Show when=move || open.get()>
            <div class="user-sidebar__overlay" on:click=move |_| open.set(false)></div>
        </Show>

        <aside class="user-sidebar" class:user-sidebar--open=move || open.get()>
            <div class="user-sidebar__header">
                <div class="user-sidebar__identity">
                    <div class="user-sidebar__avatar" aria-label="User Profile" on:click=on_avatar>
                        {initials}
                    </div>
                    <div class="user-sidebar__who">
                        <div class="user-sidebar__name">{full_name}</div>
                        <div class="user-sidebar__account-type">{account_type}</div>
                    </div>
                </div>
                <button class="user-sidebar__close" title="Close menu" on:click=move |_| open.set(false)>
                    "\u{2715}"
                </button>
            </div>

            <nav class="user-sidebar__nav">{links}</nav>

            <div class="user-sidebar__footer">
                <button class="btn user-sidebar__home" aria-label="Back to Home" on:click=on_back_home>
                    "\u{2302} Back to Home"
                </button>
                <button class="btn user-sidebar__logout" on:click=on_logout>
                    <span class="user-sidebar__logout-label">"Logout"</span>
                    <span class="user-sidebar__logout-hint">"Sign out"</span>
                </button>
            </div>
        </aside>
    }
}
