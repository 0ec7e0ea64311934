//! Root application component with routing and context providers.
//!
//! This is a thin host for the components: a real deployment provides the
//! catalog and session contexts from its backend and auth provider before
//! mounting [`App`], or embeds seed data in the page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::config;
use crate::pages::{
    account::AccountPage, admin_products::AdminProductsPage, product::ProductPage, shop::ShopPage,
};
use crate::state::auth::{AuthState, SessionHandle};
use crate::types::Product;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Catalog and session contexts for the app.
///
/// An embedding application that already provides a catalog signal or a
/// [`SessionHandle`] keeps them; otherwise they are seeded from data embedded
/// in the page and logout only clears the local user.
pub fn host_contexts() -> (RwSignal<Vec<Product>>, SessionHandle) {
    let catalog = use_context::<RwSignal<Vec<Product>>>()
        .unwrap_or_else(|| RwSignal::new(config::load_catalog()));
    let session = use_context::<SessionHandle>().unwrap_or_else(|| {
        SessionHandle::local(RwSignal::new(AuthState {
            user: config::load_user(),
            loading: false,
        }))
    });
    (catalog, session)
}

/// Root application component.
///
/// Provides config, catalog, and session contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (catalog, session) = host_contexts();
    provide_context(config::load());
    provide_context(catalog);
    provide_context(session);

    view! {
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShopPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("products")) view=AdminProductsPage/>
                <Route path=(StaticSegment("user"), WildcardSegment("section")) view=AccountPage/>
            </Routes>
        </Router>
    }
}
