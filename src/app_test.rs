use super::*;
use crate::types::User;

fn product(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Item {id}"),
        image: format!("/img/{id}.jpg"),
        price: 5.0,
        original_price: None,
        rent_price: None,
        stock: 2,
        status: "Active".to_owned(),
        category: "Misc".to_owned(),
        in_stock: true,
    }
}

#[test]
fn host_contexts_reuse_provided_catalog() {
    let owner = Owner::new();
    owner.with(|| {
        let host_catalog = RwSignal::new(Vec::<Product>::new());
        provide_context(host_catalog);

        let (catalog, _) = host_contexts();
        host_catalog.set(vec![product("a"), product("b")]);

        assert_eq!(catalog.with_untracked(Vec::len), 2);
    });
}

#[test]
fn host_contexts_reuse_provided_session() {
    let owner = Owner::new();
    owner.with(|| {
        let logouts = RwSignal::new(0_u32);
        let state = RwSignal::new(AuthState {
            user: Some(User::default()),
            loading: false,
        });
        provide_context(SessionHandle::new(state, Callback::new(move |()| logouts.update(|n| *n += 1))));

        let (_, session) = host_contexts();
        assert!(session.state.get_untracked().user.is_some());

        crate::state::auth::logout_and_redirect(&session, "/", |_| {});
        assert_eq!(logouts.get_untracked(), 1);
    });
}

#[test]
fn host_contexts_fall_back_to_page_seed() {
    let owner = Owner::new();
    owner.with(|| {
        let (catalog, session) = host_contexts();
        assert!(catalog.with_untracked(Vec::is_empty));
        assert!(session.state.get_untracked().user.is_none());
    });
}
