//! Global session context and provider.
//!
//! The persisted session lives in localStorage and is owned by the API
//! client's session store; this context mirrors it into the component tree
//! so pages and the navbar re-render on login/logout. Pages dispatch
//! [`AuthAction::Sync`] on mount to pick up expiry and header refreshes.

use crate::storage::BrowserBackend;
use newsroom_http::{Session, SessionStore};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub session: Session,
}

pub enum AuthAction {
    /// Re-read the persisted session.
    Sync,
}

pub type AuthContext = UseReducerHandle<AuthContextData>;

fn read_session() -> Session {
    SessionStore::new(Rc::new(BrowserBackend::new())).get()
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Sync => Rc::new(Self {
                session: read_session(),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(|| AuthContextData {
        session: read_session(),
    });

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use the auth context.
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Wrap the component tree in AuthProvider")
}

/// Hook to get the current session.
#[hook]
pub fn use_session() -> Session {
    let auth = use_auth();
    auth.session.clone()
}
