//! Sweet Shop Frontend App
//!
//! Root component: provides the auth context and wires the routes.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::context::AuthContext;
use crate::pages::{Dashboard, Login, Register, Welcome};

#[component]
pub fn App() -> impl IntoView {
    // Session is restored from local storage once, here, and made
    // available to the whole view tree.
    provide_context(AuthContext::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/") view=Welcome/>
                <Route path=path!("/login") view=Login/>
                <Route path=path!("/register") view=Register/>
                <Route path=path!("/dashboard") view=Dashboard/>
            </Routes>
        </Router>
    }
}
