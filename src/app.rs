//! TaskFlow App
//!
//! Root component: theme context, router, and page layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::context::provide_theme;
use crate::pages::{NotFound, PostsPage, TaskManager};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_theme();

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=TaskManager />
                    <Route path=path!("/posts") view=PostsPage />
                </Routes>
            </Layout>
        </Router>
    }
}
