use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{ArticlesPage, AuthLayout, HomePage, LoginPage, NotFound};
use crate::config::AppConfig;

/// Root application component that provides the API client and declares the routes.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Views reach the API only through this context
    provide_context(ApiClient::browser(config));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/articles/:category") view=ArticlesPage />
                    <ParentRoute path=path!("/login") view=AuthLayout>
                        <Route path=path!("") view=LoginPage />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
