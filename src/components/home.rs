use leptos::prelude::*;
use leptos_router::components::A;

/// Categories offered as shortcuts on the landing page.
pub const FEATURED_CATEGORIES: [&str; 6] = [
    "technology",
    "business",
    "science",
    "health",
    "sports",
    "entertainment",
];

/// Landing page linking to login and the featured categories.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"News Summarizer"</h1>
            <p>
                <A href="/login">"Sign in"</A>
            </p>
            <ul class="categories">
                {FEATURED_CATEGORIES
                    .iter()
                    .map(|category| {
                        let href = format!("/articles/{category}");
                        view! {
                            <li>
                                <A href=href>{*category}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Go Home"</A>
        </div>
    }
}
