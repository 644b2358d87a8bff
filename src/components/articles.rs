use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::ApiClient;
use crate::models::{Article, ArticleList};

/// Lists the articles of the category named in the route.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient context missing");
    let params = use_params_map();
    let category = move || params.with(|p| p.get("category").unwrap_or_default());

    let list = RwSignal::new(ArticleList::new());

    let on_fetch = move |_| {
        fetch_articles(api.clone(), category(), list);
    };

    view! {
        <div class="articles-page">
            <h3>"This is the articles page, where all the articles are shown"</h3>
            <p class="category">{category}</p>
            <button on:click=on_fetch>"Fetch Articles"</button>
            {move || {
                list.with(|l| {
                    l.entries()
                        .iter()
                        .cloned()
                        .map(|article| view! { <ArticleCard article=article /> })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// Title, description and optional link of one article.
#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    let description = article.description().to_string();
    let source = article.source_name().map(str::to_string);

    view! {
        <div class="article">
            <h2>{article.title}</h2>
            <p>{description}</p>
            {source.map(|name| view! { <span class="article-source">{name}</span> })}
            {article.url.map(|href| {
                view! {
                    <a href=href target="_blank" rel="noopener noreferrer">
                        "Read more"
                    </a>
                }
            })}
        </div>
    }
}

/// Fetch a category and replace the list; failures are logged and the list is kept.
fn fetch_articles(api: ApiClient, category: String, list: RwSignal<ArticleList>) {
    spawn_local(async move {
        let result = api.fetch_articles(&category).await;
        let applied = list.try_update(|l| l.apply_fetch(result));

        match applied {
            Some(Ok(count)) => log::debug!("showing {count} articles for {category:?}"),
            Some(Err(e)) => log::error!("Error while fetching the articles for {category:?}: {e}"),
            None => log::debug!("articles view gone before {category:?} resolved"),
        }
    });
}
