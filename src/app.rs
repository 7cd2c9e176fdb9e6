//! Root shell: navigation and route table.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{CatalogPage, DetailPage, SearchPage, StatsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound /> }.into_view();

    view! {
        <Meta name="description" content="Catalog of scraped marketplace products" />
        <Title text="Marketview" />

        <Router>
            <Header />
            <main>
                <Routes fallback>
                    <Route path=path!("") view=CatalogPage />
                    <Route path=path!("/product/:id") view=DetailPage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/statistics") view=StatsPage />
                    <Route path=path!("/*any") view=NotFound />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="logo">"Marketview"</a>
            <nav class="header-nav">
                <a href="/">"Catalog"</a>
                <a href="/search">"New scrape"</a>
                <a href="/statistics">"Statistics"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Product data is collected by the scraper backend; this app only displays it."</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to catalog"</a>
        </div>
    }
}
