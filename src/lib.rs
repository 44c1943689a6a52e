pub mod components;
pub mod data;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use components::toaster::{Toaster, Toasts};
use ignytion_core::{Resolution, RouteTable, SiteConfig, ViewId};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use pages::about::About;
use pages::admin::Admin;
use pages::contact::Contact;
use pages::docs::Docs;
use pages::downloads::Downloads;
use pages::home::Home;
use pages::platform::Platform;
use pages::pricing::Pricing;
use pages::products::Products;
use pages::resources::Resources;
use pages::use_cases::UseCases;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::load());
    Toasts::provide();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-white text-gray-900 font-sans">
                <Navbar />
                <main class="flex-1">
                    <ActiveView />
                </main>
                <Footer />
                <Toaster />
            </div>
        </Router>
    }
}

/// Renders the view registered for the current path
///
/// Unknown paths render the fallback view and replace the history entry
/// with the fallback path, so back/forward never revisits them. Every change
/// of view starts at the top of the page.
#[component]
fn ActiveView() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let table = RouteTable::standard().unwrap_or_else(|err| {
        log::error!("route table rejected, serving home only: {err}");
        RouteTable::home_only()
    });

    let resolution = Memo::new(move |_| table.resolve(&location.pathname.get()));
    let active = Memo::new(move |_| resolution.get().view());

    Effect::new(move || {
        if let Resolution::Redirect { to, .. } = resolution.get() {
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    Effect::new(move |shown: Option<ViewId>| {
        let next = active.get();
        if shown != Some(next) {
            scroll_to_top();
        }
        next
    });

    view! {
        <Title text=move || format!("{} | Ignytion", active.get().title()) />
        {move || match active.get() {
            ViewId::Home => view! { <Home /> }.into_any(),
            ViewId::Platform => view! { <Platform /> }.into_any(),
            ViewId::UseCases => view! { <UseCases /> }.into_any(),
            ViewId::Pricing => view! { <Pricing /> }.into_any(),
            ViewId::Downloads => view! { <Downloads /> }.into_any(),
            ViewId::Docs => view! { <Docs /> }.into_any(),
            ViewId::Contact => view! { <Contact /> }.into_any(),
            ViewId::Products => view! { <Products /> }.into_any(),
            ViewId::About => view! { <About /> }.into_any(),
            ViewId::Resources => view! { <Resources /> }.into_any(),
            ViewId::Admin => view! { <Admin /> }.into_any(),
        }}
    }
}

/// Jump back to the top of the page
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
