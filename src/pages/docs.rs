use ignytion_core::docs::search;
use ignytion_core::DOC_CATEGORIES;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cta::{CtaBand, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::components::icons::Search;
use crate::data::{doc_category_icon, doc_extras, level_class, popular_guides};

#[component]
pub fn Docs() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let matches = Memo::new(move |_| query.with(|q| search(&DOC_CATEGORIES, q)));

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"Documentation"</h1>
                    <p class="text-xl text-gray-600 mb-8">"Everything you need to design chips using our platform"</p>

                    // Search
                    <div class="relative max-w-2xl mx-auto">
                        <Search class="absolute left-4 top-1/2 -translate-y-1/2 w-5 h-5 text-gray-400" />
                        <input
                            type="text"
                            placeholder="Search documentation..."
                            class="w-full pl-12 pr-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-orange-500"
                            prop:value=move || query.get()
                            on:input=move |e| set_query.set(event_target_value(&e))
                        />
                    </div>
                </div>
            </section>

            // Categories
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Browse by Category"</h2>
                    <Show
                        when=move || matches.with(|m| !m.is_empty())
                        fallback=move || view! {
                            <p class="text-center text-gray-500">
                                {move || format!("No documentation matches \"{}\"", query.get().trim())}
                            </p>
                        }
                    >
                        <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                            <For
                                each=move || matches.get()
                                key=|m| (m.category.title, m.links.clone())
                                children=|m| view! {
                                    <div class="p-6 rounded-xl border border-gray-200 hover:shadow-lg transition-shadow">
                                        <div class="mb-4">{doc_category_icon(m.category.title)}</div>
                                        <h3 class="text-xl font-semibold text-gray-900 mb-2">{m.category.title}</h3>
                                        <p class="text-gray-600 mb-4">{m.category.description}</p>
                                        <div class="space-y-2">
                                            {m.links.into_iter().map(|link| view! {
                                                <a href="#" class="block text-orange-600 hover:text-orange-700 hover:underline">
                                                    {format!("\u{2192} {link}")}
                                                </a>
                                            }).collect_view()}
                                        </div>
                                    </div>
                                }
                            />
                        </div>
                    </Show>
                </div>
            </section>

            // Popular Guides
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Popular Guides"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {popular_guides().into_iter().map(|guide| view! {
                            <div class="bg-white p-6 rounded-xl border border-gray-200">
                                <div class="flex items-center justify-between mb-4">
                                    <span class=level_class(guide.level)>{guide.level}</span>
                                    <span class="text-sm text-gray-500">{guide.time}</span>
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">{guide.title}</h3>
                                <p class="text-gray-600 mb-6">{guide.desc}</p>
                                <button class="w-full py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50">
                                    "Read Guide"
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Additional Resources
            <section class="py-20">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Additional Resources"</h2>
                    <div class="grid md:grid-cols-3 gap-8 text-center">
                        {doc_extras().into_iter().map(|extra| view! {
                            <div class="p-6">
                                {(extra.icon)()}
                                <h3 class="text-lg font-semibold text-gray-900 mb-1">{extra.title}</h3>
                                <p class="text-gray-600 mb-1">{extra.desc}</p>
                                <p class="text-sm text-orange-600">{extra.items.join(", ")}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <CtaBand
                title="Ready to Start Building?"
                subtitle="Download the platform and follow our getting started guide"
            >
                <A href="/downloads" attr:class=PRIMARY_BUTTON>"Download Platform"</A>
                <A href="/contact" attr:class=SECONDARY_BUTTON>"Get Support"</A>
            </CtaBand>
        </div>
    }
}
