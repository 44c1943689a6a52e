use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::{Badge, BadgeColor};
use crate::components::cta::{CtaBand, PRIMARY_BUTTON};
use crate::components::icons::{ArrowRight, Download, FileText, PlayCircle, Search};
use crate::data::{downloadable_assets, popular_articles, resource_categories, video_tutorials};

#[component]
pub fn Resources() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                        "Learning "
                        <span class="text-orange-600">"Resources"</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "Everything you need to master IGNYTION, from beginner guides to advanced tutorials."
                    </p>
                    <div class="relative max-w-2xl mx-auto">
                        <Search class="absolute left-4 top-1/2 -translate-y-1/2 w-5 h-5 text-gray-400" />
                        <input
                            type="text"
                            placeholder="Search documentation, tutorials, and guides..."
                            class="w-full pl-12 pr-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-orange-500"
                        />
                    </div>
                </div>
            </section>

            // Categories
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Browse by Category"</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {resource_categories().into_iter().map(|category| view! {
                            <div class="p-6 rounded-xl border border-gray-200 hover:shadow-lg transition-shadow text-center">
                                <div class="flex justify-center mb-4">{(category.icon)()}</div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">{category.title}</h3>
                                <p class="text-gray-600 mb-4">{category.desc}</p>
                                <Badge>{category.items.join(", ")}</Badge>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Popular Documentation
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between mb-8">
                        <h2 class="text-3xl font-bold text-gray-900">"Popular Documentation"</h2>
                        <A href="/docs" attr:class="inline-flex items-center text-orange-600 hover:text-orange-700">
                            "View All"
                            <ArrowRight class="w-4 h-4 ml-1" />
                        </A>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {popular_articles().into_iter().map(|doc| view! {
                            <div class="bg-white p-6 rounded-xl border border-gray-200">
                                <div class="flex items-center justify-between mb-3">
                                    <Badge color=BadgeColor::Gray>{doc.level}</Badge>
                                    <span class="text-sm text-gray-500">{doc.time}</span>
                                </div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">{doc.title}</h3>
                                <p class="text-gray-600 mb-4">{doc.desc}</p>
                                <A href="/docs" attr:class="inline-flex items-center text-orange-600 hover:text-orange-700 text-sm">
                                    "Read More"
                                    <ArrowRight class="w-4 h-4 ml-1" />
                                </A>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Video Tutorials
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8">"Video Tutorials"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {video_tutorials().into_iter().map(|tutorial| view! {
                            <div class="rounded-xl border border-gray-200 overflow-hidden">
                                <div class="relative">
                                    <img src=tutorial.thumbnail alt=tutorial.title class="w-full h-48 object-cover" />
                                    <div class="absolute inset-0 flex items-center justify-center bg-black/30">
                                        <PlayCircle class="w-14 h-14 text-white" />
                                    </div>
                                    <span class="absolute bottom-2 right-2 bg-black/70 text-white text-xs px-2 py-1 rounded">
                                        {tutorial.duration}
                                    </span>
                                </div>
                                <div class="p-4">
                                    <Badge>{tutorial.level}</Badge>
                                    <h3 class="text-lg font-semibold text-gray-900 mt-2">{tutorial.title}</h3>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Downloadable Resources
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8">"Downloadable Resources"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {downloadable_assets().into_iter().map(|asset| view! {
                            <div class="bg-white p-6 rounded-xl border border-gray-200">
                                <div class="flex items-start justify-between mb-4">
                                    <FileText class="w-10 h-10 text-orange-500" />
                                    <div class="text-right">
                                        <Badge color=BadgeColor::Gray>{asset.kind}</Badge>
                                        <p class="text-sm text-gray-500 mt-1">{asset.size}</p>
                                    </div>
                                </div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">{asset.title}</h3>
                                <button class="w-full inline-flex items-center justify-center py-2 rounded-md bg-orange-500 hover:bg-orange-600 text-white">
                                    <Download class="w-4 h-4 mr-2" />
                                    "Download"
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <CtaBand
                title="Can't Find What You're Looking For?"
                subtitle="Our support team is here to help you find the answers you need."
            >
                <A href="/contact" attr:class=PRIMARY_BUTTON>"Contact Support"</A>
            </CtaBand>
        </div>
    }
}
