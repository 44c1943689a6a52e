use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{ArrowRight, BookOpen, Check, Download, Github, Users};
use crate::components::steps::NumberedSteps;
use crate::data::{audiences, contact_reasons, features, idea_to_tapeout, platform_highlights, problems};

#[component]
pub fn Home() -> impl IntoView {
    let preview = [
        ("Free", "$0", "Open-source tools + basic workflows", false),
        ("Starter", "Custom", "AI-assisted workflows + collaboration", true),
        ("Business", "Custom", "Advanced automation + enterprise support", false),
        ("Custom", "Contact", "Tailored solutions for large teams", false),
    ];

    view! {
        <div class="bg-white">
            // Hero Section
            <section class="relative overflow-hidden bg-gradient-to-b from-orange-50 to-white py-20 md:py-28">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6 leading-tight">
                        "Democratise and Modernise Chip Design using Open Source"
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 mb-10 max-w-3xl mx-auto">
                        "A platform unifying open source EDA tools, PDKs, and reusable open IP cores, enhanced with \
                         Python-based, GenAI-assisted workflows to make silicon development as accessible and \
                         iterative as software, without licenses or lock-in."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-8">
                        <A
                            href="/downloads"
                            attr:class="inline-flex items-center justify-center px-8 py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white text-lg"
                        >
                            <Download class="w-5 h-5 mr-2" />
                            "Download for Free"
                        </A>
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center justify-center px-8 py-3 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50 text-lg"
                        >
                            "Contact Us"
                            <ArrowRight class="w-5 h-5 ml-2" />
                        </A>
                    </div>
                    <p class="text-sm text-gray-500">
                        "Open-source foundations \u{2022} Modern workflows \u{2022} GenAI-assisted \u{2022} No vendor lock-in"
                    </p>
                </div>
            </section>

            // Problem Section
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Chip Design is Powerful, But Still Too Hard"
                        </h2>
                        <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                            "Despite rapid progress in software engineering, chip design remains fragmented, slow, \
                             and often locked behind proprietary tools."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                        {problems().into_iter().map(|problem| view! {
                            <div class="bg-white p-6 rounded-xl border border-gray-200">
                                <p class="text-gray-700">{problem}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <p class="text-center text-xl font-semibold text-orange-600">
                        "We believe silicon design should be as easy and iterative as software development"
                    </p>
                </div>
            </section>

            // Features Section
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "A Modern, Open Platform for Silicon Development"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Unifying the open silicon stack with Python and GenAI workflows"
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {features().into_iter().map(|feat| view! {
                            <div class="p-6 rounded-xl border border-gray-200 hover:border-orange-300 hover:shadow-lg transition-all">
                                <div class="mb-4">{(feat.icon)()}</div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">{feat.title}</h3>
                                <p class="text-gray-600">{feat.desc}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-12 text-center">
                        "From Idea to Tapeout, Simplified"
                    </h2>
                    <NumberedSteps steps=idea_to_tapeout() />
                    <div class="mt-16 bg-white p-8 rounded-xl border border-gray-200">
                        <h3 class="text-2xl font-semibold text-gray-900 mb-6 text-center">"Platform Capabilities"</h3>
                        <div class="grid md:grid-cols-2 gap-4">
                            {platform_highlights().into_iter().map(|line| view! {
                                <div class="flex items-start">
                                    <Check class="w-5 h-5 text-orange-500 mr-3 mt-0.5 shrink-0" />
                                    <span class="text-gray-700">{line}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            // Use Cases
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-12 text-center">
                        "Who Benefits From Our Platform"
                    </h2>
                    <div class="grid md:grid-cols-2 gap-6 mb-10">
                        {audiences().into_iter().map(|audience| view! {
                            <div class="p-6 rounded-xl border border-gray-200 hover:shadow-md transition-shadow">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">{audience.title}</h3>
                                <p class="text-gray-600">{audience.desc}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="text-center">
                        <A
                            href="/use-cases"
                            attr:class="inline-flex items-center px-6 py-2 rounded-md border border-orange-500 text-orange-600 hover:bg-orange-50"
                        >
                            "View All Use Cases"
                            <ArrowRight class="w-4 h-4 ml-2" />
                        </A>
                    </div>
                </div>
            </section>

            // Pricing Preview
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Open by Default. Pay for Automation and Collaboration."
                        </h2>
                        <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                            "All tools, PDKs, and IPs remain open. Pricing applies to AI assistance, automation, \
                             collaboration, and enterprise workflows."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {preview.into_iter().map(|(name, price, desc, popular)| {
                            let (href, cta) = if name == "Free" {
                                ("/downloads", "Download")
                            } else {
                                ("/contact", "Contact Us")
                            };
                            let card = if popular {
                                "relative bg-white p-6 rounded-xl border-2 border-orange-500"
                            } else {
                                "relative bg-white p-6 rounded-xl border border-gray-200"
                            };
                            let button = if popular {
                                "block w-full text-center py-2 rounded-md bg-orange-500 hover:bg-orange-600 text-white"
                            } else {
                                "block w-full text-center py-2 rounded-md bg-white text-gray-700 border border-gray-300 hover:bg-gray-50"
                            };
                            view! {
                                <div class=card>
                                    {popular.then(|| view! {
                                        <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                                            <span class="bg-orange-500 text-white text-xs px-3 py-1 rounded-full">"Popular"</span>
                                        </div>
                                    })}
                                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{name}</h3>
                                    <p class="text-3xl font-bold text-gray-900 mb-2">{price}</p>
                                    <p class="text-sm text-gray-600 mb-6">{desc}</p>
                                    <A href=href attr:class=button>{cta}</A>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                    <div class="text-center mt-8">
                        <A href="/pricing" attr:class="text-orange-600 hover:text-orange-700 font-medium">
                            "View detailed pricing \u{2192}"
                        </A>
                    </div>
                </div>
            </section>

            // Download Section
            <section class="py-20 bg-gradient-to-r from-orange-500 to-orange-600 text-white">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Get Started With Open Silicon Development"
                    </h2>
                    <p class="text-lg text-orange-100 mb-8">
                        "Download the platform to design chips using open-source EDA tools, open PDKs, and \
                         reusable IPs with software-like, AI-assisted workflows, without licenses or vendor lock-in."
                    </p>
                    <A
                        href="/downloads"
                        attr:class="inline-flex items-center px-8 py-3 rounded-md bg-white text-orange-600 hover:bg-orange-50 text-lg"
                    >
                        <Download class="w-5 h-5 mr-2" />
                        "Download for Free"
                    </A>
                </div>
            </section>

            // Contact Section
            <section class="py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                        "Let's Modernise Silicon Together"
                    </h2>
                    <p class="text-lg text-gray-600 mb-8">"Reach out if you're interested in:"</p>
                    <div class="inline-block text-left space-y-3 mb-10">
                        {contact_reasons().into_iter().map(|reason| view! {
                            <div class="flex items-start">
                                <Check class="w-5 h-5 text-orange-500 mr-3 mt-0.5 shrink-0" />
                                <span class="text-gray-700">{reason}</span>
                            </div>
                        }).collect_view()}
                    </div>
                    <div>
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center px-8 py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white text-lg"
                        >
                            "Contact Us"
                        </A>
                    </div>
                </div>
            </section>

            // Pillars
            <section class="py-12 border-t border-gray-200">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-3 gap-8 text-center">
                    <div>
                        <Github class="w-8 h-8 text-orange-500 mx-auto mb-3" />
                        <h3 class="font-semibold text-gray-900 mb-1">"Open Source"</h3>
                        <p class="text-sm text-gray-600">"Open-source EDA \u{2022} Open PDKs"</p>
                    </div>
                    <div>
                        <BookOpen class="w-8 h-8 text-orange-500 mx-auto mb-3" />
                        <h3 class="font-semibold text-gray-900 mb-1">"Reusable IPs"</h3>
                        <p class="text-sm text-gray-600">"Modular, verified components"</p>
                    </div>
                    <div>
                        <Users class="w-8 h-8 text-orange-500 mx-auto mb-3" />
                        <h3 class="font-semibold text-gray-900 mb-1">"GenAI Workflows"</h3>
                        <p class="text-sm text-gray-600">"Software-like pipelines"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
