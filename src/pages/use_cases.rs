use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cta::{CtaBand, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::components::icons::{ArrowRight, Check};
use crate::data::use_cases;

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"Who Benefits From Our Platform"</h1>
                    <p class="text-xl text-gray-600">
                        "From startups to enterprises, from academia to open-source communities, our platform \
                         empowers silicon development for everyone"
                    </p>
                </div>
            </section>

            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 space-y-20">
                    {use_cases().into_iter().enumerate().map(|(i, case)| {
                        // alternate the illustration side
                        let row = if i % 2 == 0 {
                            "grid md:grid-cols-2 gap-12 items-center"
                        } else {
                            "grid md:grid-cols-2 gap-12 items-center md:[&>*:first-child]:order-2"
                        };
                        view! {
                            <div class=row>
                                <div>
                                    <div class="mb-4">{(case.icon)()}</div>
                                    <h2 class="text-3xl font-bold text-gray-900 mb-4">{case.title}</h2>
                                    <p class="text-lg text-gray-600 mb-6">{case.desc}</p>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 mb-6">
                                        {case.benefits.iter().map(|benefit| view! {
                                            <div class="flex items-center">
                                                <Check class="w-5 h-5 text-orange-500 mr-2 shrink-0" />
                                                <span class="text-gray-700">{*benefit}</span>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                    <div class="bg-orange-50 border-l-4 border-orange-500 p-4 mb-6">
                                        <p class="text-sm font-semibold text-orange-700 mb-1">"Case Study"</p>
                                        <p class="text-gray-700">{case.case_study}</p>
                                    </div>
                                    <A
                                        href="/contact"
                                        attr:class="inline-flex items-center px-6 py-2 rounded-md border border-orange-500 text-orange-600 hover:bg-orange-50"
                                    >
                                        "Learn More"
                                        <ArrowRight class="w-4 h-4 ml-2" />
                                    </A>
                                </div>
                                <div class="aspect-video rounded-xl bg-gradient-to-br from-orange-100 to-orange-50 border border-orange-200 flex items-center justify-center">
                                    <p class="text-orange-400">"Diagram / Illustration"</p>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            <CtaBand
                title="Find Your Use Case"
                subtitle="No matter your organization's size or goals, our platform adapts to your needs"
            >
                <A href="/downloads" attr:class=PRIMARY_BUTTON>"Start Building"</A>
                <A href="/contact" attr:class=SECONDARY_BUTTON>"Contact Sales"</A>
            </CtaBand>
        </div>
    }
}
