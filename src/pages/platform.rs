use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cta::{CtaBand, PRIMARY_BUTTON};
use crate::components::icons::{Check, Download};
use crate::components::steps::NumberedSteps;
use crate::data::{capabilities, development_workflow, technical_specs};

#[component]
pub fn Platform() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"The Open Silicon Platform"</h1>
                    <p class="text-xl text-gray-600">
                        "A comprehensive platform for 180nm chip design that unifies open-source EDA tools, \
                         PDKs, and reusable IPs with Python-based workflows"
                    </p>
                </div>
            </section>

            // Capabilities
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Platform Capabilities"</h2>
                    <div class="grid md:grid-cols-2 gap-8">
                        {capabilities().into_iter().map(|cap| view! {
                            <div class="p-8 rounded-xl border border-gray-200 hover:shadow-lg transition-shadow">
                                <div class="mb-4">{(cap.icon)()}</div>
                                <h3 class="text-2xl font-semibold text-gray-900 mb-2">{cap.title}</h3>
                                <p class="text-gray-600 mb-6">{cap.desc}</p>
                                <ul class="space-y-3">
                                    {cap.items.iter().map(|item| view! {
                                        <li class="flex items-center">
                                            <Check class="w-5 h-5 text-orange-500 mr-3 shrink-0" />
                                            <span class="text-gray-700">{*item}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Specifications
            <section class="py-20 bg-gray-50">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Technical Specifications"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {technical_specs().into_iter().map(|spec| view! {
                            <div class="bg-white p-6 rounded-xl border border-gray-200">
                                <p class="text-sm text-gray-500 mb-1">{spec.label}</p>
                                <p class="text-lg font-semibold text-gray-900">{spec.value}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Workflow
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Development Workflow"</h2>
                    <NumberedSteps steps=development_workflow() />
                </div>
            </section>

            <CtaBand title="Ready to Start Building?" subtitle="Download the platform and start designing chips today">
                <A href="/downloads" attr:class=PRIMARY_BUTTON>
                    <Download class="w-5 h-5 mr-2" />
                    "Download for Free"
                </A>
            </CtaBand>
        </div>
    }
}
