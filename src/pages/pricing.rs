use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::availability::AvailabilityCell;
use crate::components::cta::{CtaBand, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::components::icons::{CheckCircle, HelpCircle};
use crate::data::{faqs, plan_comparison, tiers};

const PLANS: [&str; 4] = ["Free", "Starter", "Business", "Custom"];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                        "Open by Default. Pay for Automation and Collaboration."
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "All tools, PDKs, and IPs remain open. Pricing applies to AI assistance, automation, \
                         collaboration, and enterprise workflows."
                    </p>
                    <div class="inline-block bg-orange-100 px-6 py-3 rounded-full">
                        <p class="text-orange-800">
                            <span class="font-semibold">"Free forever"</span>
                            " for individual developers and researchers"
                        </p>
                    </div>
                </div>
            </section>

            // Pricing Tiers
            <section class="py-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {tiers().into_iter().map(|tier| {
                            let card = if tier.highlighted {
                                "relative h-full bg-white p-6 rounded-xl border-2 border-orange-500 shadow-lg flex flex-col"
                            } else {
                                "relative h-full bg-white p-6 rounded-xl border border-gray-200 flex flex-col"
                            };
                            let button = if tier.highlighted {
                                "block w-full text-center py-2 rounded-md bg-orange-500 hover:bg-orange-600 text-white"
                            } else {
                                "block w-full text-center py-2 rounded-md bg-white text-gray-700 border border-gray-300 hover:bg-gray-50"
                            };
                            view! {
                                <div class=card>
                                    {tier.highlighted.then(|| view! {
                                        <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                                            <span class="bg-orange-500 text-white text-xs px-3 py-1 rounded-full whitespace-nowrap">
                                                "Most Popular"
                                            </span>
                                        </div>
                                    })}
                                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{tier.name}</h3>
                                    <div class="mb-1">
                                        <span class="text-4xl font-bold text-gray-900">{tier.price}</span>
                                    </div>
                                    <p class="text-sm text-gray-500 mb-4">{tier.period}</p>
                                    <p class="text-gray-600 mb-6">{tier.desc}</p>
                                    <div class="space-y-3 mb-8 flex-1">
                                        {tier.features.iter().map(|feature| view! {
                                            <div class="flex items-start">
                                                <CheckCircle class="w-5 h-5 text-green-500 mr-2 mt-0.5 shrink-0" />
                                                <span class="text-sm text-gray-700">{*feature}</span>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                    <A href=tier.link attr:class=button>{tier.cta}</A>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Feature Comparison
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Feature Comparison"</h2>
                    <div class="overflow-x-auto bg-white rounded-xl border border-gray-200">
                        <table class="w-full">
                            <thead>
                                <tr class="border-b border-gray-200">
                                    <th class="text-left py-4 px-4 font-semibold text-gray-900">"Feature"</th>
                                    {PLANS.iter().map(|plan| view! {
                                        <th class="text-center py-4 px-4 font-semibold text-gray-900">{*plan}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {plan_comparison().into_iter().map(|row| view! {
                                    <tr class="border-b border-gray-100 last:border-0">
                                        <td class="py-4 px-4 text-gray-700">{row.feature}</td>
                                        {row.cells.into_iter().map(|cell| view! { <AvailabilityCell value=cell /> }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </section>

            // FAQ
            <section class="py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-12 text-center">"Frequently Asked Questions"</h2>
                    <div class="space-y-6">
                        {faqs().into_iter().map(|faq| view! {
                            <div class="flex items-start p-6 rounded-xl border border-gray-200">
                                <HelpCircle class="w-6 h-6 text-orange-500 mr-4 mt-0.5 shrink-0" />
                                <div>
                                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{faq.question}</h3>
                                    <p class="text-gray-600">{faq.answer}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <CtaBand
                title="Ready to Get Started?"
                subtitle="Download our free platform or contact us to discuss premium features"
            >
                <A href="/downloads" attr:class=PRIMARY_BUTTON>"Download Free"</A>
                <A href="/contact" attr:class=SECONDARY_BUTTON>"Talk to Sales"</A>
            </CtaBand>
        </div>
    }
}
