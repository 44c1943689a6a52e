use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::availability::AvailabilityCell;
use crate::components::badge::{Badge, BadgeColor};
use crate::components::cta::{CtaBand, PRIMARY_BUTTON};
use crate::components::icons::{CheckCircle, Download};
use crate::data::{edition_comparison, editions};

#[component]
pub fn Products() -> impl IntoView {
    // At most one edition card is highlighted at a time
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <div>
            // Hero
            <section class="relative overflow-hidden bg-gradient-to-br from-orange-50 via-white to-orange-100 py-24">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                        "Choose Your "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-orange-500 to-orange-700">
                            "Perfect Plan"
                        </span>
                    </h1>
                    <p class="text-xl text-gray-600">
                        "Whether you're just starting out or running large-scale operations, \
                         IGNYTION has the right solution for your semiconductor needs."
                    </p>
                </div>
            </section>

            // Editions
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid md:grid-cols-2 gap-8 mb-20">
                        {editions().into_iter().enumerate().map(|(i, edition)| {
                            let badge_color = if i == 0 { BadgeColor::Green } else { BadgeColor::Orange };
                            view! {
                                <div
                                    class=move || {
                                        if hovered.get() == Some(i) {
                                            "relative flex flex-col p-8 rounded-2xl border-2 border-orange-500 shadow-xl scale-[1.02] transition-all bg-white"
                                        } else {
                                            "relative flex flex-col p-8 rounded-2xl border border-gray-200 transition-all bg-white"
                                        }
                                    }
                                    on:mouseenter=move |_| hovered.set(Some(i))
                                    on:mouseleave=move |_| hovered.set(None)
                                >
                                    <div class="absolute top-4 right-4">
                                        <Badge color=badge_color>{edition.badge}</Badge>
                                    </div>
                                    <div class="mb-4">{(edition.icon)()}</div>
                                    <h3 class="text-2xl font-bold text-gray-900 mb-2">{edition.name}</h3>
                                    <p class="text-gray-600 mb-4">{edition.desc}</p>
                                    <div class="text-3xl font-bold text-orange-600 mb-6">{edition.price}</div>
                                    <ul class="space-y-3 mb-8 flex-1">
                                        {edition.features.iter().map(|feature| view! {
                                            <li class="flex items-start">
                                                <CheckCircle class="w-5 h-5 text-green-500 mr-2 mt-0.5 shrink-0" />
                                                <span class="text-gray-700">{*feature}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                    <A
                                        href=edition.link
                                        attr:class="w-full inline-flex items-center justify-center px-6 py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white text-lg"
                                    >
                                        <Download class="w-5 h-5 mr-2" />
                                        {edition.cta}
                                    </A>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    // Comparison Table
                    <h2 class="text-3xl font-bold text-gray-900 mb-8 text-center">"Detailed Feature Comparison"</h2>
                    <div class="overflow-x-auto rounded-xl border border-gray-200">
                        <table class="w-full">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="text-left py-4 px-4 font-semibold text-gray-900">"Feature"</th>
                                    <th class="text-center py-4 px-4 font-semibold text-gray-900">"Free Edition"</th>
                                    <th class="text-center py-4 px-4 font-semibold text-gray-900">"Enterprise Edition"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {edition_comparison().into_iter().map(|group| view! {
                                    <tr class="bg-orange-50">
                                        <td colspan="3" class="py-3 px-4 font-semibold text-orange-800">{group.category}</td>
                                    </tr>
                                    {group.rows.into_iter().map(|(name, [free, enterprise])| view! {
                                        <tr class="border-t border-gray-100">
                                            <td class="py-4 px-4 text-gray-700">{name}</td>
                                            <AvailabilityCell value=free />
                                            <AvailabilityCell value=enterprise />
                                        </tr>
                                    }).collect_view()}
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </section>

            <CtaBand
                title="Not Sure Which Edition to Choose?"
                subtitle="Our team is here to help you find the perfect solution for your needs."
            >
                <A href="/contact" attr:class=PRIMARY_BUTTON>"Talk to an Expert"</A>
            </CtaBand>
        </div>
    }
}
