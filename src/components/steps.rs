use leptos::prelude::*;

use crate::data::Step;

/// Four numbered steps in a row
#[component]
pub fn NumberedSteps(steps: Vec<Step>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-4 gap-8">
            {steps.into_iter().enumerate().map(|(i, step)| view! {
                <div class="text-center">
                    <div class="w-14 h-14 rounded-full bg-orange-500 text-white text-xl font-bold flex items-center justify-center mx-auto mb-4">
                        {i + 1}
                    </div>
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{step.title}</h3>
                    <p class="text-gray-600">{step.desc}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
