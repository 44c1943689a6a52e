use leptos::prelude::*;

use super::icons::CheckCircle;
use crate::data::Availability;

/// Table cell for a plan comparison
#[component]
pub fn AvailabilityCell(value: Availability) -> impl IntoView {
    let content = match value {
        Availability::Included => {
            view! { <CheckCircle class="w-5 h-5 text-green-500 mx-auto" /> }.into_any()
        }
        Availability::Excluded => view! { <span class="text-gray-400">"\u{2014}"</span> }.into_any(),
        Availability::Limited(text) => {
            view! { <span class="text-sm text-gray-700">{text}</span> }.into_any()
        }
    };

    view! { <td class="text-center py-4 px-4">{content}</td> }
}
