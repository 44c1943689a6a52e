use ignytion_core::SiteConfig;
use leptos::prelude::*;

use super::icons::Zap;

/// Wordmark used in the header and footer
#[component]
pub fn Logo(#[prop(optional)] compact: bool) -> impl IntoView {
    let name = expect_context::<SiteConfig>().site.name;
    let (mark, text) = if compact {
        ("w-8 h-8", "text-xl")
    } else {
        ("w-10 h-10 md:w-12 md:h-12", "text-2xl md:text-3xl")
    };

    view! {
        <span class="flex items-center gap-2 transition-transform hover:scale-105">
            <span class=format!("{mark} rounded-lg bg-gradient-to-br from-orange-500 to-orange-600 flex items-center justify-center")>
                <Zap class="w-3/5 h-3/5 text-white" />
            </span>
            <span class=format!("{text} font-black tracking-tight text-gray-900")>{name}</span>
        </span>
    }
}
