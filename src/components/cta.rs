use leptos::prelude::*;

/// Closing call-to-action band shared by the marketing pages
#[component]
pub fn CtaBand(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-r from-orange-500 to-orange-600 text-white">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
                <p class="text-lg text-orange-100 mb-8">{subtitle}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    {children()}
                </div>
            </div>
        </section>
    }
}

pub const PRIMARY_BUTTON: &str =
    "inline-flex items-center justify-center px-8 py-3 rounded-md bg-white text-orange-600 hover:bg-orange-50 text-lg";
pub const SECONDARY_BUTTON: &str =
    "inline-flex items-center justify-center px-8 py-3 rounded-md border border-white text-white hover:bg-orange-600 text-lg";
