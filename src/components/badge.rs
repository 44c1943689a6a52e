use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Orange,
    Green,
    Gray,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Orange => "inline-flex items-center px-2.5 py-0.5 text-xs font-medium rounded-full border bg-orange-50 text-orange-700 border-orange-200",
            BadgeColor::Green => "inline-flex items-center px-2.5 py-0.5 text-xs font-medium rounded-full border bg-green-50 text-green-700 border-green-200",
            BadgeColor::Gray => "inline-flex items-center px-2.5 py-0.5 text-xs font-medium rounded-full border bg-gray-100 text-gray-700 border-gray-200",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}
