use ignytion_core::{MenuState, NavItem, CONTACT, DOWNLOAD, PRIMARY_NAV, SIGN_IN};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::{Menu, User, X};
use super::logo::Logo;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let menu = RwSignal::new(MenuState::default());

    let is_active = move |item: &'static NavItem| item.is_active(&location.pathname.get());
    let close_menu = move |_| menu.update(|m| *m = m.link_activated());

    view! {
        <nav class="bg-white border-b border-gray-200 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-2 min-h-[80px]">
                    // Logo
                    <A href="/" attr:class="flex items-center" on:click=close_menu>
                        <Logo />
                    </A>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-6 lg:space-x-8">
                        {PRIMARY_NAV.iter().map(|item| {
                            view! {
                                <A
                                    href=item.path
                                    attr:class=move || {
                                        if is_active(item) {
                                            "transition-colors font-medium text-sm lg:text-base text-orange-600"
                                        } else {
                                            "transition-colors font-medium text-sm lg:text-base text-gray-600 hover:text-gray-900"
                                        }
                                    }
                                >
                                    {item.label}
                                </A>
                            }
                        }).collect_view()}
                    </div>

                    // Desktop calls to action
                    <div class="hidden md:flex items-center space-x-3 lg:space-x-4">
                        <A href=SIGN_IN.path attr:class="inline-flex items-center px-3 py-2 rounded-md text-sm text-gray-700 hover:bg-gray-100">
                            <User class="w-4 h-4 mr-2" />
                            {SIGN_IN.label}
                        </A>
                        <A href=CONTACT.path attr:class="inline-flex items-center px-3 py-2 rounded-md text-sm text-gray-700 hover:bg-gray-100">
                            {CONTACT.label}
                        </A>
                        <A href=DOWNLOAD.path attr:class="inline-flex items-center px-5 py-2 rounded-md text-sm bg-orange-500 hover:bg-orange-600 text-white">
                            {DOWNLOAD.label}
                        </A>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md hover:bg-gray-100"
                            aria-label="Toggle menu"
                            on:click=move |_| menu.update(|m| *m = m.toggle())
                        >
                            {move || {
                                if menu.get().is_open() {
                                    view! { <X class="w-6 h-6 text-gray-700" /> }.into_any()
                                } else {
                                    view! { <Menu class="w-6 h-6 text-gray-700" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile navigation
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden border-t border-gray-200 bg-white">
                    <div class="px-4 py-4 space-y-3">
                        {PRIMARY_NAV.iter().map(|item| {
                            view! {
                                <A
                                    href=item.path
                                    on:click=close_menu
                                    attr:class=move || {
                                        if is_active(item) {
                                            "block py-2 px-3 rounded-md transition-colors bg-orange-50 text-orange-600 font-semibold"
                                        } else {
                                            "block py-2 px-3 rounded-md transition-colors text-gray-600 hover:bg-gray-50"
                                        }
                                    }
                                >
                                    {item.label}
                                </A>
                            }
                        }).collect_view()}
                        <div class="pt-4 border-t border-gray-200 space-y-2">
                            <A
                                href=SIGN_IN.path
                                on:click=close_menu
                                attr:class="flex items-center w-full px-3 py-2 rounded-md text-gray-700 hover:bg-gray-50"
                            >
                                <User class="w-4 h-4 mr-2" />
                                {SIGN_IN.label}
                            </A>
                            <A
                                href=DOWNLOAD.path
                                on:click=close_menu
                                attr:class="block w-full text-center px-3 py-2 rounded-md bg-orange-500 hover:bg-orange-600 text-white"
                            >
                                {DOWNLOAD.label}
                            </A>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
