use chrono::{Datelike, Utc};
use ignytion_core::{footer_sections, LinkTarget, SiteConfig, TRUST_STRIP};
use leptos::prelude::*;
use leptos_router::components::A;

use super::icons::{Github, Linkedin, Twitter};
use super::logo::Logo;

const LINK_CLASS: &str = "text-sm text-gray-600 hover:text-gray-900 transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = Utc::now().year();

    view! {
        <footer class="bg-white border-t border-gray-200">
            // Trust strip
            <div class="border-b border-gray-200 py-6">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex flex-wrap justify-center items-center gap-4 text-sm text-gray-600">
                        {TRUST_STRIP.iter().enumerate().map(|(i, claim)| {
                            view! {
                                {(i > 0).then(|| view! { <span class="text-gray-300">"\u{2022}"</span> })}
                                <span>{*claim}</span>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    // Brand
                    <div class="col-span-1">
                        <A href="/" attr:class="inline-block mb-4">
                            <Logo compact=true />
                        </A>
                        <p class="text-sm text-gray-600">{config.site.tagline}</p>
                    </div>

                    // Link columns
                    {footer_sections().into_iter().map(|section| {
                        view! {
                            <div>
                                <h3 class="text-sm mb-4 text-gray-900">{section.title}</h3>
                                <ul class="space-y-2">
                                    {section.links.into_iter().map(|link| {
                                        let anchor = match link.target {
                                            LinkTarget::Internal(path) => view! {
                                                <A href=path attr:class=LINK_CLASS>{link.label}</A>
                                            }.into_any(),
                                            LinkTarget::External(href) => view! {
                                                <a href=href class=LINK_CLASS>{link.label}</a>
                                            }.into_any(),
                                        };
                                        view! { <li>{anchor}</li> }
                                    }).collect_view()}
                                </ul>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="border-t border-gray-200 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-sm text-gray-600">
                        {format!("\u{00A9} {year} Ignytion. Open-source EDA platform.")}
                    </p>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        <a href="#" aria-label="GitHub" class="text-gray-600 hover:text-gray-900 transition-colors">
                            <Github class="w-5 h-5" />
                        </a>
                        <a href="#" aria-label="Twitter" class="text-gray-600 hover:text-gray-900 transition-colors">
                            <Twitter class="w-5 h-5" />
                        </a>
                        <a href="#" aria-label="LinkedIn" class="text-gray-600 hover:text-gray-900 transition-colors">
                            <Linkedin class="w-5 h-5" />
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
