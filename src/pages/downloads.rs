use ignytion_core::{cli_download_notice, gui_download_notice, OsPlatform, SiteConfig};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{Apple, BookOpen, Check, Download, FileText, Laptop, Lock, Monitor, Terminal};
use crate::components::toaster::use_toasts;
use crate::data::{quick_start, release_contents, system_requirements};

fn platform_icon(platform: OsPlatform) -> AnyView {
    match platform {
        OsPlatform::Windows => view! { <Laptop class="w-5 h-5 text-gray-700" /> }.into_any(),
        OsPlatform::Linux => view! { <Terminal class="w-5 h-5 text-gray-700" /> }.into_any(),
        OsPlatform::MacOs => view! { <Apple class="w-5 h-5 text-gray-700" /> }.into_any(),
    }
}

#[component]
pub fn Downloads() -> impl IntoView {
    let release = expect_context::<SiteConfig>().release;
    let toasts = use_toasts();
    let picker = RwSignal::new(OsPlatform::picker());
    let selected = move || picker.with(|p| p.selected());

    let version = release.version.clone();
    let download_cli = move |_| toasts.push(cli_download_notice(selected(), &version));
    // The GUI button stays disabled until the package ships
    let download_gui = move |_| toasts.push(gui_download_notice());

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"Download Ignytion"</h1>
                    <p class="text-xl text-gray-600">
                        "Get started with open-source chip design for 180nm. All tools, PDKs, and libraries \
                         included, completely free."
                    </p>
                </div>
            </section>

            // Release
            <section class="py-16">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="rounded-2xl border border-gray-200 overflow-hidden">
                        <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 px-8 py-6 border-b border-gray-200">
                            <div>
                                <h2 class="text-2xl font-bold text-gray-900">{format!("Version {}", release.version)}</h2>
                                <p class="text-sm text-gray-600 mt-1">
                                    {format!("Released {}", release.display_date())}
                                    <span class="mx-2 text-gray-300">"\u{2022}"</span>
                                    <span class="text-orange-600 font-medium">{release.channel.clone()}</span>
                                </p>
                            </div>
                            <span class="inline-flex items-center gap-2 text-sm text-green-700 bg-green-50 border border-green-200 px-3 py-1 rounded-full">
                                <span class="w-2 h-2 rounded-full bg-green-500"></span>
                                "Recommended"
                            </span>
                        </div>

                        <div class="p-8 space-y-10">
                            // Included
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">"What's Included"</h3>
                                <div class="grid sm:grid-cols-2 gap-3">
                                    {release_contents().into_iter().map(|item| view! {
                                        <div class="flex items-center">
                                            <Check class="w-5 h-5 text-orange-500 mr-2 shrink-0" />
                                            <span class="text-gray-700">{item}</span>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </div>

                            // Product split
                            <div class="grid md:grid-cols-2 gap-6">
                                // Lite (CLI)
                                <div class="rounded-2xl border border-orange-200 bg-orange-50/40 p-6 flex flex-col">
                                    <div class="flex items-center gap-2 mb-2">
                                        <Terminal class="w-5 h-5 text-orange-600" />
                                        <h3 class="text-lg font-semibold text-gray-900">"Ignytion Lite"</h3>
                                        <span class="text-xs px-2 py-0.5 rounded-full bg-orange-100 text-orange-700">"CLI"</span>
                                    </div>
                                    <p class="text-sm text-gray-600 mb-4">
                                        "Lightweight distribution for engineers. Full toolchain + workflows via command line."
                                    </p>
                                    <div class="space-y-2 mb-6 text-sm text-gray-700">
                                        <div class="flex items-center gap-2"><Check class="w-4 h-4 text-orange-500" /><span>"Installer + CLI binary"</span></div>
                                        <div class="flex items-center gap-2"><Check class="w-4 h-4 text-orange-500" /><span>"Same PDKs, tools, and libraries"</span></div>
                                    </div>
                                    <div class="mt-auto">
                                        <button
                                            type="button"
                                            class="w-full inline-flex items-center justify-center px-6 py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white"
                                            on:click=download_cli
                                        >
                                            <Download class="w-5 h-5 mr-2" />
                                            "Download CLI"
                                        </button>
                                        <p class="text-xs text-gray-500 text-center mt-2">
                                            {move || {
                                                let platform = selected();
                                                format!("{} \u{2022} {}", platform.name(), platform.size())
                                            }}
                                        </p>
                                    </div>
                                </div>

                                // Studio (GUI)
                                <div class="rounded-2xl border border-gray-200 p-6 flex flex-col">
                                    <div class="flex items-center gap-2 mb-2 flex-wrap">
                                        <Monitor class="w-5 h-5 text-gray-500" />
                                        <h3 class="text-lg font-semibold text-gray-900">"Ignytion Studio"</h3>
                                        <span class="text-xs px-2 py-0.5 rounded-full bg-gray-100 text-gray-700">"GUI"</span>
                                        <span class="text-xs px-2 py-0.5 rounded-full bg-yellow-100 text-yellow-700">"Coming soon"</span>
                                    </div>
                                    <p class="text-sm text-gray-600 mb-4">
                                        "A visual desktop experience for projects, flows, and tool orchestration. Not released yet."
                                    </p>
                                    <div class="space-y-2 mb-6 text-sm text-gray-500">
                                        <div class="flex items-center gap-2"><Lock class="w-4 h-4" /><span>"GUI package will be enabled later"</span></div>
                                        <div class="flex items-center gap-2"><Lock class="w-4 h-4" /><span>"Sign up for updates (coming soon)"</span></div>
                                    </div>
                                    <div class="mt-auto">
                                        <button
                                            type="button"
                                            disabled=true
                                            title="GUI download is coming soon"
                                            class="w-full inline-flex items-center justify-center px-6 py-3 rounded-md border border-gray-300 text-gray-400 cursor-not-allowed"
                                            on:click=download_gui
                                        >
                                            <Lock class="w-5 h-5 mr-2" />
                                            "Download GUI"
                                        </button>
                                        <p class="text-xs text-gray-500 text-center mt-2">"Available soon on Windows / macOS / Linux"</p>
                                    </div>
                                </div>
                            </div>

                            // Platform selector
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Select Platform"</h3>
                                <div class="grid sm:grid-cols-3 gap-4">
                                    {OsPlatform::ALL.into_iter().map(|platform| {
                                        let active = move || picker.with(|p| p.is_selected(platform));
                                        view! {
                                            <button
                                                type="button"
                                                class=move || if active() {
                                                    "text-left rounded-2xl border p-4 transition-all border-orange-300 bg-orange-50"
                                                } else {
                                                    "text-left rounded-2xl border p-4 transition-all border-gray-200 bg-white hover:border-gray-300"
                                                }
                                                on:click=move |_| {
                                                    picker.update(|p| {
                                                        p.select(platform);
                                                    });
                                                }
                                            >
                                                <div class="flex items-center justify-between">
                                                    <div class="flex items-center gap-3">
                                                        <span class=move || if active() {
                                                            "inline-flex h-9 w-9 items-center justify-center rounded-xl border border-orange-200 bg-white"
                                                        } else {
                                                            "inline-flex h-9 w-9 items-center justify-center rounded-xl border border-gray-200 bg-gray-50"
                                                        }>
                                                            {platform_icon(platform)}
                                                        </span>
                                                        <div>
                                                            <div class="font-medium text-gray-900">{platform.name()}</div>
                                                            <div class="text-xs text-gray-500">{platform.size()}</div>
                                                        </div>
                                                    </div>
                                                    <Show when=active>
                                                        <Check class="w-5 h-5 text-orange-500" />
                                                    </Show>
                                                </div>
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                                <p class="text-sm text-gray-500 mt-4">
                                    "CLI downloads are available now. GUI is under development and will be enabled in a future release."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // System Requirements
            <section class="py-16 bg-gray-50">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-2 gap-8">
                    <div class="bg-white p-8 rounded-xl border border-gray-200">
                        <Terminal class="w-8 h-8 text-orange-500 mb-4" />
                        <h3 class="text-xl font-semibold text-gray-900 mb-4">"System Requirements"</h3>
                        <ul class="space-y-3">
                            {system_requirements().into_iter().map(|req| view! {
                                <li class="flex items-start">
                                    <Check class="w-5 h-5 text-orange-500 mr-2 mt-0.5 shrink-0" />
                                    <span class="text-gray-700">{req}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="bg-white p-8 rounded-xl border border-gray-200">
                        <BookOpen class="w-8 h-8 text-orange-500 mb-4" />
                        <h3 class="text-xl font-semibold text-gray-900 mb-4">"Quick Start"</h3>
                        <ol class="space-y-3">
                            {quick_start().into_iter().enumerate().map(|(i, step)| view! {
                                <li class="flex items-start">
                                    <span class="w-6 h-6 rounded-full bg-orange-500 text-white text-sm flex items-center justify-center mr-3 shrink-0">
                                        {i + 1}
                                    </span>
                                    <span class="text-gray-700">{step}</span>
                                </li>
                            }).collect_view()}
                        </ol>
                    </div>
                </div>
            </section>

            // Installation
            <section class="py-16">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8 text-center">"Installation"</h2>
                    <div class="p-8 rounded-xl border border-gray-200">
                        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Windows / Linux / macOS"</h3>
                        <div class="bg-gray-900 text-gray-100 p-6 rounded-lg font-mono text-sm space-y-1">
                            <p class="text-gray-400">"# Extract the archive"</p>
                            <p>{format!("tar -xzf ignytion-{}-linux.tar.gz", release.version)}</p>
                            <p class="text-gray-400 pt-2">"# Run installer"</p>
                            <p>{format!("cd ignytion-{}", release.version)}</p>
                            <p>"./install.sh"</p>
                            <p class="text-gray-400 pt-2">"# Verify installation"</p>
                            <p>"ignytion --version"</p>
                        </div>
                        <p class="text-sm text-gray-600 mt-4">
                            "For detailed installation instructions, see our "
                            <A href="/docs" attr:class="text-orange-600 hover:underline">"installation guide"</A>
                        </p>
                    </div>
                </div>
            </section>

            // Next steps
            <section class="py-16 bg-gray-50">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8 text-center">"Next Steps"</h2>
                    <div class="grid md:grid-cols-3 gap-6 text-center">
                        <div class="bg-white p-6 rounded-xl border border-gray-200">
                            <BookOpen class="w-8 h-8 text-orange-500 mx-auto mb-3" />
                            <h3 class="font-semibold text-gray-900 mb-1">"Documentation"</h3>
                            <p class="text-sm text-gray-600 mb-4">"Complete guides and tutorials"</p>
                            <A href="/docs" attr:class="inline-block px-4 py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50">"Read Docs"</A>
                        </div>
                        <div class="bg-white p-6 rounded-xl border border-gray-200">
                            <FileText class="w-8 h-8 text-orange-500 mx-auto mb-3" />
                            <h3 class="font-semibold text-gray-900 mb-1">"Release Notes"</h3>
                            <p class="text-sm text-gray-600 mb-4">"See what's new"</p>
                            <A href="/resources" attr:class="inline-block px-4 py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50">"View Changes"</A>
                        </div>
                        <div class="bg-white p-6 rounded-xl border border-gray-200">
                            <Terminal class="w-8 h-8 text-orange-500 mx-auto mb-3" />
                            <h3 class="font-semibold text-gray-900 mb-1">"Get Help"</h3>
                            <p class="text-sm text-gray-600 mb-4">"Community support"</p>
                            <A href="/contact" attr:class="inline-block px-4 py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50">"Ask Question"</A>
                        </div>
                    </div>
                </div>
            </section>

            // License
            <section class="py-12">
                <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">"Open Source License"</h3>
                    <p class="text-gray-600">
                        "Ignytion is licensed under the Apache 2.0 license. Free to use for commercial and non-commercial purposes."
                    </p>
                </div>
            </section>
        </div>
    }
}
