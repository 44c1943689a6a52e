//! Demo admin area
//!
//! A login gate in front of a tabbed dashboard. The session and the
//! [`AdminWorkspace`] are owned by the admin view itself, so switching tabs
//! keeps every edit while leaving the page discards them.

use chrono::Utc;
use ignytion_core::{
    group_thousands, AdminTab, AdminWorkspace, LoginGate, Notice, SiteConfig, VersionStatus,
};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeColor};
use crate::components::icons::{
    BarChart, FileText, Globe, LayoutDashboard, Lock, Plus, Settings, Trash, TrendingUp,
};
use crate::components::toaster::use_toasts;
use crate::data::{recent_downloads, release_metrics, top_countries, top_pages, traffic_metrics};

const INPUT_CLASS: &str =
    "w-full px-4 py-2 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-orange-500";
const SAVE_BUTTON: &str =
    "inline-flex items-center px-6 py-2 rounded-md bg-orange-500 hover:bg-orange-600 text-white";

/// Turn a failed admin operation into an error toast
fn notice_for(outcome: ignytion_core::Result<Notice>) -> Notice {
    outcome.unwrap_or_else(|err| Notice::error(err.to_string()))
}

#[component]
pub fn Admin() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let gate = RwSignal::new(LoginGate::new());
    let workspace = RwSignal::new(AdminWorkspace::new(&config));

    view! {
        <Show
            when=move || gate.with(|g| g.is_authenticated())
            fallback=move || view! { <LoginForm gate=gate /> }
        >
            <Dashboard gate=gate workspace=workspace />
        </Show>
    }
}

#[component]
fn LoginForm(gate: RwSignal<LoginGate>) -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="min-h-[70vh] flex items-center justify-center bg-gray-50 px-4 py-16">
            <div class="w-full max-w-md bg-white p-8 rounded-2xl border border-gray-200 shadow-sm">
                <div class="flex justify-center mb-6">
                    <div class="w-16 h-16 rounded-full bg-orange-100 flex items-center justify-center">
                        <Lock class="w-8 h-8 text-orange-600" />
                    </div>
                </div>
                <h2 class="text-2xl font-bold text-gray-900 text-center mb-2">"Admin Login"</h2>
                <p class="text-gray-600 text-center mb-8">"Sign in to access analytics dashboard"</p>
                <form
                    class="space-y-5"
                    on:submit=move |e| {
                        e.prevent_default();
                        if let Some(notice) = gate.try_update(|g| g.attempt()) {
                            toasts.push(notice);
                        }
                    }
                >
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Username"</label>
                        <input
                            type="text"
                            required=true
                            placeholder="Enter username"
                            class=INPUT_CLASS
                            prop:value=move || gate.with(|g| g.username.clone())
                            on:input=move |e| gate.update(|g| g.username = event_target_value(&e))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                        <input
                            type="password"
                            required=true
                            placeholder="Enter password"
                            class=INPUT_CLASS
                            prop:value=move || gate.with(|g| g.password.clone())
                            on:input=move |e| gate.update(|g| g.password = event_target_value(&e))
                        />
                    </div>
                    <button type="submit" class="w-full py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white">
                        "Sign In"
                    </button>
                </form>
                <p class="text-sm text-gray-500 text-center mt-6">"Demo credentials: admin / admin"</p>
            </div>
        </div>
    }
}

#[component]
fn Dashboard(gate: RwSignal<LoginGate>, workspace: RwSignal<AdminWorkspace>) -> impl IntoView {
    // Only a tab change re-renders the panel; field edits do not
    let current = Memo::new(move |_| workspace.with(|w| w.current_tab()));
    let draft_label = RwSignal::new(String::new());

    view! {
        <div class="bg-gray-50 min-h-screen">
            // Header
            <div class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex items-center justify-between">
                    <div>
                        <div class="flex items-center gap-3 mb-1">
                            <LayoutDashboard class="w-7 h-7 text-orange-500" />
                            <h1 class="text-2xl md:text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
                        </div>
                        <p class="text-gray-600">"Welcome back, Admin"</p>
                    </div>
                    <button
                        class="px-4 py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50"
                        on:click=move |_| gate.update(|g| g.sign_out())
                    >
                        "Sign Out"
                    </button>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Tab bar
                <div class="flex flex-wrap gap-2 mb-8 p-1 bg-white rounded-lg border border-gray-200 w-fit">
                    {AdminTab::ALL.into_iter().map(|tab| view! {
                        <button
                            class=move || if current.get() == tab {
                                "px-4 py-2 rounded-md text-sm font-medium bg-orange-500 text-white"
                            } else {
                                "px-4 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100"
                            }
                            on:click=move |_| workspace.update(|w| w.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }).collect_view()}
                </div>

                {move || match current.get() {
                    AdminTab::Analytics => view! { <AnalyticsTab /> }.into_any(),
                    AdminTab::Versions => {
                        view! { <VersionsTab workspace=workspace draft_label=draft_label /> }.into_any()
                    }
                    AdminTab::Content => view! { <ContentTab workspace=workspace /> }.into_any(),
                    AdminTab::Users => view! { <UsersTab /> }.into_any(),
                    AdminTab::Settings => view! { <SettingsTab workspace=workspace /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn AnalyticsTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                {traffic_metrics().into_iter().map(|metric| view! {
                    <div class="bg-white p-6 rounded-xl border border-gray-200">
                        <div class="flex items-center justify-between mb-4">
                            <div class="p-2 rounded-lg bg-orange-50">{(metric.icon)()}</div>
                            <span class="inline-flex items-center text-sm text-green-600">
                                <TrendingUp class="w-4 h-4 mr-1" />
                                {metric.change}
                            </span>
                        </div>
                        <h3 class="text-2xl font-bold text-gray-900">{metric.value}</h3>
                        <p class="text-sm text-gray-600">{metric.label}</p>
                    </div>
                }).collect_view()}
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                // Top pages
                <div class="bg-white p-6 rounded-xl border border-gray-200">
                    <div class="flex items-center gap-2 mb-6">
                        <BarChart class="w-5 h-5 text-orange-500" />
                        <h3 class="text-lg font-semibold text-gray-900">"Top Pages"</h3>
                    </div>
                    <div class="space-y-4">
                        {top_pages().into_iter().map(|page| view! {
                            <div>
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="text-gray-700 font-mono">{page.page}</span>
                                    <span class="text-gray-600">{page.views}</span>
                                </div>
                                <div class="w-full h-2 bg-gray-100 rounded-full">
                                    <div
                                        class="h-2 bg-orange-500 rounded-full"
                                        style=format!("width: {}%", page.percentage)
                                    ></div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                // Top countries
                <div class="bg-white p-6 rounded-xl border border-gray-200">
                    <div class="flex items-center gap-2 mb-6">
                        <Globe class="w-5 h-5 text-orange-500" />
                        <h3 class="text-lg font-semibold text-gray-900">"Top Countries"</h3>
                    </div>
                    <div class="space-y-4">
                        {top_countries().into_iter().map(|(flag, country, visitors)| view! {
                            <div class="flex items-center justify-between">
                                <div class="flex items-center gap-3">
                                    <span class="text-2xl">{flag}</span>
                                    <span class="text-gray-700">{country}</span>
                                </div>
                                <span class="text-gray-600">{visitors}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            // Recent downloads
            <div class="bg-white p-6 rounded-xl border border-gray-200">
                <div class="flex items-center gap-2 mb-6">
                    <FileText class="w-5 h-5 text-orange-500" />
                    <h3 class="text-lg font-semibold text-gray-900">"Recent Downloads"</h3>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-gray-200 text-left text-gray-600">
                                <th class="py-3 px-4">"Version"</th>
                                <th class="py-3 px-4">"Platform"</th>
                                <th class="py-3 px-4">"Downloads"</th>
                                <th class="py-3 px-4">"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {recent_downloads().into_iter().map(|row| view! {
                                <tr class="border-b border-gray-100 last:border-0">
                                    <td class="py-3 px-4 font-medium text-gray-900">{row.version}</td>
                                    <td class="py-3 px-4 text-gray-700">{row.platform}</td>
                                    <td class="py-3 px-4 text-gray-700">{group_thousands(u64::from(row.count))}</td>
                                    <td class="py-3 px-4 text-gray-500">{row.date}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn VersionsTab(
    workspace: RwSignal<AdminWorkspace>,
    draft_label: RwSignal<String>,
) -> impl IntoView {
    let toasts = use_toasts();

    let add_version = move || {
        let label = draft_label.get_untracked();
        let today = Utc::now().date_naive();
        if let Some(outcome) = workspace.try_update(|w| w.add_version(&label, today)) {
            if outcome.is_ok() {
                draft_label.set(String::new());
            }
            toasts.push(notice_for(outcome));
        }
    };

    let publish = move |id: u32| {
        if let Some(outcome) = workspace.try_update(|w| w.publish_version(id)) {
            toasts.push(notice_for(outcome));
        }
    };

    let delete = move |id: u32| {
        if let Some(outcome) = workspace.try_update(|w| w.remove_version(id)) {
            toasts.push(notice_for(outcome));
        }
    };

    view! {
        <div class="space-y-8">
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                {release_metrics().into_iter().map(|metric| view! {
                    <div class="bg-white p-6 rounded-xl border border-gray-200">
                        <div class="flex items-center justify-between mb-2">
                            <span class="text-sm text-gray-600">{metric.label}</span>
                            {(metric.icon)()}
                        </div>
                        <div class="flex items-end justify-between">
                            <div class="text-2xl font-bold text-gray-900">{metric.value}</div>
                            <Badge color=BadgeColor::Green>{metric.change}</Badge>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="bg-white rounded-xl border border-gray-200">
                <div class="p-6 border-b border-gray-200 flex flex-col md:flex-row md:items-center justify-between gap-4">
                    <div>
                        <h3 class="text-lg font-semibold text-gray-900">"Manage Versions"</h3>
                        <p class="text-sm text-gray-600">"Create and manage software releases"</p>
                    </div>
                    <form
                        class="flex gap-2"
                        on:submit=move |e| {
                            e.prevent_default();
                            add_version();
                        }
                    >
                        <input
                            type="text"
                            placeholder="e.g. 3.3.0"
                            class="px-3 py-2 rounded-md border border-gray-300 text-sm focus:outline-none focus:ring-2 focus:ring-orange-500"
                            prop:value=move || draft_label.get()
                            on:input=move |e| draft_label.set(event_target_value(&e))
                        />
                        <button type="submit" class="inline-flex items-center px-4 py-2 rounded-md bg-orange-500 hover:bg-orange-600 text-white text-sm">
                            <Plus class="w-4 h-4 mr-1" />
                            "New Version"
                        </button>
                    </form>
                </div>
                <div class="divide-y divide-gray-100">
                    <For
                        each=move || workspace.with(|w| w.versions.records().to_vec())
                        key=|record| (record.id, record.status == VersionStatus::Published)
                        children=move |record| {
                            let id = record.id;
                            let is_draft = record.status == VersionStatus::Draft;
                            let badge = if is_draft { BadgeColor::Gray } else { BadgeColor::Orange };
                            view! {
                                <div class="p-6 flex flex-col md:flex-row md:items-center justify-between gap-4">
                                    <div>
                                        <div class="flex items-center gap-3 mb-1">
                                            <h4 class="font-semibold text-gray-900">{format!("Version {}", record.version)}</h4>
                                            <Badge color=badge>{record.status.label()}</Badge>
                                        </div>
                                        <div class="text-sm text-gray-500 flex gap-2">
                                            <span>{format!("Released: {}", record.release_date.format("%Y-%m-%d"))}</span>
                                            <span>"\u{2022}"</span>
                                            <span>{format!("{} downloads", record.downloads_display())}</span>
                                        </div>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        {is_draft.then(|| view! {
                                            <button
                                                class="px-3 py-1.5 rounded-md border border-gray-300 text-sm text-gray-700 hover:bg-gray-50"
                                                on:click=move |_| publish(id)
                                            >
                                                "Publish"
                                            </button>
                                        })}
                                        <button
                                            class="p-2 rounded-md text-gray-500 hover:text-red-600 hover:bg-red-50"
                                            aria-label="Delete version"
                                            on:click=move |_| delete(id)
                                        >
                                            <Trash class="w-4 h-4" />
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || workspace.with(|w| w.versions.is_empty())>
                        <p class="p-6 text-sm text-gray-500">"No versions yet."</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContentTab(workspace: RwSignal<AdminWorkspace>) -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="bg-white p-6 rounded-xl border border-gray-200 space-y-6">
            <div>
                <h3 class="text-lg font-semibold text-gray-900">"Content Management"</h3>
                <p class="text-sm text-gray-600">"Update homepage and marketing content"</p>
            </div>
            <div>
                <label for="hero-title" class="block text-sm font-medium text-gray-700 mb-2">"Hero Section Title"</label>
                <input
                    id="hero-title"
                    class=INPUT_CLASS
                    prop:value=move || workspace.with(|w| w.content.hero_title.clone())
                    on:input=move |e| workspace.update(|w| w.content.hero_title = event_target_value(&e))
                />
            </div>
            <div>
                <label for="hero-description" class="block text-sm font-medium text-gray-700 mb-2">"Hero Section Description"</label>
                <textarea
                    id="hero-description"
                    rows="3"
                    class=INPUT_CLASS
                    prop:value=move || workspace.with(|w| w.content.hero_description.clone())
                    on:input=move |e| workspace.update(|w| w.content.hero_description = event_target_value(&e))
                ></textarea>
            </div>
            <div>
                <label for="feature-highlight" class="block text-sm font-medium text-gray-700 mb-2">"Feature Highlight"</label>
                <input
                    id="feature-highlight"
                    class=INPUT_CLASS
                    prop:value=move || workspace.with(|w| w.content.feature_highlight.clone())
                    on:input=move |e| workspace.update(|w| w.content.feature_highlight = event_target_value(&e))
                />
            </div>
            <button class=SAVE_BUTTON on:click=move |_| toasts.push(workspace.with_untracked(|w| w.save_content()))>
                "Save Changes"
            </button>
        </div>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl border border-gray-200">
            <h3 class="text-lg font-semibold text-gray-900">"User Management"</h3>
            <p class="text-sm text-gray-600 mb-6">"View and manage registered users"</p>
            <div class="space-y-3">
                {(1..=3).map(|n| view! {
                    <div class="flex items-center justify-between p-4 rounded-lg border border-gray-200">
                        <div class="flex items-center gap-3">
                            <div class="w-10 h-10 rounded-full bg-orange-100 text-orange-700 font-semibold flex items-center justify-center">
                                {format!("U{n}")}
                            </div>
                            <div>
                                <h4 class="font-medium text-gray-900">{format!("User {n}")}</h4>
                                <p class="text-sm text-gray-500">{format!("user{n}@example.com")}</p>
                            </div>
                        </div>
                        <Badge color=BadgeColor::Green>"Active"</Badge>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SettingsTab(workspace: RwSignal<AdminWorkspace>) -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="bg-white p-6 rounded-xl border border-gray-200 space-y-6">
            <div>
                <h3 class="text-lg font-semibold text-gray-900">"General Settings"</h3>
                <p class="text-sm text-gray-600">"Configure application settings"</p>
            </div>
            <div>
                <label for="site-name" class="block text-sm font-medium text-gray-700 mb-2">"Site Name"</label>
                <input
                    id="site-name"
                    class=INPUT_CLASS
                    prop:value=move || workspace.with(|w| w.site.name.clone())
                    on:input=move |e| workspace.update(|w| w.site.name = event_target_value(&e))
                />
            </div>
            <div>
                <label for="contact-email" class="block text-sm font-medium text-gray-700 mb-2">"Contact Email"</label>
                <input
                    id="contact-email"
                    type="email"
                    class=INPUT_CLASS
                    prop:value=move || workspace.with(|w| w.site.contact_email.clone())
                    on:input=move |e| workspace.update(|w| w.site.contact_email = event_target_value(&e))
                />
            </div>
            <div>
                <label for="support-email" class="block text-sm font-medium text-gray-700 mb-2">"Support Email"</label>
                <input
                    id="support-email"
                    type="email"
                    class=INPUT_CLASS
                    prop:value=move || workspace.with(|w| w.site.support_email.clone())
                    on:input=move |e| workspace.update(|w| w.site.support_email = event_target_value(&e))
                />
            </div>
            <button class=SAVE_BUTTON on:click=move |_| toasts.push(workspace.with_untracked(|w| w.save_settings()))>
                <Settings class="w-4 h-4 mr-2" />
                "Update Settings"
            </button>
        </div>
    }
}
