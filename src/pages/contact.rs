use ignytion_core::{ContactField, ContactForm};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cta::{CtaBand, PRIMARY_BUTTON};
use crate::components::icons::{Github, Linkedin, MapPin, Send, Twitter};
use crate::components::toaster::use_toasts;
use crate::data::contact_methods;

const INPUT_CLASS: &str =
    "w-full px-4 py-2 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-orange-500";

/// One labelled input bound to a form field
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let label = if field.is_required() {
        format!("{label} *")
    } else {
        label.to_string()
    };

    let input = if multiline {
        view! {
            <textarea
                rows="6"
                class=INPUT_CLASS
                placeholder=placeholder
                required=field.is_required()
                prop:value=value
                on:input=move |e| form.update(|f| f.set(field, event_target_value(&e)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder
                required=field.is_required()
                prop:value=value
                on:input=move |e| form.update(|f| f.set(field, event_target_value(&e)))
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            {input}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::new());

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-orange-50 to-white py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"Let's Modernise Silicon Together"</h1>
                    <p class="text-xl text-gray-600">
                        "Reach out if you're interested in evaluating open, AI-enabled EDA workflows or \
                         collaborating on open PDKs and educational programs"
                    </p>
                </div>
            </section>

            // Contact Methods
            <section class="py-12">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-3 gap-6">
                    {contact_methods().into_iter().map(|method| view! {
                        <div class="text-center p-6 rounded-xl border border-gray-200">
                            <div class="flex justify-center mb-4">{(method.icon)()}</div>
                            <h3 class="text-lg font-semibold text-gray-900 mb-1">{method.title}</h3>
                            <p class="text-sm text-gray-600 mb-2">{method.desc}</p>
                            <p class="text-orange-600">{method.contact}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Form and details
            <section class="py-12 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 bg-white p-8 rounded-xl border border-gray-200">
                        <h2 class="text-2xl font-bold text-gray-900 mb-6">"Send us a message"</h2>
                        <form
                            class="space-y-5"
                            on:submit=move |e| {
                                e.prevent_default();
                                match form.try_update(|f| f.submit()) {
                                    Some(Ok(notice)) => toasts.push(notice),
                                    Some(Err(err)) => log::debug!("contact form not sent: {}", err),
                                    None => {}
                                }
                            }
                        >
                            <div class="grid md:grid-cols-2 gap-5">
                                <FormField form=form field=ContactField::Name label="Name" placeholder="Your name" />
                                <FormField
                                    form=form
                                    field=ContactField::Email
                                    label="Email"
                                    placeholder="your.email@example.com"
                                    input_type="email"
                                />
                            </div>
                            <FormField form=form field=ContactField::Company label="Company" placeholder="Your company" />
                            <FormField form=form field=ContactField::Subject label="Subject" placeholder="What can we help with?" />
                            <FormField
                                form=form
                                field=ContactField::Message
                                label="Message"
                                placeholder="Tell us more..."
                                multiline=true
                            />
                            <button
                                type="submit"
                                class="w-full inline-flex items-center justify-center px-6 py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white"
                            >
                                <Send class="w-4 h-4 mr-2" />
                                "Send Message"
                            </button>
                        </form>
                    </div>

                    <div class="space-y-8">
                        <div>
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Our Offices"</h3>
                            <div class="bg-white p-4 rounded-xl border border-gray-200 flex items-start">
                                <MapPin class="w-5 h-5 text-orange-500 mr-3 mt-0.5" />
                                <div>
                                    <h4 class="font-medium text-gray-900">"Bangalore"</h4>
                                    <p class="text-sm text-gray-600">"Indiranagar"</p>
                                    <p class="text-sm text-gray-600">"India"</p>
                                </div>
                            </div>
                        </div>
                        <div>
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Follow Us"</h3>
                            <div class="flex space-x-4">
                                <a href="#" aria-label="GitHub" class="p-3 rounded-full bg-white border border-gray-200 text-gray-600 hover:text-orange-600">
                                    <Github class="w-5 h-5" />
                                </a>
                                <a href="#" aria-label="Twitter" class="p-3 rounded-full bg-white border border-gray-200 text-gray-600 hover:text-orange-600">
                                    <Twitter class="w-5 h-5" />
                                </a>
                                <a href="#" aria-label="LinkedIn" class="p-3 rounded-full bg-white border border-gray-200 text-gray-600 hover:text-orange-600">
                                    <Linkedin class="w-5 h-5" />
                                </a>
                            </div>
                        </div>
                        <div class="bg-orange-50 p-6 rounded-xl border border-orange-200">
                            <h3 class="font-semibold text-gray-900 mb-2">"Need immediate help?"</h3>
                            <p class="text-sm text-gray-600 mb-4">"Check our documentation or join the community forum"</p>
                            <div class="flex flex-col gap-2">
                                <A href="/docs" attr:class="text-center px-4 py-2 rounded-md border border-gray-300 bg-white text-gray-700 hover:bg-gray-50">
                                    "Documentation"
                                </A>
                                <a href="#" class="text-center px-4 py-2 rounded-md border border-gray-300 bg-white text-gray-700 hover:bg-gray-50">
                                    "Community Forum"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <CtaBand
                title="Join the Open Silicon Revolution"
                subtitle="Start designing chips the modern way with our free platform"
            >
                <A href="/downloads" attr:class=PRIMARY_BUTTON>"Download for Free"</A>
            </CtaBand>
        </div>
    }
}
