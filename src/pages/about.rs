use ignytion_core::SiteConfig;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cta::{CtaBand, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::components::icons::{Mail, MapPin, Phone};
use crate::data::{company_stats, leadership, values};

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<SiteConfig>().site;

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-orange-50 to-white py-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                            "About "
                            <span class="text-orange-600">{site.name.clone()}</span>
                        </h1>
                        <p class="text-xl text-gray-600 mb-6">
                            "We're on a mission to revolutionize semiconductor software solutions, \
                             empowering engineers and businesses to innovate faster and more efficiently."
                        </p>
                        <p class="text-gray-600 mb-8">
                            "Founded in 2019, IGNYTION has grown from a small startup to a trusted \
                             partner for semiconductor companies worldwide. Our team of experts combines \
                             deep industry knowledge with cutting-edge technology to deliver solutions \
                             that make a real difference."
                        </p>
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center px-8 py-3 rounded-md bg-orange-500 hover:bg-orange-600 text-white text-lg"
                        >
                            "Join Our Team"
                        </A>
                    </div>
                    <img
                        src="https://images.unsplash.com/photo-1522071820081-009f0129c71c"
                        alt="Team collaboration"
                        class="rounded-2xl shadow-xl w-full h-96 object-cover"
                    />
                </div>
            </section>

            // Stats
            <section class="py-16 bg-orange-500 text-white">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    {company_stats().into_iter().map(|stat| view! {
                        <div>
                            <div class="text-4xl font-bold mb-2">{stat.value}</div>
                            <div class="text-orange-100">{stat.label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Values
            <section class="py-20">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Our Core Values"</h2>
                        <p class="text-lg text-gray-600">
                            "These principles guide everything we do and shape how we serve our customers."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {values().into_iter().map(|value| view! {
                            <div class="p-6 rounded-xl border border-gray-200 hover:border-orange-300 transition-colors">
                                <div class="mb-4">{(value.icon)()}</div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">{value.title}</h3>
                                <p class="text-gray-600">{value.desc}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Leadership
            <section class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Meet Our Leadership Team"</h2>
                        <p class="text-lg text-gray-600">
                            "Experienced professionals dedicated to driving innovation in semiconductor software."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {leadership().into_iter().map(|member| view! {
                            <div class="bg-white rounded-xl border border-gray-200 overflow-hidden">
                                <img src=member.image alt=member.name class="w-full h-64 object-cover" />
                                <div class="p-4 text-center">
                                    <h3 class="text-lg font-semibold text-gray-900">{member.name}</h3>
                                    <p class="text-orange-600">{member.role}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Get In Touch
            <section class="py-20">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Get In Touch"</h2>
                        <p class="text-lg text-gray-600">"Have questions or want to learn more? We'd love to hear from you."</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-6 text-center">
                        <div class="p-6 rounded-xl border border-gray-200">
                            <Mail class="w-8 h-8 text-orange-500 mx-auto mb-4" />
                            <h3 class="font-semibold text-gray-900 mb-2">"Email"</h3>
                            <p class="text-gray-600">{site.contact_email.clone()}</p>
                            <p class="text-gray-600">{site.support_email.clone()}</p>
                        </div>
                        <div class="p-6 rounded-xl border border-gray-200">
                            <Phone class="w-8 h-8 text-orange-500 mx-auto mb-4" />
                            <h3 class="font-semibold text-gray-900 mb-2">"Phone"</h3>
                            <p class="text-gray-600">"+1 (555) 123-4567"</p>
                            <p class="text-sm text-gray-500">"Mon-Fri, 9AM-6PM PST"</p>
                        </div>
                        <div class="p-6 rounded-xl border border-gray-200">
                            <MapPin class="w-8 h-8 text-orange-500 mx-auto mb-4" />
                            <h3 class="font-semibold text-gray-900 mb-2">"Office"</h3>
                            <p class="text-gray-600">"123 Innovation Drive"</p>
                            <p class="text-gray-600">"Silicon Valley, CA 94025"</p>
                        </div>
                    </div>
                </div>
            </section>

            <CtaBand
                title="Ready to Get Started?"
                subtitle="Join thousands of semiconductor professionals using IGNYTION."
            >
                <A href="/downloads" attr:class=PRIMARY_BUTTON>"Download Free"</A>
                <A href="/contact" attr:class=SECONDARY_BUTTON>"Contact Sales"</A>
            </CtaBand>
        </div>
    }
}
