//! Landing page component
//!
//! Marketing page for the bindery featuring:
//! - SEO meta tags
//! - Sticky header with smooth-scroll navigation and a mobile menu
//! - Hero section with quote and call buttons
//! - Services section
//! - Pricing cards with staggered entrance
//! - Stats strip with count-up counters
//! - Rotating testimonials
//! - Contact section with the lead capture form
//! - Footer and floating WhatsApp button

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{
    AnalyticsSink, CONTACT_CATEGORY, HeaderScroll, LeadSettings, MenuState, TestimonialRotator,
    actions, format_count, labels, page_analytics, report_fault, telephone_link,
};
use crate::ui::browser;
use crate::ui::common::{ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::LeadForm;
use crate::ui::notifications::{NotificationsContainer, use_notifications};
use crate::ui::whatsapp_button::FloatingWhatsApp;

/// Sections reachable from the navigation, as (anchor, label)
const NAV_LINKS: [(&str, &str); 5] = [
    ("services", "Services"),
    ("process", "How it works"),
    ("pricing", "Pricing"),
    ("testimonials", "Reviews"),
    ("contact", "Contact"),
];

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let settings = use_context::<LeadSettings>().unwrap_or_default();
    let notifications = use_notifications();

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-stone-50 text-gray-900 overflow-x-hidden">
            <Header call_phone=settings.call_phone.clone() />

            // Hero Section
            <section id="top" class="min-h-[90vh] flex items-center justify-center relative pt-16 px-4">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-4xl sm:text-6xl font-bold tracking-tight mb-6 landing-fade-in-up">
                        "Your words, beautifully bound"
                    </h1>
                    <p class="text-lg sm:text-xl text-gray-600 max-w-2xl mx-auto mb-10 leading-relaxed
                              landing-fade-in-up landing-delay-200">
                        "Hardcover, paperback, thesis and custom printing. Small runs welcome, delivered across India."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                        <LinkButton href="#contact".to_string() variant=ButtonVariant::Primary icon=icons::MESSAGE>
                            "Get a free quote"
                        </LinkButton>
                        <CallButton phone=settings.call_phone.clone() />
                    </div>
                </div>

                // Scroll indicator
                <a href="#services" class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce" aria-label="Scroll to services">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-gray-400" />
                </a>
            </section>

            <ServicesSection />
            <ProcessSection />
            <PricingSection />
            <StatsSection />
            <TestimonialsSection />

            // Contact Section
            <section id="contact" class="py-20 px-4">
                <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-12 items-start">
                    <div class="landing-scroll-animate">
                        <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Tell us about your book"</h2>
                        <p class="text-lg text-gray-600 mb-6">
                            "Share a few details and we'll send pricing and timelines on WhatsApp, usually within the hour."
                        </p>
                        <ul class="space-y-3 text-gray-700">
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK class="w-5 h-5 text-amber-600" />
                                "No minimum order"
                            </li>
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK class="w-5 h-5 text-amber-600" />
                                "Free proof before printing"
                            </li>
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK class="w-5 h-5 text-amber-600" />
                                "Doorstep delivery"
                            </li>
                        </ul>
                    </div>
                    <div class="bg-white rounded-2xl shadow-lg border border-gray-200 p-6 landing-scroll-animate">
                        <LeadForm settings=settings.clone() />
                    </div>
                </div>
            </section>

            <Footer />

            <FloatingWhatsApp settings=settings.clone() />

            <NotificationsContainer notifications=notifications.notifications() />

            // CSS Animations
            <LandingStyles />

            // Intersection Observer for scroll animations
            <ScrollAnimationScript />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(call_phone: String) -> impl IntoView {
    let menu = RwSignal::new(MenuState::new());
    let scroll = RwSignal::new(HeaderScroll::new());

    // Lock page scrolling while the mobile menu covers it
    Effect::new(move |_| {
        browser::set_body_overflow(menu.get().body_overflow());
    });

    #[cfg(feature = "hydrate")]
    {
        // The menu is hidden by CSS on wide screens, so close it there too
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
                menu.maybe_update(|m| m.fit_viewport(width));
            }
        });
        let scrolled = window_event_listener(leptos::ev::scroll, move |_| {
            if let Ok(offset) = window().scroll_y() {
                scroll.maybe_update(|h| {
                    let before = (h.is_hidden(), h.is_solid());
                    h.on_scroll(offset);
                    before != (h.is_hidden(), h.is_solid())
                });
            }
        });
        on_cleanup(move || {
            resize.remove();
            scrolled.remove();
        });
    }

    let close_menu = move |_| menu.update(|m| m.close());
    let transform = move || {
        if menu.get().is_open() {
            "translateY(0)"
        } else {
            scroll.get().transform()
        }
    };

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-40 bg-stone-50/90 backdrop-blur-md border-b border-gray-200 transition-all duration-300"
            class:landing-header-scrolled=move || scroll.get().is_solid()
            style:transform=transform
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#top" class="flex items-center gap-2 hover:opacity-80 transition-opacity" on:click=close_menu>
                        <Icon name=icons::BOOK class="w-7 h-7 text-amber-600" />
                        <span class="text-xl font-bold">"Bindery"</span>
                    </a>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS.iter().map(|(anchor, label)| view! {
                            <a
                                href=format!("#{}", anchor)
                                class="text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors"
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <CallButton phone=call_phone.clone() compact=true />
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 transition-colors"
                        on:click=move |_| menu.update(|m| { m.toggle(); })
                        aria-label="Toggle mobile menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    >
                        {move || view! { <Icon name=menu.get().icon() class="w-6 h-6" /> }}
                    </button>
                </div>

                // Mobile menu
                <div
                    id="mobile-menu"
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !menu.get().is_open()
                    class:max-h-96=move || menu.get().is_open()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-gray-200">
                        {NAV_LINKS.iter().map(|(anchor, label)| view! {
                            <a
                                href=format!("#{}", anchor)
                                class="block px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 rounded-lg transition-colors"
                                on:click=close_menu
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Button that dials the studio
#[component]
fn CallButton(
    phone: String,
    /// Smaller variant for the header
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let link = telephone_link(&phone);
    let href = link.clone();
    let class = if compact {
        "inline-flex items-center gap-1.5 text-sm font-semibold text-amber-700 hover:text-amber-800"
    } else {
        "landing-btn-secondary inline-flex items-center gap-2"
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let analytics = page_analytics();
        analytics.track(actions::CALL_CLICK, CONTACT_CATEGORY, labels::CALL_BUTTON);
        if let Err(e) = browser::dial(&link) {
            report_fault(&analytics, "call_button", &e);
        }
    };

    view! {
        <a href=href class=class aria-label="Call us" on:click=on_click>
            <Icon name=icons::PHONE class=if compact { "w-4 h-4" } else { "w-5 h-5" } />
            {if compact { phone } else { "Call now".to_string() }}
        </a>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-20 px-4 bg-white">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">"What we make"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "From a single keepsake copy to a full print run."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    <ServiceCard
                        title="Hardcover binding"
                        description="Case-bound books with cloth or printed covers, foil stamping and ribbon markers."
                    />
                    <ServiceCard
                        title="Paperback printing"
                        description="Perfect-bound paperbacks with matte or gloss lamination, ideal for novels and manuals."
                    />
                    <ServiceCard
                        title="Thesis binding"
                        description="University-compliant thesis and dissertation binding with same-day options."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl border border-gray-200 bg-stone-50 hover:shadow-lg transition-shadow landing-scroll-animate">
            <div class="w-12 h-12 rounded-xl bg-amber-100 flex items-center justify-center mb-4">
                <Icon name=icons::BOOK class="w-6 h-6 text-amber-700" />
            </div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
fn ProcessSection() -> impl IntoView {
    let steps = [
        ("1", "Share your details", "Fill in the form or call us with your book size and quantity."),
        ("2", "Approve the proof", "We send a digital proof and a final quote on WhatsApp."),
        ("3", "Receive your books", "Printed, bound and delivered to your door."),
    ];

    view! {
        <section id="process" class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12 landing-scroll-animate">"How it works"</h2>
                <ol class="grid md:grid-cols-3 gap-8">
                    {steps.into_iter().map(|(n, title, text)| view! {
                        <li class="text-center landing-scroll-animate">
                            <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-amber-600 text-white text-xl font-bold flex items-center justify-center">
                                {n}
                            </div>
                            <h3 class="text-lg font-semibold mb-2">{title}</h3>
                            <p class="text-gray-600">{text}</p>
                        </li>
                    }).collect_view()}
                </ol>
            </div>
        </section>
    }
}

/// Pricing plans, as (name, price, unit, features, featured)
const PRICING_PLANS: [(&str, &str, &str, [&str; 3], bool); 3] = [
    (
        "Thesis",
        "₹350",
        "per copy",
        ["Hardcover with gold lettering", "Same-day binding", "University formats"],
        false,
    ),
    (
        "Paperback",
        "₹120",
        "per copy",
        ["Perfect binding", "Matte or gloss cover", "Free proof copy"],
        true,
    ),
    (
        "Hardcover",
        "₹450",
        "per copy",
        ["Cloth or printed case", "Foil stamping", "Ribbon marker"],
        false,
    ),
];

/// Delay between the entrance of consecutive pricing cards
const PRICING_STAGGER_MS: usize = 200;

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4 bg-white">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Simple pricing"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "Starting prices. Bulk orders get a better rate on the final quote."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8 items-stretch">
                    {PRICING_PLANS.iter().enumerate().map(|(i, (name, price, unit, features, featured))| view! {
                        <div
                            class="landing-pricing-card landing-scroll-animate p-8 rounded-2xl border bg-stone-50 flex flex-col"
                            class:border-amber-500=*featured
                            class:border-gray-200=!*featured
                            style:transition-delay=format!("{}ms", i * PRICING_STAGGER_MS)
                        >
                            {featured.then(|| view! {
                                <span class="self-start mb-3 px-3 py-1 text-xs font-semibold rounded-full bg-amber-100 text-amber-800">
                                    "Most popular"
                                </span>
                            })}
                            <h3 class="text-xl font-semibold mb-2">{*name}</h3>
                            <div class="mb-6">
                                <span class="text-4xl font-bold">{*price}</span>
                                <span class="text-gray-500 ml-1">{*unit}</span>
                            </div>
                            <ul class="space-y-2 mb-8 flex-1">
                                {features.iter().map(|feature| view! {
                                    <li class="flex items-center gap-2 text-gray-700">
                                        <Icon name=icons::CHECK class="w-5 h-5 text-amber-600" />
                                        {*feature}
                                    </li>
                                }).collect_view()}
                            </ul>
                            <LinkButton
                                href="#contact".to_string()
                                variant=if *featured { ButtonVariant::Primary } else { ButtonVariant::Secondary }
                            >
                                "Get a quote"
                            </LinkButton>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsSection() -> impl IntoView {
    view! {
        <section class="py-16 px-4 bg-amber-600 text-white">
            <div class="max-w-5xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                <StatCounter target=12000 suffix="+" label="Books bound" />
                <StatCounter target=850 suffix="+" label="Happy authors" />
                <StatCounter target=15 suffix="" label="Years of craft" />
                <StatCounter target=48 suffix="h" label="Fastest turnaround" />
            </div>
        </section>
    }
}

/// Stat that counts up the first time it scrolls into view
#[component]
fn StatCounter(target: u32, suffix: &'static str, label: &'static str) -> impl IntoView {
    let value = RwSignal::new(0u32);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let started = StoredValue::new(false);
        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);

            browser::on_first_visible(&el, move || {
                leptos::task::spawn_local(async move {
                    let animation = crate::core::CounterAnimation::new(target);
                    for frame in animation.frames() {
                        crate::core::sleep_ms(animation.frame_ms).await;
                        if value.try_set(frame).is_some() {
                            // Component was unmounted
                            break;
                        }
                    }
                });
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = target;

    view! {
        <div node_ref=node_ref>
            <div class="text-4xl font-bold">{move || format_count(value.get(), suffix)}</div>
            <div class="text-amber-100 mt-1">{label}</div>
        </div>
    }
}

/// Testimonials shown in the carousel, as (quote, author, detail)
const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "They bound my thesis overnight and it looked better than anything on campus.",
        "Priya S.",
        "PhD candidate, Pune",
    ),
    (
        "Printed 200 copies of my poetry collection. The paper and finish are gorgeous.",
        "Arjun M.",
        "Self-published author",
    ),
    (
        "Our family recipe book is now a hardcover heirloom. Everyone wanted a copy!",
        "Lakshmi R.",
        "Chennai",
    ),
];

#[component]
fn TestimonialsSection() -> impl IntoView {
    let rotator = RwSignal::new(TestimonialRotator::new(TESTIMONIALS.len()));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            loop {
                crate::core::sleep_ms(crate::core::DEFAULT_ROTATE_MS).await;
                if rotator.try_update(|r| r.next()).is_none() {
                    break;
                }
            }
        });
    }

    view! {
        <section id="testimonials" class="py-20 px-4 bg-white">
            <div class="max-w-3xl mx-auto text-center landing-scroll-animate">
                <h2 class="text-3xl sm:text-4xl font-bold mb-12">"What our customers say"</h2>
                <div class="relative min-h-48">
                    {TESTIMONIALS.iter().enumerate().map(|(i, (quote, author, detail))| view! {
                        <figure
                            class="absolute inset-0 transition-opacity duration-700"
                            class:opacity-0=move || rotator.get().current() != i
                            class:opacity-100=move || rotator.get().current() == i
                            aria-hidden=move || if rotator.get().current() == i { "false" } else { "true" }
                        >
                            <blockquote class="text-xl sm:text-2xl text-gray-700 italic mb-6">
                                {format!("\u{201c}{}\u{201d}", quote)}
                            </blockquote>
                            <figcaption>
                                <div class="font-semibold">{*author}</div>
                                <div class="text-sm text-gray-500">{*detail}</div>
                            </figcaption>
                        </figure>
                    }).collect_view()}
                </div>
                <div class="flex items-center justify-center gap-4 mt-8">
                    <button
                        class="p-2 rounded-full hover:bg-gray-100"
                        aria-label="Previous testimonial"
                        on:click=move |_| rotator.update(|r| { r.previous(); })
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-5 h-5" />
                    </button>
                    {(0..TESTIMONIALS.len()).map(|i| view! {
                        <button
                            class="w-2.5 h-2.5 rounded-full transition-colors"
                            class:bg-amber-600=move || rotator.get().current() == i
                            class:bg-gray-300=move || rotator.get().current() != i
                            aria-label=format!("Show testimonial {}", i + 1)
                            on:click=move |_| rotator.update(|r| { r.select(i); })
                        ></button>
                    }).collect_view()}
                    <button
                        class="p-2 rounded-full hover:bg-gray-100"
                        aria-label="Next testimonial"
                        on:click=move |_| rotator.update(|r| { r.next(); })
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
                    </button>
                </div>
            </div>
        </section>
    }
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Bindery - Book Printing & Binding" />
        <Meta name="description" content="Hardcover, paperback and thesis binding with free proofs and doorstep delivery. Get a quote on WhatsApp in minutes." />
        <Meta property="og:title" content="Bindery - Book Printing & Binding" />
        <Meta property="og:type" content="website" />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-gray-200 bg-stone-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-2">
                    <Icon name=icons::BOOK class="w-5 h-5 text-amber-600" />
                    <span class="font-semibold">"Bindery"</span>
                </div>
                <nav class="flex flex-wrap items-center gap-4">
                    {NAV_LINKS.iter().map(|(anchor, label)| view! {
                        <a href=format!("#{}", anchor) class="text-sm text-gray-600 hover:text-amber-700 transition-colors">
                            {*label}
                        </a>
                    }).collect_view()}
                </nav>
                <span class="text-sm text-gray-500">"© 2025 Bindery. All rights reserved."</span>
            </div>
        </footer>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            /* Keep anchored sections clear of the fixed header */
            section[id] {
                scroll-margin-top: 4rem;
            }

            /* Button styles */
            .landing-btn-primary {
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                font-size: 1.0625rem;
                color: white;
                background-color: #d97706;
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover:not(:disabled) {
                transform: scale(1.03);
                background-color: #b45309;
            }

            .landing-btn-secondary {
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                font-size: 1.0625rem;
                border: 2px solid #9ca3af;
                border-radius: 0.75rem;
                transition: all 0.3s;
                background-color: #f9fafb;
                color: #374151;
            }
            .landing-btn-secondary:hover {
                transform: scale(1.03);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }

            /* Header after scrolling away from the top */
            .landing-header-scrolled {
                background-color: rgba(250, 250, 249, 0.98);
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.08);
            }

            /* Pricing cards lift on hover */
            .landing-pricing-card {
                transition: opacity 0.6s ease-out, transform 0.3s ease, box-shadow 0.3s ease;
            }
            .landing-pricing-card.visible:hover {
                transform: translateY(-15px) scale(1.02);
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
            }

            /* Floating WhatsApp button */
            .landing-whatsapp-float {
                opacity: 0;
                transform: scale(0);
                transition: opacity 0.4s ease, transform 0.4s ease;
            }
            .landing-whatsapp-float.shown {
                opacity: 1;
                transform: scale(1);
            }
            @keyframes landing-bounce {
                0%, 20%, 50%, 80%, 100% { transform: translateY(0); }
                40% { transform: translateY(-12px); }
                60% { transform: translateY(-6px); }
            }
            .landing-whatsapp-float.bouncing {
                animation: landing-bounce 1s ease;
            }

            /* Invalid form input */
            .lead-input-error {
                border-color: #ef4444;
                background-color: #fef2f2;
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                html {
                    scroll-behavior: auto;
                }
                .landing-scroll-animate,
                .landing-fade-in-up,
                .landing-whatsapp-float {
                    animation: none;
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    if (!('IntersectionObserver' in window)) {
                        document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                            el.classList.add('visible');
                        });
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
