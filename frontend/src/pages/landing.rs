use yew::prelude::*;

use crate::components::fade_in::{FadeIn, FadeKind};
use crate::components::lead_form::LeadForm;
use crate::config;
use crate::lead::schema::FormVariant;
use crate::pages::faq::Faq;

struct Sector {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SECTORS: &[Sector] = &[
    Sector {
        icon: "utensils",
        title: "Food & Beverage",
        blurb: "Cafés, QSRs, cloud kitchens and dessert chains.",
    },
    Sector {
        icon: "shopping-bag",
        title: "Retail",
        blurb: "Apparel, grocery, electronics and lifestyle stores.",
    },
    Sector {
        icon: "graduation-cap",
        title: "Education",
        blurb: "Pre-schools, tuition centres and skill academies.",
    },
    Sector {
        icon: "heart-pulse",
        title: "Health & Wellness",
        blurb: "Clinics, pharmacies, gyms and diagnostics.",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("Share your goals", "Tell us your budget, city and preferred sector."),
    ("Get a shortlist", "We match you with verified brands that fit."),
    ("Meet the brands", "We set up calls and visits with franchisors."),
    ("Launch your outlet", "Support through agreement, setup and opening."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <FadeIn kind={FadeKind::Left} class={classes!("hero-copy")}>
                        <h1>{"Find the right franchise for your budget"}</h1>
                        <p class="hero-subtitle">
                            {"Free expert guidance to shortlist, evaluate and launch a proven franchise brand in your city."}
                        </p>
                        <ul class="hero-points">
                            <li><i data-lucide="check-circle"></i>{"500+ verified brands"}</li>
                            <li><i data-lucide="check-circle"></i>{"Zero consultation fee for investors"}</li>
                            <li><i data-lucide="check-circle"></i>{"Support till your outlet opens"}</li>
                        </ul>
                    </FadeIn>
                    <FadeIn kind={FadeKind::Right} class={classes!("hero-card")}>
                        <h3>{"Quick Enquiry"}</h3>
                        <p>{"Get a callback from a franchise advisor"}</p>
                        <LeadForm variant={FormVariant::Hero} />
                    </FadeIn>
                </div>
            </section>

            <section id="sectors" class="sectors">
                <FadeIn class={classes!("section-header")}>
                    <h2>{"Popular Franchise Sectors"}</h2>
                    <p>{"Opportunities across every investment range"}</p>
                </FadeIn>
                <FadeIn kind={FadeKind::Stagger} class={classes!("sector-grid")}>
                    { for SECTORS.iter().map(|sector| html! {
                        <div class="sector-card">
                            <i data-lucide={sector.icon}></i>
                            <h3>{sector.title}</h3>
                            <p>{sector.blurb}</p>
                        </div>
                    }) }
                </FadeIn>
            </section>

            <section id="why-us" class="why-us">
                <FadeIn kind={FadeKind::Left} class={classes!("why-copy")}>
                    <h2>{"Why investors choose "}{config::BRAND_NAME}</h2>
                    <p>
                        {"We only work with brands we have verified on unit economics, support quality and franchisee satisfaction. Our advisors stay with you from the first call to the opening day."}
                    </p>
                </FadeIn>
                <FadeIn kind={FadeKind::Right} class={classes!("why-stats")}>
                    <div class="stat"><strong>{"1,200+"}</strong><span>{"investors guided"}</span></div>
                    <div class="stat"><strong>{"80+"}</strong><span>{"cities covered"}</span></div>
                    <div class="stat"><strong>{"₹5L – ₹5Cr"}</strong><span>{"investment range"}</span></div>
                </FadeIn>
            </section>

            <section id="process" class="process">
                <FadeIn class={classes!("section-header")}>
                    <h2>{"How It Works"}</h2>
                </FadeIn>
                <FadeIn kind={FadeKind::Stagger} class={classes!("steps")}>
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step">
                            <span class="step-number">{i + 1}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </FadeIn>
            </section>

            <Faq />

            <section id="contact" class="contact">
                <FadeIn class={classes!("section-header")}>
                    <h2>{"Start Your Franchise Journey"}</h2>
                    <p>{"Fill in your details and our team will reach out on WhatsApp and email."}</p>
                </FadeIn>
                <FadeIn class={classes!("contact-card")}>
                    <LeadForm variant={FormVariant::Contact} />
                </FadeIn>
            </section>

            <footer class="site-footer">
                <p>{config::BRAND_NAME}{" · Franchise consulting for first-time and seasoned investors"}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        color: #1f2937;
                    }
                    .hero {
                        padding: 8rem 1.5rem 5rem;
                        background: linear-gradient(135deg, #fff7ed 0%, #ffffff 60%);
                    }
                    .hero-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        line-height: 1.15;
                        margin: 0 0 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.15rem;
                        color: #4b5563;
                    }
                    .hero-points {
                        list-style: none;
                        padding: 0;
                    }
                    .hero-points li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.6rem;
                    }
                    .hero-card,
                    .contact-card {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.08);
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .section-header h2 {
                        font-size: 2.2rem;
                        margin-bottom: 0.5rem;
                    }
                    .sectors,
                    .process,
                    .contact,
                    .why-us {
                        padding: 5rem 1.5rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .sector-grid,
                    .steps {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .sector-card,
                    .step {
                        padding: 1.5rem;
                        border-radius: 12px;
                        border: 1px solid #f3f4f6;
                        background: #ffffff;
                    }
                    .step-number {
                        display: inline-flex;
                        width: 2rem;
                        height: 2rem;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: #f97316;
                        color: #ffffff;
                        font-weight: 700;
                    }
                    .why-us {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .why-stats {
                        display: grid;
                        gap: 1rem;
                    }
                    .stat strong {
                        display: block;
                        font-size: 2rem;
                        color: #f97316;
                    }
                    .contact-card {
                        max-width: 760px;
                        margin: 0 auto;
                    }
                    .site-footer {
                        text-align: center;
                        padding: 2rem 1.5rem 6rem;
                        color: #6b7280;
                        border-top: 1px solid #f3f4f6;
                    }
                    .fade-in,
                    .fade-in-left,
                    .fade-in-right {
                        opacity: 0;
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in { transform: translateY(30px); }
                    .fade-in-left { transform: translateX(-30px); }
                    .fade-in-right { transform: translateX(30px); }
                    .fade-in.visible,
                    .fade-in-left.visible,
                    .fade-in-right.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .stagger-children > * {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .stagger-children.visible > * {
                        opacity: 1;
                        transform: none;
                    }
                    .stagger-children.visible > *:nth-child(2) { transition-delay: 0.1s; }
                    .stagger-children.visible > *:nth-child(3) { transition-delay: 0.2s; }
                    .stagger-children.visible > *:nth-child(4) { transition-delay: 0.3s; }
                    @media (max-width: 768px) {
                        .hero-content,
                        .why-us {
                            grid-template-columns: 1fr;
                        }
                        .hero h1 {
                            font-size: 2.2rem;
                        }
                        .sector-grid,
                        .steps {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
        </main>
    }
}
