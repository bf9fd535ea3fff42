//! `/` marketing landing page.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::route_gate::RouteGate;
use crate::pages::public::{PricingPlans, PublicNavigation};
use crate::routes::AppRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Real-time Analytics",
        description: "Monitor your business performance with real-time dashboards that update automatically. \
                      Spot trends as they happen and make data-driven decisions instantly.",
    },
    Feature {
        title: "Advanced Reporting",
        description: "Create beautiful reports with drag-and-drop simplicity. Schedule automated exports and \
                      share insights with your team through customizable templates.",
    },
    Feature {
        title: "Data Integration",
        description: "Connect to over 200+ data sources with pre-built connectors. Import data from any existing \
                      system with our powerful API and automated syncing.",
    },
    Feature {
        title: "AI-Powered Insights",
        description: "Leverage machine learning algorithms that automatically detect anomalies, predict trends, \
                      and suggest optimizations for your business processes.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "How does the 14-day free trial work?",
        answer: "You can sign up for our 14-day free trial without entering any payment information. At the end of \
                 the trial, you can choose to subscribe to one of our plans or your account will automatically be \
                 downgraded to the free tier.",
    },
    Faq {
        question: "Can I change my plan later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. When you upgrade, the new features will be \
                 immediately available. If you downgrade, you'll maintain your current features until the end of \
                 your billing cycle.",
    },
    Faq {
        question: "Is there a limit to how much data I can analyze?",
        answer: "Different plans have different data limits. The Starter plan includes up to 100,000 events per \
                 month, Professional includes up to 1 million, and Enterprise offers custom limits based on your needs.",
    },
    Faq {
        question: "How secure is my data?",
        answer: "We take security very seriously. All data is encrypted both in transit and at rest. We use \
                 industry-standard security practices, and our infrastructure is hosted on secure cloud providers \
                 with SOC 2 and ISO 27001 certifications.",
    },
    Faq {
        question: "Do you offer discounts for nonprofits or educational institutions?",
        answer: "Yes, we offer special pricing for nonprofits, educational institutions, and startups. Please \
                 contact our sales team for more information.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Landing>
            <PublicNavigation/>
            <section class="hero">
                <h1>"Transform Your " <span class="hero__accent">"Business Insights"</span> " With Powerful Analytics"</h1>
                <p>
                    "Make smarter decisions with our enterprise-grade analytics platform. Visualize complex data, \
                     uncover hidden patterns, and drive growth with actionable insights, all in one intuitive dashboard."
                </p>
                <a href="/register" class="btn btn--primary">"Start Free Trial"</a>
                <a href="/login" class="btn">"Sign in"</a>
            </section>
            <section id="features" class="features">
                <h2>"Everything you need to supercharge your analytics"</h2>
                <p>"Transform your data into actionable insights with powerful, intuitive tools"</p>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <div class="feature-card">
                                <h3>{f.title}</h3>
                                <p>{f.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
            <section id="pricing" class="pricing">
                <h2>"Simple, transparent pricing"</h2>
                <div class="pricing-grid"><PricingPlans/></div>
            </section>
            <section class="faq">
                <h2>"Frequently asked questions"</h2>
                <p>"Everything you need to know about our platform"</p>
                {FAQS
                    .iter()
                    .map(|item| view! {
                        <div class="faq__item">
                            <h3>{item.question}</h3>
                            <p>{item.answer}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
        </RouteGate>
    }
}
