//! Public marketing pages: shared navigation, per-route copy, pricing.
//!
//! None of these pages read the session; the guard always renders them.

#[cfg(test)]
#[path = "public_test.rs"]
mod public_test;

use leptos::prelude::*;

use crate::components::route_gate::RouteGate;
use crate::routes::AppRoute;

/// Hero copy for one informational page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCopy {
    pub heading: &'static str,
    pub intro: &'static str,
}

/// Copy for routes rendered by [`InfoPage`]. `None` for routes with their
/// own page component.
pub fn page_copy(route: AppRoute) -> Option<PageCopy> {
    let (heading, intro) = match route {
        AppRoute::About => (
            "About SaaS Dashboard",
            "We're on a mission to make data analytics accessible to businesses of all sizes. \
             Learn about our journey, our team, and our vision for the future.",
        ),
        AppRoute::Careers => (
            "Join Our Team",
            "Help us build the future of data analytics. We're looking for passionate individuals to join our mission.",
        ),
        AppRoute::Blog => (
            "SaaS Dashboard Blog",
            "Insights, guides, and expert perspectives on data analytics, business intelligence, and more.",
        ),
        AppRoute::Press => ("Press & Media", "Latest news, press releases, and media coverage about SaaS Dashboard."),
        AppRoute::Contact => (
            "Contact Us",
            "Have questions or need help? We're here for you. Reach out to our team and we'll get back to you shortly.",
        ),
        AppRoute::Integrations => (
            "Connect Your Favorite Tools",
            "SaaS Dashboard integrates with the tools you already use. \
             Bring all your data together for a complete picture of your business.",
        ),
        AppRoute::Documentation => {
            ("Documentation", "Everything you need to know about using SaaS Dashboard effectively.")
        }
        AppRoute::ReleaseNotes => (
            "Release Notes",
            "Stay up to date with the latest improvements, new features, and bug fixes for SaaS Dashboard.",
        ),
        AppRoute::Pricing => (
            "Simple, transparent pricing",
            "Choose the plan that works best for your business. All plans include a 14-day free trial.",
        ),
        AppRoute::Landing
        | AppRoute::Login
        | AppRoute::Register
        | AppRoute::Dashboard
        | AppRoute::Analytics
        | AppRoute::Users
        | AppRoute::Settings => return None,
    };
    Some(PageCopy { heading, intro })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        price: "$29",
        features: &["Up to 5 users", "Basic analytics", "7-day data history", "5 custom dashboards", "Email support"],
        cta: "Start Free Trial",
        popular: false,
    },
    PricingPlan {
        name: "Professional",
        price: "$79",
        features: &[
            "Up to 20 users",
            "Advanced analytics",
            "30-day data history",
            "Unlimited dashboards",
            "Priority support",
            "API access",
            "Custom integrations",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "$199",
        features: &[
            "Unlimited users",
            "Enterprise analytics",
            "1-year data history",
            "Unlimited dashboards",
            "24/7 dedicated support",
            "Advanced security",
            "Custom deployment",
            "Dedicated account manager",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

/// Where a plan's call to action leads.
pub fn plan_cta_target(plan: &PricingPlan) -> &'static str {
    if plan.cta == "Contact Sales" { AppRoute::Contact.path() } else { AppRoute::Register.path() }
}

/// Links shown in the public header, in order.
pub const PUBLIC_NAV: [AppRoute; 9] = [
    AppRoute::Integrations,
    AppRoute::Pricing,
    AppRoute::Documentation,
    AppRoute::ReleaseNotes,
    AppRoute::About,
    AppRoute::Careers,
    AppRoute::Blog,
    AppRoute::Press,
    AppRoute::Contact,
];

#[component]
pub fn PublicNavigation() -> impl IntoView {
    let links = PUBLIC_NAV
        .into_iter()
        .map(|route| view! { <a href=route.path() class="public-nav__link">{route.label()}</a> })
        .collect_view();

    view! {
        <header class="public-nav">
            <a href="/" class="public-nav__brand">"SaaS Dashboard"</a>
            <nav class="public-nav__links">{links}</nav>
            <a href="/login" class="btn public-nav__login">"Log in"</a>
            <a href="/register" class="btn btn--primary public-nav__signup">"Sign up"</a>
        </header>
    }
}

#[component]
pub fn PricingPlans() -> impl IntoView {
    PRICING_PLANS
        .iter()
        .map(|plan| {
            let features = plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view();
            view! {
                <div class="pricing-card" class:pricing-card--popular=plan.popular>
                    <h3 class="pricing-card__name">{plan.name}</h3>
                    <p class="pricing-card__price">{plan.price} <span>"/month"</span></p>
                    <ul class="pricing-card__features">{features}</ul>
                    <a href=plan_cta_target(plan) class="btn btn--primary">{plan.cta}</a>
                </div>
            }
        })
        .collect_view()
}

/// Any informational public page. Routes without copy render nothing.
#[component]
pub fn InfoPage(route: AppRoute) -> impl IntoView {
    let copy = page_copy(route);
    view! {
        <RouteGate route=route>
            <PublicNavigation/>
            {copy.map(|c| {
                view! {
                    <section class="hero hero--compact">
                        <h1>{c.heading}</h1>
                        <p>{c.intro}</p>
                    </section>
                }
            })}
            {(route == AppRoute::Pricing).then(|| view! { <div class="pricing-grid"><PricingPlans/></div> })}
        </RouteGate>
    }
}
