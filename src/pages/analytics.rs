//! Analytics page: key metrics, revenue comparison, channel mix, device
//! split, and traffic sources. All figures are fixtures.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::components::route_gate::RouteGate;
use crate::pages::dashboard::{BarSeries, MONTHS, SeriesPoint, series};
use crate::routes::AppRoute;

/// Headline metric whose change is not always a percentage (`+12s`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrafficSource {
    pub source: &'static str,
    pub users: &'static str,
    pub new_users: &'static str,
    pub sessions: &'static str,
    pub bounce_rate: &'static str,
    pub avg_session: &'static str,
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric { label: "Conversion Rate", value: "3.42%", change: "+0.8%" },
        KeyMetric { label: "Bounce Rate", value: "42.3%", change: "-2.1%" },
        KeyMetric { label: "Avg. Session Duration", value: "3m 27s", change: "+12s" },
        KeyMetric { label: "Pages per Session", value: "3.8", change: "+0.3" },
    ]
}

/// Share of sales per channel, in percent.
pub fn sales_by_channel() -> Vec<SeriesPoint> {
    series(&["Direct", "Affiliate", "Email", "Social", "Search"], &[35.0, 20.0, 15.0, 18.0, 12.0])
}

pub fn revenue_this_year() -> Vec<SeriesPoint> {
    series(
        &MONTHS,
        &[
            18_000.0, 22_000.0, 24_000.0, 26_000.0, 28_000.0, 32_000.0, 34_000.0, 36_000.0, 38_000.0, 40_000.0, 42_000.0,
            44_000.0,
        ],
    )
}

pub fn revenue_last_year() -> Vec<SeriesPoint> {
    series(
        &MONTHS,
        &[
            12_000.0, 16_000.0, 18_000.0, 20_000.0, 22_000.0, 24_000.0, 26_000.0, 28_000.0, 30_000.0, 32_000.0, 34_000.0,
            36_000.0,
        ],
    )
}

/// Active users per device, January through June.
pub fn active_users_by_device() -> [(&'static str, Vec<SeriesPoint>); 3] {
    let half = &MONTHS[..6];
    [
        ("Mobile", series(half, &[3_500.0, 4_000.0, 4_200.0, 4_800.0, 5_200.0, 5_800.0])),
        ("Desktop", series(half, &[4_200.0, 4_800.0, 5_000.0, 5_400.0, 5_800.0, 6_200.0])),
        ("Tablet", series(half, &[1_200.0, 1_400.0, 1_600.0, 1_800.0, 2_000.0, 2_200.0])),
    ]
}

pub fn traffic_sources() -> Vec<TrafficSource> {
    let row = |source, users, new_users, sessions, bounce_rate, avg_session| TrafficSource {
        source,
        users,
        new_users,
        sessions,
        bounce_rate,
        avg_session,
    };
    vec![
        row("Google", "5,428", "3,812", "7,642", "38.2%", "3m 12s"),
        row("Direct", "3,256", "1,824", "4,128", "42.1%", "3m 45s"),
        row("Facebook", "2,845", "1,938", "3,642", "46.8%", "2m 32s"),
        row("Twitter", "1,438", "862", "1,782", "52.3%", "1m 48s"),
        row("LinkedIn", "982", "624", "1,254", "41.7%", "2m 56s"),
    ]
}

/// `/analytics`
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Analytics>
            <ProtectedLayout title="Analytics">
                <AnalyticsBody/>
            </ProtectedLayout>
        </RouteGate>
    }
}

#[component]
fn AnalyticsBody() -> impl IntoView {
    let metrics = key_metrics()
        .into_iter()
        .map(|metric| {
            view! {
                <div class="stat-card">
                    <span class="stat-card__title">{metric.label}</span>
                    <span class="stat-card__value">{metric.value}</span>
                    <span class="stat-card__change stat-card__change--up">{metric.change} " from last period"</span>
                </div>
            }
        })
        .collect_view();

    let devices = active_users_by_device()
        .into_iter()
        .map(|(device, points)| view! { <BarSeries title=device points=points/> })
        .collect_view();

    let rows = traffic_sources()
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td class="data-table__primary">{row.source}</td>
                    <td>{row.users}</td>
                    <td>{row.new_users}</td>
                    <td>{row.sessions}</td>
                    <td>{row.bounce_rate}</td>
                    <td>{row.avg_session}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <p class="page-intro">"Detailed insights into your business performance"</p>
        <div class="stat-grid">{metrics}</div>
        <div class="chart-grid">
            <BarSeries title="Revenue This Year" points=revenue_this_year()/>
            <BarSeries title="Revenue Last Year" points=revenue_last_year()/>
            <BarSeries title="Sales by Channel (%)" points=sales_by_channel()/>
        </div>
        <h2 class="section-title">"Active Users by Device"</h2>
        <div class="chart-grid">{devices}</div>
        <section class="chart-card">
            <h2 class="chart-card__title">"Traffic Sources"</h2>
            <p class="chart-card__subtitle">"Top sources driving traffic to your website"</p>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Source"</th>
                        <th>"Users"</th>
                        <th>"New Users"</th>
                        <th>"Sessions"</th>
                        <th>"Bounce Rate"</th>
                        <th>"Avg. Session"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
