//! Dashboard page: headline stats, revenue/user growth series, activity feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Figures are fixed fixtures; nothing is
//! fetched.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::components::route_gate::RouteGate;
use crate::components::stat_card::{StatCard, StatSummary};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// One labelled series point.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub user: &'static str,
    pub action: &'static str,
    pub project: &'static str,
    pub time: &'static str,
}

pub fn dashboard_stats() -> Vec<StatSummary> {
    vec![
        StatSummary { title: "Total Revenue", value: "$24,567", change: 12.5 },
        StatSummary { title: "New Customers", value: "1,423", change: 8.2 },
        StatSummary { title: "Active Users", value: "8,942", change: 5.3 },
        StatSummary { title: "Conversion Rate", value: "3.42%", change: -1.8 },
    ]
}

pub(crate) const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

pub fn monthly_revenue() -> Vec<SeriesPoint> {
    series(
        &MONTHS,
        &[
            12_000.0, 19_000.0, 15_000.0, 22_000.0, 18_000.0, 24_000.0, 25_000.0, 27_000.0, 24_000.0, 23_000.0, 25_000.0,
            28_000.0,
        ],
    )
}

/// New users per month for the first half of the year.
pub fn new_users() -> Vec<SeriesPoint> {
    series(&MONTHS[..6], &[500.0, 800.0, 1_200.0, 1_000.0, 1_500.0, 1_800.0])
}

/// Active users per month for the first half of the year.
pub fn active_users() -> Vec<SeriesPoint> {
    series(&MONTHS[..6], &[1_200.0, 1_500.0, 2_000.0, 2_500.0, 3_000.0, 3_500.0])
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity { id: 1, user: "John Doe", action: "created a new project", project: "Website Redesign", time: "2 hours ago" },
        Activity { id: 2, user: "Jane Smith", action: "completed task", project: "Mobile App Development", time: "4 hours ago" },
        Activity { id: 3, user: "Robert Johnson", action: "added new comment", project: "E-commerce Platform", time: "6 hours ago" },
        Activity { id: 4, user: "Emily Davis", action: "updated status", project: "CRM Integration", time: "8 hours ago" },
        Activity { id: 5, user: "Michael Wilson", action: "uploaded files", project: "Marketing Campaign", time: "10 hours ago" },
    ]
}

pub(crate) fn series(labels: &[&'static str], values: &[f64]) -> Vec<SeriesPoint> {
    labels.iter().zip(values).map(|(label, value)| SeriesPoint { label, value: *value }).collect()
}

/// Bar length as a percentage of the largest value in the series.
pub fn bar_width_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Horizontal bar rendering of a series.
#[component]
pub fn BarSeries(title: &'static str, points: Vec<SeriesPoint>) -> impl IntoView {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let rows = points
        .into_iter()
        .map(|point| {
            let style = format!("width: {:.1}%", bar_width_percent(point.value, max));
            view! {
                <div class="bar-series__row">
                    <span class="bar-series__label">{point.label}</span>
                    <span class="bar-series__bar" style=style></span>
                    <span class="bar-series__value">{point.value.to_string()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">{title}</h2>
            <div class="bar-series">{rows}</div>
        </section>
    }
}

/// `/dashboard`
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RouteGate route=AppRoute::Dashboard>
            <ProtectedLayout title="Dashboard">
                <DashboardBody/>
            </ProtectedLayout>
        </RouteGate>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| a.user().map(|u| format!("Welcome back, {}!", u.first_name)))
            .unwrap_or_else(|| "Welcome back!".to_owned())
    };

    let stats = dashboard_stats()
        .into_iter()
        .map(|stat| view! { <StatCard stat=stat/> })
        .collect_view();

    let activity = recent_activity()
        .into_iter()
        .map(|item| {
            view! {
                <li class="activity__item" data-id=item.id>
                    <strong>{item.user}</strong>
                    " "
                    {item.action}
                    " "
                    <em>{item.project}</em>
                    <span class="activity__time">{item.time}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <p class="page-intro">{greeting} " Here's an overview of your business performance."</p>
        <div class="stat-grid">{stats}</div>
        <div class="chart-grid">
            <BarSeries title="Monthly Revenue" points=monthly_revenue()/>
            <BarSeries title="New Users" points=new_users()/>
            <BarSeries title="Active Users" points=active_users()/>
        </div>
        <section class="activity">
            <h2>"Recent Activity"</h2>
            <ul class="activity__list">{activity}</ul>
        </section>
    }
}
