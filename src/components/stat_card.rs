//! Headline metric card used on the dashboard and analytics pages.

use leptos::prelude::*;

/// One headline figure with its period-over-period change.
#[derive(Clone, Debug, PartialEq)]
pub struct StatSummary {
    pub title: &'static str,
    pub value: &'static str,
    /// Percent change versus the previous period.
    pub change: f64,
}

impl StatSummary {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    /// `+12.5%` / `-1.8%`.
    pub fn change_label(&self) -> String {
        format!("{:+.1}%", self.change)
    }
}

#[component]
pub fn StatCard(stat: StatSummary) -> impl IntoView {
    let positive = stat.is_positive();
    let negative = !positive;
    let change = stat.change_label();
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{stat.title}</span>
            <span class="stat-card__value">{stat.value}</span>
            <span class="stat-card__change" class:stat-card__change--up=positive class:stat-card__change--down=negative>
                {change}
                " from last month"
            </span>
        </div>
    }
}
