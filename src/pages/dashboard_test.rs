use super::*;

#[test]
fn dashboard_stats_has_four_cards_with_signed_changes() {
    let stats = dashboard_stats();
    assert_eq!(stats.len(), 4);
    assert_eq!(stats[0].change_label(), "+12.5%");
    assert_eq!(stats[3].title, "Conversion Rate");
    assert_eq!(stats[3].change_label(), "-1.8%");
    assert!(!stats[3].is_positive());
}

#[test]
fn monthly_revenue_covers_full_year() {
    let revenue = monthly_revenue();
    assert_eq!(revenue.len(), 12);
    assert_eq!(revenue[0], SeriesPoint { label: "Jan", value: 12_000.0 });
    assert_eq!(revenue[11], SeriesPoint { label: "Dec", value: 28_000.0 });
}

#[test]
fn user_series_cover_first_half_year() {
    assert_eq!(new_users().len(), 6);
    assert_eq!(active_users().len(), 6);
    assert_eq!(active_users().last().map(|p| p.label), Some("Jun"));
}

#[test]
fn series_truncates_to_shorter_input() {
    let points = series(&["a", "b", "c"], &[1.0, 2.0]);
    assert_eq!(points.len(), 2);
}

#[test]
fn bar_width_percent_scales_against_max() {
    assert!((bar_width_percent(14_000.0, 28_000.0) - 50.0).abs() < f64::EPSILON);
    assert!((bar_width_percent(28_000.0, 28_000.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn bar_width_percent_handles_degenerate_inputs() {
    assert!(bar_width_percent(10.0, 0.0).abs() < f64::EPSILON);
    assert!(bar_width_percent(f64::NAN, 10.0).abs() < f64::EPSILON);
    assert!(bar_width_percent(-5.0, 10.0).abs() < f64::EPSILON);
    assert!((bar_width_percent(50.0, 10.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn recent_activity_lists_five_entries_in_order() {
    let activity = recent_activity();
    assert_eq!(activity.len(), 5);
    assert!(activity.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(activity[0].user, "John Doe");
}
