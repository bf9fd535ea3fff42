use super::*;
use crate::routes::ALL_ROUTES;

#[test]
fn every_public_nav_route_has_copy() {
    for route in PUBLIC_NAV {
        assert!(page_copy(route).is_some(), "{route:?} has no copy");
        assert!(!route.requires_auth());
    }
}

#[test]
fn guarded_and_form_routes_have_no_info_copy() {
    for route in ALL_ROUTES {
        if route.requires_auth() || route.is_auth_form() || route == AppRoute::Landing {
            assert_eq!(page_copy(route), None, "{route:?}");
        }
    }
}

#[test]
fn about_copy_matches_heading() {
    let copy = page_copy(AppRoute::About).map(|c| c.heading);
    assert_eq!(copy, Some("About SaaS Dashboard"));
}

#[test]
fn exactly_one_plan_is_marked_popular() {
    let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
    assert_eq!(popular, ["Professional"]);
}

#[test]
fn plan_cta_routes_enterprise_to_contact() {
    assert_eq!(plan_cta_target(&PRICING_PLANS[0]), "/register");
    assert_eq!(plan_cta_target(&PRICING_PLANS[2]), "/contact");
}
