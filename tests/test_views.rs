//! Integration tests for the pure view projections.
//!
//! Tests cover:
//! - Dashboard empty-vs-populated copy and recent-outlet window
//! - List filters and their count labels
//! - Details fallback order
//! - Performance gating on both collections
//! - The onboarding wizard state machine

mod common;

use common::*;
use ccmhub::views::{
    UserBadge,
    calculations::CalculationsModel,
    dashboard::DashboardModel,
    onboarding::{OnboardingFlow, OnboardingOutcome, OnboardingStep},
    outlet_details::OutletDetailsModel,
    outlets::OutletsModel,
    performance::{PerformanceModel, PerformanceView},
    settings::SettingsModel,
};

#[test]
fn test_dashboard_copy_switches_on_outlets() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();

    // 1. Empty state: welcome hero
    let model = DashboardModel::project(session.state());
    assert!(model.is_empty);
    assert_eq!(model.hero_title, "Welcome to CCM HUB");
    assert_eq!(model.outlet_count, 0);
    assert_eq!(model.calculation_count, 0);
    assert_eq!(model.total_articles, 0);

    // 2. One outlet flips the page into overview mode
    session.add_outlet(make_new_outlet("Barissimo"));
    session.add_calculation(make_new_calculation(3));
    session.add_calculation(make_new_calculation(5));
    let model = DashboardModel::project(session.state());
    assert!(!model.is_empty);
    assert_eq!(model.hero_title, "Overview");
    assert_eq!(model.outlet_count, 1);
    assert_eq!(model.calculation_count, 2);
    assert_eq!(model.total_articles, 8);

    Ok(())
}

#[test]
fn test_dashboard_recent_outlets_window() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();
    for name in ["A", "B", "C", "D", "E", "F"] {
        session.add_outlet(make_new_outlet(name));
    }

    // Last four, oldest first
    let model = DashboardModel::project(session.state());
    let names: Vec<&str> = model.recent_outlets.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["C", "D", "E", "F"]);

    Ok(())
}

#[test]
fn test_outlets_filter_and_count_label() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();
    session.add_outlet(NewOutlet {
        name: "Barissimo".to_string(),
        address: "Viktualienmarkt 2, Munich".to_string(),
        campaign: "Aperol".to_string(),
    });
    session.add_outlet(NewOutlet {
        name: "Monti Monaco".to_string(),
        address: "Leopoldstrasse 9, Munich".to_string(),
        campaign: "Campari".to_string(),
    });

    // 1. Empty filter shows everything
    let model = OutletsModel::project(session.state(), "");
    assert_eq!(model.rows.len(), 2);
    assert_eq!(model.count_label, "Showing 2 of 2 outlets");

    // 2. Case-insensitive match against name, address and campaign
    assert_eq!(OutletsModel::project(session.state(), "BARIS").rows.len(), 1);
    assert_eq!(OutletsModel::project(session.state(), "leopold").rows.len(), 1);
    assert_eq!(OutletsModel::project(session.state(), "campari").rows.len(), 1);
    assert_eq!(OutletsModel::project(session.state(), "munich").rows.len(), 2);

    // 3. Singular noun when the total is one
    let (mut solo, _solo_dir) = create_test_session();
    solo.add_outlet(make_new_outlet("Solo"));
    let model = OutletsModel::project(solo.state(), "zzz");
    assert_eq!(model.rows.len(), 0);
    assert_eq!(model.count_label, "Showing 0 of 1 outlet");

    Ok(())
}

#[test]
fn test_calculations_filter() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();
    session.add_calculation(make_new_calculation(3));
    session.add_calculation(make_new_calculation(12));

    let model = CalculationsModel::project(session.state(), "");
    assert_eq!(model.rows.len(), 2);
    assert_eq!(model.count_label, "Showing 2 of 2 calculations");

    // Matches the code, and the article count rendered as text
    let model = CalculationsModel::project(session.state(), "calc-002");
    assert_eq!(model.rows.len(), 1);
    assert_eq!(model.rows[0].id.as_str(), "CALC-002");

    let model = CalculationsModel::project(session.state(), "12");
    assert_eq!(model.rows.len(), 1);
    assert_eq!(model.rows[0].articles, 12);

    Ok(())
}

#[test]
fn test_outlet_details_fallback_order() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();

    // 1. No outlets at all: placeholder copy
    let model = OutletDetailsModel::project(session.state(), None);
    assert!(model.selected.is_none());
    assert_eq!(model.title, "Select an outlet");
    assert_eq!(model.campaign, "—");
    assert_eq!(model.address, "—");

    // 2. Nothing selected: the first outlet stands in
    let first = session.add_outlet(make_new_outlet("First"));
    let second = session.add_outlet(make_new_outlet("Second"));
    let model = OutletDetailsModel::project(session.state(), None);
    assert_eq!(model.selected, Some(first.id.clone()));
    assert_eq!(model.title, "First");
    assert_eq!(model.status, "Active");

    // 3. A resolving selection wins
    let model = OutletDetailsModel::project(session.state(), Some(&second.id));
    assert_eq!(model.selected, Some(second.id.clone()));
    assert_eq!(model.title, "Second");

    // 4. A stale selection falls back to the first outlet
    let (mut other, _other_dir) = create_test_session();
    let ghost = other.add_outlet(make_new_outlet("Elsewhere"));
    let model = OutletDetailsModel::project(session.state(), Some(&ghost.id));
    assert_eq!(model.selected, Some(first.id));
    assert_eq!(model.title, "First");

    Ok(())
}

#[test]
fn test_performance_gates_on_both_collections() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();

    // Neither collection: empty state
    let model = PerformanceModel::project(session.state(), PerformanceView::Cards);
    assert!(!model.has_data);
    assert!(model.outlet_names.is_empty());

    // Outlets alone are not enough
    session.add_outlet(make_new_outlet("Barissimo"));
    let model = PerformanceModel::project(session.state(), PerformanceView::Cards);
    assert!(!model.has_data);

    // Both present: data shows, view token passes through
    session.add_calculation(make_new_calculation(3));
    let model = PerformanceModel::project(session.state(), PerformanceView::Table);
    assert!(model.has_data);
    assert_eq!(model.view, PerformanceView::Table);
    assert_eq!(model.outlet_names, ["Barissimo"]);

    Ok(())
}

#[test]
fn test_settings_and_badge_projection() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();

    let model = SettingsModel::project(session.state());
    assert_eq!(model.profile, UserBadge::project(session.state()));
    assert_eq!(model.profile.name, "Guest");
    assert_eq!(model.theme, Theme::Light);
    assert_eq!(model.alerts_label, "Enabled");

    session.sign_in(LoginForm::default().submit());
    session.set_theme(Theme::Dark);
    session.set_alerts_enabled(false);
    let model = SettingsModel::project(session.state());
    assert_eq!(model.profile.name, "Operator");
    assert_eq!(model.theme, Theme::Dark);
    assert_eq!(model.alerts_label, "Disabled");

    Ok(())
}

#[test]
fn test_onboarding_walks_six_steps() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();
    assert!(OnboardingFlow::should_show(session.state()));

    // 1. Forward through all six steps
    let mut flow = OnboardingFlow::start();
    assert_eq!(flow.step(), OnboardingStep::Welcome);
    assert_eq!(flow.step_number(), 1);
    assert_eq!(flow.total_steps(), 6);

    for expected in [
        OnboardingStep::CreateOutlet,
        OnboardingStep::ExploreServices,
        OnboardingStep::Calculations,
        OnboardingStep::Performance,
        OnboardingStep::Completion,
    ] {
        assert_eq!(flow.advance(), None);
        assert_eq!(flow.step(), expected);
    }

    // 2. Advancing past the last step completes the flow
    assert_eq!(flow.advance(), Some(OnboardingOutcome::Completed));

    // 3. Completion sets the sticky flag; the tour stays dismissed
    session.complete_onboarding();
    assert!(!OnboardingFlow::should_show(session.state()));

    Ok(())
}

#[test]
fn test_onboarding_back_refused_on_first_step() -> anyhow::Result<()> {
    let mut flow = OnboardingFlow::start();
    assert!(!flow.back());
    assert_eq!(flow.step(), OnboardingStep::Welcome);

    flow.advance();
    flow.advance();
    assert!(flow.back());
    assert_eq!(flow.step(), OnboardingStep::CreateOutlet);

    Ok(())
}

#[test]
fn test_onboarding_skip_dismisses() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();

    let mut flow = OnboardingFlow::start();
    flow.advance();
    assert_eq!(flow.skip(), OnboardingOutcome::Dismissed);

    // Skipping marks the tour as seen just like finishing it
    session.complete_onboarding();
    assert!(!OnboardingFlow::should_show(session.state()));

    Ok(())
}
