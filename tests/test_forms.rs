//! Integration tests for the form boundaries in front of the store.
//!
//! An incomplete form never produces a `New*` value, so the mutating
//! operations cannot be reached with partial data.

mod common;

use common::*;
use ccmhub::core::session::ArticleLine;

#[test]
fn test_outlet_form_requires_all_fields() -> anyhow::Result<()> {
    let complete = OutletForm {
        name: "Barissimo".to_string(),
        address: "Viktualienmarkt 2".to_string(),
        campaign: "Aperol".to_string(),
    };
    assert!(complete.validate().is_some());

    // Each missing or whitespace-only field blocks validation
    for blank in ["", "   "] {
        let mut form = complete.clone();
        form.name = blank.to_string();
        assert!(form.validate().is_none());

        let mut form = complete.clone();
        form.address = blank.to_string();
        assert!(form.validate().is_none());

        let mut form = complete.clone();
        form.campaign = blank.to_string();
        assert!(form.validate().is_none());
    }

    Ok(())
}

#[test]
fn test_outlet_form_trims_fields() -> anyhow::Result<()> {
    let form = OutletForm {
        name: "  Barissimo  ".to_string(),
        address: " Viktualienmarkt 2 ".to_string(),
        campaign: " Aperol ".to_string(),
    };
    let outlet = form.validate().expect("Form should validate");
    assert_eq!(outlet.name, "Barissimo");
    assert_eq!(outlet.address, "Viktualienmarkt 2");
    assert_eq!(outlet.campaign, "Aperol");

    Ok(())
}

#[test]
fn test_calculation_form_requires_outlet() -> anyhow::Result<()> {
    let (mut session, _dir) = create_test_session();
    let outlet = session.add_outlet(make_new_outlet("Barissimo"));

    let mut form = CalculationForm {
        outlet: None,
        articles: vec![ArticleLine::default(), ArticleLine::default()],
    };
    assert!(form.validate().is_none(), "No outlet selected, no record");

    form.outlet = Some(outlet.id);
    let calculation = form.validate().expect("Form should validate");
    assert_eq!(calculation.articles, 2);

    Ok(())
}

#[test]
fn test_calculation_totals_parse_or_zero() -> anyhow::Result<()> {
    let form = CalculationForm {
        outlet: None,
        articles: vec![
            ArticleLine {
                name: "Wall sign".to_string(),
                pieces: "24".to_string(),
                boxes: "2".to_string(),
                bottles: "48".to_string(),
                amount: "1200.50".to_string(),
            },
            ArticleLine {
                name: "Pillow set".to_string(),
                pieces: "abc".to_string(),
                boxes: "".to_string(),
                bottles: " 12 ".to_string(),
                amount: "-".to_string(),
            },
        ],
    };
    let totals = form.totals();
    assert_eq!(totals.pieces, 24);
    assert_eq!(totals.boxes, 2);
    assert_eq!(totals.bottles, 60);
    assert!((totals.amount - 1200.50).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn test_login_form_fallbacks() -> anyhow::Result<()> {
    let blank = LoginForm { email: "  ".to_string() };
    let profile = blank.submit();
    assert_eq!(profile.name, "Operator");
    assert_eq!(profile.email, "user@ccmhub.com");

    let filled = LoginForm { email: "op@example.com".to_string() };
    assert_eq!(filled.submit().email, "op@example.com");

    Ok(())
}

#[test]
fn test_registration_form_fallbacks() -> anyhow::Result<()> {
    let blank = RegistrationForm::default();
    let profile = blank.submit();
    assert_eq!(profile.name, "New User");
    assert_eq!(profile.email, "new@ccmhub.com");

    let filled = RegistrationForm {
        name: "Anna".to_string(),
        email: "anna@example.com".to_string(),
    };
    let profile = filled.submit();
    assert_eq!(profile.name, "Anna");
    assert_eq!(profile.email, "anna@example.com");

    Ok(())
}

#[test]
fn test_verification_code_gates_on_four_digits() -> anyhow::Result<()> {
    let mut code = VerificationCode::default();
    assert!(!code.is_complete());

    // Non-digits are rejected
    code.push_digit('a');
    code.push_digit(' ');
    assert_eq!(code.digits(), "");

    for ch in ['1', '2', '3'] {
        code.push_digit(ch);
    }
    assert!(!code.is_complete());

    code.push_digit('4');
    assert!(code.is_complete());
    assert_eq!(code.digits(), "1234");

    // A fifth digit does not fit
    code.push_digit('5');
    assert_eq!(code.digits(), "1234");

    code.pop_digit();
    assert!(!code.is_complete());

    Ok(())
}

#[test]
fn test_sign_in_applies_profile() -> anyhow::Result<()> {
    let (mut session, dir) = create_test_session();
    session.sign_in(LoginForm::default().submit());

    assert_eq!(session.state().user.name, "Operator");
    assert_eq!(session.state().user.email, "user@ccmhub.com");

    let reloaded = SessionDb::open(session_path(&dir));
    assert_eq!(reloaded.state().user, session.state().user);

    Ok(())
}
