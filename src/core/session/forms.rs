//! Form boundaries in front of the session store.
//!
//! Each form validates its own preconditions; a `New*` value (or a signed-in
//! profile) only exists once those hold, so an incomplete form can never
//! reach a mutating operation.

use crate::core::session::{
    calculation::NewCalculation,
    model::UserProfile,
    outlet::{NewOutlet, OutletId},
};

pub const LOGIN_NAME: &str = "Operator";
pub const LOGIN_EMAIL_FALLBACK: &str = "user@ccmhub.com";
pub const REGISTER_NAME_FALLBACK: &str = "New User";
pub const REGISTER_EMAIL_FALLBACK: &str = "new@ccmhub.com";

const CODE_LENGTH: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct OutletForm {
    pub name: String,
    pub address: String,
    pub campaign: String,
}

impl OutletForm {
    /// All three fields are required after trimming.
    pub fn validate(&self) -> Option<NewOutlet> {
        let name = self.name.trim();
        let address = self.address.trim();
        let campaign = self.campaign.trim();
        if name.is_empty() || address.is_empty() || campaign.is_empty() {
            return None;
        }
        Some(NewOutlet {
            name: name.to_string(),
            address: address.to_string(),
            campaign: campaign.to_string(),
        })
    }
}

/// One article row in the calculation form. Quantity fields hold raw user
/// input; totals treat anything unparsable as zero.
#[derive(Debug, Clone, Default)]
pub struct ArticleLine {
    pub name: String,
    pub pieces: String,
    pub boxes: String,
    pub bottles: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArticleTotals {
    pub pieces: u32,
    pub boxes: u32,
    pub bottles: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CalculationForm {
    pub outlet: Option<OutletId>,
    pub articles: Vec<ArticleLine>,
}

impl CalculationForm {
    /// Saving requires a selected outlet; the record keeps the line count.
    pub fn validate(&self) -> Option<NewCalculation> {
        self.outlet.as_ref()?;
        Some(NewCalculation {
            articles: u32::try_from(self.articles.len()).unwrap_or(u32::MAX),
        })
    }

    pub fn totals(&self) -> ArticleTotals {
        self.articles
            .iter()
            .fold(ArticleTotals::default(), |totals, line| ArticleTotals {
                pieces: totals.pieces + line.pieces.trim().parse().unwrap_or(0),
                boxes: totals.boxes + line.boxes.trim().parse().unwrap_or(0),
                bottles: totals.bottles + line.bottles.trim().parse().unwrap_or(0),
                amount: totals.amount + line.amount.trim().parse().unwrap_or(0.0),
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
}

impl LoginForm {
    pub fn submit(&self) -> UserProfile {
        let email = self.email.trim();
        UserProfile {
            name: LOGIN_NAME.to_string(),
            email: if email.is_empty() {
                LOGIN_EMAIL_FALLBACK.to_string()
            } else {
                email.to_string()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
}

impl RegistrationForm {
    pub fn submit(&self) -> UserProfile {
        let name = self.name.trim();
        let email = self.email.trim();
        UserProfile {
            name: if name.is_empty() {
                REGISTER_NAME_FALLBACK.to_string()
            } else {
                name.to_string()
            },
            email: if email.is_empty() {
                REGISTER_EMAIL_FALLBACK.to_string()
            } else {
                email.to_string()
            },
        }
    }
}

/// Fixed-width one-time-code entry. Submission stays disabled until all
/// four digit boxes are filled.
#[derive(Debug, Clone, Default)]
pub struct VerificationCode {
    digits: String,
}

impl VerificationCode {
    pub fn push_digit(&mut self, ch: char) {
        if ch.is_ascii_digit() && self.digits.len() < CODE_LENGTH {
            self.digits.push(ch);
        }
    }

    pub fn pop_digit(&mut self) {
        self.digits.pop();
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == CODE_LENGTH
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }
}
