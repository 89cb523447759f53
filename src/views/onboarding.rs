use crate::core::session::SessionState;

/// The six-step first-run tour. Whether the overlay initially shows is
/// exactly the negation of the sticky `onboarding_seen` flag; finishing or
/// skipping the flow is what sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    CreateOutlet,
    ExploreServices,
    Calculations,
    Performance,
    Completion,
}

const STEPS: [OnboardingStep; 6] = [
    OnboardingStep::Welcome,
    OnboardingStep::CreateOutlet,
    OnboardingStep::ExploreServices,
    OnboardingStep::Calculations,
    OnboardingStep::Performance,
    OnboardingStep::Completion,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingOutcome {
    Completed,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    index: usize,
}

impl OnboardingFlow {
    pub fn start() -> Self {
        Self { index: 0 }
    }

    pub fn should_show(state: &SessionState) -> bool {
        !state.onboarding_seen
    }

    pub fn step(&self) -> OnboardingStep {
        STEPS[self.index]
    }

    /// 1-based, for "Step N of 6" labels.
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_steps(&self) -> usize {
        STEPS.len()
    }

    /// Advance one step; on the last step the flow completes instead.
    pub fn advance(&mut self) -> Option<OnboardingOutcome> {
        if self.index + 1 < STEPS.len() {
            self.index += 1;
            None
        } else {
            Some(OnboardingOutcome::Completed)
        }
    }

    /// Step back; refused on the first step.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn skip(self) -> OnboardingOutcome {
        OnboardingOutcome::Dismissed
    }

    pub fn title(&self) -> &'static str {
        match self.step() {
            OnboardingStep::Welcome => "Welcome to CCM HUB",
            OnboardingStep::CreateOutlet => "Create your first outlet",
            OnboardingStep::ExploreServices => "Explore services",
            OnboardingStep::Calculations => "Track your calculations",
            OnboardingStep::Performance => "Review performance",
            OnboardingStep::Completion => "You're all set",
        }
    }
}
