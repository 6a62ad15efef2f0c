use log::{info, warn};

use crate::config;
use crate::handoff;
use crate::lead::format::format_lead;
use crate::lead::record::LeadRecord;
use crate::lead::schema::{FormVariant, LeadError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Rejected,
    Dispatching,
}

/// What happens after a lead passes validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Chat deep link only; native submission is always blocked.
    QuickEnquiry,
    /// Chat deep link plus the browser's own POST to the email relay.
    NativeRelay,
    /// No relay configured; behaves like `QuickEnquiry` for feedback.
    SimulatedRelay,
}

impl DispatchPolicy {
    pub fn for_variant(variant: FormVariant, relay_endpoint: Option<&str>) -> Self {
        match (variant, relay_endpoint) {
            (FormVariant::Hero, _) => DispatchPolicy::QuickEnquiry,
            (FormVariant::Contact, Some(_)) => DispatchPolicy::NativeRelay,
            (FormVariant::Contact, None) => DispatchPolicy::SimulatedRelay,
        }
    }

    pub fn allows_native_submit(self) -> bool {
        matches!(self, DispatchPolicy::NativeRelay)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: String,
    pub disabled: bool,
}

impl SubmitButtonState {
    pub fn resting(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }
}

/// Delayed success step: toast, form reset, button restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub delay_ms: u32,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub message: String,
    pub deep_link: String,
    pub prevent_default: bool,
    pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(LeadError),
    Dispatch(Dispatch),
    /// A previous submission is still in flight.
    Ignored,
}

impl SubmitOutcome {
    /// Whether the browser's native form submission must be stopped.
    pub fn prevents_default(&self) -> bool {
        match self {
            SubmitOutcome::Dispatch(dispatch) => dispatch.prevent_default,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => true,
        }
    }
}

/// Per-form submission state machine.
///
/// `Idle -> Validating -> Rejected -> Idle` on a bad lead,
/// `Idle -> Validating -> Dispatching -> Idle` on a good one, where the
/// last step is [`SubmissionController::complete`].
#[derive(Clone, Debug)]
pub struct SubmissionController {
    variant: FormVariant,
    policy: DispatchPolicy,
    recipient: String,
    phase: SubmitPhase,
    button: SubmitButtonState,
    original_label: Option<String>,
    trace: Vec<SubmitPhase>,
}

impl SubmissionController {
    pub fn new(variant: FormVariant, policy: DispatchPolicy) -> Self {
        Self {
            variant,
            policy,
            recipient: config::WHATSAPP_RECIPIENT.to_string(),
            phase: SubmitPhase::Idle,
            button: SubmitButtonState::resting(variant.idle_label()),
            original_label: None,
            trace: Vec::new(),
        }
    }

    pub fn for_variant(variant: FormVariant) -> Self {
        Self::new(
            variant,
            DispatchPolicy::for_variant(variant, config::get_relay_endpoint()),
        )
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn button(&self) -> &SubmitButtonState {
        &self.button
    }

    /// Phases entered by the most recent `submit`, in order.
    pub fn last_transitions(&self) -> &[SubmitPhase] {
        &self.trace
    }

    fn enter(&mut self, phase: SubmitPhase) {
        self.phase = phase;
        self.trace.push(phase);
    }

    pub fn submit(&mut self, record: &LeadRecord) -> SubmitOutcome {
        if self.phase == SubmitPhase::Dispatching {
            if !self.policy.allows_native_submit() {
                warn!("{:?} form submitted while a hand-off is in flight", self.variant);
                return SubmitOutcome::Ignored;
            }
            // The relay POST has no pending step to wait for; the page is
            // still here, so the previous navigation never happened.
            info!("{:?} form resubmitted after an unfinished relay POST", self.variant);
            self.restore_button();
        }

        self.trace.clear();
        self.enter(SubmitPhase::Validating);

        if let Err(err) = self.variant.validate(record) {
            info!(
                "{:?} enquiry rejected, missing {:?}",
                self.variant,
                err.missing_fields()
            );
            self.enter(SubmitPhase::Rejected);
            self.enter(SubmitPhase::Idle);
            return SubmitOutcome::Rejected(err);
        }

        self.enter(SubmitPhase::Dispatching);
        self.original_label = Some(self.button.label.clone());
        self.button = SubmitButtonState {
            label: self.variant.busy_label().to_string(),
            disabled: true,
        };

        let message = format_lead(record, self.variant);
        let deep_link = handoff::build_deep_link(&message, &self.recipient);
        info!("{:?} enquiry accepted via {:?}", self.variant, self.policy);

        let feedback = match self.policy {
            DispatchPolicy::NativeRelay => None,
            DispatchPolicy::QuickEnquiry | DispatchPolicy::SimulatedRelay => Some(Feedback {
                delay_ms: config::SIMULATED_LATENCY_MS,
                message: self.variant.success_message(),
            }),
        };

        SubmitOutcome::Dispatch(Dispatch {
            message,
            deep_link,
            prevent_default: !self.policy.allows_native_submit(),
            feedback,
        })
    }

    fn restore_button(&mut self) {
        if let Some(label) = self.original_label.take() {
            self.button = SubmitButtonState::resting(label);
        }
    }

    /// Restores the button and returns to `Idle`.
    ///
    /// Called once feedback has run, and when the page is shown again
    /// (back/forward cache) after a relay POST.
    pub fn complete(&mut self) {
        if self.phase != SubmitPhase::Dispatching {
            return;
        }
        self.restore_button();
        self.enter(SubmitPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::schema::LeadField;

    fn record(pairs: &[(&str, &str)]) -> LeadRecord {
        pairs.iter().copied().collect()
    }

    fn decoded_message(deep_link: &str) -> String {
        let query = deep_link.split("?text=").nth(1).unwrap_or("");
        urlencoding::decode(query).unwrap().into_owned()
    }

    #[test]
    fn test_policy_selection() {
        assert_eq!(
            DispatchPolicy::for_variant(FormVariant::Hero, Some("https://relay")),
            DispatchPolicy::QuickEnquiry
        );
        assert_eq!(
            DispatchPolicy::for_variant(FormVariant::Contact, Some("https://relay")),
            DispatchPolicy::NativeRelay
        );
        assert_eq!(
            DispatchPolicy::for_variant(FormVariant::Contact, None),
            DispatchPolicy::SimulatedRelay
        );
    }

    #[test]
    fn test_missing_required_is_rejected_without_hand_off() {
        let cases = [
            (FormVariant::Hero, record(&[("name", "Asha")])),
            (FormVariant::Hero, record(&[("name", ""), ("mobile", "1")])),
            (FormVariant::Contact, record(&[("name", "R"), ("email", "r@x.com")])),
            (FormVariant::Contact, record(&[("email", "r@x.com"), ("phone", "888")])),
        ];
        for policy in [DispatchPolicy::NativeRelay, DispatchPolicy::QuickEnquiry] {
            for (variant, lead) in &cases {
                let mut controller = SubmissionController::new(*variant, policy);
                let outcome = controller.submit(lead);

                assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
                assert!(outcome.prevents_default());
                assert_eq!(
                    controller.last_transitions(),
                    &[SubmitPhase::Validating, SubmitPhase::Rejected, SubmitPhase::Idle]
                );
                assert_eq!(controller.button(), &SubmitButtonState::resting(variant.idle_label()));
            }
        }
    }

    #[test]
    fn test_rejection_reports_variant_message() {
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::NativeRelay);
        match controller.submit(&LeadRecord::new()) {
            SubmitOutcome::Rejected(err) => {
                assert_eq!(err.to_string(), "Please fill in your name, email and phone number.");
                assert_eq!(
                    err.missing_fields(),
                    &[LeadField::Name, LeadField::Phone, LeadField::Email]
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_hero_dispatch_blocks_native_submit_and_schedules_feedback() {
        let mut controller = SubmissionController::for_variant(FormVariant::Hero);
        let lead = record(&[("name", "Asha"), ("mobile", "9999999999"), ("budget", ""), ("sector", "")]);

        let outcome = controller.submit(&lead);
        let dispatch = match outcome {
            SubmitOutcome::Dispatch(dispatch) => dispatch,
            other => panic!("expected dispatch, got {:?}", other),
        };

        assert!(dispatch.prevent_default);
        assert_eq!(
            dispatch.feedback,
            Some(Feedback {
                delay_ms: 800,
                message: FormVariant::Hero.success_message(),
            })
        );
        assert_eq!(decoded_message(&dispatch.deep_link), dispatch.message);
        assert_eq!(dispatch.message.lines().count(), 4);
        assert!(dispatch.deep_link.starts_with("https://wa.me/919168516666?text="));
    }

    #[test]
    fn test_dispatch_sets_busy_button_and_complete_restores_it() {
        let mut controller = SubmissionController::new(FormVariant::Hero, DispatchPolicy::QuickEnquiry);
        controller.submit(&record(&[("name", "Asha"), ("mobile", "1")]));

        assert_eq!(controller.phase(), SubmitPhase::Dispatching);
        assert_eq!(
            controller.button(),
            &SubmitButtonState {
                label: "Opening WhatsApp…".to_string(),
                disabled: true,
            }
        );

        controller.complete();
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(controller.button(), &SubmitButtonState::resting("Get Free Consultation"));
        assert_eq!(
            controller.last_transitions(),
            &[SubmitPhase::Validating, SubmitPhase::Dispatching, SubmitPhase::Idle]
        );
    }

    #[test]
    fn test_native_relay_lets_form_post() {
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::NativeRelay);
        let lead = record(&[("name", "Rahul"), ("email", "r@x.com"), ("phone", "888"), ("city", "Pune")]);

        let outcome = controller.submit(&lead);
        assert!(!outcome.prevents_default());
        match outcome {
            SubmitOutcome::Dispatch(dispatch) => {
                assert_eq!(dispatch.feedback, None);
                let message = decoded_message(&dispatch.deep_link);
                assert!(message.contains("🏙️ *City:* Pune"));
                for absent in ["Budget", "Sector", "Role", "Message:"] {
                    assert!(!message.contains(absent));
                }
            }
            other => panic!("expected dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_simulated_relay_behaves_like_quick_enquiry() {
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::SimulatedRelay);
        let lead = record(&[("name", "Rahul"), ("email", "r@x.com"), ("phone", "888")]);
        match controller.submit(&lead) {
            SubmitOutcome::Dispatch(dispatch) => {
                assert!(dispatch.prevent_default);
                assert_eq!(
                    dispatch.feedback.map(|f| f.delay_ms),
                    Some(config::SIMULATED_LATENCY_MS)
                );
            }
            other => panic!("expected dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_every_provided_field_reaches_the_message() {
        let lead = record(&[
            ("name", "Priya"),
            ("phone", "900"),
            ("email", "p@x.com"),
            ("city", "Nagpur"),
            ("investment", "10-25 Lakh"),
            ("sector", "Retail"),
            ("type", "Investor"),
            ("message", "Hello"),
        ]);
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::NativeRelay);
        let dispatch = match controller.submit(&lead) {
            SubmitOutcome::Dispatch(dispatch) => dispatch,
            other => panic!("expected dispatch, got {:?}", other),
        };
        let message = decoded_message(&dispatch.deep_link);
        for field in FormVariant::Contact.fields() {
            let value = lead.get(field.input_name()).unwrap();
            assert!(message.contains(&format!("{} {}", field.label(), value)));
        }
    }

    #[test]
    fn test_resubmit_while_dispatching_is_ignored() {
        let mut controller = SubmissionController::new(FormVariant::Hero, DispatchPolicy::QuickEnquiry);
        let lead = record(&[("name", "Asha"), ("mobile", "1")]);
        assert!(matches!(controller.submit(&lead), SubmitOutcome::Dispatch(_)));
        assert_eq!(controller.submit(&lead), SubmitOutcome::Ignored);
        assert_eq!(controller.phase(), SubmitPhase::Dispatching);

        controller.complete();
        assert!(matches!(controller.submit(&lead), SubmitOutcome::Dispatch(_)));
    }

    #[test]
    fn test_native_relay_resubmit_dispatches_again() {
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::NativeRelay);
        let lead = record(&[("name", "Rahul"), ("email", "r@x.com"), ("phone", "888")]);

        assert!(matches!(controller.submit(&lead), SubmitOutcome::Dispatch(_)));
        assert_eq!(controller.button().label, "Sending…");

        let second = controller.submit(&lead);
        assert!(matches!(second, SubmitOutcome::Dispatch(_)));
        assert!(!second.prevents_default());
        assert_eq!(
            controller.last_transitions(),
            &[SubmitPhase::Validating, SubmitPhase::Dispatching]
        );

        // The resting label survives repeated busy states.
        controller.complete();
        assert_eq!(controller.button(), &SubmitButtonState::resting("Send Enquiry"));
    }

    #[test]
    fn test_native_relay_invalid_resubmit_restores_button() {
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::NativeRelay);
        controller.submit(&record(&[("name", "Rahul"), ("email", "r@x.com"), ("phone", "888")]));

        let outcome = controller.submit(&record(&[("name", "Rahul")]));
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(controller.button(), &SubmitButtonState::resting("Send Enquiry"));
    }

    #[test]
    fn test_page_show_after_relay_post_unlocks_form() {
        let mut controller = SubmissionController::new(FormVariant::Contact, DispatchPolicy::NativeRelay);
        let lead = record(&[("name", "Rahul"), ("email", "r@x.com"), ("phone", "888")]);
        controller.submit(&lead);

        controller.complete();
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert!(!controller.button().disabled);
        assert!(matches!(controller.submit(&lead), SubmitOutcome::Dispatch(_)));
    }

    #[test]
    fn test_complete_when_idle_is_noop() {
        let mut controller = SubmissionController::new(FormVariant::Hero, DispatchPolicy::QuickEnquiry);
        controller.complete();
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert!(controller.last_transitions().is_empty());
    }
}
