//! Contact modal lifecycle and lead form submission.
//!
//! `ModalController` holds no handles to the DOM, timers or network. Whoever
//! renders it reads [`ModalController::in_flight`] to know which request to
//! send and [`ModalController::auto_close_token`] to know which timer to run,
//! and feeds the outcomes back as [`ModalAction`]s. Every callback carries the
//! token it was started with, so anything that outlives a manual close is
//! ignored when it comes back.

use sarvian_common::{
    screen, validate_email, validate_name, validate_phone, Field, FieldError, LeadRequest,
};

pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The lead being typed. `rendered_at` is fixed when the modal opens.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub rendered_at: f64,
}

impl LeadForm {
    pub fn new(rendered_at: f64) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            company: String::new(),
            rendered_at,
        }
    }

    /// Every failing field is reported, not only the first.
    pub fn validate(&self) -> Result<LeadRequest, Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            validate_name(&self.name),
            validate_phone(&self.phone),
            validate_email(&self.email),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LeadRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
            company: Some(self.company.clone()),
            ts: Some(self.rendered_at),
        })
    }

    fn clear(&mut self) {
        *self = Self::new(self.rendered_at);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InFlight {
    pub attempt: u64,
    pub request: LeadRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitFailure {
    Status(u16),
    Network(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    /// Closed, or a submission is already in flight.
    Ignored,
    Invalid,
    /// Caught by the honeypot or the time trap. Looks like a success.
    Filtered,
    Dispatch(LeadRequest),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    Open { now: f64 },
    Close,
    Toggle { now: f64 },
    Edit(Field, String),
    EditHoneypot(String),
    Submit { now: f64 },
    Finished { attempt: u64, result: Result<(), SubmitFailure> },
    AutoCloseElapsed(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalController {
    visibility: Visibility,
    phase: SubmissionPhase,
    form: Option<LeadForm>,
    errors: Vec<FieldError>,
    submit_error: Option<&'static str>,
    in_flight: Option<InFlight>,
    auto_close: Option<u64>,
    next_token: u64,
}

impl Default for ModalController {
    fn default() -> Self {
        Self {
            visibility: Visibility::Closed,
            phase: SubmissionPhase::Idle,
            form: None,
            errors: Vec::new(),
            submit_error: None,
            in_flight: None,
            auto_close: None,
            next_token: 0,
        }
    }
}

impl ModalController {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn form(&self) -> Option<&LeadForm> {
        self.form.as_ref()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn submit_error(&self) -> Option<&'static str> {
        self.submit_error
    }

    pub fn in_flight(&self) -> Option<&InFlight> {
        self.in_flight.as_ref()
    }

    pub fn auto_close_token(&self) -> Option<u64> {
        self.auto_close
    }

    pub fn open_modal(&mut self, now: f64) -> bool {
        if self.is_open() {
            return false;
        }
        self.visibility = Visibility::Open;
        self.phase = SubmissionPhase::Idle;
        self.form = Some(LeadForm::new(now));
        self.errors.clear();
        self.submit_error = None;
        true
    }

    /// Discards the form and disarms both the auto-close timer and any
    /// response still on its way.
    pub fn close_modal(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.visibility = Visibility::Closed;
        self.phase = SubmissionPhase::Idle;
        self.form = None;
        self.errors.clear();
        self.submit_error = None;
        self.in_flight = None;
        self.auto_close = None;
        true
    }

    pub fn toggle_modal(&mut self, now: f64) -> bool {
        if self.is_open() {
            self.close_modal()
        } else {
            self.open_modal(now)
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        match field {
            Field::Name => form.name = value,
            Field::Phone => form.phone = value,
            Field::Email => form.email = value,
        }
        self.errors.retain(|e| e.field != field);
        true
    }

    pub fn set_honeypot(&mut self, value: String) -> bool {
        match self.form.as_mut() {
            Some(form) => {
                form.company = value;
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self, now: f64) -> SubmitDecision {
        if self.phase == SubmissionPhase::Submitting {
            return SubmitDecision::Ignored;
        }
        let Some(form) = self.form.as_ref() else {
            return SubmitDecision::Ignored;
        };

        let request = match form.validate() {
            Ok(request) => request,
            Err(errors) => {
                self.errors = errors;
                return SubmitDecision::Invalid;
            }
        };
        self.errors.clear();
        self.submit_error = None;

        if !screen(&request, now).is_accepted() {
            self.succeed();
            return SubmitDecision::Filtered;
        }

        let attempt = self.issue_token();
        self.phase = SubmissionPhase::Submitting;
        self.in_flight = Some(InFlight {
            attempt,
            request: request.clone(),
        });
        SubmitDecision::Dispatch(request)
    }

    pub fn finish(&mut self, attempt: u64, result: Result<(), SubmitFailure>) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.attempt == attempt => {}
            _ => return false,
        }
        self.in_flight = None;
        match result {
            Ok(()) => self.succeed(),
            Err(_) => {
                self.phase = SubmissionPhase::Failed;
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE);
            }
        }
        true
    }

    pub fn auto_close_elapsed(&mut self, token: u64) -> bool {
        if self.auto_close != Some(token) {
            return false;
        }
        self.close_modal()
    }

    pub fn apply(&mut self, action: ModalAction) -> bool {
        match action {
            ModalAction::Open { now } => self.open_modal(now),
            ModalAction::Close => self.close_modal(),
            ModalAction::Toggle { now } => self.toggle_modal(now),
            ModalAction::Edit(field, value) => self.set_field(field, value),
            ModalAction::EditHoneypot(value) => self.set_honeypot(value),
            ModalAction::Submit { now } => !matches!(self.submit(now), SubmitDecision::Ignored),
            ModalAction::Finished { attempt, result } => self.finish(attempt, result),
            ModalAction::AutoCloseElapsed(token) => self.auto_close_elapsed(token),
        }
    }

    fn succeed(&mut self) {
        self.phase = SubmissionPhase::Succeeded;
        if let Some(form) = self.form.as_mut() {
            form.clear();
        }
        self.auto_close = Some(self.issue_token());
    }

    fn issue_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }
}
