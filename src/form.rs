/// Simulated round-trip time for a submission, in milliseconds.
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// How long the success toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u64 = 4000;

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_BODY: &str = "Thanks for reaching out. I'll get back to you soon.";

/// The three fields of the contact form. `update_field` is constrained to
/// these; there is no dynamic field name to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
}

/// Contact form state plus the simulated submission lifecycle.
///
/// `begin_submit` / `finish_submit` bracket the timed fake round trip: the
/// component schedules a timeout between them. There is no failure path and
/// no validation here; required-ness is enforced by the browser on the form
/// elements themselves.
#[derive(Debug, Clone)]
pub struct ContactSession {
    form: ContactForm,
    status: SubmissionStatus,
}

impl Default for ContactSession {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
        }
    }
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field, leaving the other two untouched.
    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.form.name = value,
            FormField::Email => self.form.email = value,
            FormField::Message => self.form.message = value,
        }
    }

    /// Move Idle -> Submitting. Returns false (and does nothing) while a
    /// submission is already in flight; the submit button is disabled in that
    /// state as well, so this is a backstop rather than an error.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        true
    }

    /// Complete the simulated round trip: back to Idle, fields cleared.
    /// Returns the success notification text for the caller to display.
    pub fn finish_submit(&mut self) -> (&'static str, &'static str) {
        self.status = SubmissionStatus::Idle;
        self.form = ContactForm::default();
        (SUCCESS_TITLE, SUCCESS_BODY)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_field_isolation() {
        let mut session = ContactSession::new();
        session.update_field(FormField::Name, "Ada".into());
        session.update_field(FormField::Email, "ada@x.io".into());

        session.update_field(FormField::Message, "Hello".into());
        assert_eq!(session.form().name, "Ada");
        assert_eq!(session.form().email, "ada@x.io");
        assert_eq!(session.form().message, "Hello");

        session.update_field(FormField::Message, "Hello again".into());
        assert_eq!(session.form().name, "Ada");
        assert_eq!(session.form().email, "ada@x.io");
    }

    #[test]
    fn test_full_submission_lifecycle() {
        let mut session = ContactSession::new();
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert_eq!(*session.form(), ContactForm::default());

        session.update_field(FormField::Name, "Ada".into());
        session.update_field(FormField::Email, "ada@x.io".into());
        session.update_field(FormField::Message, "Hello".into());

        assert!(session.begin_submit());
        assert_eq!(session.status(), SubmissionStatus::Submitting);
        // Fields hold their values while the fake round trip is in flight
        assert_eq!(session.form().name, "Ada");

        let (title, body) = session.finish_submit();
        assert_eq!(title, SUCCESS_TITLE);
        assert_eq!(body, SUCCESS_BODY);
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert_eq!(*session.form(), ContactForm::default());
    }

    #[test]
    fn test_no_reentrant_submission() {
        let mut session = ContactSession::new();
        assert!(session.begin_submit());
        assert!(!session.begin_submit());
        assert_eq!(session.status(), SubmissionStatus::Submitting);

        session.finish_submit();
        assert!(session.begin_submit());
    }
}
