//! Contact form with a simulated submission.
//!
//! Nothing is sent anywhere. `SimulatedTransport` waits for the configured
//! delay and reports success, so the failure status is only reachable with a
//! different `Transport`.
//!
//! Overlapping submissions are not guarded against: each one drives its own
//! status transitions, and the final status is whichever finishes last.

use async_trait::async_trait;
use std::cell::RefCell;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{FolioError, Result};

/// Status of the most recent submission transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Sending,
    Sent,
    Failed,
}

impl SubmissionStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            Self::Sent => "Sent — I usually reply within 24 hours.",
            Self::Failed => "Error sending — try mailto:your@email",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// The three form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields are required.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FolioError::MissingField(label));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Delivery seam for submissions.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, fields: &ContactFields) -> Result<()>;
}

/// Waits a fixed time and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn deliver(&self, fields: &ContactFields) -> Result<()> {
        debug!(
            delay_ms = self.delay.as_millis() as u64,
            from = %fields.email,
            "simulating contact delivery"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactFields,
    status: Option<SubmissionStatus>,
}

type StatusObserver<'a> = Box<dyn Fn(SubmissionStatus) + 'a>;

/// Form state plus the status line under the Send button.
///
/// Submissions take `&self` so several can be in flight on one task; no
/// borrow of the state is held across the transport await.
pub struct ContactForm<'a> {
    state: RefCell<FormState>,
    observer: Option<StatusObserver<'a>>,
}

impl<'a> ContactForm<'a> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FormState::default()),
            observer: None,
        }
    }

    /// Call `observer` on every status transition.
    pub fn with_observer(mut self, observer: impl Fn(SubmissionStatus) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.state.borrow_mut().fields.name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.state.borrow_mut().fields.email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.state.borrow_mut().fields.message = message.into();
    }

    pub fn fill(&self, fields: ContactFields) {
        self.state.borrow_mut().fields = fields;
    }

    pub fn fields(&self) -> ContactFields {
        self.state.borrow().fields.clone()
    }

    pub fn status(&self) -> Option<SubmissionStatus> {
        self.state.borrow().status
    }

    /// Submit the current fields.
    ///
    /// Rejects missing fields before any status change. On success the
    /// fields are cleared; on failure they are kept and the error returned.
    pub async fn submit<T: Transport + ?Sized>(&self, transport: &T) -> Result<SubmissionStatus> {
        let fields = {
            let state = self.state.borrow();
            state.fields.validate()?;
            state.fields.clone()
        };

        self.set_status(SubmissionStatus::Sending);

        match transport.deliver(&fields).await {
            Ok(()) => {
                self.state.borrow_mut().fields.clear();
                self.set_status(SubmissionStatus::Sent);
                info!("contact form submitted");
                Ok(SubmissionStatus::Sent)
            }
            Err(e) => {
                warn!(code = e.code(), "contact submission failed: {}", e);
                self.set_status(SubmissionStatus::Failed);
                Err(e)
            }
        }
    }

    fn set_status(&self, status: SubmissionStatus) {
        self.state.borrow_mut().status = Some(status);
        if let Some(observer) = &self.observer {
            observer(status);
        }
    }
}

impl Default for ContactForm<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::Poll;

    struct FailingTransport {
        delay: Duration,
    }

    #[async_trait]
    impl Transport for FailingTransport {
        async fn deliver(&self, _fields: &ContactFields) -> Result<()> {
            tokio::time::sleep(self.delay).await;
            Err(FolioError::Transport("smtp unreachable".to_string()))
        }
    }

    fn filled_form<'a>() -> ContactForm<'a> {
        let form = ContactForm::new();
        form.set_name("Ada");
        form.set_email("ada@example.com");
        form.set_message("Hello there");
        form
    }

    #[test]
    fn test_validate_requires_all_fields() {
        assert!(ContactFields::new("a", "b", "c").validate().is_ok());
        match ContactFields::new("a", "  ", "c").validate() {
            Err(FolioError::MissingField(field)) => assert_eq!(field, "Email"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(ContactFields::default().validate().is_err());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(SubmissionStatus::Sending.to_string(), "Sending...");
        assert_eq!(
            SubmissionStatus::Sent.message(),
            "Sent — I usually reply within 24 hours."
        );
        assert_eq!(
            SubmissionStatus::Failed.message(),
            "Error sending — try mailto:your@email"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_transitions_and_clears() {
        let seen = RefCell::new(Vec::new());
        let form = filled_form().with_observer(|s| seen.borrow_mut().push(s));
        let transport = SimulatedTransport::new(Duration::from_millis(600));

        let started = tokio::time::Instant::now();
        let status = form.submit(&transport).await.unwrap();

        assert_eq!(status, SubmissionStatus::Sent);
        assert!(started.elapsed() >= Duration::from_millis(600));
        assert_eq!(form.status(), Some(SubmissionStatus::Sent));
        assert!(form.fields().is_empty());
        assert_eq!(
            *seen.borrow(),
            vec![SubmissionStatus::Sending, SubmissionStatus::Sent]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_sending_is_reported_before_delay() {
        let form = filled_form();
        let transport = SimulatedTransport::default();

        let submit = form.submit(&transport);
        tokio::pin!(submit);
        // One poll runs up to the transport sleep
        assert!(futures_poll_once(submit.as_mut()).await.is_none());
        assert_eq!(form.status(), Some(SubmissionStatus::Sending));
        assert!(!form.fields().is_empty());

        submit.await.unwrap();
        assert_eq!(form.status(), Some(SubmissionStatus::Sent));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_field_rejected_before_sending() {
        let form = ContactForm::new();
        form.set_name("Ada");
        let err = form.submit(&SimulatedTransport::default()).await.unwrap_err();
        assert_eq!(err.code(), "missing_field");
        assert_eq!(form.status(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_fields() {
        let form = filled_form();
        let transport = FailingTransport {
            delay: Duration::from_millis(10),
        };
        let err = form.submit(&transport).await.unwrap_err();
        assert_eq!(err.code(), "transport");
        assert_eq!(form.status(), Some(SubmissionStatus::Failed));
        assert_eq!(form.fields().name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_do_not_panic() {
        let form = filled_form();
        let transport = SimulatedTransport::new(Duration::from_millis(600));

        let (a, b) = tokio::join!(form.submit(&transport), form.submit(&transport));
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(form.status(), Some(SubmissionStatus::Sent));
        assert!(form.fields().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_last_to_finish_wins() {
        let seen = RefCell::new(Vec::new());
        let form = filled_form().with_observer(|s| seen.borrow_mut().push(s));
        let slow = SimulatedTransport::new(Duration::from_millis(600));
        let fast = FailingTransport {
            delay: Duration::from_millis(100),
        };

        let (a, b) = tokio::join!(form.submit(&slow), form.submit(&fast));
        assert!(a.is_ok());
        assert!(b.is_err());
        // The slow success resolved last
        assert_eq!(form.status(), Some(SubmissionStatus::Sent));
        assert_eq!(
            *seen.borrow(),
            vec![
                SubmissionStatus::Sending,
                SubmissionStatus::Sending,
                SubmissionStatus::Failed,
                SubmissionStatus::Sent,
            ]
        );
    }

    /// Poll a future once, returning its output if it completed.
    async fn futures_poll_once<F: Future + Unpin>(mut fut: F) -> Option<F::Output> {
        std::future::poll_fn(|cx| match Pin::new(&mut fut).poll(cx) {
            Poll::Ready(v) => Poll::Ready(Some(v)),
            Poll::Pending => Poll::Ready(None),
        })
        .await
    }
}
