//! Checkout flow state machine.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::cart::CartStore;
use crate::checkout::{CheckoutField, CheckoutForm, OrderSink};
use crate::error::CommerceError;
use crate::orders::Order;
use crate::pricing::OrderSummary;

/// Steps in the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Name, email and phone.
    Contact,
    /// Shipping address.
    Shipping,
    /// Payment method and card details.
    Payment,
    /// Order review before submission.
    Review,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 4] = [
        CheckoutStep::Contact,
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Contact => "contact",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Contact => "Contact Information",
            CheckoutStep::Shipping => "Shipping Address",
            CheckoutStep::Payment => "Payment Method",
            CheckoutStep::Review => "Review Order",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Contact => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Review => 4,
        }
    }

    /// The following step, `None` at Review.
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Contact => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    /// The preceding step, `None` at Contact.
    pub fn prev(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Contact => None,
            CheckoutStep::Shipping => Some(CheckoutStep::Contact),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of 4: {}", self.number(), self.display_name())
    }
}

/// Where a checkout session stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum CheckoutState {
    /// Checkout was opened with an empty cart. Nothing can be done from here.
    Empty,
    /// Filling in the form.
    Step(CheckoutStep),
    /// Waiting for the order sink.
    Submitting,
    /// The order was accepted.
    Placed(Order),
}

impl CheckoutState {
    fn name(&self) -> &'static str {
        match self {
            CheckoutState::Empty => "empty",
            CheckoutState::Step(step) => step.as_str(),
            CheckoutState::Submitting => "submitting",
            CheckoutState::Placed(_) => "placed",
        }
    }
}

/// Outcome of [`CheckoutFlow::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Moved forward to this step.
    Advanced(CheckoutStep),
    /// Already at Review; the caller should run `submit`.
    Submit,
}

/// Whether `next` checks required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Any field may be blank.
    #[default]
    Permissive,
    /// `next` refuses to leave a step whose required fields are blank, and
    /// Review refuses to submit while any step has blanks.
    Strict,
}

/// A checkout session.
///
/// Created from a cart with [`CheckoutFlow::begin`]. Steps move forward with
/// [`next`](Self::next) and back with [`back`](Self::back); the form is
/// edited one field at a time with [`set_field`](Self::set_field). At Review
/// the caller runs [`submit`](Self::submit), which builds the order, hands
/// it to an [`OrderSink`] and clears the cart once the sink accepts it.
#[derive(Debug)]
pub struct CheckoutFlow {
    state: CheckoutState,
    form: CheckoutForm,
    policy: ValidationPolicy,
    submit_timeout: Option<Duration>,
    tx: watch::Sender<CheckoutState>,
}

impl CheckoutFlow {
    /// Open checkout for the given cart.
    pub fn begin(cart: &CartStore, policy: ValidationPolicy) -> Self {
        let state = if cart.is_empty() {
            CheckoutState::Empty
        } else {
            CheckoutState::Step(CheckoutStep::Contact)
        };
        debug!(state = state.name(), item_count = cart.item_count(), "checkout opened");

        let (tx, _rx) = watch::channel(state.clone());
        Self {
            state,
            form: CheckoutForm::new(),
            policy,
            submit_timeout: None,
            tx,
        }
    }

    /// Fail submissions whose sink call takes longer than `timeout`.
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = Some(timeout);
        self
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Current step, if the form is being filled.
    pub fn step(&self) -> Option<CheckoutStep> {
        match self.state {
            CheckoutState::Step(step) => Some(step),
            _ => None,
        }
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout
    }

    /// The placed order, once there is one.
    pub fn order(&self) -> Option<&Order> {
        match &self.state {
            CheckoutState::Placed(order) => Some(order),
            _ => None,
        }
    }

    /// Blank required fields for a step, under either policy.
    pub fn missing_fields(&self, step: CheckoutStep) -> Vec<&'static str> {
        self.form.missing_fields(step)
    }

    /// What the review step shows for this cart.
    pub fn summary(&self, cart: &CartStore) -> OrderSummary {
        cart.summary()
    }

    /// Subscribe to state changes, including the `Submitting` phase.
    pub fn subscribe(&self) -> watch::Receiver<CheckoutState> {
        self.tx.subscribe()
    }

    /// Merge one field into the form. The step does not change.
    pub fn set_field(&mut self, field: CheckoutField) -> Result<(), CommerceError> {
        match self.state {
            CheckoutState::Empty => Err(CommerceError::EmptyCart),
            CheckoutState::Submitting | CheckoutState::Placed(_) => Err(CommerceError::FormLocked),
            CheckoutState::Step(_) => {
                debug!(field = field.name(), "checkout field set");
                self.form.apply(field);
                Ok(())
            }
        }
    }

    /// Move to the following step, or report that Review is ready to submit.
    pub fn next(&mut self) -> Result<Next, CommerceError> {
        let step = self.current_step()?;
        let Some(next) = step.next() else {
            self.check_complete(&CheckoutStep::ALL)?;
            return Ok(Next::Submit);
        };

        self.check_complete(&[step])?;

        debug!(from = step.as_str(), to = next.as_str(), "checkout advanced");
        self.set_state(CheckoutState::Step(next));
        Ok(Next::Advanced(next))
    }

    /// Move to the preceding step. Staying at Contact is not an error.
    pub fn back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let step = self.current_step()?;
        let Some(prev) = step.prev() else {
            return Ok(step);
        };

        debug!(from = step.as_str(), to = prev.as_str(), "checkout went back");
        self.set_state(CheckoutState::Step(prev));
        Ok(prev)
    }

    /// Place the order.
    ///
    /// Only valid at Review. The flow is `Submitting` while the sink runs.
    /// On success the cart is cleared and the flow ends in `Placed`. On
    /// failure, timeout or cancellation the flow returns to Review with the
    /// cart and form as they were.
    pub async fn submit(
        &mut self,
        cart: &mut CartStore,
        sink: &dyn OrderSink,
    ) -> Result<Order, CommerceError> {
        let step = self.current_step()?;
        if step != CheckoutStep::Review {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: step.as_str().to_string(),
                to: "submitting".to_string(),
            });
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.check_complete(&CheckoutStep::ALL)?;

        let order = Order::from_checkout(cart.state(), &self.form);
        debug!(order_id = %order.id, total = order.total, "submitting order");
        self.set_state(CheckoutState::Submitting);

        let timeout = self.submit_timeout;
        let guard = ReturnToReview {
            flow: &mut *self,
            armed: true,
        };
        let outcome = deliver(sink, &order, timeout).await;

        match outcome {
            Ok(()) => {
                guard.disarm();
                cart.clear();
                info!(
                    order_id = %order.id,
                    item_count = order.item_count,
                    total = order.total,
                    "order placed"
                );
                self.set_state(CheckoutState::Placed(order.clone()));
                Ok(order)
            }
            Err(e) => {
                drop(guard);
                warn!(order_id = %order.id, error = %e, "order submission failed");
                Err(e)
            }
        }
    }

    /// `next`, then `submit` if `next` reached the end. Returns the new state.
    pub async fn next_or_submit(
        &mut self,
        cart: &mut CartStore,
        sink: &dyn OrderSink,
    ) -> Result<CheckoutState, CommerceError> {
        match self.next()? {
            Next::Advanced(step) => Ok(CheckoutState::Step(step)),
            Next::Submit => {
                let order = self.submit(cart, sink).await?;
                Ok(CheckoutState::Placed(order))
            }
        }
    }

    fn current_step(&self) -> Result<CheckoutStep, CommerceError> {
        match self.state {
            CheckoutState::Step(step) => Ok(step),
            CheckoutState::Empty => Err(CommerceError::EmptyCart),
            CheckoutState::Submitting => Err(CommerceError::SubmissionInFlight),
            CheckoutState::Placed(_) => Err(CommerceError::AlreadyPlaced),
        }
    }

    /// Under the strict policy, fail if any of `steps` has blank required
    /// fields. Fields set after their step was left are caught here too.
    fn check_complete(&self, steps: &[CheckoutStep]) -> Result<(), CommerceError> {
        if self.policy != ValidationPolicy::Strict {
            return Ok(());
        }
        let missing: Vec<&str> = steps
            .iter()
            .flat_map(|step| self.form.missing_fields(*step))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }

    fn set_state(&mut self, state: CheckoutState) {
        self.state = state;
        self.tx.send_replace(self.state.clone());
    }
}

async fn deliver(
    sink: &dyn OrderSink,
    order: &Order,
    timeout: Option<Duration>,
) -> Result<(), CommerceError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, sink.submit(order))
            .await
            .map_err(|_| CommerceError::SubmissionTimedOut(limit))?,
        None => sink.submit(order).await,
    }
}

/// Puts the flow back at Review unless disarmed; covers a dropped submit
/// future as well as a failed one.
struct ReturnToReview<'a> {
    flow: &'a mut CheckoutFlow,
    armed: bool,
}

impl ReturnToReview<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ReturnToReview<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.flow.set_state(CheckoutState::Step(CheckoutStep::Review));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::{PaymentMethod, SimulatedOrderSink};
    use crate::orders::OrderBook;
    use async_trait::async_trait;

    fn cart_with_books() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(&Product::new("1", "The Great Gatsby", "F. Scott Fitzgerald", 12.99), 1)
            .unwrap();
        cart.add_item(&Product::new("2", "To Kill a Mockingbird", "Harper Lee", 14.99), 2)
            .unwrap();
        cart
    }

    fn at_review(cart: &CartStore) -> CheckoutFlow {
        let mut flow = CheckoutFlow::begin(cart, ValidationPolicy::Permissive);
        for _ in 0..3 {
            flow.next().unwrap();
        }
        flow
    }

    fn instant_sink(book: &OrderBook) -> SimulatedOrderSink {
        SimulatedOrderSink::with_latency(book.clone(), Duration::ZERO)
    }

    struct FailingSink;

    #[async_trait]
    impl OrderSink for FailingSink {
        async fn submit(&self, _order: &Order) -> Result<(), CommerceError> {
            Err(CommerceError::SubmissionFailed("service unavailable".to_string()))
        }
    }

    #[test]
    fn test_begin_with_empty_cart_is_dead_end() {
        let cart = CartStore::new();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);

        assert_eq!(flow.state(), &CheckoutState::Empty);
        assert_eq!(flow.next(), Err(CommerceError::EmptyCart));
        assert_eq!(flow.back(), Err(CommerceError::EmptyCart));
        assert_eq!(
            flow.set_field(CheckoutField::Email("a@b.c".into())),
            Err(CommerceError::EmptyCart)
        );
    }

    #[test]
    fn test_three_nexts_reach_review_fourth_submits() {
        let cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);
        assert_eq!(flow.step(), Some(CheckoutStep::Contact));

        assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Shipping));
        assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Payment));
        assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Review));
        assert_eq!(flow.next().unwrap(), Next::Submit);
        assert_eq!(flow.step(), Some(CheckoutStep::Review));
    }

    #[test]
    fn test_back() {
        let cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);

        assert_eq!(flow.back().unwrap(), CheckoutStep::Contact);
        assert_eq!(flow.step(), Some(CheckoutStep::Contact));

        flow.next().unwrap();
        flow.next().unwrap();
        assert_eq!(flow.back().unwrap(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_set_field_keeps_step() {
        let cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);
        flow.next().unwrap();

        flow.set_field(CheckoutField::FirstName("Ada".into())).unwrap();
        flow.set_field(CheckoutField::PaymentMethod(PaymentMethod::Card)).unwrap();

        assert_eq!(flow.step(), Some(CheckoutStep::Shipping));
        assert_eq!(flow.form().contact.first_name, "Ada");
        assert_eq!(flow.form().payment_method, PaymentMethod::Card);
    }

    #[test]
    fn test_strict_policy_gates_next() {
        let cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Strict);

        assert_eq!(
            flow.next(),
            Err(CommerceError::CheckoutIncomplete(
                "firstName, lastName, email, phone".to_string()
            ))
        );
        assert_eq!(flow.step(), Some(CheckoutStep::Contact));

        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "555-0100"),
        ] {
            flow.set_field(CheckoutField::parse(name, value).unwrap()).unwrap();
        }
        assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Shipping));
    }

    fn strict_at_review(cart: &CartStore) -> CheckoutFlow {
        let mut flow = CheckoutFlow::begin(cart, ValidationPolicy::Strict);
        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "555-0100"),
            ("address", "12 St James's Square"),
            ("city", "London"),
            ("state", "LDN"),
            ("zipCode", "10001"),
        ] {
            flow.set_field(CheckoutField::parse(name, value).unwrap()).unwrap();
        }
        for _ in 0..3 {
            flow.next().unwrap();
        }
        assert_eq!(flow.step(), Some(CheckoutStep::Review));
        flow
    }

    #[tokio::test]
    async fn test_strict_policy_rechecks_every_step_at_review() {
        let mut cart = cart_with_books();
        let mut flow = strict_at_review(&cart);
        let book = OrderBook::new();

        flow.set_field(CheckoutField::Email(String::new())).unwrap();
        flow.set_field(CheckoutField::Address(String::new())).unwrap();

        let incomplete = CommerceError::CheckoutIncomplete("email, address".to_string());
        assert_eq!(flow.next(), Err(incomplete.clone()));
        assert_eq!(
            flow.submit(&mut cart, &instant_sink(&book)).await,
            Err(incomplete)
        );
        assert_eq!(flow.step(), Some(CheckoutStep::Review));
        assert!(book.is_empty());
        assert_eq!(cart.item_count(), 3);

        flow.set_field(CheckoutField::Email("ada@example.com".into())).unwrap();
        flow.set_field(CheckoutField::Address("12 St James's Square".into())).unwrap();
        assert_eq!(flow.next().unwrap(), Next::Submit);
        let order = flow.submit(&mut cart, &instant_sink(&book)).await.unwrap();
        assert_eq!(order.customer.email, "ada@example.com");
    }

    #[test]
    fn test_permissive_policy_ignores_blanks() {
        let cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);
        assert!(!flow.missing_fields(CheckoutStep::Contact).is_empty());
        assert!(flow.next().is_ok());
    }

    #[tokio::test]
    async fn test_submit_refused_before_review() {
        let mut cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);
        let book = OrderBook::new();

        let result = flow.submit(&mut cart, &instant_sink(&book)).await;
        assert!(matches!(result, Err(CommerceError::InvalidCheckoutTransition { .. })));
        assert_eq!(flow.step(), Some(CheckoutStep::Contact));
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_submit_places_order_and_clears_cart() {
        let mut cart = cart_with_books();
        let expected = cart.summary();
        let mut flow = at_review(&cart);
        flow.set_field(CheckoutField::FirstName("Ada".into())).unwrap();
        flow.set_field(CheckoutField::LastName("Lovelace".into())).unwrap();

        let book = OrderBook::new();
        let order = flow.submit(&mut cart, &instant_sink(&book)).await.unwrap();

        assert_eq!(order.summary(), expected);
        assert_eq!(order.shipping_address.name, "Ada Lovelace");
        assert!(cart.is_empty());
        assert_eq!(flow.order(), Some(&order));
        assert_eq!(book.get(&order.id), Some(order));
    }

    #[tokio::test]
    async fn test_placed_flow_refuses_everything() {
        let mut cart = cart_with_books();
        let mut flow = at_review(&cart);
        let book = OrderBook::new();
        flow.submit(&mut cart, &instant_sink(&book)).await.unwrap();

        assert_eq!(
            flow.set_field(CheckoutField::Email("late@example.com".into())),
            Err(CommerceError::FormLocked)
        );
        assert_eq!(flow.next(), Err(CommerceError::AlreadyPlaced));
        assert_eq!(
            flow.submit(&mut cart, &instant_sink(&book)).await,
            Err(CommerceError::AlreadyPlaced)
        );
        assert_eq!(book.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_returns_to_review() {
        let mut cart = cart_with_books();
        let before = cart.state().clone();
        let mut flow = at_review(&cart);

        let result = flow.submit(&mut cart, &FailingSink).await;

        assert!(matches!(result, Err(CommerceError::SubmissionFailed(_))));
        assert_eq!(flow.step(), Some(CheckoutStep::Review));
        assert_eq!(cart.state(), &before);
        // the form stays editable for a retry
        assert!(flow.set_field(CheckoutField::Phone("555".into())).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_timeout() {
        let mut cart = cart_with_books();
        let mut flow = at_review(&cart).with_submit_timeout(Duration::from_millis(500));
        let book = OrderBook::new();
        let slow = SimulatedOrderSink::with_latency(book.clone(), Duration::from_secs(5));

        let result = flow.submit(&mut cart, &slow).await;

        assert_eq!(result, Err(CommerceError::SubmissionTimedOut(Duration::from_millis(500))));
        assert_eq!(flow.step(), Some(CheckoutStep::Review));
        assert!(!cart.is_empty());
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_submit_with_cart_emptied_since_entry() {
        let mut cart = cart_with_books();
        let mut flow = at_review(&cart);
        cart.clear();

        let book = OrderBook::new();
        assert_eq!(
            flow.submit(&mut cart, &instant_sink(&book)).await,
            Err(CommerceError::EmptyCart)
        );
        assert_eq!(flow.step(), Some(CheckoutStep::Review));
    }

    #[tokio::test]
    async fn test_in_flight_refuses_repeat() {
        let mut cart = cart_with_books();
        let mut flow = at_review(&cart);
        flow.set_state(CheckoutState::Submitting);

        let book = OrderBook::new();
        assert_eq!(
            flow.submit(&mut cart, &instant_sink(&book)).await,
            Err(CommerceError::SubmissionInFlight)
        );
        assert_eq!(
            flow.set_field(CheckoutField::City("x".into())),
            Err(CommerceError::FormLocked)
        );
        assert!(book.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_observe_submitting() {
        let mut cart = cart_with_books();
        let mut flow = at_review(&cart);
        let mut rx = flow.subscribe();
        let book = OrderBook::new();
        let sink = SimulatedOrderSink::new(book.clone());

        let watcher = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                let done = matches!(state, CheckoutState::Placed(_));
                seen.push(state.name());
                if done {
                    break;
                }
            }
            seen
        });

        flow.submit(&mut cart, &sink).await.unwrap();
        let seen = watcher.await.unwrap();
        assert_eq!(seen, vec!["submitting", "placed"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submit_returns_to_review() {
        let mut cart = cart_with_books();
        let mut flow = at_review(&cart);
        let book = OrderBook::new();
        let slow = SimulatedOrderSink::with_latency(book.clone(), Duration::from_secs(60));

        let abandoned =
            tokio::time::timeout(Duration::from_millis(10), flow.submit(&mut cart, &slow)).await;
        assert!(abandoned.is_err());

        assert_eq!(flow.step(), Some(CheckoutStep::Review));
        assert!(!cart.is_empty());
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_next_or_submit() {
        let mut cart = cart_with_books();
        let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);
        let book = OrderBook::new();
        let sink = instant_sink(&book);

        for expected in [CheckoutStep::Shipping, CheckoutStep::Payment, CheckoutStep::Review] {
            assert_eq!(
                flow.next_or_submit(&mut cart, &sink).await.unwrap(),
                CheckoutState::Step(expected)
            );
        }
        let placed = flow.next_or_submit(&mut cart, &sink).await.unwrap();
        assert!(matches!(placed, CheckoutState::Placed(_)));
        assert!(cart.is_empty());
    }
}
