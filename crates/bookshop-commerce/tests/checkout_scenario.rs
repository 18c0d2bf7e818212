use std::time::Duration;

use bookshop_commerce::prelude::*;

fn fill(flow: &mut CheckoutFlow, fields: &[(&str, &str)]) {
    for (name, value) in fields {
        let field = CheckoutField::parse(name, *value).unwrap();
        flow.set_field(field).unwrap();
    }
}

#[tokio::test]
async fn two_books_through_checkout() {
    let catalog = Catalog::sample();
    let gatsby = catalog.get(&ProductId::new("1")).unwrap();
    let mockingbird = catalog.get(&ProductId::new("2")).unwrap();

    let mut cart = CartStore::new();
    cart.add_item(gatsby, 1).unwrap();
    cart.add_item(mockingbird, 2).unwrap();

    let sidebar = cart.summary();
    assert!((sidebar.subtotal - 42.97).abs() < 1e-9);
    assert!((sidebar.tax - 3.4376).abs() < 1e-9);
    assert!((sidebar.total - 46.4076).abs() < 1e-9);
    assert_eq!(sidebar.item_count, 3);

    let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Strict);
    fill(
        &mut flow,
        &[
            ("firstName", "Grace"),
            ("lastName", "Hopper"),
            ("email", "grace@example.com"),
            ("phone", "555-0199"),
        ],
    );
    assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Shipping));

    fill(
        &mut flow,
        &[
            ("address", "1 Navy Yard"),
            ("city", "Arlington"),
            ("state", "VA"),
            ("zipCode", "22202"),
        ],
    );
    assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Payment));
    assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Review));

    let review = flow.summary(&cart);
    assert_eq!(review, sidebar);
    assert_eq!(flow.next().unwrap(), Next::Submit);

    let book = OrderBook::new();
    let sink = SimulatedOrderSink::with_latency(book.clone(), Duration::from_millis(5));
    let order = flow.submit(&mut cart, &sink).await.unwrap();

    // stored values equal what the sidebar and review showed
    assert_eq!(order.subtotal, sidebar.subtotal);
    assert_eq!(order.tax, sidebar.tax);
    assert_eq!(order.total, sidebar.total);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.shipping_address.name, "Grace Hopper");
    assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);

    let (_, tax, total) = order.summary().display(Currency::USD);
    assert_eq!(tax.display(), "$3.44");
    assert_eq!(total.display(), "$46.41");

    assert!(cart.is_empty());
    assert_eq!(cart.total_amount(), 0.0);
    assert_eq!(cart.item_count(), 0);
    assert!(matches!(flow.state(), CheckoutState::Placed(_)));

    let recorded = book.filter(&OrderFilter::new().with_search("grace"));
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].id, order.id);
}

#[tokio::test]
async fn card_payment_requires_details_under_strict_validation() {
    let catalog = Catalog::sample();
    let mut cart = CartStore::with_policy(QuantityPolicy::Strict);
    cart.add_item(catalog.get(&ProductId::new("4")).unwrap(), 1).unwrap();

    let mut flow = CheckoutFlow::begin(&cart, ValidationPolicy::Strict);
    fill(
        &mut flow,
        &[
            ("firstName", "Alan"),
            ("lastName", "Turing"),
            ("email", "alan@example.com"),
            ("phone", "555-0142"),
            ("address", "Bletchley Park"),
            ("city", "Milton Keynes"),
            ("state", "BK"),
            ("zipCode", "MK3 6EB"),
            ("paymentMethod", "card"),
        ],
    );
    flow.next().unwrap();
    flow.next().unwrap();

    assert_eq!(
        flow.next(),
        Err(CommerceError::CheckoutIncomplete("cardNumber, expiryDate, cvv".to_string()))
    );

    fill(
        &mut flow,
        &[("cardNumber", "4242424242424242"), ("expiryDate", "08/30"), ("cvv", "321")],
    );
    assert_eq!(flow.next().unwrap(), Next::Advanced(CheckoutStep::Review));

    let book = OrderBook::new();
    let sink = SimulatedOrderSink::with_latency(book.clone(), Duration::ZERO);
    let order = flow.submit(&mut cart, &sink).await.unwrap();
    assert_eq!(order.payment_method, PaymentMethod::Card);
    assert_eq!(book.len(), 1);
}
