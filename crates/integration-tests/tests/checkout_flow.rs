//! End-to-end checkout wizard scenarios.
//!
//! Each test drives a full session through the public API the way the
//! storefront UI would: fill forms, advance stage by stage, submit from
//! review, land on confirmation.

#![allow(clippy::unwrap_used)]

use paperbound_checkout::{
    CheckoutError, CheckoutSession, CheckoutStage, FormField, PaymentMethod, PaymentUpdate,
    ShippingUpdate, SimulatedGateway, SubmissionState,
};
use paperbound_core::Price;
use paperbound_integration_tests::{
    CountingCart, FlakyGateway, cart_with, complete_shipping_updates, instant_config,
};

#[tokio::test]
async fn free_shipping_order_totals_one_hundred_eight() {
    // Cart subtotal 100.00, standard shipping (free), 8% tax
    let cart = cart_with(&[(2500, 4)]);
    let mut session = CheckoutSession::new(
        cart.clone(),
        SimulatedGateway::instant("PB"),
        instant_config(),
    )
    .unwrap();

    for update in complete_shipping_updates() {
        session.update_shipping(update);
    }
    session.advance().await.unwrap();
    session.select_payment_method(PaymentMethod::Paypal);
    session.advance().await.unwrap();
    session.advance().await.unwrap();

    let confirmation = session.confirmation().unwrap();
    assert_eq!(confirmation.summary.subtotal, Price::from_cents(10000));
    assert_eq!(confirmation.summary.shipping, Price::zero());
    assert_eq!(confirmation.summary.tax, Price::from_cents(800));
    assert_eq!(confirmation.summary.total, Price::from_cents(10800));
}

#[tokio::test]
async fn express_shipping_order_totals_sixty_nine_ninety_nine() {
    // Cart subtotal 50.00, express 15.99, tax 4.00
    let cart = cart_with(&[(1000, 5)]);
    let mut session =
        CheckoutSession::new(cart, SimulatedGateway::instant("PB"), instant_config()).unwrap();
    session.select_shipping_option("express").unwrap();

    for update in complete_shipping_updates() {
        session.update_shipping(update);
    }
    session.advance().await.unwrap();
    session.select_payment_method(PaymentMethod::BankTransfer);
    session.advance().await.unwrap();
    session.advance().await.unwrap();

    let confirmation = session.confirmation().unwrap();
    assert_eq!(confirmation.summary.tax, Price::from_cents(400));
    assert_eq!(confirmation.summary.total, Price::from_cents(6999));
}

#[tokio::test]
async fn paypal_needs_no_card_fields() {
    let cart = cart_with(&[(1999, 1)]);
    let mut session =
        CheckoutSession::new(cart, SimulatedGateway::instant("PB"), instant_config()).unwrap();

    for update in complete_shipping_updates() {
        session.update_shipping(update);
    }
    session.advance().await.unwrap();

    session.select_payment_method(PaymentMethod::Paypal);
    assert!(session.is_payment_complete());
    assert_eq!(session.advance().await.unwrap(), CheckoutStage::Review);
}

#[tokio::test]
async fn missing_zip_code_keeps_stage_at_shipping() {
    let cart = cart_with(&[(1999, 1)]);
    let mut session =
        CheckoutSession::new(cart, SimulatedGateway::instant("PB"), instant_config()).unwrap();

    for update in complete_shipping_updates() {
        if !matches!(update, ShippingUpdate::ZipCode(_)) {
            session.update_shipping(update);
        }
    }

    let err = session.advance().await.unwrap_err();
    match err {
        CheckoutError::ValidationIncomplete { stage, missing } => {
            assert_eq!(stage, CheckoutStage::Shipping);
            assert_eq!(missing, vec![FormField::ZipCode]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.stage(), CheckoutStage::Shipping);
}

#[tokio::test]
async fn credit_card_fields_are_masked_and_required() {
    let cart = cart_with(&[(1999, 1)]);
    let mut session =
        CheckoutSession::new(cart, SimulatedGateway::instant("PB"), instant_config()).unwrap();

    for update in complete_shipping_updates() {
        session.update_shipping(update);
    }
    session.advance().await.unwrap();

    // Credit card with an empty CVV is incomplete
    session.update_payment(PaymentUpdate::CardholderName("Ada Lovelace".to_owned()));
    session.update_payment(PaymentUpdate::CardNumber("4242424242424242".to_owned()));
    session.update_payment(PaymentUpdate::ExpiryDate("1227".to_owned()));
    assert!(!session.is_payment_complete());
    assert_eq!(session.missing_payment_fields(), vec![FormField::Cvv]);

    session.update_payment(PaymentUpdate::Cvv("123".to_owned()));
    assert_eq!(session.payment().card_number, "4242 4242 4242 4242");
    assert_eq!(session.payment().expiry_date, "12/27");
    assert_eq!(session.advance().await.unwrap(), CheckoutStage::Review);
}

#[tokio::test]
async fn failed_submission_allows_retry_and_clears_cart_once() {
    let cart = CountingCart::new(cart_with(&[(5000, 1)]));
    let mut session =
        CheckoutSession::new(cart.clone(), FlakyGateway::failing_times(1), instant_config())
            .unwrap();

    for update in complete_shipping_updates() {
        session.update_shipping(update);
    }
    session.advance().await.unwrap();
    session.select_payment_method(PaymentMethod::Paypal);
    session.advance().await.unwrap();

    // First attempt fails: still in review, cart untouched, state Failed
    let err = session.advance().await.unwrap_err();
    assert!(matches!(err, CheckoutError::Submission(_)));
    assert_eq!(session.stage(), CheckoutStage::Review);
    assert_eq!(session.submission(), SubmissionState::Failed);
    assert_eq!(cart.clears(), 0);

    // Retry succeeds: confirmation reached, cart cleared exactly once
    assert_eq!(session.advance().await.unwrap(), CheckoutStage::Confirmation);
    assert_eq!(cart.clears(), 1);
    assert!(session.confirmation().is_some());

    // Further advances are no-ops and never clear again
    assert_eq!(session.advance().await.unwrap(), CheckoutStage::Confirmation);
    assert_eq!(cart.clears(), 1);
}

#[tokio::test]
async fn confirmation_reference_carries_store_code() {
    let cart = cart_with(&[(1200, 2)]);
    let mut session =
        CheckoutSession::new(cart, SimulatedGateway::instant("PB"), instant_config()).unwrap();

    for update in complete_shipping_updates() {
        session.update_shipping(update);
    }
    session.advance().await.unwrap();
    session.select_payment_method(PaymentMethod::Paypal);
    session.advance().await.unwrap();
    session.advance().await.unwrap();

    let reference = session.confirmation().unwrap().reference.as_str();
    assert!(reference.starts_with("PB-"));
    assert_eq!(reference.len(), "PB-".len() + 6);
}
