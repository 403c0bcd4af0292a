//! Property-style checks over the wizard's guards and transitions.
//!
//! Uses a seeded RNG so failures reproduce; these are randomized sweeps,
//! not fuzzing.

#![allow(clippy::unwrap_used)]

use paperbound_checkout::{
    CheckoutSession, CheckoutStage, PaymentMethod, ShippingUpdate, SimulatedGateway,
};
use paperbound_integration_tests::{cart_with, complete_shipping_updates, instant_config};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SWEEPS: usize = 100;

fn field_updates(fill_mask: u8) -> Vec<ShippingUpdate> {
    complete_shipping_updates()
        .into_iter()
        .enumerate()
        .filter(|&(i, _)| fill_mask & (1 << i) != 0)
        .map(|(_, update)| update)
        .collect()
}

#[tokio::test]
async fn shipping_guard_passes_iff_all_eight_fields_filled() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..SWEEPS {
        let fill_mask: u8 = rng.random();
        let mut session = CheckoutSession::new(
            cart_with(&[(1500, 1)]),
            SimulatedGateway::instant("PB"),
            instant_config(),
        )
        .unwrap();

        for update in field_updates(fill_mask) {
            session.update_shipping(update);
        }

        let all_filled = fill_mask == u8::MAX;
        assert_eq!(session.is_shipping_complete(), all_filled);

        let advanced = session.advance().await;
        if all_filled {
            assert_eq!(advanced.unwrap(), CheckoutStage::Payment);
        } else {
            assert!(advanced.is_err());
            assert_eq!(session.stage(), CheckoutStage::Shipping);
        }
    }
}

#[tokio::test]
async fn random_walks_never_skip_or_underflow_stages() {
    let mut rng = StdRng::seed_from_u64(0xf00d);

    for _ in 0..SWEEPS {
        let mut session = CheckoutSession::new(
            cart_with(&[(1500, 2)]),
            SimulatedGateway::instant("PB"),
            instant_config(),
        )
        .unwrap();
        for update in complete_shipping_updates() {
            session.update_shipping(update);
        }
        session.select_payment_method(PaymentMethod::Paypal);

        for _ in 0..12 {
            let before = session.stage();
            let after = if rng.random_bool(0.6) {
                session.advance().await.unwrap()
            } else {
                session.retreat()
            };

            let legal = after == before
                || before.next() == Some(after)
                || before.previous() == Some(after);
            assert!(legal, "illegal transition {before} -> {after}");
        }
    }
}

#[tokio::test]
async fn going_back_never_loses_entered_data() {
    let mut rng = StdRng::seed_from_u64(0xdada);

    for _ in 0..SWEEPS {
        let mut session = CheckoutSession::new(
            cart_with(&[(2000, 1)]),
            SimulatedGateway::instant("PB"),
            instant_config(),
        )
        .unwrap();
        for update in complete_shipping_updates() {
            session.update_shipping(update);
        }
        session.select_payment_method(PaymentMethod::BankTransfer);
        session.advance().await.unwrap();

        let shipping_before = session.shipping().clone();
        let payment_before = session.payment().clone();

        // Bounce backward and forward a random number of times
        for _ in 0..rng.random_range(1..=4) {
            session.retreat();
            session.advance().await.unwrap();
        }

        assert_eq!(session.shipping(), &shipping_before);
        assert_eq!(session.payment(), &payment_before);
    }
}
