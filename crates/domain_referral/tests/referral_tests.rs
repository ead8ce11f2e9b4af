//! Comprehensive tests for domain_referral

use chrono::NaiveDate;
use core_kernel::{Money, WiremanId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_referral::accrual::{points_for_amount, ACCRUAL_UNIT};
use domain_referral::bill::{Bill, PaymentStatus};
use domain_referral::error::ReferralError;
use domain_referral::ledger::PointsLedger;
use domain_referral::validation::{validate_bill_input, validate_wireman_input};
use domain_referral::wireman::Wireman;

fn bill_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

// ============================================================================
// Accrual Tests
// ============================================================================

mod accrual_tests {
    use super::*;

    #[test]
    fn test_one_point_per_thousand() {
        assert_eq!(ACCRUAL_UNIT, dec!(1000));
        assert_eq!(points_for_amount(Money::new(dec!(1000))), dec!(1));
        assert_eq!(points_for_amount(Money::new(dec!(2500))), dec!(2));
        assert_eq!(points_for_amount(Money::new(dec!(3500))), dec!(3));
    }

    #[test]
    fn test_amounts_below_unit_earn_nothing() {
        assert_eq!(points_for_amount(Money::zero()), dec!(0));
        assert_eq!(points_for_amount(Money::new(dec!(1))), dec!(0));
        assert_eq!(points_for_amount(Money::new(dec!(999))), dec!(0));
        assert_eq!(points_for_amount(Money::new(dec!(999.99))), dec!(0));
    }

    #[test]
    fn test_fractional_amounts_floor() {
        assert_eq!(points_for_amount(Money::new(dec!(1999.99))), dec!(1));
        assert_eq!(points_for_amount(Money::new(dec!(2000.01))), dec!(2));
    }
}

// ============================================================================
// Ledger Tests
// ============================================================================

mod ledger_tests {
    use super::*;

    #[test]
    fn test_first_bill_opens_ledger() {
        // CreateBill(W, "ClientA", 3500) on a wireman without a record
        let points = points_for_amount(Money::new(dec!(3500)));
        let ledger = PointsLedger::opened_with(points);

        assert_eq!(
            ledger,
            PointsLedger {
                total_points: dec!(3),
                redeemed_points: dec!(0),
                balance_points: dec!(3),
            }
        );
    }

    #[test]
    fn test_accrue_adds_to_total_and_balance() {
        let mut ledger = PointsLedger::opened_with(dec!(3));
        ledger.accrue(dec!(2));

        assert_eq!(ledger.total_points, dec!(5));
        assert_eq!(ledger.balance_points, dec!(5));
        assert_eq!(ledger.redeemed_points, dec!(0));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_redeem_specific_then_exhausted() {
        let mut ledger = PointsLedger {
            total_points: dec!(10),
            redeemed_points: dec!(2),
            balance_points: dec!(8),
        };

        ledger.redeem(dec!(8)).unwrap();
        assert_eq!(
            ledger,
            PointsLedger {
                total_points: dec!(10),
                redeemed_points: dec!(10),
                balance_points: dec!(0),
            }
        );

        let err = ledger.redeem(dec!(1)).unwrap_err();
        match err {
            ReferralError::InvalidRedemption {
                requested,
                available,
            } => {
                assert_eq!(requested, dec!(1));
                assert_eq!(available, dec!(0));
            }
            other => panic!("expected InvalidRedemption, got {other}"),
        }
    }

    #[test]
    fn test_redeem_rejects_negative() {
        let mut ledger = PointsLedger::opened_with(dec!(5));
        let result = ledger.redeem(dec!(-1));

        assert!(matches!(
            result,
            Err(ReferralError::InvalidRedemption { .. })
        ));
        assert_eq!(ledger.balance_points, dec!(5));
    }

    #[test]
    fn test_redeem_zero_is_a_no_op() {
        let mut ledger = PointsLedger::opened_with(dec!(5));
        ledger.redeem(dec!(0)).unwrap();

        assert_eq!(ledger.balance_points, dec!(5));
        assert_eq!(ledger.redeemed_points, dec!(0));
    }

    #[test]
    fn test_update_decrease_applies_negative_delta() {
        // Bill amount drops from 2000 (2 points) to 500 (0 points)
        let mut ledger = PointsLedger {
            total_points: dec!(5),
            redeemed_points: dec!(1),
            balance_points: dec!(4),
        };

        let old_points = points_for_amount(Money::new(dec!(2000)));
        let new_points = points_for_amount(Money::new(dec!(500)));
        ledger.apply_delta(new_points - old_points);

        assert_eq!(
            ledger,
            PointsLedger {
                total_points: dec!(3),
                redeemed_points: dec!(1),
                balance_points: dec!(2),
            }
        );
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_delete_after_redemption_goes_negative() {
        // Deleting a 4-point bill when only 2 points remain unredeemed
        // drives the balance negative; the shortfall stays visible.
        let mut ledger = PointsLedger {
            total_points: dec!(4),
            redeemed_points: dec!(2),
            balance_points: dec!(2),
        };

        ledger.apply_delta(dec!(-4));

        assert_eq!(ledger.total_points, dec!(0));
        assert_eq!(ledger.redeemed_points, dec!(2));
        assert_eq!(ledger.balance_points, dec!(-2));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_create_then_delete_round_trips() {
        let points = points_for_amount(Money::new(dec!(2500)));
        let mut ledger = PointsLedger::opened_with(points);
        ledger.apply_delta(-points);

        assert_eq!(ledger, PointsLedger::opened_with(dec!(0)));
    }

    #[test]
    fn test_redeem_all_zeroes_balance() {
        let mut ledger = PointsLedger {
            total_points: dec!(7),
            redeemed_points: dec!(3),
            balance_points: dec!(4),
        };

        ledger.redeem_all();

        assert_eq!(ledger.redeemed_points, dec!(7));
        assert_eq!(ledger.balance_points, dec!(0));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_redeem_all_absorbs_negative_balance() {
        let mut ledger = PointsLedger {
            total_points: dec!(0),
            redeemed_points: dec!(2),
            balance_points: dec!(-2),
        };

        ledger.redeem_all();

        assert_eq!(ledger.redeemed_points, dec!(0));
        assert_eq!(ledger.balance_points, dec!(0));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut ledger = PointsLedger {
            total_points: dec!(12),
            redeemed_points: dec!(5),
            balance_points: dec!(7),
        };

        ledger.reset();

        assert_eq!(ledger, PointsLedger::opened_with(dec!(0)));
    }
}

// ============================================================================
// Bill Tests
// ============================================================================

mod bill_tests {
    use super::*;

    #[test]
    fn test_identical_submissions_are_distinct_bills() {
        // Submitting the same data twice creates two bills that both
        // accrue; creation is not idempotent.
        let wireman_id = WiremanId::new();
        let first = Bill::new(
            wireman_id,
            "Acme Wiring",
            Money::new(dec!(2500)),
            bill_date(),
            PaymentStatus::Paid,
        );
        let second = Bill::new(
            wireman_id,
            "Acme Wiring",
            Money::new(dec!(2500)),
            bill_date(),
            PaymentStatus::Paid,
        );

        assert_ne!(first.id, second.id);
        assert_eq!(first.points_earned, second.points_earned);
        assert_eq!(first.points_earned + second.points_earned, dec!(4));
    }

    #[test]
    fn test_snapshot_matches_accrual_rule() {
        let bill = Bill::new(
            WiremanId::new(),
            "Sharma Electricals",
            Money::new(dec!(1999.99)),
            bill_date(),
            PaymentStatus::PartiallyPaid,
        );

        assert_eq!(bill.points_earned, points_for_amount(bill.amount));
        assert_eq!(bill.points_earned, dec!(1));
    }

    #[test]
    fn test_payment_status_serde_uses_stored_strings() {
        let json = serde_json::to_string(&PaymentStatus::PartiallyPaid).unwrap();
        assert_eq!(json, "\"Partially Paid\"");

        let parsed: PaymentStatus = serde_json::from_str("\"Not paid\"").unwrap();
        assert_eq!(parsed, PaymentStatus::NotPaid);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_bill_input_passes() {
        assert!(validate_bill_input("Acme Wiring", Money::new(dec!(2500))).is_ok());
    }

    #[test]
    fn test_empty_client_name_rejected() {
        let err = validate_bill_input("", Money::new(dec!(2500))).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Client name is required.");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = validate_bill_input("Acme Wiring", Money::zero());
        assert!(matches!(result, Err(ReferralError::Validation(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = validate_bill_input("Acme Wiring", Money::new(dec!(-100)));
        assert!(matches!(result, Err(ReferralError::Validation(_))));
    }

    #[test]
    fn test_wireman_registration_requires_name() {
        assert!(validate_wireman_input("Ravi Kumar").is_ok());
        assert!(validate_wireman_input(" \t ").is_err());
    }

    #[test]
    fn test_wireman_entity_carries_registration_date() {
        let wireman = Wireman::new("Ravi Kumar", "ravi@example.com", bill_date());
        assert_eq!(wireman.date_registered, bill_date());
        assert_eq!(wireman.name, "Ravi Kumar");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum LedgerOp {
        Accrue(Decimal),
        Delta(Decimal),
        Redeem(Decimal),
        RedeemAll,
        Reset,
    }

    fn points_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..10_000).prop_map(|n| Decimal::new(n, 0))
    }

    fn ledger_op_strategy() -> impl Strategy<Value = LedgerOp> {
        prop_oneof![
            points_strategy().prop_map(LedgerOp::Accrue),
            (-5_000i64..5_000).prop_map(|n| LedgerOp::Delta(Decimal::new(n, 0))),
            points_strategy().prop_map(LedgerOp::Redeem),
            Just(LedgerOp::RedeemAll),
            Just(LedgerOp::Reset),
        ]
    }

    proptest! {
        /// balance == total - redeemed holds after any operation sequence,
        /// whether or not individual redemptions were admitted.
        #[test]
        fn ledger_invariant_survives_any_sequence(
            initial in points_strategy(),
            ops in prop::collection::vec(ledger_op_strategy(), 0..40)
        ) {
            let mut ledger = PointsLedger::opened_with(initial);

            for op in ops {
                match op {
                    LedgerOp::Accrue(p) => ledger.accrue(p),
                    LedgerOp::Delta(d) => ledger.apply_delta(d),
                    LedgerOp::Redeem(p) => {
                        let _ = ledger.redeem(p);
                    }
                    LedgerOp::RedeemAll => ledger.redeem_all(),
                    LedgerOp::Reset => ledger.reset(),
                }
                prop_assert!(ledger.is_consistent());
            }
        }

        /// An admitted redemption moves exactly the requested points from
        /// balance to redeemed.
        #[test]
        fn redeem_moves_points_exactly(
            initial in points_strategy(),
            requested in points_strategy()
        ) {
            let mut ledger = PointsLedger::opened_with(initial);
            let before = ledger;

            match ledger.redeem(requested) {
                Ok(()) => {
                    prop_assert!(requested <= before.balance_points);
                    prop_assert_eq!(ledger.redeemed_points, before.redeemed_points + requested);
                    prop_assert_eq!(ledger.balance_points, before.balance_points - requested);
                    prop_assert_eq!(ledger.total_points, before.total_points);
                }
                Err(_) => {
                    prop_assert!(requested > before.balance_points);
                    prop_assert_eq!(ledger, before);
                }
            }
        }

        /// floor(amount / 1000): the earned points bracket the amount.
        #[test]
        fn accrual_floors_against_the_unit(minor in 0i64..1_000_000_000i64) {
            let amount = Money::from_minor(minor);
            let points = points_for_amount(amount);

            prop_assert!(points * ACCRUAL_UNIT <= amount.amount());
            prop_assert!(amount.amount() < (points + dec!(1)) * ACCRUAL_UNIT);
        }

        /// Accrual is monotone in the amount.
        #[test]
        fn accrual_is_monotone(a in 0i64..1_000_000_000i64, b in 0i64..1_000_000_000i64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            prop_assert!(
                points_for_amount(Money::from_minor(lo))
                    <= points_for_amount(Money::from_minor(hi))
            );
        }
    }
}
