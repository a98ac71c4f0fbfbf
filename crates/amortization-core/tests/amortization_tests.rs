use amortization_core::amortization::{
    build_schedule, calculate_loan, compute_monthly_payment, schedule, summarize, LoanRequest,
    LoanResult, PaymentMethod,
};
use amortization_core::rounding::{format_currency, round_currency};
use amortization_core::{AmortizationError, TermUnit};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn loan(amount: Decimal, rate: Decimal, term: i64, unit: TermUnit, show: bool) -> LoanRequest {
    LoanRequest {
        loan_amount: amount,
        interest_rate: rate,
        loan_term: term,
        term_unit: unit,
        show_schedule: show,
    }
}

/// A spread of realistic loans used by the property-style checks below.
fn sample_loans() -> Vec<(Decimal, Decimal, u32)> {
    vec![
        (dec!(100000), dec!(6.0), 12),
        (dec!(10000), dec!(12), 12),
        (dec!(250000), dec!(3.875), 360),
        (dec!(18500), dec!(7.49), 72),
        (dec!(1_000_000), dec!(0.5), 240),
        (dec!(999.99), dec!(29.99), 18),
        (dec!(50000), dec!(0), 120),
    ]
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_one_year_loan_at_six_percent() {
    let out = calculate_loan(&loan(dec!(100000), dec!(6.0), 12, TermUnit::Months, false)).unwrap();
    assert_eq!(out.result.monthly_rate, dec!(0.005));
    assert_eq!(round_currency(out.result.summary.monthly_payment), dec!(8606.64));
    assert_eq!(format_currency(out.result.summary.monthly_payment), "8,606.64");
}

#[test]
fn test_zero_principal() {
    let out = calculate_loan(&loan(dec!(0), dec!(5), 36, TermUnit::Months, true)).unwrap();
    let r = &out.result;
    assert!(r.summary.monthly_payment.is_zero());
    assert!(r.summary.total_interest.is_zero());
    assert!(r
        .schedule
        .as_ref()
        .unwrap()
        .iter()
        .all(|e| e.principal_paid.is_zero() && e.remaining_balance.is_zero()));
    assert!(out.warnings.iter().any(|w| w.contains("zero")));
}

#[test]
fn test_zero_term_aborts_before_computation() {
    let err = calculate_loan(&loan(dec!(100000), dec!(6), 0, TermUnit::Months, true)).unwrap_err();
    assert!(matches!(err, AmortizationError::InvalidTerm { term: 0 }));
}

#[test]
fn test_invalid_amount_messages() {
    let err = calculate_loan(&loan(dec!(-0.01), dec!(6), 12, TermUnit::Months, false)).unwrap_err();
    assert!(err.to_string().starts_with("Invalid loan amount!"));

    let err = calculate_loan(&loan(
        dec!(1_000_000_000_000_000_001),
        dec!(6),
        12,
        TermUnit::Months,
        false,
    ))
    .unwrap_err();
    assert!(matches!(err, AmortizationError::InvalidAmount { .. }));
}

#[test]
fn test_zero_rate_ten_years() {
    let out = calculate_loan(&loan(dec!(50000), dec!(0), 10, TermUnit::Years, true)).unwrap();
    let r = &out.result;
    assert_eq!(r.term_months, 120);
    assert_eq!(r.payment_method, PaymentMethod::StraightLine);
    assert_eq!(round_currency(r.summary.monthly_payment), dec!(416.67));
    assert_eq!(round_currency(r.summary.total_cost), dec!(50000.00));
    assert!(r.summary.total_interest.abs() < dec!(0.000001));

    let entries = r.schedule.as_ref().unwrap();
    assert_eq!(entries.len(), 120);
    assert!(entries.iter().all(|e| e.interest_paid.is_zero()));
    assert!(entries[119].remaining_balance.abs() < dec!(0.000001));
}

#[test]
fn test_twelve_percent_schedule_first_and_last_entries() {
    let out = calculate_loan(&loan(dec!(10000), dec!(12), 12, TermUnit::Months, true)).unwrap();
    let entries = out.result.schedule.as_ref().unwrap();

    let first = entries[0].rounded();
    assert_eq!(first.payment_number, 1);
    assert_eq!(first.interest_paid, dec!(100.00));
    assert_eq!(round_currency(out.result.summary.monthly_payment), dec!(888.49));

    let last = entries[11].rounded();
    assert_eq!(last.payment_number, 12);
    assert_eq!(last.remaining_balance, dec!(0.00));
}

#[test]
fn test_years_unit_matches_equivalent_months() {
    let by_years = calculate_loan(&loan(dec!(200000), dec!(6.5), 30, TermUnit::Years, false))
        .unwrap()
        .result;
    let by_months = calculate_loan(&loan(dec!(200000), dec!(6.5), 360, TermUnit::Months, false))
        .unwrap()
        .result;
    assert_eq!(by_years.summary, by_months.summary);
    assert_eq!(round_currency(by_years.summary.monthly_payment), dec!(1264.14));
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_totals_identities_hold_exactly() {
    for (principal, rate, n) in sample_loans() {
        let pmt = compute_monthly_payment(principal, rate, n).unwrap();
        let r = LoanResult::new(principal, pmt, n).unwrap();
        assert_eq!(r.total_cost, pmt * Decimal::from(n));
        assert_eq!(r.total_interest, r.total_cost - principal);
    }
}

#[test]
fn test_principal_paid_sums_to_principal() {
    for (principal, rate, n) in sample_loans() {
        let pmt = compute_monthly_payment(principal, rate, n).unwrap();
        let entries = build_schedule(principal, rate, n, pmt);
        let totals = summarize(&entries);
        assert!(
            (totals.total_principal - principal).abs() < dec!(0.01),
            "principal {principal} at {rate}% over {n}: repaid {}",
            totals.total_principal
        );
    }
}

#[test]
fn test_balance_non_negative_and_non_increasing() {
    for (principal, rate, n) in sample_loans() {
        let pmt = compute_monthly_payment(principal, rate, n).unwrap();
        let mut previous = principal;
        for e in schedule(principal, rate, n, pmt) {
            assert!(
                e.remaining_balance <= previous,
                "balance rose at payment {} for {principal} at {rate}%",
                e.payment_number
            );
            assert!(
                round_currency(e.remaining_balance) >= Decimal::ZERO,
                "balance negative at payment {} for {principal} at {rate}%",
                e.payment_number
            );
            previous = e.remaining_balance;
        }
    }
}

#[test]
fn test_payment_numbers_sequential_and_length_matches_term() {
    for (principal, rate, n) in sample_loans() {
        let pmt = compute_monthly_payment(principal, rate, n).unwrap();
        let numbers: Vec<u32> = schedule(principal, rate, n, pmt)
            .map(|e| e.payment_number)
            .collect();
        assert_eq!(numbers, (1..=n).collect::<Vec<u32>>());
    }
}

#[test]
fn test_schedule_interest_matches_loan_total_interest() {
    let out = calculate_loan(&loan(dec!(250000), dec!(3.875), 30, TermUnit::Years, true)).unwrap();
    let r = &out.result;
    let totals = r.schedule_totals.as_ref().unwrap();
    assert_eq!(totals.payments, 360);
    assert!((totals.total_interest - r.summary.total_interest).abs() < dec!(0.01));
}

#[test]
fn test_calculation_is_pure() {
    let req = loan(dec!(18500), dec!(7.49), 6, TermUnit::Years, true);
    let a = calculate_loan(&req).unwrap().result;
    let b = calculate_loan(&req).unwrap().result;
    assert_eq!(a, b);
}

#[test]
fn test_request_deserializes_with_defaults() {
    let req: LoanRequest = serde_json::from_str(
        r#"{"loan_amount": "100000", "interest_rate": "6.0", "loan_term": 12}"#,
    )
    .unwrap();
    assert_eq!(req.term_unit, TermUnit::Months);
    assert!(!req.show_schedule);

    let req: LoanRequest = serde_json::from_str(
        r#"{"loan_amount": 50000, "interest_rate": 0, "loan_term": 10, "term_unit": "years", "show_schedule": true}"#,
    )
    .unwrap();
    assert_eq!(req.term_unit, TermUnit::Years);
    assert!(req.show_schedule);
}
