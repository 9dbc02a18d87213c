use super::*;

fn ids(bookings: &[Booking]) -> Vec<String> {
    bookings.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn test_batch_shift_commits_all() {
    let manager = create_test_manager();
    let a = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let b = book_one(&manager, date(2024, 1, 2), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);

    let global = GlobalChange {
        date_change: Some(DateChange::Shift { days: 7 }),
        ..GlobalChange::default()
    };
    manager
        .batch_amend(&ids(&[a.clone(), b.clone()]), &global, &HashMap::new())
        .unwrap();

    let moved = manager.store().bookings();
    assert_eq!(moved.iter().find(|x| x.id == a.id).unwrap().date, date(2024, 1, 8));
    assert_eq!(moved.iter().find(|x| x.id == b.id).unwrap().date, date(2024, 1, 9));
}

#[test]
fn test_batch_amend_is_atomic_on_conflict() {
    let manager = create_test_manager();
    let blocker = book_one(&manager, date(2024, 2, 1), "Court 1", 10.0, 2.0, PaymentStatus::Paid);
    let a = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let b = book_one(&manager, date(2024, 1, 1), "Court 2", 10.0, 1.0, PaymentStatus::Unpaid);

    let before = manager.store().snapshot();

    // Fixed date lands booking `a` inside the blocker's interval; `b` is clean.
    let global = GlobalChange {
        date_change: Some(DateChange::Fixed { date: date(2024, 2, 1) }),
        ..GlobalChange::default()
    };
    let err = manager
        .batch_amend(&ids(&[a, b]), &global, &HashMap::new())
        .unwrap_err();

    assert_eq!(err.conflicting_booking().unwrap().id, blocker.id);
    // Neither the clean nor the conflicting amendment was applied.
    assert_eq!(manager.store().snapshot(), before);
}

#[test]
fn test_batch_pick_dates_end_to_end() {
    let manager = create_test_manager();
    let a = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let b = book_one(&manager, date(2024, 1, 2), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let c = book_one(&manager, date(2024, 1, 3), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);

    let global = GlobalChange {
        date_change: Some(DateChange::Pick {
            dates: vec![date(2024, 2, 5), date(2024, 2, 1), date(2024, 2, 10)],
        }),
        ..GlobalChange::default()
    };
    manager
        .batch_amend(&ids(&[a.clone(), b.clone(), c.clone()]), &global, &HashMap::new())
        .unwrap();

    let moved = manager.store().bookings();
    assert_eq!(moved.iter().find(|x| x.id == a.id).unwrap().date, date(2024, 2, 1));
    assert_eq!(moved.iter().find(|x| x.id == b.id).unwrap().date, date(2024, 2, 5));
    assert_eq!(moved.iter().find(|x| x.id == c.id).unwrap().date, date(2024, 2, 10));
}

#[test]
fn test_batch_pick_mismatch_leaves_store_unchanged() {
    let manager = create_test_manager();
    let a = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let b = book_one(&manager, date(2024, 1, 2), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let before = manager.store().snapshot();

    let global = GlobalChange {
        date_change: Some(DateChange::Pick { dates: vec![date(2024, 2, 1)] }),
        ..GlobalChange::default()
    };
    let err = manager
        .batch_amend(&ids(&[a, b]), &global, &HashMap::new())
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition(_)));
    assert_eq!(manager.store().snapshot(), before);
}

#[test]
fn test_batch_court_and_time_override() {
    let manager = create_test_manager();
    let a = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let b = book_one(&manager, date(2024, 1, 2), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);

    let global = GlobalChange {
        court_id: Some("Court 4".to_string()),
        start_time: Some(18.0),
        ..GlobalChange::default()
    };
    let mut overrides = HashMap::new();
    overrides.insert(
        b.id.clone(),
        FieldChanges {
            start_time: Some(20.0),
            ..FieldChanges::default()
        },
    );
    manager.batch_amend(&ids(&[a.clone(), b.clone()]), &global, &overrides).unwrap();

    let moved = manager.store().bookings();
    let a2 = moved.iter().find(|x| x.id == a.id).unwrap();
    let b2 = moved.iter().find(|x| x.id == b.id).unwrap();
    assert_eq!(a2.court_id, "Court 4");
    assert_eq!(a2.start_time, 18.0);
    assert_eq!(b2.court_id, "Court 4");
    assert_eq!(b2.start_time, 20.0); // per-id override wins
}

#[test]
fn test_batch_refund_shares_one_voucher_and_skips_ineligible() {
    let manager = create_test_manager();
    let paid = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Paid);
    let partial = book_one(&manager, date(2024, 1, 1), "Court 2", 10.0, 2.0, PaymentStatus::Partial);
    let unpaid = book_one(&manager, date(2024, 1, 1), "Court 3", 10.0, 1.0, PaymentStatus::Unpaid);

    let count = manager
        .batch_refund(&ids(&[paid.clone(), partial.clone(), unpaid.clone()]))
        .unwrap();
    assert_eq!(count, 2);

    let after = manager.store().bookings();
    let paid2 = after.iter().find(|x| x.id == paid.id).unwrap();
    let partial2 = after.iter().find(|x| x.id == partial.id).unwrap();
    let unpaid2 = after.iter().find(|x| x.id == unpaid.id).unwrap();

    assert_eq!(paid2.payment_status, PaymentStatus::Refunded);
    assert_eq!(partial2.payment_status, PaymentStatus::Refunded);
    assert_eq!(unpaid2.payment_status, PaymentStatus::Unpaid);
    assert_eq!(paid2.voucher_number.as_deref(), Some("PV-5001"));
    assert_eq!(partial2.voucher_number, paid2.voucher_number);
    assert!(unpaid2.voucher_number.is_none());
}

#[test]
fn test_batch_refund_with_no_eligible_fails_explicitly() {
    let manager = create_test_manager();
    let unpaid = book_one(&manager, date(2024, 1, 1), "Court 1", 10.0, 1.0, PaymentStatus::Unpaid);
    let err = manager.batch_refund(&ids(&[unpaid])).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition(_)));
}
