use spend_tracker::{Budget, Category, LedgerError, Record};

#[test]
fn balance_matches_recorded_amounts() {
    let mut food = Category::new("test");
    food.deposit(1000.0, "testing deposit");
    food.withdraw(600.0, "testing withdrawal");
    assert_eq!(food.balance(), 400.0);

    food.deposit(125.0, "testing deposit again");
    assert_eq!(food.balance(), 525.0);

    assert!(!food.withdraw(10_000.0, "refused"));
    let recorded: f64 = food.records().iter().map(|record| record.amount).sum();
    assert_eq!(food.balance(), recorded);
    assert_eq!(food.len(), 3);
}

#[test]
fn withdraw_records_negative_amount() {
    let mut food = Category::new("test");
    food.deposit(1000.0, "testing deposit");

    assert!(food.withdraw(500.0, "testing withdrawal"));
    assert_eq!(
        food.records(),
        &[
            Record::new(1000.0, "testing deposit"),
            Record::new(-500.0, "testing withdrawal"),
        ]
    );
    assert!(food.records()[1].is_withdrawal());
}

#[test]
fn transfer_is_all_or_nothing() {
    let mut food = Category::new("food");
    let mut car = Category::new("car");
    food.deposit(1000.0, "testing deposit");

    assert!(food.transfer(155.0, &mut car));
    let expected_food = vec![
        Record::new(1000.0, "testing deposit"),
        Record::new(-155.0, "Transfer to car"),
    ];
    let expected_car = vec![Record::new(155.0, "Transfer from food")];
    assert_eq!(food.records(), expected_food.as_slice());
    assert_eq!(car.records(), expected_car.as_slice());

    assert!(!food.transfer(1550.0, &mut car));
    assert_eq!(food.records(), expected_food.as_slice());
    assert_eq!(car.records(), expected_car.as_slice());
}

#[test]
fn round_trip_transfer_restores_balances() {
    let mut a = Category::new("a");
    let mut b = Category::new("b");
    a.deposit(80.0, "");
    b.deposit(20.0, "");

    assert!(a.transfer(30.0, &mut b));
    assert!(b.transfer(30.0, &mut a));
    assert_eq!(a.balance(), 80.0);
    assert_eq!(b.balance(), 20.0);
    assert_eq!(a.balance() + b.balance(), 100.0);
}

#[test]
fn try_transfer_reports_available_funds() {
    let mut a = Category::new("a");
    let mut b = Category::new("b");
    a.deposit(5.0, "");

    let err = a.try_transfer(6.0, &mut b).expect_err("should be refused");
    assert_eq!(
        err,
        LedgerError::InsufficientFunds {
            requested: 6.0,
            available: 5.0,
        }
    );
    assert_eq!(err.to_string(), "Insufficient funds: requested 6.00, available 5.00");
    assert!(b.is_empty());
}

#[test]
fn budget_chart_uses_insertion_order() {
    let mut budget = Budget::new();
    budget
        .add_category(Category::new("car"))
        .expect("add car")
        .deposit(7500.0, "");
    budget
        .add_category(Category::new("food"))
        .expect("add food")
        .deposit(2500.0, "");

    let chart = budget.spend_chart(&Default::default());
    assert_eq!(chart.lines().last(), Some("        d  "));
    assert_eq!(chart.lines().nth(13), Some("     c  f  "));
}

#[test]
fn budget_transfer_to_unknown_category_fails_cleanly() {
    let mut budget = Budget::new();
    budget
        .add_category(Category::new("Food"))
        .expect("add food")
        .deposit(10.0, "");

    let err = budget
        .transfer("Food", "Entertainment", 5.0)
        .expect_err("unknown destination");
    assert!(matches!(err, LedgerError::InvalidRef(_)));
    assert_eq!(budget.category("Food").map(Category::balance), Some(10.0));
}

#[test]
fn category_serializes_name_and_records() {
    let mut food = Category::new("food");
    food.deposit(12.5, "lunch money");
    let json = serde_json::to_value(&food).expect("serialize category");
    assert_eq!(json["name"], "food");
    assert_eq!(json["records"][0]["amount"], 12.5);
    assert_eq!(json["records"][0]["description"], "lunch money");
}
