//! Record construction, validation, field access and flattening.

use mws_datatypes::{
    DatatypeError, FeesEstimateRequest, FieldRef, IdType, MoneyType, ParamValue, Points,
    PriceToEstimateFees, Record, Value,
};

fn usd(amount: f64) -> MoneyType {
    MoneyType::new(Some(amount), Some("USD")).unwrap()
}

// ---------------------------------------------------------------------------
// MoneyType
// ---------------------------------------------------------------------------

#[test]
fn money_type_flattens_both_fields() {
    let params = usd(10.0).flatten("");
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("Amount"), Some(&ParamValue::Decimal(10.0)));
    assert_eq!(params.get("CurrencyCode").unwrap(), &"USD");
}

#[test]
fn money_type_accepts_every_listed_currency() {
    for code in ["CAD", "EUR", "GBP", "INR", "JPY", "MXN", "RMB", "USD"] {
        let money = MoneyType::new(Some(1.0), Some(code)).unwrap();
        assert_eq!(money.currency_code(), Some(code));
    }
}

#[test]
fn money_type_rejects_unknown_currency() {
    let err = MoneyType::new(Some(1.0), Some("AUD")).unwrap_err();
    match err {
        DatatypeError::InvalidValue { field, reason } => {
            assert_eq!(field, "currency_code");
            assert!(reason.contains("CAD, EUR, GBP, INR, JPY, MXN, RMB, USD"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn money_type_currency_is_case_sensitive() {
    assert!(MoneyType::new(None, Some("usd")).is_err());
}

#[test]
fn money_type_null_fields_are_skipped() {
    let amount_only = MoneyType::new(Some(3.5), None).unwrap().flatten("");
    assert_eq!(amount_only.keys().collect::<Vec<_>>(), vec!["Amount"]);

    let empty = MoneyType::new(None, None).unwrap().flatten("Price");
    assert!(empty.is_empty());
}

// ---------------------------------------------------------------------------
// Field access
// ---------------------------------------------------------------------------

#[test]
fn get_returns_declared_field_values() {
    let money = usd(4.0);
    assert_eq!(
        money.get("currency_code").unwrap().as_scalar(),
        Some(&ParamValue::from("USD"))
    );
    assert!(money.get("amount").unwrap().as_scalar().is_some());
}

#[test]
fn get_undeclared_field_fails() {
    let err = usd(4.0).get("currency").unwrap_err();
    assert_eq!(
        err,
        DatatypeError::UndeclaredField {
            record: "MoneyType",
            field: "currency".to_string()
        }
    );
}

#[test]
fn entries_follow_declaration_order() {
    let price = PriceToEstimateFees::new(Some(usd(1.0)), None, None);
    let names: Vec<_> = price.entries().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["listing_price", "shipping", "points"]);
    assert_eq!(price.field_count(), 3);

    let entries = price.entries();
    assert!(entries[0].1.as_record().is_some());
    assert!(entries[1].1.is_null());
}

#[test]
fn field_count_matches_declared_fields() {
    let request = FeesEstimateRequest::builder()
        .id_type("ASIN")
        .id_value("B0001")
        .build()
        .unwrap();
    assert_eq!(request.field_count(), 6);
    assert_eq!(request.entries().len(), 6);
    assert_eq!(Points::default().field_count(), 2);
    assert_eq!(MoneyType::default().field_count(), 2);
}

// ---------------------------------------------------------------------------
// set / from_fields
// ---------------------------------------------------------------------------

#[test]
fn set_undeclared_field_fails() {
    let mut money = usd(1.0);
    let err = money.set("discount", Value::from(1.0)).unwrap_err();
    assert!(matches!(err, DatatypeError::UndeclaredField { .. }));
}

#[test]
fn set_validates_like_the_constructor() {
    let mut money = usd(1.0);
    assert!(money.set("currency_code", Value::from("XYZ")).is_err());
    assert_eq!(money.currency_code(), Some("USD"));

    money.set("currency_code", Value::from("JPY")).unwrap();
    assert_eq!(money.currency_code(), Some("JPY"));
}

#[test]
fn raw_number_for_monetary_value_is_invalid_type() {
    let err = Points::from_fields([
        ("points_number", Value::from(100)),
        ("points_monetary_value", Value::from(5.0)),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        DatatypeError::InvalidType {
            field: "points_monetary_value",
            expected: "a MoneyType"
        }
    );
}

#[test]
fn price_fields_require_their_record_types() {
    let err = PriceToEstimateFees::from_fields([("shipping", Value::from("5 USD"))]).unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidType { field: "shipping", .. }));

    let err = PriceToEstimateFees::from_fields([("points", Value::from(usd(1.0)))]).unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidType { field: "points", .. }));

    let price = PriceToEstimateFees::from_fields([
        ("listing_price", Value::from(usd(9.0))),
        ("points", Value::from(Points::new(Some(10.0), None))),
    ])
    .unwrap();
    assert!(price.points().is_some());
    assert!(price.shipping().is_none());
}

// ---------------------------------------------------------------------------
// Nested flattening
// ---------------------------------------------------------------------------

#[test]
fn points_flatten_nested_monetary_value() {
    let points = Points::new(
        Some(100.0),
        Some(MoneyType::new(Some(1000.0), Some("JPY")).unwrap()),
    );
    let params = points.flatten("Points");
    assert_eq!(params.get("Points.PointsNumber"), Some(&ParamValue::Decimal(100.0)));
    assert_eq!(
        params.get("Points.PointsMonetaryValue.CurrencyCode").unwrap(),
        &"JPY"
    );
    assert_eq!(params.len(), 3);
}

#[test]
fn price_to_estimate_fees_emits_points() {
    let price = PriceToEstimateFees::new(
        Some(usd(20.0)),
        Some(usd(4.99)),
        Some(Points::new(Some(5.0), None)),
    );
    let params = price.flatten("");
    let keys: Vec<_> = params.keys().collect();
    assert_eq!(
        keys,
        vec![
            "ListingPrice.Amount",
            "ListingPrice.CurrencyCode",
            "Points.PointsNumber",
            "Shipping.Amount",
            "Shipping.CurrencyCode",
        ]
    );
    assert_eq!(params.get("Shipping.Amount"), Some(&ParamValue::Decimal(4.99)));
}

#[test]
fn nested_request_composes_dotted_keys() {
    let request = FeesEstimateRequest::builder()
        .marketplace("US")
        .id_type("ASIN")
        .id_value("B00TEST")
        .price_to_estimate_fees(PriceToEstimateFees::new(Some(usd(10.0)), None, None))
        .identifier("request-1")
        .build()
        .unwrap();
    let params = request.flatten("");

    assert_eq!(
        params.get("PriceToEstimateFees.ListingPrice.Amount"),
        Some(&ParamValue::Decimal(10.0))
    );
    assert_eq!(
        params
            .get("PriceToEstimateFees.ListingPrice.CurrencyCode")
            .unwrap(),
        &"USD"
    );
    assert_eq!(params.get("MarketplaceId").unwrap(), &"ATVPDKIKX0DER");
    assert_eq!(params.get("IdType").unwrap(), &"ASIN");
    assert_eq!(params.get("IdValue").unwrap(), &"B00TEST");
    assert_eq!(params.get("Identifier").unwrap(), &"request-1");
    assert!(!params.contains_key("IsAmazonFulfilled"));
    assert_eq!(params.len(), 6);
}

#[test]
fn prefix_with_trailing_dot_is_not_doubled() {
    let with_dot = usd(1.0).flatten("Foo.");
    let without_dot = usd(1.0).flatten("Foo");
    assert_eq!(with_dot, without_dot);
    assert!(with_dot.contains_key("Foo.Amount"));
}

#[test]
fn flatten_is_repeatable() {
    let request = FeesEstimateRequest::builder()
        .id_type("SellerSKU")
        .id_value("SKU-1")
        .is_amazon_fulfilled(false)
        .build()
        .unwrap();
    assert_eq!(request.flatten("X"), request.flatten("X"));
}

// ---------------------------------------------------------------------------
// FeesEstimateRequest validation
// ---------------------------------------------------------------------------

#[test]
fn invalid_id_type_fails_first() {
    let err = FeesEstimateRequest::builder()
        .id_type("Invalid")
        .id_value("X")
        .build()
        .unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "id_type", .. }));

    // id_type is checked even when id_value is also missing.
    let err = FeesEstimateRequest::builder()
        .id_type("UPC")
        .build()
        .unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "id_type", .. }));
}

#[test]
fn missing_id_type_fails() {
    let err = FeesEstimateRequest::builder().id_value("X").build().unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "id_type", .. }));
}

#[test]
fn missing_or_empty_id_value_fails() {
    let err = FeesEstimateRequest::builder().id_type("ASIN").build().unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "id_value", .. }));

    let err = FeesEstimateRequest::builder()
        .id_type("ASIN")
        .id_value("")
        .build()
        .unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "id_value", .. }));
}

#[test]
fn is_amazon_fulfilled_normalizes_to_strings() {
    let base = || FeesEstimateRequest::builder().id_type("ASIN").id_value("B1");

    let yes = base().is_amazon_fulfilled(true).build().unwrap();
    assert_eq!(yes.is_amazon_fulfilled(), Some("true"));
    assert_eq!(yes.flatten("").get("IsAmazonFulfilled").unwrap(), &"true");

    let no = base().is_amazon_fulfilled(false).build().unwrap();
    assert_eq!(no.flatten("").get("IsAmazonFulfilled").unwrap(), &"false");

    let unset = base().build().unwrap();
    assert_eq!(unset.is_amazon_fulfilled(), None);
    assert!(!unset.flatten("").contains_key("IsAmazonFulfilled"));
}

#[test]
fn unknown_marketplace_passes_through() {
    let request = FeesEstimateRequest::builder()
        .marketplace("A1PA6795UKMFR9")
        .id_type("ASIN")
        .id_value("B1")
        .build()
        .unwrap();
    assert_eq!(request.marketplace_id(), Some("A1PA6795UKMFR9"));
    assert_eq!(request.id_type(), IdType::Asin);
}

#[test]
fn from_fields_uses_truthiness_for_fulfillment() {
    let request = FeesEstimateRequest::from_fields([
        ("marketplace_id", Value::from("JP")),
        ("id_type", Value::from("SellerSKU")),
        ("id_value", Value::from("SKU-9")),
        ("is_amazon_fulfilled", Value::from(1)),
    ])
    .unwrap();
    assert_eq!(request.marketplace_id(), Some("A1VC38T7YXB528"));
    assert_eq!(request.id_type(), IdType::SellerSku);
    assert_eq!(request.is_amazon_fulfilled(), Some("true"));

    let request = FeesEstimateRequest::from_fields([
        ("id_type", Value::from("ASIN")),
        ("id_value", Value::from("B1")),
        ("is_amazon_fulfilled", Value::from("")),
    ])
    .unwrap();
    assert_eq!(request.is_amazon_fulfilled(), Some("false"));
}

#[test]
fn from_fields_checks_id_type_before_other_fields() {
    let err = FeesEstimateRequest::from_fields([
        ("price_to_estimate_fees", Value::from(7.5)),
        ("id_type", Value::from("Invalid")),
        ("id_value", Value::from("X")),
    ])
    .unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "id_type", .. }));
}

#[test]
fn from_fields_rejects_wrong_price_type() {
    let err = FeesEstimateRequest::from_fields([
        ("id_type", Value::from("ASIN")),
        ("id_value", Value::from("B1")),
        ("price_to_estimate_fees", Value::from(usd(1.0))),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        DatatypeError::InvalidType { field: "price_to_estimate_fees", .. }
    ));
}

#[test]
fn from_fields_rejects_undeclared_names() {
    let err = FeesEstimateRequest::from_fields([
        ("id_type", Value::from("ASIN")),
        ("id_value", Value::from("B1")),
        ("marketplace", Value::from("US")),
    ])
    .unwrap_err();
    assert!(matches!(err, DatatypeError::UndeclaredField { .. }));
}

#[test]
fn id_type_scalar_reads_back_as_wire_string() {
    let request = FeesEstimateRequest::builder()
        .id_type("SellerSKU")
        .id_value("S")
        .build()
        .unwrap();
    match request.get("id_type").unwrap() {
        FieldRef::Scalar(v) => assert_eq!(v, "SellerSKU"),
        other => panic!("unexpected field: {other:?}"),
    }
}

#[test]
fn records_serialize_with_wire_names() {
    let request = FeesEstimateRequest::builder()
        .id_type("ASIN")
        .id_value("B1")
        .price_to_estimate_fees(PriceToEstimateFees::new(Some(usd(2.0)), None, None))
        .is_amazon_fulfilled(true)
        .build()
        .unwrap();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "IdType": "ASIN",
            "IdValue": "B1",
            "PriceToEstimateFees": {
                "ListingPrice": {"Amount": 2.0, "CurrencyCode": "USD"}
            },
            "IsAmazonFulfilled": "true"
        })
    );
}

// ---------------------------------------------------------------------------
// Falsy id_value, marketplace re-resolution, number precision
// ---------------------------------------------------------------------------

#[test]
fn falsy_id_value_is_missing() {
    for falsy in [Value::from(0), Value::from(0.0), Value::from(false), Value::from("")] {
        let err = FeesEstimateRequest::from_fields([
            ("id_type", Value::from("ASIN")),
            ("id_value", falsy),
        ])
        .unwrap_err();
        assert!(matches!(err, DatatypeError::InvalidValue { field: "id_value", .. }));
    }

    let mut request = FeesEstimateRequest::from_fields([
        ("id_type", Value::from("SellerSKU")),
        ("id_value", Value::from(42)),
    ])
    .unwrap();
    assert_eq!(request.id_value(), "42");
    assert!(request.set("id_value", Value::from(0)).is_err());
    assert_eq!(request.id_value(), "42");
}

#[test]
fn set_marketplace_uses_builtin_table() {
    let mut table = std::collections::HashMap::new();
    table.insert("US".to_string(), "CUSTOM-US".to_string());
    let mut request = FeesEstimateRequest::builder()
        .marketplace("US")
        .id_type("ASIN")
        .id_value("B1")
        .build_with(&table)
        .unwrap();
    assert_eq!(request.marketplace_id(), Some("CUSTOM-US"));

    request.set("marketplace_id", Value::from("US")).unwrap();
    assert_eq!(request.marketplace_id(), Some("ATVPDKIKX0DER"));
}

#[test]
fn integer_amount_beyond_f64_precision_is_rejected() {
    let err = MoneyType::from_fields([("amount", Value::from(9007199254740993i64))]).unwrap_err();
    assert!(matches!(err, DatatypeError::InvalidValue { field: "amount", .. }));

    let money = MoneyType::from_fields([("amount", Value::from(1500))]).unwrap();
    assert_eq!(money.flatten("").get("Amount"), Some(&ParamValue::Decimal(1500.0)));
}

// ---------------------------------------------------------------------------
// Thread safety
// ---------------------------------------------------------------------------

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<FieldRef<'static>>();
    assert_send_sync::<&'static dyn Record>();
    assert_send_sync::<Value>();
    assert_send_sync::<mws_datatypes::Params>();
    assert_send_sync::<MoneyType>();
    assert_send_sync::<Points>();
    assert_send_sync::<PriceToEstimateFees>();
    assert_send_sync::<FeesEstimateRequest>();
    assert_send_sync::<DatatypeError>();
}

#[test]
fn flatten_across_threads() {
    let request = FeesEstimateRequest::builder()
        .id_type("ASIN")
        .id_value("B1")
        .price_to_estimate_fees(PriceToEstimateFees::new(Some(usd(5.0)), None, None))
        .build()
        .unwrap();
    let expected = request.flatten("");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| request.flatten(""))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
