use chargily_pay::chargily::{
    decode, decode_page, Address, Balance, CItems, Checkout, CheckoutItems, CheckoutParams,
    CreateCustomerParams, CreatePaymentLinkParams, CreateProductParams, Customer, Deleted,
    Discount, PItems, PItemsData, Params, PaymentLink, Product, ProductPrice, ProductPriceParams,
    UpdatePaymentLinkParams, UpdatePriceMetaDataParams, UpdateProductParams,
};
use chargily_pay::{
    CheckoutStatus, DiscountType, Error, FeesAllocation, ListParams, RetrieveAll, ValidationError,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::fmt::Debug;

fn checkout_json() -> Value {
    json!({
        "id": "chk_1",
        "entity": "checkout",
        "livemode": false,
        "amount": 5000,
        "currency": "dzd",
        "fees": 0,
        "fees_on_merchant": 0,
        "fees_on_customer": 0,
        "pass_fees_to_customer": null,
        "chargily_pay_fees_allocation": "customer",
        "status": "pending",
        "locale": "ar",
        "description": null,
        "metadata": null,
        "success_url": "https://x/ok",
        "failure_url": null,
        "webhook_endpoint": null,
        "payment_method": null,
        "invoice_id": null,
        "customer_id": "cus_1",
        "payment_link_id": null,
        "created_at": 1700000000,
        "updated_at": 1700000000,
        "shipping_address": null,
        "collect_shipping_address": 0,
        "discount": null,
        "amount_without_discount": null,
        "checkout_url": "https://pay.chargily.dz/test/checkouts/chk_1/pay"
    })
}

fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "entity": "customer",
        "livemode": false,
        "name": "Amina",
        "email": "amina@example.dz",
        "phone": null,
        "address": {"country": "DZ", "city": "Oran"},
        "metadata": [],
        "created_at": 1700000000,
        "updated_at": 1700000100
    })
}

fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

fn round_trip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let encoded = serde_json::to_vec(value).unwrap();
    let decoded: T = decode(&encoded).unwrap();
    assert_eq!(&decoded, value);
}

#[test]
fn test_decode_checkout_example() {
    let checkout: Checkout = decode(&bytes(&checkout_json())).unwrap();
    assert_eq!(checkout.amount, 5000);
    assert_eq!(checkout.currency, "dzd");
    assert_eq!(checkout.status, CheckoutStatus::Pending);
    assert_eq!(checkout.description, None);
    assert_eq!(checkout.metadata, None);
    assert_eq!(checkout.chargily_pay_fees_allocation, FeesAllocation::Customer);
    assert!(!checkout.collect_shipping_address);
    assert!(!checkout.is_paid());
    assert_eq!(checkout.created().unwrap().timestamp(), 1700000000);
}

#[test]
fn test_checkout_ignores_unknown_fields() {
    let mut raw = checkout_json();
    raw["brand_new_field"] = json!({"nested": [1, 2, 3]});
    let checkout: Checkout = decode(&bytes(&raw)).unwrap();
    assert_eq!(checkout.id, "chk_1");
}

#[test]
fn test_checkout_unknown_status_is_kept() {
    let mut raw = checkout_json();
    raw["status"] = json!("refunded_partial");
    let checkout: Checkout = decode(&bytes(&raw)).unwrap();
    assert_eq!(
        checkout.status,
        CheckoutStatus::Other("refunded_partial".to_string())
    );
    assert_eq!(checkout.status.as_str(), "refunded_partial");
}

#[test]
fn test_checkout_missing_field_reports_path() {
    let mut raw = checkout_json();
    raw.as_object_mut().unwrap().remove("customer_id");
    let err = decode::<Checkout>(&bytes(&raw)).unwrap_err();
    assert!(err.message.contains("customer_id"), "{}", err);
}

#[test]
fn test_checkout_wrong_type_reports_path() {
    let mut raw = checkout_json();
    raw["amount"] = json!("5000");
    let err = decode::<Checkout>(&bytes(&raw)).unwrap_err();
    assert_eq!(err.path, "amount");
}

#[test]
fn test_checkout_with_discount_and_metadata() {
    let mut raw = checkout_json();
    raw["discount"] = json!({"type": "percentage", "value": 10});
    raw["amount_without_discount"] = json!(5556);
    raw["metadata"] = json!({"order": 42, "tags": ["a", "b"], "gift": true});
    raw["collect_shipping_address"] = json!(1);
    raw["status"] = json!("paid");
    let checkout: Checkout = decode(&bytes(&raw)).unwrap();
    assert_eq!(checkout.discount, Some(Discount::percentage(10)));
    assert_eq!(checkout.amount_without_discount, Some(5556));
    let metadata = checkout.metadata.clone().unwrap();
    assert_eq!(metadata["order"], json!(42));
    assert_eq!(metadata["tags"], json!(["a", "b"]));
    assert!(checkout.collect_shipping_address);
    assert!(checkout.is_paid());
    round_trip(&checkout);
}

#[test]
fn test_unknown_discount_type() {
    let discount: Discount = decode(br#"{"type":"bogo","value":1}"#).unwrap();
    assert_eq!(discount.kind, DiscountType::Other("bogo".into()));
}

#[test]
fn test_entities_round_trip() {
    let checkout: Checkout = decode(&bytes(&checkout_json())).unwrap();
    round_trip(&checkout);

    let customer: Customer = decode(&bytes(&customer_json("cus_1"))).unwrap();
    round_trip(&customer);

    let product: Product = decode(&bytes(&json!({
        "id": "prod_1",
        "entity": "product",
        "livemode": false,
        "name": "Super Product",
        "description": null,
        "images": ["https://x/1.png"],
        "metadata": {"sku": "A-1"},
        "created_at": 1,
        "updated_at": 2
    })))
    .unwrap();
    round_trip(&product);

    let price: ProductPrice = decode(&bytes(&json!({
        "id": "price_1",
        "entity": "price",
        "livemode": false,
        "amount": 0,
        "currency": "dzd",
        "product_id": "prod_1",
        "metadata": null,
        "created_at": 1,
        "updated_at": 1
    })))
    .unwrap();
    assert!(price.metadata.is_empty());
    round_trip(&price);

    let balance: Balance = decode(&bytes(&json!({
        "entity": "balance",
        "livemode": false,
        "wallets": [
            {"currency": "dzd", "balance": 100000, "ready_for_payout": "900.00", "on_hold": 10000},
            {"currency": "usd", "balance": 0, "ready_for_payout": "0", "on_hold": 0}
        ]
    })))
    .unwrap();
    assert_eq!(balance.wallet("DZD").unwrap().on_hold, 10000);
    round_trip(&balance);

    let deleted: Deleted = decode(&bytes(&json!({
        "id": "cus_1", "entity": "customer", "livemode": false, "deleted": true
    })))
    .unwrap();
    assert!(deleted.deleted);
    round_trip(&deleted);

    let item: CheckoutItems = decode(&bytes(&json!({
        "id": "price_1", "entity": "price", "amount": 2500, "quantity": 2,
        "currency": "dzd", "metadata": [], "created_at": 1, "updated_at": 1,
        "product_id": "prod_1"
    })))
    .unwrap();
    round_trip(&item);
}

#[test]
fn test_customer_metadata_empty_array() {
    let customer: Customer = decode(&bytes(&customer_json("cus_1"))).unwrap();
    assert!(customer.metadata.is_empty());
    assert_eq!(customer.phone, None);
    let address = customer.address.unwrap();
    assert_eq!(address.city.as_deref(), Some("Oran"));
    assert_eq!(address.zip_code, None);
}

#[test]
fn test_payment_link_int_flags() {
    let raw = json!({
        "id": "plink_1",
        "entity": "payment_link",
        "livemode": false,
        "name": "Spring sale",
        "active": 1,
        "after_completion_message": "Thanks!",
        "locale": "fr",
        "pass_fees_to_customer": false,
        "metadata": [],
        "created_at": 1,
        "updated_at": 2,
        "collect_shipping_address": 0,
        "items": [{
            "id": "price_1", "entity": "price", "amount": 1000, "quantity": 1,
            "adjustable_quantity": 1, "currency": "dzd", "metadata": null,
            "created_at": 1, "updated_at": 1, "product_id": "prod_1"
        }],
        "url": "https://pay.chargily.dz/test/payment-links/plink_1"
    });
    let link: PaymentLink = decode(&bytes(&raw)).unwrap();
    assert!(link.active);
    assert!(!link.collect_shipping_address);
    assert!(link.items[0].adjustable_quantity);

    let out = serde_json::to_value(&link).unwrap();
    assert_eq!(out["active"], json!(1));
    assert_eq!(out["collect_shipping_address"], json!(0));
    assert_eq!(out["items"][0]["adjustable_quantity"], json!(1));
    round_trip(&link);
}

#[test]
fn test_int_flags_default_to_false_when_absent() {
    let item: PItemsData = decode(&bytes(&json!({
        "id": "price_1", "entity": "price", "amount": 1000, "quantity": 1,
        "currency": "dzd", "metadata": null, "created_at": 1, "updated_at": 1,
        "product_id": "prod_1"
    })))
    .unwrap();
    assert!(!item.adjustable_quantity);

    let link: PaymentLink = decode(&bytes(&json!({
        "id": "plink_1", "entity": "payment_link", "livemode": false,
        "name": "n", "after_completion_message": null, "locale": "en",
        "pass_fees_to_customer": false, "metadata": {}, "created_at": 1,
        "updated_at": 1, "url": "https://x/p"
    })))
    .unwrap();
    assert!(!link.active);
    assert!(!link.collect_shipping_address);
    assert!(link.items.is_empty());
}

#[test]
fn test_decode_page_of_customers() {
    let raw = json!({
        "livemode": false,
        "current_page": 1,
        "data": [customer_json("cus_1"), customer_json("cus_2")],
        "first_page_url": "https://x/customers?page=1",
        "last_page": 2,
        "last_page_url": "https://x/customers?page=2",
        "next_page_url": "https://x/customers?page=2",
        "path": "https://x/customers",
        "per_page": 2,
        "prev_page_url": null,
        "total": 3
    });
    let page: RetrieveAll<Customer> = decode_page(&bytes(&raw)).unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.len() <= page.per_page as usize);
    assert!(page.has_next_page());
    assert!(!page.has_prev_page());

    let next = ListParams::new().next(&page).unwrap();
    assert_eq!(next.page, Some(2));
    assert_eq!(next.per_page, Some(2));

    let ids: Vec<String> = page.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["cus_1", "cus_2"]);
}

#[test]
fn test_empty_page() {
    let raw = json!({
        "livemode": false, "current_page": 1, "data": [],
        "first_page_url": "u", "last_page": 1, "last_page_url": "u",
        "next_page_url": null, "path": "p", "per_page": 10,
        "prev_page_url": null, "total": 0
    });
    let page: RetrieveAll<PItemsData> = decode_page(&bytes(&raw)).unwrap();
    assert!(page.is_empty());
    assert!(ListParams::new().next(&page).is_none());
}

#[test]
fn test_page_without_data_fails() {
    let raw = json!({
        "livemode": false, "current_page": 1,
        "first_page_url": "u", "last_page": 1, "last_page_url": "u",
        "next_page_url": null, "path": "p", "per_page": 10,
        "prev_page_url": null, "total": 0
    });
    let err = decode_page::<Checkout>(&bytes(&raw)).unwrap_err();
    assert!(err.message.contains("data"), "{}", err);

    let mut raw = raw;
    raw["data"] = json!({"not": "a list"});
    let err = decode_page::<Checkout>(&bytes(&raw)).unwrap_err();
    assert_eq!(err.path, "data");
}

#[test]
fn test_page_bad_item_path() {
    let mut second = customer_json("cus_2");
    second["livemode"] = json!("no");
    let raw = json!({
        "livemode": false, "current_page": 1,
        "data": [customer_json("cus_1"), second],
        "first_page_url": "u", "last_page": 1, "last_page_url": "u",
        "next_page_url": null, "path": "p", "per_page": 10,
        "prev_page_url": null, "total": 2
    });
    let err = decode_page::<Customer>(&bytes(&raw)).unwrap_err();
    assert_eq!(err.path, "data[1].livemode");
}

#[test]
fn test_page_overflowing_per_page_fails() {
    let raw = json!({
        "livemode": false, "current_page": 1,
        "data": [customer_json("cus_1"), customer_json("cus_2")],
        "first_page_url": "u", "last_page": 1, "last_page_url": "u",
        "next_page_url": null, "path": "p", "per_page": 1,
        "prev_page_url": null, "total": 2
    });
    let err = decode_page::<Customer>(&bytes(&raw)).unwrap_err();
    assert!(err.message.starts_with("data: page holds 2 items"), "{}", err);
}

#[test]
fn test_plain_decode_checks_page_bookkeeping() {
    let raw = json!({
        "livemode": false, "current_page": 1,
        "data": [customer_json("cus_1"), customer_json("cus_1")],
        "first_page_url": "u", "last_page": 1, "last_page_url": "u",
        "next_page_url": null, "path": "p", "per_page": 1,
        "prev_page_url": null, "total": 0
    });
    assert!(decode::<RetrieveAll<Customer>>(&bytes(&raw)).is_err());
    assert!(serde_json::from_value::<RetrieveAll<Customer>>(raw.clone()).is_err());

    let mut raw = raw;
    raw["per_page"] = json!(5);
    let err = decode::<RetrieveAll<Customer>>(&bytes(&raw)).unwrap_err();
    assert!(err.message.contains("total is 0"), "{}", err);

    raw["total"] = json!(2);
    let page: RetrieveAll<Customer> = decode(&bytes(&raw)).unwrap();
    assert!(page.len() <= page.per_page as usize);
    round_trip(&page);
}

#[test]
fn test_page_current_page_out_of_range() {
    let raw = json!({
        "livemode": false, "current_page": 3,
        "data": [], "first_page_url": "u", "last_page": 2, "last_page_url": "u",
        "next_page_url": null, "path": "p", "per_page": 10,
        "prev_page_url": null, "total": 15
    });
    let err = decode_page::<Product>(&bytes(&raw)).unwrap_err();
    assert!(err.message.starts_with("current_page:"), "{}", err);
}

#[test]
fn test_customer_params_omit_unset() {
    let body = CreateCustomerParams::new().to_value().unwrap();
    assert_eq!(body, json!({}));

    let body = CreateCustomerParams::new()
        .with_name("Amina")
        .with_address(Address {
            country: Some("DZ".into()),
            ..Address::new()
        })
        .with_metadata("user_id", 7)
        .to_value()
        .unwrap();
    assert_eq!(
        body,
        json!({"name": "Amina", "address": {"country": "DZ"}, "metadata": {"user_id": 7}})
    );
}

#[test]
fn test_product_params_omit_unset() {
    let body = CreateProductParams::new("Super Product").to_value().unwrap();
    assert_eq!(body, json!({"name": "Super Product"}));
}

#[test]
fn test_product_params_too_many_images() {
    let mut params = CreateProductParams::new("p");
    for i in 0..9 {
        params = params.with_image(format!("https://x/{}.png", i));
    }
    assert_eq!(
        params.validate(),
        Err(ValidationError::TooManyImages { max: 8, count: 9 })
    );
    let update = UpdateProductParams::new().with_images(vec!["a".into(); 8]);
    assert!(update.validate().is_ok());
}

#[test]
fn test_checkout_params_omit_unset() {
    let body = CheckoutParams::with_amount(5000, "dzd", "https://x/ok")
        .to_value()
        .unwrap();
    assert_eq!(
        body,
        json!({"amount": 5000, "currency": "dzd", "success_url": "https://x/ok"})
    );

    let body = CheckoutParams::with_items(vec![CItems::new("price_1", 2)], "https://x/ok")
        .to_value()
        .unwrap();
    assert_eq!(
        body,
        json!({"items": [{"price": "price_1", "quantity": 2}], "success_url": "https://x/ok"})
    );
}

#[test]
fn test_checkout_params_conflicting_discounts() {
    let params = CheckoutParams::with_amount(5000, "dzd", "https://x/ok")
        .percentage_discount(10)
        .amount_discount(500);
    assert_eq!(params.validate(), Err(ValidationError::ConflictingDiscounts));
    let err = params.to_json().unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ConflictingDiscounts)
    ));
}

#[test]
fn test_checkout_params_single_discount_ok() {
    let params = CheckoutParams::with_amount(5000, "dzd", "https://x/ok").percentage_discount(10);
    let body = params.to_value().unwrap();
    assert_eq!(body["percentage_discount"], json!(10));
    assert!(body.get("amount_discount").is_none());

    let params = CheckoutParams::with_amount(5000, "dzd", "https://x/ok").percentage_discount(101);
    assert_eq!(
        params.validate(),
        Err(ValidationError::PercentageOutOfRange(101))
    );
}

#[test]
fn test_checkout_params_zero_discount_left_out() {
    let params = CheckoutParams::with_amount(5000, "dzd", "https://x/ok")
        .percentage_discount(0)
        .amount_discount(500);
    assert!(params.validate().is_ok());
    let body = params.to_value().unwrap();
    assert_eq!(body["amount_discount"], json!(500));
    assert!(body.get("percentage_discount").is_none(), "{}", body);

    let body = CheckoutParams::with_amount(5000, "dzd", "https://x/ok")
        .amount_discount(0)
        .to_value()
        .unwrap();
    assert_eq!(
        body,
        json!({"amount": 5000, "currency": "dzd", "success_url": "https://x/ok"})
    );
}

#[test]
fn test_checkout_params_pricing_rules() {
    let missing = CheckoutParams {
        success_url: "https://x/ok".into(),
        ..CheckoutParams::default()
    };
    assert_eq!(
        missing.validate(),
        Err(ValidationError::MissingItemsOrAmount)
    );

    let empty_items = CheckoutParams::with_items(vec![], "https://x/ok");
    assert_eq!(
        empty_items.validate(),
        Err(ValidationError::MissingItemsOrAmount)
    );

    let mut both = CheckoutParams::with_items(vec![CItems::new("price_1", 1)], "https://x/ok");
    both.amount = Some(100);
    assert_eq!(both.validate(), Err(ValidationError::ItemsAndAmount));

    let mut no_currency = CheckoutParams::with_amount(100, "dzd", "https://x/ok");
    no_currency.currency = None;
    assert_eq!(
        no_currency.validate(),
        Err(ValidationError::MissingField("currency"))
    );

    let no_success = CheckoutParams::with_amount(100, "dzd", "");
    assert_eq!(
        no_success.validate(),
        Err(ValidationError::MissingField("success_url"))
    );

    let zero_quantity =
        CheckoutParams::with_items(vec![CItems::new("price_1", 0)], "https://x/ok");
    assert_eq!(
        zero_quantity.validate(),
        Err(ValidationError::InvalidQuantity {
            index: 0,
            quantity: 0
        })
    );
}

#[test]
fn test_price_params_keep_zero_amount() {
    let body = ProductPriceParams::new(0, "dzd", "prod_1").to_value().unwrap();
    assert_eq!(
        body,
        json!({"amount": 0, "currency": "dzd", "product_id": "prod_1"})
    );

    let negative = ProductPriceParams::new(-1, "dzd", "prod_1");
    assert_eq!(
        negative.validate(),
        Err(ValidationError::Negative {
            field: "amount",
            value: -1
        })
    );
}

#[test]
fn test_update_price_metadata_always_sent() {
    let body = UpdatePriceMetaDataParams::default().to_value().unwrap();
    assert_eq!(body, json!({"metadata": {}}));
}

#[test]
fn test_payment_link_params() {
    let params = CreatePaymentLinkParams::new(
        "Spring sale",
        vec![PItems::new("price_1", 1).adjustable()],
    )
    .collect_shipping_address(true)
    .locale("ar");
    let body = params.to_value().unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Spring sale",
            "items": [{"price": "price_1", "quantity": 1, "adjustable_quantity": true}],
            "locale": "ar",
            "collect_shipping_address": 1
        })
    );

    let empty = CreatePaymentLinkParams::new("x", vec![]);
    assert_eq!(empty.validate(), Err(ValidationError::MissingField("items")));

    let update = UpdatePaymentLinkParams::new().collect_shipping_address(false);
    assert_eq!(
        update.to_value().unwrap(),
        json!({"collect_shipping_address": 0})
    );
}

#[test]
fn test_list_params() {
    let params = ListParams::new().with_per_page(20).with_page(3);
    assert_eq!(
        params.to_query(),
        vec![("per_page", "20".to_string()), ("page", "3".to_string())]
    );
    assert!(params.validate().is_ok());
    assert!(ListParams::new().with_per_page(51).validate().is_err());
    assert!(ListParams::new().with_page(0).validate().is_err());
    assert_eq!(ListParams::new().to_value().unwrap(), json!({}));
}

#[test]
fn test_decode_rejects_trailing_garbage() {
    let mut raw = bytes(&customer_json("cus_1"));
    raw.extend_from_slice(b" {}");
    assert!(decode::<Customer>(&raw).is_err());
}
