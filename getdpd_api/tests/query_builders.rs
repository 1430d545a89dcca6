use getdpd_api::{
    CustomerFilter, CustomerQuery, Filter, ProductQuery, PurchaseFilter, PurchaseQuery, Query,
    QueryParameters, SubscriberQuery, SubscriberTarget,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://api.getdpd.com/v2/purchases").unwrap()
}

#[test]
fn purchase_query_defaults_to_no_query_string() {
    let url = PurchaseQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn purchase_status_beats_product_id() {
    let url = PurchaseQuery::default()
        .with_status("paid")
        .with_product_id("5")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("status=paid"));
}

#[test]
fn purchase_precedence_walks_the_full_list() {
    // Setting every filter, then removing the winner each round, must walk the
    // list in declared order.
    for (index, expected) in PurchaseFilter::ALL.iter().enumerate() {
        let mut query = PurchaseQuery::default();
        for filter in &PurchaseFilter::ALL[index..] {
            query = query.with_filter(*filter, "x");
        }
        let params = query.to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get(expected.param_name()), Some("x"));
    }
}

#[test]
fn purchase_filter_value_is_encoded() {
    let url = PurchaseQuery::default()
        .with_customer_email("jane+shop@example.com")
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![(
            "customer_email".to_string(),
            "jane+shop@example.com".to_string()
        )]
    );
}

#[test]
fn customer_precedence_walks_the_full_list() {
    for (index, expected) in CustomerFilter::ALL.iter().enumerate() {
        let mut query = CustomerQuery::default();
        for filter in CustomerFilter::ALL[index..].iter().rev() {
            query = query.with_filter(*filter, "y");
        }
        let params = query.to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get(expected.param_name()), Some("y"));
    }
}

#[test]
fn product_query_storefront() {
    let url = ProductQuery::default()
        .with_storefront_id("3")
        .add_to_url(&Url::parse("https://api.getdpd.com/v2/products").unwrap());
    assert_eq!(url.query(), Some("storefront_id=3"));
}

#[test]
fn query_parameters_omit_empty_values() {
    let mut params = QueryParameters::new();
    params.push_non_empty("status", Some(""));
    params.push_non_empty("product_id", None);
    assert!(params.is_empty());
    assert_eq!(params.add_to_url(&base_url()).as_str(), base_url().as_str());
}

#[test]
fn subscriber_query_targets() {
    assert!(SubscriberQuery::default().target().is_err());
    assert_eq!(
        SubscriberQuery::default().with_id("9").target().unwrap(),
        SubscriberTarget::Id("9")
    );
    assert_eq!(
        SubscriberQuery::default()
            .with_username("a@b.com")
            .target()
            .unwrap(),
        SubscriberTarget::Username("a@b.com")
    );
}
