//! Property-based tests for the domain record's JSON wire shape.
//!
//! The snapshot files and the remote document collections share this
//! serialization, so its round-trip and key casing are load-bearing.

use proptest::prelude::*;

use domainvault::types::domain::{Domain, DomainDraft};
use domainvault::types::provider::Provider;

fn arb_domain() -> impl Strategy<Value = Domain> {
    (
        "[a-z0-9-]{1,20}",
        "[a-z0-9]{1,15}\\.(com|dev|io)",
        "[A-Za-z ]{1,12}",
        (2020i32..2040, 1u32..13, 1u32..29),
        0.0f64..500.0,
        proptest::option::of((2010i32..2024, 1u32..13, 1u32..29)),
        proptest::option::of(0.0f64..500.0),
        any::<bool>(),
    )
        .prop_map(
            |(id, name, provider, (ry, rm, rd), price, purchase, purchase_price, auto_renew)| {
                Domain {
                    id,
                    name,
                    provider,
                    renewal_date: format!("{:04}-{:02}-{:02}", ry, rm, rd),
                    price,
                    purchase_date: purchase
                        .map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
                    purchase_price,
                    auto_renew,
                }
            },
        )
}

fn arb_provider() -> impl Strategy<Value = Provider> {
    (
        "[a-z0-9-]{1,20}",
        "[A-Za-z ]{1,12}",
        "https://[a-z]{3,10}\\.com",
        "[a-z0-9]{0,10}",
        // Alphabet disjoint from every other field, so a leak through
        // Debug is unambiguous.
        "[!?*]{0,12}",
        "[a-z0-9-]{0,10}",
    )
        .prop_map(|(id, name, url, username, password, user_id)| Provider {
            id,
            name,
            url,
            username,
            password,
            user_id,
        })
}

proptest! {
    /// JSON round-trip preserves every field.
    #[test]
    fn domain_json_roundtrip(domain in arb_domain()) {
        let json = serde_json::to_string(&domain).unwrap();
        let back: Domain = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, domain);
    }

    /// The wire shape uses camelCase keys and omits absent purchase
    /// fields entirely.
    #[test]
    fn domain_wire_shape(domain in arb_domain()) {
        let value = serde_json::to_value(&domain).unwrap();
        let obj = value.as_object().unwrap();

        prop_assert!(obj.contains_key("renewalDate"));
        prop_assert!(obj.contains_key("autoRenew"));
        prop_assert!(!obj.contains_key("renewal_date"));

        prop_assert_eq!(obj.contains_key("purchaseDate"), domain.purchase_date.is_some());
        prop_assert_eq!(obj.contains_key("purchasePrice"), domain.purchase_price.is_some());
    }

    /// A draft built from a record parses back into the same record
    /// through the form's text fields (prices at two decimals).
    #[test]
    fn draft_prefill_preserves_text_fields(domain in arb_domain()) {
        let draft = DomainDraft::from_domain(&domain);
        prop_assert_eq!(&draft.name, &domain.name);
        prop_assert_eq!(&draft.renewal_date, &domain.renewal_date);
        prop_assert_eq!(draft.auto_renew, domain.auto_renew);

        let price: f64 = draft.price.parse().unwrap();
        prop_assert!((price - domain.price).abs() < 0.005);

        prop_assert_eq!(draft.purchase_date.is_empty(), domain.purchase_date.is_none());
        prop_assert_eq!(draft.purchase_price.is_empty(), domain.purchase_price.is_none());
    }

    /// Provider records round-trip, including empty credential fields.
    #[test]
    fn provider_json_roundtrip(provider in arb_provider()) {
        let json = serde_json::to_string(&provider).unwrap();
        let back: Provider = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, provider);
    }

    /// Provider credentials never leak through Debug formatting.
    #[test]
    fn provider_debug_redacts_password(provider in arb_provider()) {
        prop_assume!(provider.password.len() >= 4);
        let debug = format!("{:?}", &provider);
        prop_assert!(!debug.contains(&provider.password));
    }
}
