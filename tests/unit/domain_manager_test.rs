//! Unit tests for domain form validation and CRUD dispatch.

use tempfile::TempDir;

use domainvault::managers::domain_manager::{DomainManager, DomainManagerTrait};
use domainvault::store::LocalStore;
use domainvault::types::domain::DomainDraft;
use domainvault::types::errors::DomainError;

fn setup() -> (DomainManager, LocalStore, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let store = LocalStore::open_at(tmp.path().to_path_buf()).expect("Failed to open store");
    (DomainManager::new(), store, tmp)
}

fn valid_draft() -> DomainDraft {
    DomainDraft {
        name: "mysite.dev".to_string(),
        provider: "Namecheap".to_string(),
        renewal_date: "2026-06-01".to_string(),
        price: "14.99".to_string(),
        purchase_date: String::new(),
        purchase_price: String::new(),
        auto_renew: true,
    }
}

// ─── Add ───

#[test]
fn test_add_valid_draft_assigns_unseen_id() {
    let (mut mgr, mut store, _tmp) = setup();
    let before: Vec<String> = mgr
        .list_domains(&store)
        .unwrap()
        .iter()
        .map(|d| d.id.clone())
        .collect();

    let id = mgr.add_domain(&mut store, &valid_draft()).unwrap();
    assert!(!before.contains(&id));

    let created = mgr.get_domain(&store, &id).unwrap();
    assert_eq!(created.name, "mysite.dev");
    assert_eq!(created.price, 14.99);
    assert!(created.auto_renew);
    assert_eq!(created.purchase_date, None);
    assert_eq!(created.purchase_price, None);
}

#[test]
fn test_add_trims_whitespace() {
    let (mut mgr, mut store, _tmp) = setup();
    let draft = DomainDraft {
        name: "  padded.com  ".to_string(),
        ..valid_draft()
    };
    let id = mgr.add_domain(&mut store, &draft).unwrap();
    assert_eq!(mgr.get_domain(&store, &id).unwrap().name, "padded.com");
}

#[test]
fn test_add_rejects_missing_mandatory_fields() {
    let (mut mgr, mut store, _tmp) = setup();

    for (field, draft) in [
        ("name", DomainDraft { name: "  ".to_string(), ..valid_draft() }),
        ("provider", DomainDraft { provider: String::new(), ..valid_draft() }),
        ("renewal date", DomainDraft { renewal_date: String::new(), ..valid_draft() }),
        ("price", DomainDraft { price: String::new(), ..valid_draft() }),
    ] {
        let result = mgr.add_domain(&mut store, &draft);
        assert!(
            matches!(result, Err(DomainError::MissingField(_))),
            "expected MissingField for blank {}",
            field
        );
    }
}

#[test]
fn test_add_rejects_bad_price_and_date() {
    let (mut mgr, mut store, _tmp) = setup();

    let bad_price = DomainDraft { price: "twelve".to_string(), ..valid_draft() };
    assert!(matches!(
        mgr.add_domain(&mut store, &bad_price),
        Err(DomainError::InvalidPrice(_))
    ));

    let negative = DomainDraft { price: "-5".to_string(), ..valid_draft() };
    assert!(matches!(
        mgr.add_domain(&mut store, &negative),
        Err(DomainError::InvalidPrice(_))
    ));

    let nan = DomainDraft { price: "NaN".to_string(), ..valid_draft() };
    assert!(matches!(
        mgr.add_domain(&mut store, &nan),
        Err(DomainError::InvalidPrice(_))
    ));

    let bad_date = DomainDraft { renewal_date: "06/01/2026".to_string(), ..valid_draft() };
    assert!(matches!(
        mgr.add_domain(&mut store, &bad_date),
        Err(DomainError::InvalidDate(_))
    ));

    let bad_purchase = DomainDraft { purchase_date: "yesterday".to_string(), ..valid_draft() };
    assert!(matches!(
        mgr.add_domain(&mut store, &bad_purchase),
        Err(DomainError::InvalidDate(_))
    ));
}

#[test]
fn test_failed_add_leaves_store_untouched() {
    let (mut mgr, mut store, _tmp) = setup();
    let count = mgr.list_domains(&store).unwrap().len();

    let bad = DomainDraft { price: "free".to_string(), ..valid_draft() };
    assert!(mgr.add_domain(&mut store, &bad).is_err());
    assert_eq!(mgr.list_domains(&store).unwrap().len(), count);
}

// ─── Update ───

#[test]
fn test_update_overwrites_all_fields() {
    let (mut mgr, mut store, _tmp) = setup();
    let id = mgr.add_domain(&mut store, &valid_draft()).unwrap();

    let changed = DomainDraft {
        name: "renamed.dev".to_string(),
        price: "20".to_string(),
        purchase_date: "2024-01-01".to_string(),
        purchase_price: "7.50".to_string(),
        auto_renew: false,
        ..valid_draft()
    };
    mgr.update_domain(&mut store, &id, &changed).unwrap();

    let updated = mgr.get_domain(&store, &id).unwrap();
    assert_eq!(updated.name, "renamed.dev");
    assert_eq!(updated.price, 20.0);
    assert_eq!(updated.purchase_price, Some(7.5));
    assert!(!updated.auto_renew);
}

#[test]
fn test_update_missing_domain_is_not_found() {
    let (mut mgr, mut store, _tmp) = setup();
    let result = mgr.update_domain(&mut store, "no-such-id", &valid_draft());
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[test]
fn test_update_validates_before_writing() {
    let (mut mgr, mut store, _tmp) = setup();
    let id = mgr.add_domain(&mut store, &valid_draft()).unwrap();

    let bad = DomainDraft { renewal_date: "soon".to_string(), ..valid_draft() };
    assert!(mgr.update_domain(&mut store, &id, &bad).is_err());
    assert_eq!(mgr.get_domain(&store, &id).unwrap().renewal_date, "2026-06-01");
}

// ─── Delete ───

#[test]
fn test_delete_requires_confirmation() {
    let (mut mgr, mut store, _tmp) = setup();
    let id = mgr.add_domain(&mut store, &valid_draft()).unwrap();

    let result = mgr.delete_domain(&mut store, &id, false);
    assert!(matches!(result, Err(DomainError::ConfirmationRequired)));
    assert!(mgr.get_domain(&store, &id).is_ok());

    mgr.delete_domain(&mut store, &id, true).unwrap();
    assert!(matches!(
        mgr.get_domain(&store, &id),
        Err(DomainError::NotFound(_))
    ));
}

// ─── Search ───

#[test]
fn test_search_matches_name_and_provider_case_insensitively() {
    let (mut mgr, mut store, _tmp) = setup();
    mgr.add_domain(&mut store, &valid_draft()).unwrap();

    let by_name = mgr.search_domains(&store, "MYSITE").unwrap();
    assert!(by_name.iter().any(|d| d.name == "mysite.dev"));

    let by_provider = mgr.search_domains(&store, "namecheap").unwrap();
    assert!(by_provider.iter().any(|d| d.name == "mysite.dev"));

    let none = mgr.search_domains(&store, "zzz-no-match").unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_empty_query_returns_everything() {
    let (mgr, store, _tmp) = setup();
    let all = mgr.list_domains(&store).unwrap();
    let searched = mgr.search_domains(&store, "   ").unwrap();
    assert_eq!(searched.len(), all.len());
}
