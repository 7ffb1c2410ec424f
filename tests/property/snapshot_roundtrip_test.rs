//! Property-based tests for local snapshot persistence: whatever the
//! store writes, a reopen reads back unchanged.

use proptest::prelude::*;
use tempfile::TempDir;

use domainvault::store::{LocalStore, StoreBackend};
use domainvault::types::domain::Domain;
use domainvault::types::settings::{SettingsPatch, UserSettings};

fn arb_domains() -> impl Strategy<Value = Vec<Domain>> {
    prop::collection::vec(
        (
            "[a-z0-9]{1,15}\\.(com|dev|io)",
            (2020i32..2040, 1u32..13, 1u32..29),
            0.0f64..500.0,
            any::<bool>(),
        ),
        1..10,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, (y, m, d), price, auto_renew))| Domain {
                id: String::new(),
                name: format!("{}-{}", i, name),
                provider: "Namecheap".to_string(),
                renewal_date: format!("{:04}-{:02}-{:02}", y, m, d),
                price,
                purchase_date: None,
                purchase_price: None,
                auto_renew,
            })
            .collect()
    })
}

fn arb_settings_patch() -> impl Strategy<Value = SettingsPatch> {
    (
        proptest::option::of("[A-Za-z]{1,12}"),
        proptest::option::of(prop_oneof![
            Just("pink".to_string()),
            Just("blue".to_string()),
            Just("green".to_string()),
            Just("purple".to_string()),
            Just("custom".to_string()),
        ]),
        proptest::option::of(prop_oneof![
            Just("en".to_string()),
            Just("es".to_string()),
        ]),
    )
        .prop_map(|(username, theme, language)| SettingsPatch {
            username,
            theme,
            custom_color: None,
            profile_picture: None,
            language,
        })
}

proptest! {
    // Filesystem-backed cases are slower than pure ones; keep the case
    // count modest.
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Domains created through the store come back identical after a
    /// reopen, ids included.
    #[test]
    fn created_domains_survive_reopen(domains in arb_domains()) {
        let tmp = TempDir::new().unwrap();
        let mut store = LocalStore::open_at(tmp.path().to_path_buf()).unwrap();

        // Clear the seeded sample so only the generated records remain.
        for d in store.list_domains().unwrap() {
            store.delete_domain(&d.id).unwrap();
        }

        let mut expected = Vec::new();
        for mut domain in domains {
            let id = store.create_domain(domain.clone()).unwrap();
            domain.id = id;
            expected.push(domain);
        }

        let reopened = LocalStore::open_at(tmp.path().to_path_buf()).unwrap();
        prop_assert_eq!(reopened.list_domains().unwrap(), expected);
    }

    /// A settings patch merged and persisted reads back as the merged
    /// record.
    #[test]
    fn settings_patch_survives_reopen(patch in arb_settings_patch()) {
        let tmp = TempDir::new().unwrap();
        let mut store = LocalStore::open_at(tmp.path().to_path_buf()).unwrap();

        let mut expected = UserSettings::default();
        expected.merge(patch.clone());
        let merged = store.save_settings(patch).unwrap();
        prop_assert_eq!(&merged, &expected);

        let reopened = LocalStore::open_at(tmp.path().to_path_buf()).unwrap();
        prop_assert_eq!(reopened.load_settings().unwrap(), expected);
    }

    /// Deleting a created record brings the snapshot back to its prior
    /// state.
    #[test]
    fn create_then_delete_is_identity(domains in arb_domains()) {
        let tmp = TempDir::new().unwrap();
        let mut store = LocalStore::open_at(tmp.path().to_path_buf()).unwrap();
        let baseline = store.list_domains().unwrap();

        let ids: Vec<String> = domains
            .into_iter()
            .map(|d| store.create_domain(d).unwrap())
            .collect();
        for id in ids {
            store.delete_domain(&id).unwrap();
        }

        let reopened = LocalStore::open_at(tmp.path().to_path_buf()).unwrap();
        prop_assert_eq!(reopened.list_domains().unwrap(), baseline);
    }
}
