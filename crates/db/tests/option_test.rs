//! Integration tests for `OptionRepository` and `CompanyRepository`.

mod common;

use fakt_db::repositories::{CompanyError, CompanyRepository, OptionError, OptionRepository};

use common::{seed_slot, store};

#[tokio::test]
async fn test_set_then_get() {
    let db = store().await;
    let repo = OptionRepository::new(db);

    repo.set("greeting", "en", Some("Dear".to_string()))
        .await
        .unwrap();
    assert_eq!(
        repo.get("greeting", "en").await.unwrap(),
        Some("Dear".to_string())
    );
}

#[tokio::test]
async fn test_get_missing_option() {
    let db = store().await;
    let repo = OptionRepository::new(db);

    let err = repo.get("greeting", "en").await.unwrap_err();
    assert!(matches!(err, OptionError::NotFound(_, _)));
}

#[tokio::test]
async fn test_set_updates_in_place() {
    let db = store().await;
    let repo = OptionRepository::new(db);

    repo.set("greeting", "en", Some("Dear".to_string()))
        .await
        .unwrap();
    repo.set("greeting", "en", Some("Hello".to_string()))
        .await
        .unwrap();

    assert_eq!(
        repo.get("greeting", "en").await.unwrap(),
        Some("Hello".to_string())
    );
    // Still a single row for the key.
    assert_eq!(repo.list("en").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_languages_are_independent() {
    let db = store().await;
    let repo = OptionRepository::new(db);

    repo.set("greeting", "en", Some("Dear".to_string()))
        .await
        .unwrap();
    repo.set("greeting", "nb", Some("Hei".to_string()))
        .await
        .unwrap();
    repo.set("signature", "nb", Some("Hilsen".to_string()))
        .await
        .unwrap();

    let nb = repo.list("nb").await.unwrap();
    assert_eq!(nb.len(), 2);
    assert_eq!(nb.get("greeting"), Some(&Some("Hei".to_string())));
    assert_eq!(
        repo.get("greeting", "en").await.unwrap(),
        Some("Dear".to_string())
    );
}

async fn seed_company_slots(db: &sea_orm::DatabaseConnection) {
    seed_slot(db, 1, "options/Business/Company ID", Some("987654321")).await;
    seed_slot(db, 2, "options/Business/Company Name", Some("Fakt AS")).await;
    seed_slot(db, 3, "options/Business/Company Address", Some("Main Street 1\n1234 Townsville")).await;
    seed_slot(db, 4, "options/Business/Company Email Address", Some("post@example.com")).await;
    seed_slot(db, 5, "options/Business/Company Website URL", Some("https://example.com")).await;
    seed_slot(db, 6, "options/Business/Company Phone Number", Some("+47 555 0100")).await;
    seed_slot(db, 7, "options/Business/Company Fax Number", Some("1234.56.78903")).await;
}

#[tokio::test]
async fn test_company_profile() {
    let db = store().await;
    seed_company_slots(&db).await;

    let repo = CompanyRepository::new(db);
    let profile = repo.profile().await.unwrap();

    assert_eq!(profile.id, "987654321");
    assert_eq!(profile.name, "Fakt AS");
    assert_eq!(profile.email, "post@example.com");
    // The fax slot holds the bank account number.
    assert_eq!(profile.bank_account_number, "1234.56.78903");
}

#[tokio::test]
async fn test_company_profile_with_missing_slot() {
    let db = store().await;
    seed_slot(&db, 1, "options/Business/Company ID", Some("987654321")).await;

    let repo = CompanyRepository::new(db);
    let err = repo.profile().await.unwrap_err();
    assert!(matches!(err, CompanyError::SlotNotFound(_)));
}
