//! Integration tests for `CustomerRepository`.

mod common;

use fakt_db::repositories::{CustomerError, CustomerRepository};

use common::{guid, seed_customer, seed_invoice, seed_job, store, typed_guid};

#[tokio::test]
async fn test_find_missing_customer() {
    let db = store().await;
    let repo = CustomerRepository::new(db);

    let err = repo.find(&typed_guid(999)).await.unwrap_err();
    assert!(matches!(err, CustomerError::NotFound(_)));
}

#[tokio::test]
async fn test_list_orders_by_name() {
    let db = store().await;
    seed_customer(&db, &guid(1), "Zeta AS").await;
    seed_customer(&db, &guid(2), "Acme AS").await;
    seed_customer(&db, &guid(3), "Miller Ltd").await;

    let repo = CustomerRepository::new(db);
    let rows = repo.list().await.unwrap();
    let names: Vec<&str> = rows.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Acme AS", "Miller Ltd", "Zeta AS"]);
}

#[tokio::test]
async fn test_jobs_lists_only_the_customers_jobs() {
    let db = store().await;
    seed_customer(&db, &guid(1), "Acme AS").await;
    seed_customer(&db, &guid(2), "Zeta AS").await;
    seed_job(&db, &guid(5), "Rollout", &guid(1), 2).await;
    seed_job(&db, &guid(6), "Audit", &guid(1), 2).await;
    seed_job(&db, &guid(7), "Other", &guid(2), 2).await;

    let repo = CustomerRepository::new(db);
    let rows = repo.jobs(&typed_guid(1)).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, ["Audit", "Rollout"]);
}

#[tokio::test]
async fn test_invoices_cover_direct_and_job_billing() {
    let db = store().await;
    seed_customer(&db, &guid(1), "Acme AS").await;
    seed_customer(&db, &guid(2), "Zeta AS").await;
    seed_job(&db, &guid(5), "Rollout", &guid(1), 2).await;
    // Direct, via the job, and one belonging to someone else.
    seed_invoice(&db, &guid(10), "A-1", &guid(1), 2, None, None, None).await;
    seed_invoice(&db, &guid(11), "A-2", &guid(5), 3, None, None, None).await;
    seed_invoice(&db, &guid(12), "A-3", &guid(2), 2, None, None, None).await;

    let repo = CustomerRepository::new(db);
    let rows = repo.invoices(&typed_guid(1)).await.unwrap();
    let numbers: Vec<&str> = rows.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(numbers, ["A-2", "A-1"]);
}

#[tokio::test]
async fn test_invoices_empty_for_customer_without_any() {
    let db = store().await;
    seed_customer(&db, &guid(1), "Acme AS").await;

    let repo = CustomerRepository::new(db);
    assert!(repo.invoices(&typed_guid(1)).await.unwrap().is_empty());
}
