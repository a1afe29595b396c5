//! Integration tests for `LeadRepo` and the stats aggregation.

use consorcio_core::leads::{STATUS_CONTACTED, STATUS_CONVERTED, STATUS_NEW};
use consorcio_db::models::lead::CreateLead;
use consorcio_db::repositories::LeadRepo;
use sqlx::PgPool;

fn new_lead(name: &str, source: &str) -> CreateLead {
    CreateLead {
        name: name.to_string(),
        whatsapp: "(91) 98888-7777".to_string(),
        city: "Belém".to_string(),
        model: "T-Cross".to_string(),
        source: source.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_id_and_new_status(pool: PgPool) {
    let lead = LeadRepo::create(&pool, &new_lead("Paula", "hero-form"))
        .await
        .unwrap();

    assert_eq!(lead.status, STATUS_NEW);
    assert!(!lead.id.is_empty());

    let found = LeadRepo::find_by_id(&pool, &lead.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Paula");
    assert_eq!(found.created_at, lead.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let first = LeadRepo::create(&pool, &new_lead("first", "hero-form")).await.unwrap();
    let second = LeadRepo::create(&pool, &new_lead("second", "hero-form")).await.unwrap();
    let third = LeadRepo::create(&pool, &new_lead("third", "footer-form")).await.unwrap();

    let ids: Vec<_> = LeadRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, [third.id, second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_reports_whether_anything_changed(pool: PgPool) {
    let lead = LeadRepo::create(&pool, &new_lead("Rui", "hero-form")).await.unwrap();

    assert!(LeadRepo::update_status(&pool, &lead.id, STATUS_CONTACTED).await.unwrap());
    assert!(!LeadRepo::update_status(&pool, &lead.id, STATUS_CONTACTED).await.unwrap());
    assert!(!LeadRepo::update_status(&pool, "missing", STATUS_CONTACTED).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_group_by_status_and_source(pool: PgPool) {
    let a = LeadRepo::create(&pool, &new_lead("a", "hero-form")).await.unwrap();
    let b = LeadRepo::create(&pool, &new_lead("b", "hero-form")).await.unwrap();
    let c = LeadRepo::create(&pool, &new_lead("c", "simulator")).await.unwrap();
    LeadRepo::create(&pool, &new_lead("d", "whatsapp-button")).await.unwrap();

    LeadRepo::update_status(&pool, &a.id, STATUS_CONTACTED).await.unwrap();
    LeadRepo::update_status(&pool, &b.id, STATUS_CONVERTED).await.unwrap();
    LeadRepo::update_status(&pool, &c.id, "lost").await.unwrap();

    let stats = LeadRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.new, 1);
    assert_eq!(stats.contacted, 1);
    assert_eq!(stats.converted, 1);
    assert_eq!(stats.by_source.get("hero-form"), Some(&2));
    assert_eq!(stats.by_source.get("simulator"), Some(&1));
    assert_eq!(stats.by_source.values().sum::<i64>(), stats.total);
}
