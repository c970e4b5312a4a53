use assert_matches::assert_matches;
use clientele_core::client_type::ClientType;
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    clientele_db::health_check(&pool).await.unwrap();

    for table in ["clients", "founders"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// `client_type` only accepts the two known classifications.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_client_type_check_constraint(pool: PgPool) {
    let result = sqlx::query("INSERT INTO clients (tax_id, name, client_type) VALUES (1, 'X', 3)")
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

/// Seeding inserts the demo rows once and is a no-op afterwards.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_demo_data_is_idempotent(pool: PgPool) {
    assert!(clientele_db::seed::seed_demo_data(&pool).await.unwrap());
    assert!(!clientele_db::seed::seed_demo_data(&pool).await.unwrap());

    let mut conn = pool.acquire().await.unwrap();
    let clients = clientele_db::repositories::ClientRepo::list_with_founders(&mut conn)
        .await
        .unwrap();
    assert_eq!(clients.len(), 2);

    let sole = &clients[0];
    assert_eq!(sole.client.client_type, ClientType::IndividualEntrepreneur);
    assert!(sole.founders.is_empty());

    let legal = &clients[1];
    assert_eq!(legal.client.client_type, ClientType::LegalEntity);
    assert_eq!(legal.founders.len(), 2);
}
