use crate::db::connect;
use crate::task;
use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Test task CRUD operations against a live database
#[tokio::test]
async fn test_task_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    // Create
    let now = Utc::now().into();
    let am = task::ActiveModel {
        body: Set("models crud test".into()),
        archive: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = am.insert(&db).await?;
    assert!(created.id > 0);
    assert!(!created.archive);

    // Read
    let found = task::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("created task should be readable");
    assert_eq!(found.body, "models crud test");

    // Filter on archive flag
    let active = task::Entity::find()
        .filter(task::Column::Archive.eq(false))
        .all(&db)
        .await?;
    assert!(active.iter().any(|t| t.id == created.id));

    // Update
    let mut am: task::ActiveModel = found.into();
    am.body = Set("models crud test (edited)".into());
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.body, "models crud test (edited)");
    assert!(updated.updated_at >= updated.created_at);

    // Delete
    task::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = task::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());

    Ok(())
}
