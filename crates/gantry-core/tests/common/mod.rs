use gantry_core::{IdStrategy, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a planner seeded with the default plan
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_id_strategy(IdStrategy::Sequential)
        .seed_default_plan(true)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
