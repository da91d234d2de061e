pub const BASE_MIGRATION: &str = r#"
CREATE TABLE IF NOT EXISTS kv_slots (
    slot TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
