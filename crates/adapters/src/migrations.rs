pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS selection (
        slot INTEGER PRIMARY KEY CHECK (slot = 1),
        template_id INTEGER NOT NULL
    );"];
