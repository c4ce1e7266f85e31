use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS deals (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            store TEXT NOT NULL,
            current_price REAL NOT NULL,
            original_price REAL NOT NULL,
            hot_votes INTEGER NOT NULL DEFAULT 0,
            cold_votes INTEGER NOT NULL DEFAULT 0,
            comments_count INTEGER NOT NULL DEFAULT 0,
            temperature INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            coupon_code TEXT,
            affiliate_url TEXT,
            image_url TEXT
        );

        CREATE TABLE IF NOT EXISTS votes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            deal_id TEXT NOT NULL REFERENCES deals(id),
            user_id TEXT NOT NULL,
            direction TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS favorites (
            user_id TEXT NOT NULL,
            deal_id TEXT NOT NULL REFERENCES deals(id),
            created_at TEXT NOT NULL,
            PRIMARY KEY (user_id, deal_id)
        );

        CREATE TABLE IF NOT EXISTS comments (
            id TEXT PRIMARY KEY,
            deal_id TEXT NOT NULL REFERENCES deals(id),
            user_id TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_deals_category ON deals(category);
        CREATE INDEX IF NOT EXISTS idx_deals_created ON deals(created_at);
        CREATE INDEX IF NOT EXISTS idx_deals_temperature ON deals(temperature);
        CREATE INDEX IF NOT EXISTS idx_votes_deal ON votes(deal_id);
        CREATE INDEX IF NOT EXISTS idx_comments_deal ON comments(deal_id);
        "
    ).map_err(|e| format!("Migration failed: {e}"))
}
