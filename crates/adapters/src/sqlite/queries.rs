use rusqlite::{params, Connection, Result};

pub fn load_selection(conn: &Connection) -> Result<Option<i64>> {
    let mut stmt = conn.prepare("SELECT template_id FROM selection WHERE slot = 1")?;
    let mut rows = stmt.query([])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(row.get(0)?));
    }
    Ok(None)
}

pub fn save_selection(conn: &Connection, template_id: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO selection (slot, template_id)
         VALUES (1, ?1)
         ON CONFLICT(slot) DO UPDATE SET template_id = excluded.template_id",
        params![template_id],
    )?;
    Ok(())
}
