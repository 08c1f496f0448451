#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use tempfile::TempDir;

/// A throwaway turning-point database plus an output directory.
pub struct Fixture {
    pub dir: TempDir,
    pub db: String,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let db = dir.path().join("tp.db").to_string_lossy().to_string();
        let fixture = Self { dir, db };
        fixture.exec(
            "CREATE TABLE top_bottom_indicators_data (
                top_symbol TEXT, top_timestamp TEXT, bottom_timestamp TEXT
            );",
        );
        fixture
    }

    pub fn exec(&self, sql: &str) {
        SqliteConnection::establish(&self.db)
            .expect("connect")
            .batch_execute(sql)
            .expect("exec");
    }

    pub fn event(&self, symbol: &str, top: &str, bottom: &str) -> &Self {
        self.exec(&format!(
            "INSERT INTO top_bottom_indicators_data VALUES ('{symbol}', '{top}', '{bottom}');"
        ));
        self
    }

    /// One bar per day from `start`, all four prices equal to the close.
    pub fn daily(&self, symbol: &str, start: &str, closes: &[f64]) -> &Self {
        let base = chrono::NaiveDate::parse_from_str(start, "%Y-%m-%d").expect("date");
        let mut sql = format!(
            "CREATE TABLE daily_indicators_{symbol} (
                timestamp TEXT, open REAL, high REAL, low REAL, close REAL
            );"
        );
        for (i, c) in closes.iter().enumerate() {
            let day = base + chrono::TimeDelta::days(i as i64);
            sql.push_str(&format!(
                "INSERT INTO daily_indicators_{symbol} VALUES ('{day} 00:00:00', {c}, {c}, {c}, {c});"
            ));
        }
        self.exec(&sql);
        self
    }

    pub fn out_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("out")
    }
}
