#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/turning_points.db
}

impl TestDb {
    pub fn conn(&self) -> SqliteConnection {
        SqliteConnection::establish(&self.path).expect("connect")
    }

    pub fn add_event(&self, symbol: &str, top: &str, bottom: &str) {
        self.conn()
            .batch_execute(&format!(
                "INSERT INTO top_bottom_indicators_data (top_symbol, top_timestamp, bottom_timestamp)
                 VALUES ('{symbol}', '{top}', '{bottom}');"
            ))
            .expect("insert event");
    }

    pub fn add_series<S: AsRef<str>>(&self, symbol: &str, bars: &[(S, f64)]) {
        let mut sql = format!(
            "CREATE TABLE \"daily_indicators_{symbol}\" (
                timestamp TEXT NOT NULL, open REAL, high REAL, low REAL, close REAL
            );"
        );
        for (ts, close) in bars {
            sql.push_str(&format!(
                "INSERT INTO \"daily_indicators_{symbol}\" VALUES ('{}', {close}, {close}, {close}, {close});",
                ts.as_ref()
            ));
        }
        self.conn().batch_execute(&sql).expect("create series");
    }
}

pub fn setup_db() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("turning_points.db");
    let path = p.to_string_lossy().to_string();

    let mut conn = SqliteConnection::establish(&path).expect("create db");
    conn.batch_execute(
        "CREATE TABLE top_bottom_indicators_data (
            top_symbol TEXT,
            top_timestamp TEXT,
            bottom_timestamp TEXT
        );",
    )
    .expect("create events table");

    TestDb { _dir: dir, path }
}

/// Daily timestamps starting at `start` (YYYY-MM-DD), one per close.
pub fn daily(start: &str, closes: &[f64]) -> Vec<(String, f64)> {
    let base = chrono::NaiveDate::parse_from_str(start, "%Y-%m-%d").expect("date");
    closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let day = base + chrono::TimeDelta::days(i as i64);
            (format!("{day} 00:00:00"), *c)
        })
        .collect()
}
