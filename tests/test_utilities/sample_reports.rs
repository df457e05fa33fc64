use sentinel_scan::prelude::*;

/// A completed upload report with findings of every level, listed out of order
pub const REPORT_JSON: &str = r#"{
    "scan_id": "a1b2c3d4e5f6",
    "status": "completed",
    "source": "",
    "files_scanned": 3,
    "summary": {"total": 4, "high": 1, "medium": 1, "low": 1},
    "vulnerabilities": [
        {
            "rule_id": "LOG-004",
            "title": "Sensitive data in logs",
            "severity": "Low",
            "file": "app/log.py",
            "line": 8,
            "column": 1,
            "snippet": "logger.info(password)",
            "description": "Credentials are written to the log",
            "recommendation": "Redact secrets before logging"
        },
        {
            "rule_id": "SQLI-001",
            "title": "SQL injection",
            "severity": "High",
            "file": "app/views.py",
            "line": 42,
            "column": 9,
            "snippet": "cursor.execute(\"SELECT * FROM users WHERE id=\" + uid)",
            "description": "User input is concatenated into a SQL query",
            "recommendation": "Use parameterized queries"
        },
        {
            "rule_id": "XSS-002",
            "title": "Cross-site scripting",
            "severity": "Medium",
            "file": "static/app.js",
            "line": 17,
            "description": "Unescaped user input reaches innerHTML"
        },
        {
            "rule_id": "INFO-009",
            "title": "Debug flag enabled",
            "severity": "Info",
            "file": "settings.py",
            "line": 2
        }
    ]
}"#;

/// A report without findings
pub const CLEAN_REPORT_JSON: &str = r#"{
    "scan_id": "0f0f0f0f0f0f",
    "status": "completed",
    "source": "https://github.com/owner/clean",
    "files_scanned": 12,
    "summary": {"total": 0, "high": 0, "medium": 0, "low": 0},
    "vulnerabilities": []
}"#;

/// A report carrying only a Low finding
pub const LOW_ONLY_REPORT_JSON: &str = r#"{
    "scan_id": "lowlowlow000",
    "source": "upload",
    "files_scanned": 1,
    "vulnerabilities": [
        {
            "rule_id": "LOG-004",
            "title": "Sensitive data in logs",
            "severity": "Low",
            "file": "app/log.py",
            "line": 8
        }
    ]
}"#;

pub fn history_json() -> String {
    format!("[{}, {}]", REPORT_JSON, CLEAN_REPORT_JSON)
}

pub fn sample_report() -> ScanReport {
    serde_json::from_str(REPORT_JSON).unwrap()
}

pub fn clean_report() -> ScanReport {
    serde_json::from_str(CLEAN_REPORT_JSON).unwrap()
}
