use anyhow::Result;
use serde_json::Value;
use tempfile::TempDir;

use course_etl::core::export::Exporter;
use course_etl::domain::model::{DEPT_FIELD, REMAIN_FIELD};
use course_etl::{LocalStorage, Record};

fn sample_records() -> Vec<Record> {
    let mut full = Record::new();
    full.insert(DEPT_FIELD, Value::from("AN101"));
    full.insert(REMAIN_FIELD, Value::from(0.0));

    // 不限名額 → null 標記
    let mut unlimited = Record::new();
    unlimited.insert(DEPT_FIELD, Value::from("AN102"));
    unlimited.insert(REMAIN_FIELD, Value::Null);

    vec![full, unlimited]
}

#[tokio::test]
async fn test_export_roundtrip_preserves_records() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = Exporter::new(LocalStorage::new(temp_dir.path().to_str().unwrap()));

    let records = sample_records();
    let written = exporter.export(&records, "AN").await?;
    assert_eq!(written, "AN.json");

    let exported = std::fs::read_to_string(temp_dir.path().join("AN.json"))?;
    let parsed: Vec<Record> = serde_json::from_str(&exported)?;
    assert_eq!(parsed, records);

    // null 標記原樣寫回，中文欄名不被跳脫，縮排為 4 格
    assert!(exported.contains("\"餘額\": null"));
    assert!(exported.contains("    \"系所名稱\": \"AN101\""));
    assert!(!exported.contains("\\u"));

    Ok(())
}

#[tokio::test]
async fn test_export_creates_directory_and_overwrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().join("nested").join("out");
    let exporter = Exporter::new(LocalStorage::new(base.to_str().unwrap()));

    exporter.export(&sample_records(), "AN.json").await?;
    exporter.export(&sample_records()[..1], "AN.json").await?;

    let exported = std::fs::read_to_string(base.join("AN.json"))?;
    let parsed: Vec<Record> = serde_json::from_str(&exported)?;
    assert_eq!(parsed.len(), 1);

    Ok(())
}
