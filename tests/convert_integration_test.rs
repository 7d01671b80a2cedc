use anyhow::Result;
use csv_keymap::{convert, write_json, KeyMapping, KeymapError};
use tempfile::TempDir;

/// 測試 第二欄為 key、第一欄為 value
#[test]
fn test_convert_maps_second_column_to_first() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("us_em.csv");
    std::fs::write(&input, "a,b\nc,d\n")?;

    let mapping = convert(&input)?;

    let expected: KeyMapping = [("b", "a"), ("d", "c")].into_iter().collect();
    assert_eq!(mapping, expected);
    Ok(())
}

/// 測試 重複 key 以最後一筆為準
#[test]
fn test_convert_duplicate_key_keeps_last_row() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("dup.csv");
    std::fs::write(&input, "a,b\nc,b\n")?;

    let mapping = convert(&input)?;

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("b"), Some("c"));
    Ok(())
}

/// 測試 欄位不足的列會被略過
#[test]
fn test_convert_skips_single_column_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("mixed.csv");
    std::fs::write(&input, "onlyonecolumn\nApple Inc.,AAPL\n\nTesla,TSLA,extra\n")?;

    let mapping = convert(&input)?;

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("AAPL"), Some("Apple Inc."));
    assert_eq!(mapping.get("TSLA"), Some("Tesla"));
    assert_eq!(mapping.get("onlyonecolumn"), None);
    Ok(())
}

#[test]
fn test_convert_rejects_invalid_utf8() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("latin1.csv");
    std::fs::write(&input, b"Soci\xe9t\xe9 G\xe9n\xe9rale,GLE\n")?;

    let err = convert(&input).unwrap_err();
    assert!(matches!(err, KeymapError::ReadError { .. }));
    Ok(())
}

#[test]
fn test_convert_missing_file_is_read_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let err = convert(temp_dir.path().join("nope.csv")).unwrap_err();

    assert!(matches!(err, KeymapError::ReadError { .. }));
    assert!(err.to_string().contains("nope.csv"));
    Ok(())
}

/// 測試 寫出的 JSON 可以完整還原
#[test]
fn test_write_json_round_trips() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("codes.csv");
    std::fs::write(
        &input,
        "\"Berkshire Hathaway, Inc.\",BRK.A\n中國石油,PTR\nQuote \"\"Co\"\",QQ\n",
    )?;
    let output = temp_dir.path().join("us_em.json");

    let mapping = convert(&input)?;
    write_json(&mapping, &output)?;

    let content = std::fs::read_to_string(&output)?;
    assert!(content.starts_with("{\n  \""));
    let parsed: KeyMapping = serde_json::from_str(&content)?;
    assert_eq!(parsed, mapping);
    assert_eq!(parsed.get("BRK.A"), Some("Berkshire Hathaway, Inc."));
    assert_eq!(parsed.get("PTR"), Some("中國石油"));
    assert_eq!(parsed.get("QQ"), Some("Quote \"Co\""));
    Ok(())
}

#[test]
fn test_write_json_overwrites_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("us_em.json");
    std::fs::write(&output, "stale content that is much longer than the new output")?;

    let mapping: KeyMapping = [("b", "a")].into_iter().collect();
    write_json(&mapping, &output)?;

    assert_eq!(std::fs::read_to_string(&output)?, "{\n  \"b\": \"a\"\n}");
    Ok(())
}

#[test]
fn test_write_json_empty_mapping() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("us_em.json");

    write_json(&KeyMapping::new(), &output)?;

    assert_eq!(std::fs::read_to_string(&output)?, "{}");
    Ok(())
}
