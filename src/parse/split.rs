// src/parse/split.rs

use super::Record;

/// Header line plus at least one data line, split on bare commas.
///
/// Every line is trimmed, every field is trimmed. Fewer than two lines gives
/// an empty result rather than an error. A leading byte-order mark is dropped.
pub fn parse_split(text: &str) -> Vec<Record> {
    let text = text.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = text.trim().split('\n').map(str::trim).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    lines[1..]
        .iter()
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            Record::from_row(&headers, &values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "攤位名稱,區域,商品類型,時間,攤位圖片,攤位介紹連結,攤位編號
老王雜貨,A區,二手商品,10:00-16:00,/img/wang.jpg,https://example.com/wang,A01
小美手作,C區,自創商品,12:00-18:00,,https://example.com/mei,C07
";

    #[test]
    fn test_n_lines_give_n_records_with_header_keys() {
        let records = parse_split(SAMPLE);
        assert_eq!(records.len(), 2);

        let expected = vec![
            "攤位名稱",
            "區域",
            "商品類型",
            "時間",
            "攤位圖片",
            "攤位介紹連結",
            "攤位編號",
        ];
        for rec in &records {
            let keys: Vec<&str> = rec.keys().collect();
            assert_eq!(keys, expected);
        }

        assert_eq!(records[0].get("攤位名稱"), Some("老王雜貨"));
        assert_eq!(records[1].get("攤位編號"), Some("C07"));
        // present but empty
        assert_eq!(records[1].get("攤位圖片"), Some(""));
    }

    #[test]
    fn test_fewer_than_two_lines_is_empty() {
        assert!(parse_split("").is_empty());
        assert!(parse_split("   \n  ").is_empty());
        assert!(parse_split("攤位名稱,區域").is_empty());
        assert!(parse_split("攤位名稱,區域\n").is_empty());
    }

    #[test]
    fn test_trailing_missing_value_is_absent() {
        let records = parse_split("攤位名稱,區域,攤位編號\n老王雜貨,A區");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("區域"), Some("A區"));
        assert_eq!(records[0].get("攤位編號"), None);
    }

    #[test]
    fn test_whitespace_and_crlf_are_trimmed() {
        let records = parse_split("  攤位名稱 , 區域 \r\n 老王雜貨 ,  B區 \r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("攤位名稱"), Some("老王雜貨"));
        assert_eq!(records[0].get("區域"), Some("B區"));
    }

    #[test]
    fn test_leading_bom_is_not_part_of_first_header() {
        let records = parse_split("\u{feff}攤位名稱,區域\n老王雜貨,A區\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["攤位名稱", "區域"]);
        assert_eq!(records[0].get("攤位名稱"), Some("老王雜貨"));
    }

    #[test]
    fn test_embedded_comma_mis_splits() {
        let records = parse_split("攤位名稱,區域\n\"王, 老\",A區");
        assert_eq!(records[0].get("攤位名稱"), Some("\"王"));
        assert_eq!(records[0].get("區域"), Some("老\""));
    }

    #[test]
    fn test_blank_interior_line_still_yields_a_record() {
        let records = parse_split("攤位名稱,區域\n老王雜貨,A區\n\n小美手作,C區");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].get("攤位名稱"), Some(""));
        assert_eq!(records[1].get("區域"), None);
    }
}
