use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use toolkit::wisdom::PLACEHOLDER_WISDOM;
use toolkit::{base64, json, Base64Mode, PlaceholderWisdom, ToolError, ToolKind, UtmParams, WisdomSource};

#[test]
fn test_base64_encode() {
    assert_eq!(base64::encode("hello"), "aGVsbG8=");
    assert_eq!(base64::encode("héllo ✓"), "aMOpbGxvIOKckw==");
}

#[test]
fn test_base64_decode() {
    assert_eq!(base64::decode("aGVsbG8=").unwrap(), "hello");
    assert_eq!(base64::decode("  aMOpbGxvIOKckw==\n").unwrap(), "héllo ✓");
}

#[test]
fn test_base64_decode_errors() {
    assert!(matches!(
        base64::decode("not base64!"),
        Err(ToolError::InvalidBase64(_))
    ));

    // 0xff 0xfe is not UTF-8
    assert!(matches!(base64::decode("//4="), Err(ToolError::InvalidUtf8(_))));
}

#[test]
fn test_base64_apply() {
    let encoded = base64::apply(Base64Mode::Encode, "swap me").unwrap();
    let decoded = base64::apply(Base64Mode::Decode, &encoded).unwrap();
    assert_eq!(decoded, "swap me");
}

#[test]
fn test_json_format_keeps_key_order() {
    let formatted = json::format(r#"{"b":1,"a":[true,null,{"z":"x"}]}"#).unwrap();

    assert_snapshot!(formatted, @r###"
    {
      "b": 1,
      "a": [
        true,
        null,
        {
          "z": "x"
        }
      ]
    }
    "###);
}

#[test]
fn test_json_format_sorted_and_minify() {
    let input = r#"{ "b": {"d": 1, "c": 2}, "a": 0 }"#;

    assert_eq!(json::minify(input).unwrap(), r#"{"b":{"d":1,"c":2},"a":0}"#);
    assert_eq!(
        json::format_sorted(input).unwrap(),
        "{\n  \"a\": 0,\n  \"b\": {\n    \"c\": 2,\n    \"d\": 1\n  }\n}"
    );
}

#[test]
fn test_json_errors() {
    assert!(matches!(json::format("   "), Err(ToolError::EmptyInput)));

    let err = json::format("{\"a\": }").unwrap_err();
    assert!(matches!(err, ToolError::InvalidJson(_)));
    assert!(err.to_string().starts_with("invalid JSON:"));
}

#[test]
fn test_utm_build() {
    let params = UtmParams {
        source: "google".to_string(),
        medium: "cpc".to_string(),
        campaign: "spring sale".to_string(),
        ..Default::default()
    };

    let url = params.build("https://example.com").unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/?utm_source=google&utm_medium=cpc&utm_campaign=spring+sale"
    );
}

#[test]
fn test_utm_keeps_existing_query() {
    let params = UtmParams {
        content: "hero".to_string(),
        ..Default::default()
    };

    let url = params.build("https://example.com/page?id=7").unwrap();
    assert_eq!(url.as_str(), "https://example.com/page?id=7&utm_content=hero");
}

#[test]
fn test_utm_without_params_leaves_url_alone() {
    let url = UtmParams::default().build("https://example.com/a").unwrap();
    assert_eq!(url.as_str(), "https://example.com/a");
}

#[test]
fn test_utm_invalid_url() {
    let result = UtmParams::default().build("example.com");
    assert!(matches!(result, Err(ToolError::InvalidUrl(_))));
}

#[test]
fn test_placeholder_wisdom() {
    let source = PlaceholderWisdom;

    assert_eq!(source.generate("what is rust?").unwrap(), PLACEHOLDER_WISDOM);
    assert!(matches!(source.generate("  "), Err(ToolError::EmptyInput)));
}

#[test]
fn test_catalog() {
    assert_eq!(ToolKind::ALL.len(), 5);
    assert_eq!(ToolKind::Diff.to_string(), "Diff Tool");
    assert_eq!(ToolKind::Diff.route(), "/difftool");
    assert!(ToolKind::Wisdom.is_external());
    assert_eq!(ToolKind::from_slot("utm"), Some(ToolKind::UtmBuilder));
    assert_eq!(ToolKind::from_slot("drawer"), None);
}
