use binart_paint::rle::{self, RleError};

#[test]
fn test_every_run_gets_a_count() {
    assert_eq!(rle::compress("abc"), "a1|b1|c1");
    assert_eq!(rle::compress("aaab"), "a3|b1");
    assert_eq!(rle::compress(""), "");
}

#[test]
fn test_long_runs_and_digit_literals() {
    let text = format!("{}{}", "0".repeat(12), "1".repeat(3));
    let compressed = rle::compress(&text);

    assert_eq!(compressed, "012|13");
    assert_eq!(rle::decompress(&compressed), text);
}

#[test]
fn test_decompress_skips_malformed_tokens() {
    // "x" has no count, "yz" has a non-numeric count, the empty token is dropped
    assert_eq!(rle::decompress("a2|x||yz|b1"), "aab");
}

#[test]
fn test_json_payload_survives() {
    let json = r#"[{"tool":"text","text":"hello   world","x":10,"y":20}]"#;
    assert_eq!(rle::decompress(&rle::compress(json)), json);
}

#[test]
fn test_decompress_limited_refuses_blowups() {
    assert_eq!(rle::decompress_limited("a5|b5", 10).unwrap(), "aaaaabbbbb");
    assert_eq!(
        rle::decompress_limited("a999999999", 1024),
        Err(RleError::TooLarge { limit: 1024 })
    );
}
