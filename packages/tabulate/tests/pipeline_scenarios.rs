//! End-to-end extraction runs against a scripted LLM.
//!
//! Each test drives the full pipeline:
//! 1. Validate input and build the prompt
//! 2. Call the LLM
//! 3. Sanitize and decode the reply
//! 4. Build the table and export it

use serde_json::json;
use tabulate::{
    testing::MockLlm, ExportFormat, Extractor, ExtractorConfig, SanitizeRule, TabulateError,
};

/// Helper to build an extractor with queued replies.
fn extractor_with(replies: &[&str]) -> Extractor<MockLlm> {
    let llm = replies
        .iter()
        .fold(MockLlm::new(), |llm, reply| llm.with_response(*reply));
    Extractor::new(llm)
}

#[tokio::test]
async fn test_fenced_reply_exports_csv() {
    let extractor = extractor_with(&["```json\n[{\"name\": \"Widget\", \"price\": 9.99}]\n```"]);

    let (extraction, payload) = extractor
        .extract_and_export("The Widget sells for $9.99.", ExportFormat::Csv)
        .await
        .unwrap();

    assert_eq!(extraction.rule, SanitizeRule::Fenced);
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.table.columns(), &["name", "price"]);
    assert_eq!(extraction.row_count(), 1);
    assert_eq!(payload.text(), "name,price\nWidget,9.99\n");
    assert_eq!(payload.file_name, "extracted_data.csv");
}

#[tokio::test]
async fn test_prose_wrapped_array_is_tabulated() {
    let extractor = extractor_with(&[r#"Here is the data: [{"a":1},{"b":2}]"#]);

    let extraction = extractor.extract("a is 1, b is 2").await.unwrap();

    assert_eq!(extraction.rule, SanitizeRule::Bracketed);
    assert_eq!(extraction.table.columns(), &["a", "b"]);
    assert_eq!(extraction.table.rows()[0], vec![Some(json!(1)), None]);
    assert_eq!(extraction.table.rows()[1], vec![None, Some(json!(2))]);
}

#[tokio::test]
async fn test_refusal_is_decode_error_with_raw_reply() {
    let extractor = extractor_with(&["Sorry, I cannot process this."]);

    let err = extractor.extract("some text").await.unwrap_err();

    assert!(matches!(err, TabulateError::Decode { .. }));
    assert_eq!(err.raw_response(), Some("Sorry, I cannot process this."));
}

#[tokio::test]
async fn test_fenced_object_reply_is_decode_error() {
    let reply = "```json\n{\"count\": 2, \"items\": [{\"a\": 1}, {\"a\": 2}]}\n```";
    let extractor = extractor_with(&[reply]);

    let err = extractor.extract("two items").await.unwrap_err();

    assert!(matches!(err, TabulateError::Decode { .. }));
    assert_eq!(err.raw_response(), Some(reply));
}

#[tokio::test]
async fn test_blank_input_never_calls_llm() {
    let extractor = extractor_with(&["[]"]);

    let err = extractor.extract("   ").await.unwrap_err();

    assert!(matches!(err, TabulateError::EmptyInput));
    assert_eq!(extractor.llm().call_count(), 0);
    assert_eq!(extractor.llm().remaining(), 1);
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let extractor = Extractor::new(MockLlm::new().with_failure("401 invalid api key"));

    let err = extractor.extract("some text").await.unwrap_err();

    assert_eq!(err.kind(), "provider");
    assert!(err.to_string().contains("invalid api key"));
    assert!(err.raw_response().is_none());
}

#[tokio::test]
async fn test_prompt_embeds_input_and_hints() {
    let config = ExtractorConfig::default().with_hints(["sku", "stock level"]);
    let extractor = Extractor::with_config(MockLlm::new().with_response("[]"), config);

    extractor.extract("SKU-42: 17 in stock").await.unwrap();

    let prompts = extractor.llm().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("SKU-42: 17 in stock"));
    assert!(prompts[0].contains("sku, stock level"));
}

#[tokio::test]
async fn test_empty_array_yields_empty_exports() {
    let extractor = extractor_with(&["[]", "[]"]);

    let (extraction, csv) = extractor
        .extract_and_export("nothing here", ExportFormat::Csv)
        .await
        .unwrap();
    assert!(extraction.is_empty());
    assert!(csv.bytes.is_empty());

    let (_, json) = extractor
        .extract_and_export("nothing here", ExportFormat::Json)
        .await
        .unwrap();
    assert_eq!(json.text(), "[]");
}

#[tokio::test]
async fn test_multiple_arrays_flag_ambiguity() {
    let extractor = extractor_with(&[r#"Products: [{"a":1}] and also [{"b":2}]"#]);

    let err = extractor.extract("two lists").await.unwrap_err();

    // The greedy span "[{"a":1}] and also [{"b":2}]" is not valid JSON.
    assert_eq!(err.kind(), "decode");
    assert!(err.to_string().contains("more than one top-level array"));
}

#[tokio::test]
async fn test_nested_arrays_are_not_ambiguous() {
    let extractor = extractor_with(&[r#"Result: [{"tags": ["x", "y"]}, {"tags": []}]"#]);

    let extraction = extractor.extract("tagged").await.unwrap();

    assert_eq!(extraction.rule, SanitizeRule::Bracketed);
    assert_eq!(extraction.table.get(0, "tags"), Some(&json!(["x", "y"])));
}

#[tokio::test]
async fn test_json_export_round_trips_records() {
    let reply = r#"[{"title": "Lamp", "price": 20, "sale": null}, {"title": "Desk", "color": "oak"}]"#;
    let extractor = extractor_with(&[reply]);

    let (extraction, payload) = extractor
        .extract_and_export("furniture list", ExportFormat::Json)
        .await
        .unwrap();

    let decoded: serde_json::Value = serde_json::from_slice(&payload.bytes).unwrap();
    assert_eq!(decoded, serde_json::to_value(&extraction.records).unwrap());
    assert_eq!(payload.mime_type, "application/json");
}

#[tokio::test]
async fn test_prompt_hash_is_stable() {
    let a = extractor_with(&["[]"]).extract("x").await.unwrap();
    let b = extractor_with(&["[]"]).extract("y").await.unwrap();

    assert_eq!(a.prompt_hash, b.prompt_hash);
    assert_eq!(a.prompt_hash.len(), 64);
}
