use crate::{BatchSplitter, RepeatMode, SplitOptions};

#[test]
fn options_load_from_partial_json() {
    let options: SplitOptions =
        serde_json::from_str(r#"{"repeat": "delegate", "keep_comments": true}"#).unwrap();
    assert_eq!(
        options,
        SplitOptions {
            repeat: RepeatMode::Delegate,
            keep_comments: true,
            ..SplitOptions::default()
        }
    );
}

#[test]
fn batches_serialize_with_their_count() {
    let batches = BatchSplitter::default().split("select 1\ngo 2").unwrap();
    let json = serde_json::to_value(&batches[0]).unwrap();
    assert_eq!(json["repeat_count"], 2);
    assert_eq!(json["wrapped"], true);
    assert_eq!(json["line"], 1);
}
