use serde_json::{json, Value};

pub fn tree_entry_json(path: &str, kind: &str, url: &str) -> Value {
    json!({
        "path": path,
        "mode": "100644",
        "type": kind,
        "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd",
        "url": url,
    })
}

pub fn tree_json(entries: &[Value]) -> Value {
    json!({
        "sha": "9fb037999f264ba9a7fc6274d15fa3ae2ab98312",
        "tree": entries,
        "truncated": false,
    })
}

pub fn blob_json(content: &str) -> Value {
    json!({
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
        "size": content.len(),
        "content": base64::encode(content),
        "encoding": "base64",
    })
}
