#![allow(dead_code)]

use serde_json::{Value, json};

pub fn completion_response(content: &str) -> Value {
    json!({
        "id": "gen-test-1",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "meta-llama/llama-4-maverick",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 60, "completion_tokens": 40, "total_tokens": 100}
    })
}

pub fn sample_poem_response() -> Value {
    completion_response("  Roses are red  ")
}

pub fn sample_regenerate_response() -> Value {
    completion_response("\nThe tide folds silver into night\n")
}

pub fn provider_error_response(message: &str, code: u16) -> Value {
    json!({"error": {"message": message, "code": code}})
}

pub fn provider_error_without_message() -> Value {
    json!({"error": {"code": 502}})
}

pub fn empty_choices_response() -> Value {
    json!({
        "id": "gen-test-2",
        "object": "chat.completion",
        "model": "meta-llama/llama-4-maverick",
        "choices": []
    })
}

pub fn sample_poem_request() -> Value {
    json!({"name": "Ada", "wordCount": 20})
}
