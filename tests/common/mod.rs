// SPDX-License-Identifier: Apache-2.0

use bookstax::{Token, TokenBuffer};
use serde_json::Value;

/// Lowers a `serde_json` fixture into the codec token vocabulary.
///
/// Member order is preserved (the `preserve_order` feature), so fixtures can
/// place members exactly where a test needs them. Panics on values outside
/// the vocabulary; fixtures hold only objects, arrays, strings and i32s.
pub fn tokens_of(value: &Value) -> TokenBuffer {
    let mut tokens = Vec::new();
    push_value(value, &mut tokens);
    TokenBuffer::from_tokens(tokens)
}

fn push_value(value: &Value, tokens: &mut Vec<Token>) {
    match value {
        Value::String(s) => tokens.push(Token::Str(s.clone())),
        Value::Number(n) => {
            let int = n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .unwrap_or_else(|| panic!("fixture number out of i32 range: {n}"));
            tokens.push(Token::Int(int));
        }
        Value::Array(items) => {
            tokens.push(Token::BeginArray);
            for item in items {
                push_value(item, tokens);
            }
            tokens.push(Token::EndArray);
        }
        Value::Object(members) => {
            tokens.push(Token::BeginObject);
            for (name, member) in members {
                tokens.push(Token::Name(name.clone()));
                push_value(member, tokens);
            }
            tokens.push(Token::EndObject);
        }
        other => panic!("fixture value outside the token vocabulary: {other}"),
    }
}
