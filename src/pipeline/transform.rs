//! Document transform: parse, drop keys, serialize
//!
//! Two codecs exist and one is picked per run from [`CommentMode`]:
//! - [`StrictJson`]: whole-line `//` comments are dropped, then the text is parsed as
//!   plain JSON and pretty-printed with 2-space indentation.
//! - [`CommentJson`]: the text is parsed into a JSONC syntax tree, keys are cut out of
//!   the tree, and the tree is printed back with 2-space indentation and its comments
//!   in place.

use jsonc_parser::cst::CstRootNode;
use jsonc_parser::ParseOptions;
use serde_json::{Number, Value};

use crate::config::{CommentMode, SessionConfig};
use crate::error::{Result, TsbaseError};
use crate::pipeline::decode::decode_content;
use crate::pipeline::fetch::RemoteFileContent;
use crate::pipeline::pretty::print_jsonc;

/// Parser and serializer pair used for a whole run
pub trait DocumentCodec {
    type Document;

    fn parse(text: &str) -> Result<Self::Document>;

    /// Remove a key from the top-level object. Returns whether it was present.
    fn remove_top_level(doc: &mut Self::Document, key: &str) -> bool;

    fn serialize(doc: &Self::Document) -> Result<String>;
}

/// Plain JSON after comment-line stripping
pub struct StrictJson;

impl DocumentCodec for StrictJson {
    type Document = Value;

    fn parse(text: &str) -> Result<Value> {
        let stripped = strip_comment_lines(text);
        let mut doc = serde_json::from_str(&stripped)?;
        integral_floats_to_ints(&mut doc);
        Ok(doc)
    }

    fn remove_top_level(doc: &mut Value, key: &str) -> bool {
        doc.as_object_mut()
            .and_then(|map| map.shift_remove(key))
            .is_some()
    }

    fn serialize(doc: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(doc)?)
    }
}

/// Largest integer an `f64` holds exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rewrite floats with no fractional part as integers, so `1e3` prints as `1000` and
/// `1.0` as `1`.
fn integral_floats_to_ints(value: &mut Value) {
    match value {
        Value::Number(number) if number.is_f64() => {
            let float = number.as_f64().unwrap_or(f64::NAN);
            if float.fract() == 0.0 && float.abs() < MAX_SAFE_INTEGER {
                *number = Number::from(float as i64);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_to_ints),
        Value::Object(map) => map.values_mut().for_each(integral_floats_to_ints),
        _ => {}
    }
}

/// Comment-preserving JSONC
pub struct CommentJson;

impl DocumentCodec for CommentJson {
    type Document = CstRootNode;

    fn parse(text: &str) -> Result<CstRootNode> {
        CstRootNode::parse(text, &ParseOptions::default())
            .map_err(|e| TsbaseError::CommentParse(e.to_string()))
    }

    fn remove_top_level(doc: &mut CstRootNode, key: &str) -> bool {
        match doc.object_value().and_then(|obj| obj.get(key)) {
            Some(prop) => {
                prop.remove();
                true
            }
            None => false,
        }
    }

    fn serialize(doc: &CstRootNode) -> Result<String> {
        Ok(print_jsonc(doc))
    }
}

/// Drop every line whose trimmed text starts with `//`.
///
/// Only whole-line comments go. A comment trailing a value on the same line, or a
/// block comment, is left in place and will fail strict parsing.
pub fn strip_comment_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode a fetched base and apply the session's choices to it
pub fn transform(file: &RemoteFileContent, cfg: &SessionConfig) -> Result<String> {
    let text = decode_content(file)?;
    let mode = cfg.comment_mode();
    tracing::debug!(?mode, "transforming document");

    match mode {
        CommentMode::Strip => transform_text::<StrictJson>(&text, cfg),
        CommentMode::Preserve => transform_text::<CommentJson>(&text, cfg),
    }
}

/// Parse `text` with codec `C`, drop the configured keys and serialize
pub fn transform_text<C: DocumentCodec>(text: &str, cfg: &SessionConfig) -> Result<String> {
    let mut doc = C::parse(text)?;

    for key in cfg.keys_to_remove() {
        if C::remove_top_level(&mut doc, key) {
            tracing::debug!(key, "removed top-level key");
        }
    }

    C::serialize(&doc)
}
