// Copyright 2023 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The pre-parsed shape of scoring responses and the shared lookup helpers.

use serde_json::Value;

/// A parsed JSON response fragment as handed to the model constructors.
pub type JsonObject = serde_json::Map<String, Value>;

/// Reads the value at `key`, resolving a missing key to `None`.
pub fn lookup<'a>(fragment: &'a JsonObject, key: &str) -> Option<&'a Value> {
    fragment.get(key)
}

/// Reads the string at `key`.
///
/// Both a missing key and a value of a different JSON type resolve to
/// `None`, nothing at this layer validates single fields.
pub fn lookup_str(fragment: &JsonObject, key: &str) -> Option<String> {
    lookup(fragment, key)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

/// Names the JSON type of `value` for log and error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builds a [`JsonObject`] with `serde_json::json!` syntax.
#[macro_export]
macro_rules! json_object {
    ({ $($tt:tt)* }) => ({
        let ::serde_json::Value::Object(object) = ::serde_json::json!({ $($tt)* }) else {
            ::std::unreachable!(/* the {} enforces it's always an object */);
        };
        object
    });
}

pub use json_object;
