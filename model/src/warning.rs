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

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::{
    json::{lookup, lookup_str, type_name, JsonObject},
    locale::Locales,
};

/// The machine readable codes the service currently documents.
///
/// The set is open: the service may add codes at any time, callers must not
/// treat it as closed and nothing in this crate validates against it.
pub mod codes {
    /// The billing city could not be found in the database.
    pub const BILLING_CITY_NOT_FOUND: &str = "BILLING_CITY_NOT_FOUND";
    /// The billing country could not be found in the database.
    pub const BILLING_COUNTRY_NOT_FOUND: &str = "BILLING_COUNTRY_NOT_FOUND";
    /// The billing postal could not be found in the database.
    pub const BILLING_POSTAL_NOT_FOUND: &str = "BILLING_POSTAL_NOT_FOUND";
    /// The value does not meet the constraints of its key, e.g. "United
    /// States" in a field that requires a two-letter country code.
    pub const INPUT_INVALID: &str = "INPUT_INVALID";
    /// An unknown key was encountered in the request body.
    pub const INPUT_UNKNOWN: &str = "INPUT_UNKNOWN";
    /// The IP address could not be geolocated.
    pub const IP_ADDRESS_NOT_FOUND: &str = "IP_ADDRESS_NOT_FOUND";
    /// The shipping city could not be found in the database.
    pub const SHIPPING_CITY_NOT_FOUND: &str = "SHIPPING_CITY_NOT_FOUND";
    /// The shipping country could not be found in the database.
    pub const SHIPPING_COUNTRY_NOT_FOUND: &str = "SHIPPING_COUNTRY_NOT_FOUND";
    /// The shipping postal could not be found in the database.
    pub const SHIPPING_POSTAL_NOT_FOUND: &str = "SHIPPING_POSTAL_NOT_FOUND";
}

/// A single advisory entry from the `warnings` array of a scoring response.
///
/// Warnings point at data quality or input issues, they do not by themselves
/// indicate fraud risk. The record is populated once from a response
/// fragment and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Warning {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_pointer: Option<String>,
}

impl Warning {
    /// Populates a warning from one pre-parsed entry of the `warnings` array.
    ///
    /// Every key is optional, absent keys resolve to `None` and the present
    /// values are stored verbatim. The locales are accepted for consistency
    /// with the sibling model constructors, no field of this record depends
    /// on them.
    pub fn from_fragment(fragment: &JsonObject, _locales: &Locales) -> Self {
        Self {
            code: lookup_str(fragment, "code"),
            warning: lookup_str(fragment, "warning"),
            input_pointer: lookup_str(fragment, "input_pointer"),
        }
    }

    /// Slices all warnings out of a whole response fragment.
    ///
    /// A response without a `warnings` key has zero warnings. A `warnings`
    /// value of the wrong shape is a malformed response and surfaces as an
    /// [`Error`] instead of being silently dropped.
    pub fn from_response(response: &JsonObject, locales: &Locales) -> Result<Vec<Self>, Error> {
        let Some(warnings) = lookup(response, "warnings") else {
            return Ok(Vec::new());
        };
        let Value::Array(warnings) = warnings else {
            warn!(found = %warnings, "the \"warnings\" field is not an array");
            return Err(Error::WarningsNotAnArray(type_name(warnings)));
        };
        warnings
            .iter()
            .map(|entry| {
                if let Value::Object(fragment) = entry {
                    Ok(Self::from_fragment(fragment, locales))
                } else {
                    warn!(entry = %entry, "a \"warnings\" entry is not a JSON object");
                    Err(Error::WarningNotAnObject(type_name(entry)))
                }
            })
            .collect()
    }

    /// The machine readable code identifying the warning, cf. [`codes`] for
    /// the currently documented values.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// A human readable explanation of the warning.
    ///
    /// The wording may change at any time and must not be matched against.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// A JSON Pointer to the request field the warning is associated with.
    ///
    /// For instance `/billing/city` for the billing city, or
    /// `/shopping_cart/1/price` for the price of the second shopping cart
    /// item.
    pub fn input_pointer(&self) -> Option<&str> {
        self.input_pointer.as_deref()
    }

    /// The stored pointer decoded into its path segments.
    ///
    /// Applies the RFC 6901 `~1`/`~0` unescaping to each segment, the
    /// pointer returned by [`Self::input_pointer`] stays verbatim.
    pub fn input_pointer_segments(&self) -> Option<Vec<String>> {
        self.input_pointer.as_deref().map(|pointer| {
            pointer
                .split('/')
                .skip(1)
                // ~1 before ~0, otherwise ~01 would decode to /
                .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
                .collect()
        })
    }
}

/// Failures raised while slicing warnings out of a malformed response.
#[derive(Debug, Error, displaydoc::Display, PartialEq, Eq)]
pub enum Error {
    /// the "warnings" field of the response is {0}, expected an array
    WarningsNotAnArray(&'static str),
    /// a "warnings" entry is {0}, expected a JSON object
    WarningNotAnObject(&'static str),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::json_object;

    #[test]
    fn fully_populated_fragment_round_trips() {
        let fragment = json_object!({
            "code": "INPUT_INVALID",
            "warning": "x is bad",
            "input_pointer": "/billing/city",
        });
        let warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(warning.code(), Some("INPUT_INVALID"));
        assert_eq!(warning.warning(), Some("x is bad"));
        assert_eq!(warning.input_pointer(), Some("/billing/city"));
    }

    #[test]
    fn missing_keys_resolve_to_absent() {
        let fragment = json_object!({ "code": "IP_ADDRESS_NOT_FOUND" });
        let warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(warning.code(), Some(codes::IP_ADDRESS_NOT_FOUND));
        assert_eq!(warning.warning(), None);
        assert_eq!(warning.input_pointer(), None);
    }

    #[test]
    fn empty_fragment_resolves_all_fields_to_absent() {
        let warning = Warning::from_fragment(&json_object!({}), &Locales::default());
        assert_eq!(warning.code(), None);
        assert_eq!(warning.warning(), None);
        assert_eq!(warning.input_pointer(), None);
    }

    #[test]
    fn construction_does_not_mutate_the_fragment() {
        let fragment = json_object!({
            "code": "INPUT_UNKNOWN",
            "warning": "unknown key",
            "input_pointer": "/device/ip_adress",
        });
        let before = fragment.clone();
        let _warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(fragment, before);
    }

    #[test]
    fn unlisted_codes_are_stored_verbatim() {
        let fragment = json_object!({ "code": "PHONE_NUMBER_NOT_FOUND" });
        let warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(warning.code(), Some("PHONE_NUMBER_NOT_FOUND"));
    }

    #[test]
    fn response_without_warnings_has_zero_warnings() {
        let response = json_object!({ "risk_score": 0.01 });
        let warnings = Warning::from_response(&response, &Locales::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn response_warnings_are_sliced_in_order() {
        let response = json_object!({
            "warnings": [
                { "code": "BILLING_CITY_NOT_FOUND", "input_pointer": "/billing/city" },
                { "warning": "something else" },
                {},
            ],
        });
        let warnings = Warning::from_response(&response, &Locales::default()).unwrap();
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0].code(), Some(codes::BILLING_CITY_NOT_FOUND));
        assert_eq!(warnings[0].input_pointer(), Some("/billing/city"));
        assert_eq!(warnings[1].warning(), Some("something else"));
        assert_eq!(warnings[2].code(), None);
    }

    #[test]
    fn non_array_warnings_field_is_an_error() {
        let response = json_object!({ "warnings": "BILLING_CITY_NOT_FOUND" });
        assert_eq!(
            Warning::from_response(&response, &Locales::default()),
            Err(Error::WarningsNotAnArray("a string")),
        );
    }

    #[test]
    fn non_object_warnings_entry_is_an_error() {
        let response = json_object!({ "warnings": [42] });
        assert_eq!(
            Warning::from_response(&response, &Locales::default()),
            Err(Error::WarningNotAnObject("a number")),
        );
    }

    #[test]
    fn pointer_segments_are_decoded() {
        let fragment = json_object!({ "input_pointer": "/shopping_cart/1/price" });
        let warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(
            warning.input_pointer_segments().unwrap(),
            ["shopping_cart", "1", "price"],
        );
    }

    #[test]
    fn pointer_segments_unescape_rfc_6901() {
        let fragment = json_object!({ "input_pointer": "/a~1b/m~0n/x~01" });
        let warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(
            warning.input_pointer_segments().unwrap(),
            ["a/b", "m~n", "x~1"],
        );
    }

    #[test]
    fn absent_fields_are_skipped_when_serializing() {
        let fragment = json_object!({ "code": "INPUT_INVALID" });
        let warning = Warning::from_fragment(&fragment, &Locales::default());
        assert_eq!(
            serde_json::to_value(warning).unwrap(),
            json!({ "code": "INPUT_INVALID" }),
        );
    }
}
