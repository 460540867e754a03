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

use derive_more::{AsRef, From};
use serde::{Deserialize, Serialize};

/// A priority-ordered list of locale identifiers, most preferred first.
///
/// Model types with locale dependent text pick the first locale they have a
/// translation for. The constructors of the other model types accept the
/// list with the same signature even when, like the warning record, none of
/// their fields depend on it.
#[derive(AsRef, From, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Locales(Vec<String>);

impl Locales {
    pub fn new(locales: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(locales.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Locales {
    fn default() -> Self {
        Self(vec!["en".into()])
    }
}
