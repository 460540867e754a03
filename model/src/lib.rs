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

//! Typed models for the response surface of the minFraud risk scoring service.
//!
//! The service reports data quality issues as a `warnings` array next to the
//! scores. This crate covers that surface: the [`warning::Warning`] record,
//! the safe lookup helpers in [`json`] shared by all model types, and the
//! [`locale::Locales`] priority list forwarded through the model
//! constructors.
//!
//! Transport and body parsing live with the caller, all constructors here
//! take already parsed [`json::JsonObject`] fragments.

pub mod json;
pub mod locale;
pub mod warning;

pub use crate::{locale::Locales, warning::Warning};
