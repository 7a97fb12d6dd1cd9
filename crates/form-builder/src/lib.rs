//! # form-builder
//!
//! Turn a struct into an ordered list of HTML form fields.
//!
//! ```rust
//! use form_builder::{Form, FieldTemplate, FieldError};
//!
//! #[derive(Form, Default)]
//! struct Address {
//!     pub street: String,
//!     #[form("label=ZIP;type=number")]
//!     pub zip: u32,
//! }
//!
//! #[derive(Form)]
//! struct Signup {
//!     #[form("label=Full Name;placeholder=Jane Doe")]
//!     pub name: String,
//!     #[form("type=email")]
//!     pub email: String,
//!     pub address: Option<Address>,
//!     password_hash: String,
//! }
//!
//! let signup = Signup {
//!     name: "Alice Smith".into(),
//!     email: "alice@cc.cc".into(),
//!     address: None,
//!     password_hash: String::new(),
//! };
//! # let _ = &signup.password_hash;
//!
//! let fields = form_builder::fields(&signup).unwrap();
//! let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["name", "email", "address.street", "address.zip"]);
//!
//! let tpl = FieldTemplate::new(r#"<input type="{type}" name="{name}" {value_attr}>"#);
//! let errors = [FieldError::new("email", "already taken")];
//! let html = form_builder::render(&tpl, &signup, &errors).unwrap();
//! assert!(html.into_string().starts_with(r#"<input type="text" name="name" value="Alice Smith">"#));
//! ```
//!
//! ## Tags
//!
//! `#[form("key=value;key=value")]` overrides `label`, `name`, `type` and
//! `placeholder`. A `name` tag replaces the whole dotted path, ancestor
//! prefix included. Unknown keys are ignored unless
//! [`ExtractConfig::strict_tags`] is set.
//!
//! ## Architecture
//!
//! - [`introspect`] - the [`Introspectable`] / [`FormValue`] traits the walk runs over
//! - [`extract`] - the recursive field extractor
//! - [`tag`] - tag parsing
//! - [`render`](mod@render) - error attachment and per-field templates

// Lets `#[derive(Form)]` output refer to `::form_builder` inside this crate too.
extern crate self as form_builder;

pub mod config;
pub mod error;
pub mod extract;
pub mod field;
pub mod introspect;
pub mod render;
pub mod tag;
pub mod value;

// Re-export derive macro
pub use form_builder_derive::Form;

pub use config::{ExtractConfig, FormConfig};
pub use error::{FormError, Result};
pub use extract::{extract, fields, Extractor};
pub use field::Field;
pub use introspect::{FormValue, Introspectable, Member, Node, Visibility};
pub use render::{attach_errors, field_errors_from_map, render, FieldError, FieldTemplate, Template};
pub use tag::Tag;
pub use value::Value;

// Re-export Maud for templates
pub use maud::{html as maud, Markup, PreEscaped};
