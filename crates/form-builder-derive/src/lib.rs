// form-builder Procedural Macros

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod form;

/// Derive macro for form field extraction
///
/// Generates `Introspectable` and `FormValue` implementations so the struct
/// can be handed to `form_builder::fields` / `form_builder::render`, or used
/// as a nested member of another form.
///
/// # Example
///
/// ```ignore
/// use form_builder::Form;
///
/// #[derive(Form, Default)]
/// struct Address {
///     pub street: String,
///     pub city: String,
/// }
///
/// #[derive(Form)]
/// struct Profile {
///     #[form("label=Full Name;placeholder=Jane Doe")]
///     pub name: String,
///
///     #[form("type=email")]
///     pub email: String,
///
///     // Flattened as address.street, address.city; fields still appear when None
///     pub address: Option<Address>,
///
///     // Not pub: never becomes a field
///     session_token: String,
/// }
/// ```
///
/// # Rules
///
/// - Only structs with named fields are supported
/// - Only `pub` fields become members; everything else is private
/// - The member name is the field identifier as written (`r#` stripped)
/// - `#[form("...")]` carries the raw tag; it is parsed at extraction time
/// - Types used inside `Option` must implement `Default`
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    form::impl_form(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
