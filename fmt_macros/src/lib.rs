// Copyright 2024 The Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! Proc macros that check a `fmt`-style format string literal against its
//! argument count at compile time, then expand to calls into the `fmt`
//! crate's runtime driver.
//!
//! Only the argument *count* a format string requires is checked here —
//! whether a given field's fill, sign, or presentation type is valid for the
//! argument's *type* can't be known until the argument expressions are
//! evaluated, so that check still happens inside `fmt::format`/
//! `fmt::format_to` at render time. This mirrors `fmt`'s own split between a
//! parse-time error (caught early, here at compile time for arity) and a
//! value-level error (caught once the value exists).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Expr, LitStr, Token,
};

/// A parsed `(format_string, arg, arg, ...)` invocation.
struct FormatAndArgs {
    format_string: LitStr,
    args: Vec<Expr>,
}

impl Parse for FormatAndArgs {
    fn parse(input: ParseStream) -> syn::parse::Result<Self> {
        let format_string: LitStr = input.parse()?;

        let args = if input.is_empty() {
            Vec::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::<Expr, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect()
        };

        let required = fmt::ParsedFormat::required_argument_count(&format_string.value())
            .map_err(|e| syn::Error::new_spanned(&format_string, e.message()))?;

        if required != args.len() {
            return Err(syn::Error::new_spanned(
                &format_string,
                format!(
                    "format string requires {required} argument(s), but {} were given",
                    args.len()
                ),
            ));
        }

        Ok(FormatAndArgs { format_string, args })
    }
}

// Plain method-call syntax (rather than a fully qualified `IntoValue::
// into_value(&expr)`) is deliberate: it lets ordinary autoref/autoderef
// pick the right receiver for both by-value arguments (`1.into_value()`,
// receiver `&i32`) and already-by-reference ones (`"a".into_value()`,
// receiver `&str` found by dereferencing once). A fully qualified call
// would need to guess which reference depth to add per argument. The
// `use` is scoped to the generated block so it never leaks the trait
// into the caller's namespace.
fn values_array(args: &[Expr]) -> TokenStream2 {
    quote! {
        [ #( (#args).into_value() ),* ]
    }
}

/// Checks `format_string` against its arguments' count at compile time, and
/// expands to a runtime call to [`fmt::format`], returning a `String`.
///
/// ```ignore
/// let s = fmt_macros::format!("{} and {}", 1, 2);
/// assert_eq!(s, "1 and 2");
/// ```
#[proc_macro]
pub fn format(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as FormatAndArgs);
    let format_string = input.format_string;
    let values = values_array(&input.args);

    quote! {
        {
            use fmt::IntoValue as _;
            fmt::format(#format_string, &#values)
        }
    }
    .into()
}

/// Checks `format_string` against its arguments' count at compile time, and
/// expands to a runtime call to [`fmt::format_to`], writing into `writer`.
///
/// ```ignore
/// let mut buf = String::new();
/// fmt_macros::format_to!(&mut buf, "{}", 42).unwrap();
/// ```
#[proc_macro]
pub fn format_to(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as WriterFormatAndArgs);
    let writer = input.writer;
    let format_string = input.format_and_args.format_string;
    let values = values_array(&input.format_and_args.args);

    quote! {
        {
            use fmt::IntoValue as _;
            fmt::format_to(#writer, #format_string, &#values)
        }
    }
    .into()
}

struct WriterFormatAndArgs {
    writer: Expr,
    format_and_args: FormatAndArgs,
}

impl Parse for WriterFormatAndArgs {
    fn parse(input: ParseStream) -> syn::parse::Result<Self> {
        let writer: Expr = input.parse()?;
        input.parse::<Token![,]>()?;
        let format_and_args: FormatAndArgs = input.parse()?;
        Ok(WriterFormatAndArgs {
            writer,
            format_and_args,
        })
    }
}
