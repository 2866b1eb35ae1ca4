//! Procedural macros for the `advent` crate.
//!
//! The only macro here is [`all_days!`], which generates the registry enum
//! over every day module: one variant per registered day, plus lookup and
//! dispatch methods. Writing the enum by hand would mean repeating the same
//! twelve-arm `match` four times over; the macro keeps the day list in one
//! place (`src/days/mod.rs`).

extern crate proc_macro;

use heck::ToPascalCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitInt, Result, Token, parse_macro_input};

// --- Input parsing structures ---

/// One `day01 => 1` entry: a day module identifier and its day number.
/// The solution struct is assumed to be the PascalCase form of the module
/// name (`day01` registers `day01::Day01`).
struct DayEntry {
    module: Ident,
    number: LitInt,
}

impl Parse for DayEntry {
    fn parse(input: ParseStream) -> Result<Self> {
        let module: Ident = input.parse()?;
        input.parse::<Token![=>]>()?;
        let number: LitInt = input.parse()?;
        Ok(Self { module, number })
    }
}

/// The full macro input:
///
/// ```text
/// all_days! {
///     enum_name = DayImpls,
///     days: [
///         day01 => 1,
///         day02 => 2,
///     ],
/// }
/// ```
struct AllDaysInput {
    enum_name: Ident,
    entries: Vec<DayEntry>,
}

impl Parse for AllDaysInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        if key != "enum_name" {
            return Err(syn::Error::new(key.span(), "expected `enum_name`"));
        }
        input.parse::<Token![=]>()?;
        let enum_name: Ident = input.parse()?;
        input.parse::<Token![,]>()?;

        let key: Ident = input.parse()?;
        if key != "days" {
            return Err(syn::Error::new(key.span(), "expected `days`"));
        }
        input.parse::<Token![:]>()?;

        let content;
        syn::bracketed!(content in input);
        let entries = Punctuated::<DayEntry, Token![,]>::parse_terminated(&content)?;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(Self {
            enum_name,
            entries: entries.into_iter().collect(),
        })
    }
}

// --- Code generation ---

/// Generates the day-registry enum and its lookup/dispatch methods.
///
/// For `enum_name = DayImpls` and entries `day01 => 1, ...` this expands to
/// a fieldless `pub enum DayImpls` with one variant per day and:
///
/// - `const ALL: [Self; N]` — every registered day, in registration order.
/// - `const fn from_number(day: u8) -> Option<Self>` — registry lookup;
///   unregistered day numbers yield `None`.
/// - `const fn number(self) -> u8` — the registered day number.
/// - `const fn label(self) -> &'static str` — the module name, e.g. `"day01"`.
/// - `fn run(self, input: &str)` — dispatches to
///   `crate::runner::run_solution` with the day's solution struct.
///
/// The macro must be invoked from the module that declares the day
/// submodules, since the generated dispatch refers to them by relative path.
#[proc_macro]
pub fn all_days(input: TokenStream) -> TokenStream {
    let AllDaysInput { enum_name, entries } = parse_macro_input!(input as AllDaysInput);

    let modules: Vec<&Ident> = entries.iter().map(|e| &e.module).collect();
    let variants: Vec<Ident> = entries
        .iter()
        .map(|e| format_ident!("{}", e.module.to_string().to_pascal_case()))
        .collect();
    let numbers: Vec<&LitInt> = entries.iter().map(|e| &e.number).collect();
    let labels: Vec<String> = entries.iter().map(|e| e.module.to_string()).collect();
    let variant_docs: Vec<String> = entries
        .iter()
        .map(|e| format!("The solution registered as `{}`.", e.module))
        .collect();
    let count = entries.len();

    let expanded = quote! {
        #[doc = "Registry over every day solution, one variant per day module."]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum #enum_name {
            #( #[doc = #variant_docs] #variants, )*
        }

        impl #enum_name {
            #[doc = "Every registered day, in registration order."]
            pub const ALL: [Self; #count] = [ #( Self::#variants, )* ];

            #[doc = "Looks up the solution registered for a day number, if any."]
            #[must_use]
            pub const fn from_number(day: u8) -> Option<Self> {
                match day {
                    #( #numbers => Some(Self::#variants), )*
                    _ => None,
                }
            }

            #[doc = "The day number this solution is registered under."]
            #[must_use]
            pub const fn number(self) -> u8 {
                match self {
                    #( Self::#variants => #numbers, )*
                }
            }

            #[doc = "The day's module name, e.g. `day01`."]
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    #( Self::#variants => #labels, )*
                }
            }

            #[doc = "Parses the input and runs both parts, timing each phase."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "Returns the day's parse failure, if any."]
            pub fn run(
                self,
                input: &str,
            ) -> Result<crate::runner::DayReport, crate::runner::RunError> {
                match self {
                    #( Self::#variants => crate::runner::run_solution(
                        #numbers,
                        &#modules::#variants,
                        input,
                    ), )*
                }
            }
        }
    };

    expanded.into()
}
