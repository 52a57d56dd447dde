//! Implementation of the `function!` procedural macro.
//!
//! This module provides the `function!` macro that turns a Rust closure or a
//! Rust function over `Value` parameters into an `fnkit::Function` whose
//! declared arity is the parameter count.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `function!(|a, b| body)`
//! 2. Function name + arity form: `function!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! ## Closure Form
//!
//! For a closure `|a, b| body`, the macro generates:
//!
//! ```text
//! ::fnkit::Function::new(2usize, move |__fnkit_arguments: ::fnkit::Arguments| {
//!     let mut __fnkit_arguments = __fnkit_arguments.into_iter();
//!     let a = __fnkit_arguments.next().unwrap_or_default();
//!     let b = __fnkit_arguments.next().unwrap_or_default();
//!     ::fnkit::IntoOutcome::into_outcome(body)
//! })
//! ```
//!
//! Missing positional arguments bind to `Value::Undefined`; surplus ones are
//! ignored by the body but still count towards saturation when curried.
//!
//! ## Function Name + Arity Form
//!
//! For `function!(add, 2)`, the macro generates:
//!
//! ```text
//! ::fnkit::Function::named("add", 2usize, move |__fnkit_arguments: ::fnkit::Arguments| {
//!     let mut __fnkit_arguments = __fnkit_arguments.into_iter();
//!     let __fnkit_argument_0: ::fnkit::Value = __fnkit_arguments.next().unwrap_or_default();
//!     let __fnkit_argument_1: ::fnkit::Value = __fnkit_arguments.next().unwrap_or_default();
//!     ::fnkit::IntoOutcome::into_outcome(add(__fnkit_argument_0, __fnkit_argument_1))
//! })
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token, spanned::Spanned};

enum FunctionInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn function_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_function_input(input.into()) {
        Ok(FunctionInput::Closure(closure)) => generate_from_closure(&closure),
        Ok(FunctionInput::FunctionWithArity { function, arity }) => {
            generate_from_path(&function, arity)
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_function_input(input_tokens: TokenStream2) -> syn::Result<FunctionInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> =
        syn::parse::Parser::parse2(parser, input_tokens)?;

    let mut iterator = expressions.into_iter();
    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(first), None, None) => parse_single_expression(first),
        (Some(first), Some(second), None) => parse_function_with_arity(first, second),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "function! requires a closure or function name with arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<FunctionInput> {
    match expression {
        Expr::Closure(closure) => {
            if let Some(asyncness) = closure.asyncness {
                return Err(syn::Error::new(
                    asyncness.span(),
                    "function! does not accept async closures",
                ));
            }
            Ok(FunctionInput::Closure(closure))
        }
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "function! with function name requires arity: function!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "function! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(first: Expr, second: Expr) -> syn::Result<FunctionInput> {
    let function = match first {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "function! expected an integer literal for arity",
            ));
        }
    };

    Ok(FunctionInput::FunctionWithArity { function, arity })
}

fn generate_from_closure(closure: &ExprClosure) -> TokenStream2 {
    let arity = closure.inputs.len();
    let body = &closure.body;

    let bindings = closure.inputs.iter().map(|pattern| {
        quote! {
            let #pattern = __fnkit_arguments.next().unwrap_or_default();
        }
    });

    quote! {
        ::fnkit::Function::new(#arity, move |__fnkit_arguments: ::fnkit::Arguments| {
            #[allow(unused_mut)]
            let mut __fnkit_arguments = __fnkit_arguments.into_iter();
            #(#bindings)*
            ::fnkit::IntoOutcome::into_outcome(#body)
        })
    }
}

fn generate_from_path(function: &ExprPath, arity: usize) -> TokenStream2 {
    let name = function
        .path
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default();

    let argument_identifiers: Vec<_> = (0..arity)
        .map(|index| quote::format_ident!("__fnkit_argument_{}", index))
        .collect();

    quote! {
        ::fnkit::Function::named(#name, #arity, move |__fnkit_arguments: ::fnkit::Arguments| {
            #[allow(unused_mut)]
            let mut __fnkit_arguments = __fnkit_arguments.into_iter();
            #(
                let #argument_identifiers: ::fnkit::Value =
                    __fnkit_arguments.next().unwrap_or_default();
            )*
            ::fnkit::IntoOutcome::into_outcome(#function(#(#argument_identifiers),*))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(quote! { |a, b| a })]
    #[case(quote! { |value: Value| value })]
    #[case(quote! { || 1 })]
    fn test_closure_input_is_accepted(#[case] tokens: TokenStream2) {
        assert!(matches!(
            parse_function_input(tokens),
            Ok(FunctionInput::Closure(_))
        ));
    }

    #[rstest]
    fn test_closure_arity_is_parameter_count() {
        let Ok(FunctionInput::Closure(closure)) = parse_function_input(quote! { |a, _, c| a })
        else {
            panic!("expected closure input");
        };
        assert_eq!(closure.inputs.len(), 3);
    }

    #[rstest]
    fn test_path_with_arity_is_accepted() {
        let Ok(FunctionInput::FunctionWithArity { function, arity }) =
            parse_function_input(quote! { math::pow, 2 })
        else {
            panic!("expected function with arity");
        };
        assert_eq!(arity, 2);
        assert_eq!(function.path.segments.len(), 2);
    }

    #[rstest]
    #[case(quote! { pow })]
    #[case(quote! { pow, "two" })]
    #[case(quote! { 42 })]
    #[case(quote! { pow, 2, 3 })]
    #[case(quote! { async |a| a })]
    #[case(quote! {})]
    fn test_invalid_input_is_rejected(#[case] tokens: TokenStream2) {
        assert!(parse_function_input(tokens).is_err());
    }

    #[rstest]
    fn test_generated_closure_binds_each_parameter() {
        let Ok(FunctionInput::Closure(closure)) = parse_function_input(quote! { |a, b| a })
        else {
            panic!("expected closure input");
        };
        let generated = generate_from_closure(&closure).to_string();
        assert!(generated.contains("2usize"));
        assert_eq!(generated.matches("unwrap_or_default").count(), 2);
    }
}
