//! Procedural macros used across the `traffic_tiles` workspace.
//!
//! The only macro is [`macro@context`], an attribute that wraps the body of a function
//! returning `anyhow::Result` and attaches a formatted context message to any error
//! leaving it.
//!
//! ```ignore
//! #[context("reading tile {coord:?}")]
//! async fn read_tile(&self, coord: &TileCoord) -> Result<Blob> { ... }
//! ```
//!
//! The expansion follows the `context` attribute of the `versatiles_derive` crate
//! (<https://github.com/versatiles-org/versatiles-rs>), MIT licensed.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{
	ItemFn, ReturnType, Token,
	parse::{self, Parse, ParseStream},
	parse_macro_input,
};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by `format!` arguments.
struct ContextArgs {
	move_token: Option<Token![move]>,
	format_args: TokenStream2,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};
		Ok(ContextArgs {
			move_token,
			format_args: input.parse()?,
		})
	}
}

/// Adds a context message to the error returned by the annotated function.
///
/// Works on sync and async functions. The arguments are passed to `format!`, so
/// function parameters can be referenced by name. Prefix with `move,` to move captured
/// values into the wrapping closure/async block.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs {
		move_token,
		format_args,
	} = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as ItemFn);

	let body = &function.block;
	let err = Ident::new("err", Span::mixed_site());

	let wrapped = if function.sig.asyncness.is_some() {
		let return_type = match &function.sig.output {
			ReturnType::Default => {
				return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
					.to_compile_error()
					.into();
			}
			ReturnType::Type(_, ty) => ty,
		};
		let result = Ident::new("result", Span::mixed_site());
		quote! {
			let #result: #return_type = async #move_token { #body }.await;
			#result.map_err(|#err| #err.context(format!(#format_args)).into())
		}
	} else {
		let return_type = &function.sig.output;
		let once = Ident::new("once", Span::mixed_site());
		quote! {
			// dropping a non-Copy value inside forces the closure to be FnOnce
			let #once = ::std::vec::Vec::<()>::new();
			(#move_token || #return_type {
				::core::mem::drop(#once);
				#body
			})().map_err(|#err| #err.context(format!(#format_args)).into())
		}
	};

	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];
	function.into_token_stream().into()
}
