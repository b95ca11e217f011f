use proc_macro2::*;
use quote::quote;
use syn::*;

fn parse_enum(item: TokenStream) -> core::result::Result<(Ident, DataEnum), TokenStream> {
	let input_parsed = match syn::parse2::<DeriveInput>(item) {
		Ok(derived_input) => derived_input,
		Err(err) => return Err(err.to_compile_error()),
	};

	match input_parsed.data {
		Data::Enum(body) => Ok((input_parsed.ident, body)),
		_ => Err(quote!( compile_error!("Not an enum"); )),
	}
}

/// Collect each variant with the name it is known by: the `parse_name` attribute, or the variant identifier.
fn variant_names(body: &DataEnum) -> core::result::Result<(Vec<Ident>, Vec<String>), TokenStream> {
	let mut members = Vec::with_capacity(body.variants.len());
	let mut names = Vec::with_capacity(body.variants.len());

	for variant in &body.variants {
		let mut name = None;
		for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("parse_name")) {
			if name.is_some() {
				let msg = format!("Duplicate `parse_name` for member '{}'", variant.ident);
				return Err(quote!(compile_error!(#msg);));
			}
			match attr.parse_args::<LitStr>() {
				Ok(lit) => name = Some(lit.value()),
				Err(err) => return Err(err.to_compile_error()),
			}
		}

		members.push(variant.ident.clone());
		names.push(name.unwrap_or_else(|| variant.ident.to_string()));
	}
	Ok((members, names))
}

pub fn enum_count(item: TokenStream) -> TokenStream {
	let (ident, body_data) = match parse_enum(item) {
		Ok(parsed) => parsed,
		Err(err) => return err,
	};
	let count = body_data.variants.len();

	quote!{
		impl unidb_base::EnumCountT for #ident {
			const COUNT: usize = #count;
		}
	}
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
	let (ident, body_data) = match parse_enum(item) {
		Ok(parsed) => parsed,
		Err(err) => return err,
	};

	let mut variants = Vec::with_capacity(body_data.variants.len());
	let mut indices = Vec::with_capacity(body_data.variants.len());
	let mut i = 0usize;
	for variant in body_data.variants {
		let idx = match variant.discriminant {
			Some((_, Expr::Lit(ExprLit { lit: Lit::Int(int), .. }))) => match int.base10_parse::<usize>() {
				Ok(int) => int,
				Err(err) => {
					let msg = err.to_string();
					return quote!(compile_error!(#msg););
				},
			},
			Some(_) => return quote!(compile_error!("Only integer descriminants are supported by EnumFromIndex");),
			None => i,
		};

		variants.push(variant.ident);
		indices.push(idx);
		i = idx + 1;
	}

	quote!{
		impl unidb_base::EnumFromIndexT for #ident {
			fn from_idx(idx: usize) -> Option<Self> {
				match idx {
					#(#indices => Some(Self::#variants),)*
					_ => None,
				}
			}
		}
	}
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
	let (ident, body_data) = match parse_enum(item) {
		Ok(parsed) => parsed,
		Err(err) => return err,
	};
	let (members, names) = match variant_names(&body_data) {
		Ok(res) => res,
		Err(err) => return err,
	};

	quote!{
		impl unidb_base::EnumFromNameT for #ident {
			fn parse(s: &str) -> Option<Self> {
				match s {
					#(#names => Some(Self::#members),)*
					_ => None,
				}
			}
		}
	}
}

pub fn enum_to_name(item: TokenStream) -> TokenStream {
	let (ident, body_data) = match parse_enum(item) {
		Ok(parsed) => parsed,
		Err(err) => return err,
	};
	let (members, names) = match variant_names(&body_data) {
		Ok(res) => res,
		Err(err) => return err,
	};

	quote!{
		impl unidb_base::EnumToNameT for #ident {
			fn name(&self) -> &'static str {
				match self {
					#(Self::#members => #names,)*
				}
			}
		}
	}
}
