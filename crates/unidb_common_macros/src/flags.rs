use proc_macro2::*;
use quote::quote;
use syn::{parse::Parser, punctuated::Punctuated, *};

/// Value of a flag as given by its discriminant.
enum FlagValue {
	/// Plain integer, takes part in the implicit power of 2 sequence.
	Literal(u128),
	/// Combination of other flags, as a `u128` constant expression.
	Combined(TokenStream),
}

pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	// While we don't exactly are deriving, the `#[flags]` macro is close enough
	let input_parsed = match syn::parse2::<DeriveInput>(input) {
	    Ok(derived_input) => derived_input,
	    Err(err) => return err.to_compile_error(),
	};

	let vis = input_parsed.vis;
	let flag_name = input_parsed.ident;
	let enum_attrs = input_parsed.attrs;

	let body_data = match input_parsed.data {
		Data::Enum(body) => body,
		_ => return quote!( compile_error!("Not an enum"); ),
	};

	let args = match Punctuated::<Ident, Token![,]>::parse_terminated.parse2(args) {
		Ok(args) => args,
		Err(err) => return err.to_compile_error(),
	};

	let mut base_type = None;
	let mut parse_from_name = false;
	for arg in args {
		if ["u8", "u16", "u32", "u64", "u128"].iter().any(|ty| arg == ty) {
			base_type = Some(arg);
		} else if arg == "parse_from_name" {
			parse_from_name = true;
		} else {
			let msg = format!("Unknown `flags` argument '{arg}'");
			return quote!(compile_error!(#msg););
		}
	}

	let mut idents = Vec::new();
	let mut vals = Vec::new();
	let mut attrs = Vec::new();
	let mut parse_names = Vec::new();
	let mut next_bit : u128 = 1;
	let mut max_val : u128 = 0;
	let mut none_name = None;

	for variant in body_data.variants {
		let ident_name = variant.ident.to_string();

		let mut parse_name = None;
		let mut elem_attrs = Vec::new();
		for attr in variant.attrs {
			if attr.path().is_ident("parse_name") {
				if parse_name.is_some() {
					let msg = format!("Duplicate `parse_name` for member '{ident_name}'");
					return quote!(compile_error!(#msg););
				}
				match attr.parse_args::<LitStr>() {
					Ok(lit) => parse_name = Some(lit.value()),
					Err(_) => {
						let msg = format!("Expected a string literal as a `parse_name` for member '{ident_name}'");
						return quote!(compile_error!(#msg););
					},
				}
				continue;
			}
			elem_attrs.push(attr);
		}
		parse_names.push(parse_name.unwrap_or_else(|| ident_name.clone()));
		attrs.push(elem_attrs);

		let val = match variant.discriminant {
			Some((_, expr)) => match flag_value(&expr) {
				Ok(FlagValue::Literal(int)) => {
					if int == 0 {
						none_name = Some(ident_name);
					} else {
						max_val = max_val.max(int);
						next_bit = int << 1;
					}
					quote!(#int)
				},
				Ok(FlagValue::Combined(tokens)) => tokens,
				Err(msg) => return quote!(compile_error!(#msg);),
			},
			None => {
				if next_bit == 0 {
					next_bit = 1;
				} else if !next_bit.is_power_of_two() {
					return quote!( compile_error!("Previous enum value needs to be a power of 2"); );
				}
				let int = next_bit;
				max_val = max_val.max(int);
				next_bit <<= 1;
				quote!(#int)
			},
		};
		idents.push(variant.ident);
		vals.push(val);
	}

	let base_type = base_type.unwrap_or_else(|| {
		let name = if max_val <= u8::MAX as u128 {
			"u8"
		} else if max_val <= u16::MAX as u128 {
			"u16"
		} else if max_val <= u32::MAX as u128 {
			"u32"
		} else if max_val <= u64::MAX as u128 {
			"u64"
		} else {
			"u128"
		};
		Ident::new(name, Span::call_site())
	});

	let non_variant = if none_name.is_some() {
		quote!()
	} else {
		quote!(
			/// Value representing that no flag is set.
			#vis const None : #flag_name = #flag_name::none();
		)
	};
	let none_name = none_name.unwrap_or_else(|| "None".to_string());

	let parse = if parse_from_name {
		quote!{
			/// Parse flags from their names, multiple flags can be combined using `|`.
			#vis fn parse(name: &str) -> Option<Self> {
				let mut flags = Self::none();
				for sub_name in name.split('|').map(|val| val.trim()) {
					flags |= match sub_name {
						#(#parse_names => Self::#idents,)*
						_ => return None
					}
				}
				Some(flags)
			}
		}
	} else {
		quote!{}
	};

	quote!(
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#(#enum_attrs)*
		#[repr(transparent)]
		#vis struct #flag_name {
			bits : #base_type
		}

		#[allow(non_upper_case_globals)]
		impl #flag_name {
			#non_variant

			#(#(#attrs)* #vis const #idents : #flag_name = #flag_name::from_u128(#vals);)*

			// Helper function to create const values from a u128
			const fn from_u128(val: u128) -> Self {
				Self { bits: val as #base_type }
			}

			/// Create flags instance with no flag set.
			#vis const fn none() -> Self {
				Self { bits: 0 }
			}

			/// Create flags instance with all valid flags set.
			#vis const fn all() -> Self {
				const BITS : #base_type = 0 #( | #flag_name::#idents.bits)*;
				Self { bits: BITS }
			}

			/// Create flags from raw bits, returns `None` if any bit does not correspond to a flag.
			#vis const fn from_bits(bits: #base_type) -> Option<Self> {
				if bits & !Self::all().bits == 0 {
					Some(Self { bits })
				} else {
					None
				}
			}

			/// Create flags from raw bits, dropping any bit that does not correspond to a flag.
			#vis const fn from_bits_truncate(bits: #base_type) -> Self {
				Self { bits: bits & Self::all().bits }
			}

			/// Get the flags' bits
			#vis const fn bits(&self) -> #base_type {
				self.bits
			}

			/// Check if a given flag(s) is/are set (if multiple flags are checked, all flags need to be set).
			#vis const fn contains(&self, flag: #flag_name) -> bool {
				self.bits & flag.bits == flag.bits
			}

			/// Check if any of the given flags are set.
			#vis const fn intersects(&self, flag: #flag_name) -> bool {
				self.bits & flag.bits != 0
			}

			/// Check if no flag is set.
			#vis const fn is_none(&self) -> bool {
				self.bits == 0
			}

			/// Check if any flag is set.
			#vis const fn is_any(&self) -> bool {
				self.bits != 0
			}

			/// Check if all valid flags are set.
			#vis const fn is_all(&self) -> bool {
				self.bits == Self::all().bits
			}

			/// Set the state of a given flag to `set`.
			#vis fn set(&mut self, flag: #flag_name, set: bool) {
				if set {
					self.bits |= flag.bits;
				} else {
					self.bits &= !flag.bits;
				}
			}

			/// Enable a given flag.
			#vis fn enable(&mut self, flag: #flag_name) {
				self.bits |= flag.bits;
			}

			/// Disable a given flag.
			#vis fn disable(&mut self, flag: #flag_name) {
				self.bits &= !flag.bits;
			}

			/// Const implementation of bitand
			#vis const fn bitand(self, rhs: Self) -> Self {
				Self { bits: self.bits & rhs.bits }
			}

			/// Const implementation of bitor
			#vis const fn bitor(self, rhs: Self) -> Self {
				Self { bits: self.bits | rhs.bits }
			}

			#parse
		}

		impl ::core::ops::Not for #flag_name {
			type Output = Self;
			fn not(self) -> Self {
				Self{ bits: !self.bits }
			}
		}

		impl ::core::ops::BitAnd for #flag_name {
			type Output = Self;
			fn bitand(self, rhs: Self) -> Self {
				Self { bits: self.bits & rhs.bits }
			}
		}

		impl ::core::ops::BitAndAssign for #flag_name {
			fn bitand_assign(&mut self, rhs: Self) {
				self.bits &= rhs.bits;
			}
		}

		impl ::core::ops::BitOr for #flag_name {
			type Output = Self;
			fn bitor(self, rhs: Self) -> Self {
				Self { bits: self.bits | rhs.bits }
			}
		}

		impl ::core::ops::BitOrAssign for #flag_name {
			fn bitor_assign(&mut self, rhs: Self) {
				self.bits |= rhs.bits;
			}
		}

		impl ::core::ops::BitXor for #flag_name {
			type Output = Self;
			fn bitxor(self, rhs: Self) -> Self {
				Self { bits: self.bits ^ rhs.bits }
			}
		}

		impl ::core::ops::BitXorAssign for #flag_name {
			fn bitxor_assign(&mut self, rhs: Self) {
				self.bits ^= rhs.bits;
			}
		}

		impl From<#flag_name> for #base_type {
			fn from(val: #flag_name) -> #base_type {
				val.bits
			}
		}

		impl Default for #flag_name {
			fn default() -> #flag_name {
				#flag_name::none()
			}
		}

		impl ::core::fmt::Debug for #flag_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				if self.is_none() {
					if f.alternate() {
						write!(f, "{}::", stringify!(#flag_name))?;
					}
					return f.write_str(#none_name);
				}

				let mut flags = *self;
				let mut started = false;
				#(
					if #flag_name::#idents.is_any() && flags.contains(#flag_name::#idents) {
						if started {
							write!(f, " | ")?;
						}
						if f.alternate() {
							write!(f, "{}::", stringify!(#flag_name))?;
						}
						write!(f, stringify!(#idents))?;
						flags &= !#flag_name::#idents;
						started = true;
					}
				)*

				if flags.is_any() {
					if started {
						write!(f, " | ")?;
					}
					write!(f, "{:#x}", flags.bits)?;
				}

				Ok(())
			}
		}

		impl ::core::fmt::Display for #flag_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				::core::fmt::Debug::fmt(self, f)
			}
		}
	)
}

fn flag_value(expr: &Expr) -> core::result::Result<FlagValue, String> {
	match expr {
		Expr::Lit(ExprLit{ lit: Lit::Int(int), .. }) => int.base10_parse::<u128>()
			.map(FlagValue::Literal)
			.map_err(|err| err.to_string()),
		_ => combined_value(expr).map(FlagValue::Combined),
	}
}

fn combined_value(expr: &Expr) -> core::result::Result<TokenStream, String> {
	match expr {
		Expr::Lit(ExprLit{ lit: Lit::Int(int), .. }) => {
			let int = int.base10_parse::<u128>().map_err(|err| err.to_string())?;
			Ok(quote!(#int))
		},
		Expr::Path(path) => match path.path.get_ident() {
			Some(ident) => Ok(quote!((Self::#ident.bits as u128))),
			None => Err("Only single identifiers are allowed".to_string()),
		},
		Expr::Paren(paren) => combined_value(&paren.expr),
		Expr::Binary(ExprBinary{ left, right, op: BinOp::BitOr(_), .. }) => {
			let left = combined_value(left)?;
			let right = combined_value(right)?;
			Ok(quote!(#left | #right))
		},
		_ => Err("Only integer literals, single paths, or `|` combinations of them are supported".to_string()),
	}
}
