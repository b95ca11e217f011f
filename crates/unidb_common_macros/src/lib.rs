mod flags;
mod derive;

use proc_macro::TokenStream;

/// Turn a fieldless enum into a bit flag set.
///
/// Arguments (comma separated, all optional):
/// - `u8`, `u16`, `u32`, `u64` or `u128`: storage type, otherwise the smallest type fitting all flags is used
/// - `parse_from_name`: generate a `parse` function, names come from `#[parse_name("...")]` or the variant name
#[proc_macro_attribute]
pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	flags::flags(args.into(), input.into()).into()
}

#[proc_macro_derive(EnumCount)]
pub fn enum_count(item: TokenStream) -> TokenStream {
	derive::enum_count(item.into()).into()
}

#[proc_macro_derive(EnumFromIndex)]
pub fn enum_from_index(item: TokenStream) -> TokenStream {
	derive::enum_from_index(item.into()).into()
}

#[proc_macro_derive(EnumFromName, attributes(parse_name))]
pub fn enum_from_name(item: TokenStream) -> TokenStream {
	derive::enum_from_name(item.into()).into()
}

#[proc_macro_derive(EnumToName, attributes(parse_name))]
pub fn enum_to_name(item: TokenStream) -> TokenStream {
	derive::enum_to_name(item.into()).into()
}
