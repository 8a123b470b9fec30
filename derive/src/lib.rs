use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod publish;

#[proc_macro_derive(Publish, attributes(field))]
pub fn derive_publish(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match publish::expand_publish(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
