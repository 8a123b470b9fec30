use proc_macro::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitStr, PathArguments,
    Result, Type,
    parse::{Parse, ParseStream},
    parse_quote,
};

pub(crate) fn expand_publish(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`Publish` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`Publish` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    for (i, field) in fields.iter().enumerate() {
        if fields[..i].iter().any(|f| f.key.value() == field.key.value()) {
            Err(Error::new(field.key.span(), "Field names must be unique."))?
        }
    }

    let keys = fields.iter().map(|f| &f.key);

    let statements = fields.iter().map(|field| {
        let FieldMetadata {
            name,
            key,
            method,
            is_option,
        } = field;

        if *is_option {
            let value = match method {
                Method::Integer(_) => quote! { *value },
                Method::Display => quote! { value },
            };
            let call = method.call(key, value);

            quote! {
                if let Some(value) = &self.#name {
                    #call;
                }
            }
        } else {
            let value = match method {
                Method::Integer(_) => quote! { self.#name },
                Method::Display => quote! { &self.#name },
            };
            let call = method.call(key, value);

            quote! { #call; }
        }
    });

    // Every type parameter may reach the sink through `add_display`.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::core::fmt::Display));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let name = &input.ident;

    let expanded = quote! {
        impl #impl_generics Publish for #name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#keys),*];

            #[allow(unused_variables)]
            fn publish(&self, o: &mut dyn Sink) {
                #(#statements)*
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
enum Method {
    /// One of the `add_u*` methods.
    Integer(Ident),
    Display,
}

impl Method {
    fn for_type(ty: &Type) -> Self {
        if let Type::Path(path) = ty {
            for primitive in ["u8", "u16", "u32"] {
                if path.path.is_ident(primitive) {
                    return Self::Integer(format_ident!("add_{}", primitive));
                }
            }
        }

        Self::Display
    }

    fn call(&self, key: &LitStr, value: impl ToTokens) -> impl ToTokens {
        match self {
            Self::Integer(method) => quote! { o.#method(#key, #value) },
            Self::Display => quote! { o.add_display(#key, #value) },
        }
    }
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    key: LitStr,
    method: Method,
    is_option: bool,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let FieldAttribute { key } = attr.meta.require_list()?.parse_args()?;

        let (method, is_option) = match option_inner(&field.ty)? {
            Some(inner) => (Method::for_type(inner), true),
            None => (Method::for_type(&field.ty), false),
        };

        Ok(Some(Self {
            name,
            key,
            method,
            is_option,
        }))
    }
}

/// The `T` of an `Option<T>` field type.
fn option_inner(ty: &Type) -> Result<Option<&Type>> {
    let Type::Path(path) = ty else {
        return Ok(None);
    };

    let Some(segment) = path.path.segments.last() else {
        return Ok(None);
    };

    if segment.ident != "Option" {
        return Ok(None);
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(
            &segment.arguments,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    let Some(argument) = arguments.args.first() else {
        Err(Error::new_spanned(
            &arguments.args,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    let GenericArgument::Type(inner_type) = argument else {
        Err(Error::new_spanned(
            argument,
            "Generic argument of a field of type `Option<T>` must be a type.",
        ))?
    };

    Ok(Some(inner_type))
}

#[derive(Debug)]
struct FieldAttribute {
    key: LitStr,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let key = input.parse::<LitStr>()?;
        Ok(Self { key })
    }
}
