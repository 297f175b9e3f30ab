//! Implementation of the `#[derive(Aggregate)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Field, Fields, GenericParam, Generics, Ident, Index, Lifetime,
    LifetimeParam, Member, parse_macro_input, parse_quote,
};

const ATTRIBUTE: &str = "aggregate";

/// Main implementation of the Aggregate derive macro.
pub fn derive_aggregate_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => match select_field(&input.ident, &data_struct.fields) {
            Ok((member, field)) => generate_impls(&input.ident, &input.generics, &member, field),
            Err(error) => error.to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Aggregate can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Aggregate cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Picks the wrapped field: the only field, or the one marked `#[aggregate]`.
fn select_field<'f>(name: &Ident, fields: &'f Fields) -> syn::Result<(Member, &'f Field)> {
    let candidates: Vec<(Member, &Field)> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = field.ident.clone().map_or_else(
                || Member::Unnamed(Index::from(index)),
                Member::Named,
            );
            (member, field)
        })
        .collect();

    let mut marked = candidates
        .iter()
        .filter(|(_, field)| field.attrs.iter().any(|attribute| attribute.path().is_ident(ATTRIBUTE)));

    match (marked.next(), marked.next()) {
        (Some(_), Some((_, second))) => Err(syn::Error::new_spanned(
            second,
            "only one field can be marked #[aggregate]",
        )),
        (Some((member, field)), None) => Ok((member.clone(), field)),
        (None, _) => match candidates.as_slice() {
            [] => Err(syn::Error::new_spanned(
                name,
                "Aggregate cannot be derived for structs with no fields.",
            )),
            [(member, field)] => Ok((member.clone(), field)),
            _ => Err(syn::Error::new_spanned(
                name,
                "mark the wrapped field with #[aggregate] when the struct has several fields",
            )),
        },
    }
}

/// Generates the `Aggregate` and `IntoEnumerable` impls.
fn generate_impls(name: &Ident, generics: &Generics, member: &Member, field: &Field) -> TokenStream2 {
    let field_type = &field.ty;
    let lifetime: Lifetime = parse_quote!('__lazyfn);

    let mut extended = generics.clone();
    extended
        .params
        .insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
    {
        let where_clause = extended.make_where_clause();
        where_clause
            .predicates
            .push(parse_quote!(#field_type: ::lazyfn::IntoEnumerable<#lifetime>));
        where_clause.predicates.push(parse_quote!(Self: #lifetime));
    }

    let (impl_generics, _, where_clause) = extended.split_for_impl();
    let (_, type_generics, _) = generics.split_for_impl();
    let value = quote! { <#field_type as ::lazyfn::IntoEnumerable<#lifetime>>::Value };

    quote! {
        impl #impl_generics ::lazyfn::Aggregate<#lifetime> for #name #type_generics #where_clause {
            type Value = #value;

            fn into_inner(
                self: ::std::boxed::Box<Self>,
            ) -> ::lazyfn::Enumerable<#lifetime, Self::Value> {
                ::lazyfn::IntoEnumerable::into_enumerable(self.#member)
            }
        }

        impl #impl_generics ::lazyfn::IntoEnumerable<#lifetime> for #name #type_generics #where_clause {
            type Value = #value;

            fn into_enumerable(self) -> ::lazyfn::Enumerable<#lifetime, Self::Value> {
                ::lazyfn::Enumerable::wrapping(self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(source: &str) -> DeriveInput {
        syn::parse_str(source).unwrap()
    }

    fn selected(source: &str) -> syn::Result<Member> {
        let input = parse(source);
        let Data::Struct(data_struct) = &input.data else {
            panic!("expected a struct");
        };
        select_field(&input.ident, &data_struct.fields).map(|(member, _)| member)
    }

    #[rstest]
    fn test_single_named_field_is_selected() {
        let member = selected("struct Wrapper { items: Vec<i32> }").unwrap();
        assert_eq!(member, Member::Named(parse_quote!(items)));
    }

    #[rstest]
    fn test_single_tuple_field_is_selected() {
        let member = selected("struct Wrapper(Vec<i32>);").unwrap();
        assert_eq!(member, Member::Unnamed(Index::from(0)));
    }

    #[rstest]
    fn test_marked_field_is_selected() {
        let member = selected("struct Wrapper { label: String, #[aggregate] items: Vec<i32> }").unwrap();
        assert_eq!(member, Member::Named(parse_quote!(items)));
    }

    #[rstest]
    #[case("struct Wrapper { label: String, items: Vec<i32> }")]
    #[case("struct Wrapper { #[aggregate] a: Vec<i32>, #[aggregate] b: Vec<i32> }")]
    #[case("struct Wrapper;")]
    fn test_ambiguous_or_empty_structs_are_rejected(#[case] source: &str) {
        assert!(selected(source).is_err());
    }

    #[rstest]
    fn test_generated_impls_mention_both_traits() {
        let input = parse("struct Wrapper<T> { items: Vec<T> }");
        let Data::Struct(data_struct) = &input.data else {
            panic!("expected a struct");
        };
        let (member, field) = select_field(&input.ident, &data_struct.fields).unwrap();
        let generated = generate_impls(&input.ident, &input.generics, &member, field).to_string();

        assert!(generated.contains(":: lazyfn :: Aggregate"));
        assert!(generated.contains(":: lazyfn :: IntoEnumerable"));
        assert!(generated.contains("'__lazyfn"));
    }
}
