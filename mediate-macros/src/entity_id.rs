use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持单字段 tuple struct，并为包装类型：
/// - 合并/追加派生：Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 提供 new(value)、Display、FromStr、AsRef、From 等便捷实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let _ = attr; // 暂无参数
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let fields = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f,
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] requires a tuple struct with exactly one field, e.g., struct X(String);",
            )
            .to_compile_error()
            .into();
        }
    };

    let inner_ty = &fields.unnamed.first().unwrap().ty;

    let mut st_out = st.clone();
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ];
    apply_derives(&mut st_out.attrs, required);

    let ident = &st_out.ident;

    let out = quote! {
        #st_out

        impl #ident {
            pub fn new(value: #inner_ty) -> Self {
                Self(value)
            }

            pub fn value(&self) -> &#inner_ty {
                &self.0
            }
        }

        impl ::std::str::FromStr for #ident
        where
            #inner_ty: ::std::str::FromStr,
        {
            type Err = <#inner_ty as ::std::str::FromStr>::Err;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let inner: #inner_ty = s.parse()?;
                ::std::result::Result::Ok(Self(inner))
            }
        }

        impl ::std::fmt::Display for #ident
        where
            #inner_ty: ::std::fmt::Display,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::core::convert::AsRef<#inner_ty> for #ident {
            fn as_ref(&self) -> &#inner_ty {
                &self.0
            }
        }

        impl ::core::convert::From<#inner_ty> for #ident {
            fn from(value: #inner_ty) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<#ident> for #inner_ty {
            fn from(value: #ident) -> Self {
                value.0
            }
        }
    };

    TokenStream::from(out)
}
