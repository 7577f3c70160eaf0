use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Debug, Clone, Serialize, Deserialize, PartialEq, Eq
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let _ = attr; // 暂无参数
    let mut input = parse_macro_input!(item as Item);

    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ];

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}
