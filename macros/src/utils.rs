//! Utility functions for procedural macros
//!
//! Type inspection and attribute helpers shared by the derive implementation.

use syn::{Attribute, Expr, ExprLit, GenericArgument, Lit, Meta, PathArguments, Type};

/// Column kinds a declared field can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    ShortText,
    LongText,
    Date,
    Integer,
    BigInteger,
    Decimal,
}

impl ColumnKind {
    /// Name of the matching `FieldType` variant in the main crate
    pub fn variant_name(self) -> &'static str {
        match self {
            ColumnKind::ShortText => "ShortText",
            ColumnKind::LongText => "LongText",
            ColumnKind::Date => "Date",
            ColumnKind::Integer => "Integer",
            ColumnKind::BigInteger => "BigInteger",
            ColumnKind::Decimal => "Decimal",
        }
    }
}

/// Return `T` for `Option<T>`
pub fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

/// Last path segment of a type, e.g. `String` for `std::string::String`
pub fn type_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

/// Infer the column kind from the inner type of an `Option<T>` field
///
/// `long` and `date` only apply to `String` fields.
pub fn infer_column_kind(inner: &Type, long: bool, date: bool) -> Option<ColumnKind> {
    match type_ident(inner)?.as_str() {
        "String" if date => Some(ColumnKind::Date),
        "String" if long => Some(ColumnKind::LongText),
        "String" => Some(ColumnKind::ShortText),
        "i32" => Some(ColumnKind::Integer),
        "i64" => Some(ColumnKind::BigInteger),
        "f64" => Some(ColumnKind::Decimal),
        _ => None,
    }
}

/// Join the `///` doc lines of a field into a single description
pub fn doc_string(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(name_value) => match &name_value.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_column_kind() {
        let string: Type = syn::parse_quote!(String);
        let amount: Type = syn::parse_quote!(i64);
        let count: Type = syn::parse_quote!(i32);
        let pct: Type = syn::parse_quote!(f64);
        let other: Type = syn::parse_quote!(Vec<u8>);

        assert_eq!(infer_column_kind(&string, false, false), Some(ColumnKind::ShortText));
        assert_eq!(infer_column_kind(&string, true, false), Some(ColumnKind::LongText));
        assert_eq!(infer_column_kind(&string, false, true), Some(ColumnKind::Date));
        assert_eq!(infer_column_kind(&amount, false, false), Some(ColumnKind::BigInteger));
        assert_eq!(infer_column_kind(&count, false, false), Some(ColumnKind::Integer));
        assert_eq!(infer_column_kind(&pct, false, false), Some(ColumnKind::Decimal));
        assert_eq!(infer_column_kind(&other, false, false), None);
    }

    #[test]
    fn test_option_inner_type() {
        let ty: Type = syn::parse_quote!(Option<i64>);
        let inner = option_inner_type(&ty).map(type_ident);
        assert_eq!(inner, Some(Some("i64".to_string())));
        let plain: Type = syn::parse_quote!(String);
        assert!(option_inner_type(&plain).is_none());
    }

    #[test]
    fn test_doc_string_joins_lines() {
        let item: syn::ItemStruct = syn::parse_quote! {
            /// Total revenue
            /// current year
            struct S;
        };
        assert_eq!(
            doc_string(&item.attrs),
            Some("Total revenue current year".to_string())
        );
    }
}
