//! FormTable derive macro implementation
//!
//! Generates the `FormTable` implementation for a struct declaring one part
//! of an IRS form (or one repeating group inside a part).

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::{self, ColumnKind};

/// Key fields every table carries
const KEY_FIELDS: [&str; 2] = ["object_id", "ein"];

/// Receiver for the struct that derives `FormTable`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(table), supports(struct_named))]
struct FormTableReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// Table name
    name: String,
    /// `FormKind` variant name, e.g. `Form990` or `ScheduleA`
    form: String,
    #[darling(default)]
    part: Option<String>,
    #[darling(default)]
    description: Option<String>,
    /// Absolute XPath of the repeating element, for repeating tables
    #[darling(default)]
    group: Option<String>,
    /// Name of the table this one repeats under
    #[darling(default)]
    parent: Option<String>,
    data: ast::Data<(), FormFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(field), forward_attrs(doc))]
struct FormFieldReceiver {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    attrs: Vec<syn::Attribute>,
    #[darling(default)]
    xpath: Option<String>,
    #[darling(default)]
    line: Option<String>,
    /// Column name override
    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    max_length: Option<usize>,
    #[darling(default)]
    long: bool,
    #[darling(default)]
    date: bool,
    #[darling(multiple, rename = "alias")]
    aliases: Vec<String>,
}

/// Process the FormTable derive macro
pub fn process_derive_form_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let receiver = match FormTableReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    match generate_form_table_impl(&receiver) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// A data field after attribute validation
struct DataColumn<'a> {
    ident: &'a syn::Ident,
    column: proc_macro2::TokenStream,
}

fn generate_form_table_impl(
    receiver: &FormTableReceiver,
) -> darling::Result<proc_macro2::TokenStream> {
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let mut errors = darling::Error::accumulator();

    for key in KEY_FIELDS {
        let declared = fields
            .iter()
            .find(|field| field.ident.as_ref().is_some_and(|ident| ident == key));
        match declared {
            None => errors.push(
                darling::Error::custom(format!("form tables must declare `{key}: String`"))
                    .with_span(&receiver.ident),
            ),
            Some(field) if utils::type_ident(&field.ty).as_deref() != Some("String") => errors
                .push(
                    darling::Error::custom(format!("`{key}` must be a `String`"))
                        .with_span(&field.ty),
                ),
            Some(_) => {}
        }
    }

    let columns: Vec<DataColumn<'_>> = fields
        .iter()
        .filter(|field| {
            field
                .ident
                .as_ref()
                .is_some_and(|ident| !KEY_FIELDS.contains(&ident.to_string().as_str()))
        })
        .filter_map(|field| errors.handle(data_column(field)))
        .collect();

    errors.finish()?;

    let struct_name = &receiver.ident;
    let table_name = &receiver.name;
    let form = syn::Ident::new(&receiver.form, Span::call_site());

    let part = receiver.part.as_ref().map(|part| quote! { .part(#part) });
    let description = receiver
        .description
        .as_ref()
        .map(|description| quote! { .description(#description) });
    let group = receiver.group.as_ref().map(|group| quote! { .group(#group) });
    let parent = receiver
        .parent
        .as_ref()
        .map(|parent| quote! { .parent(#parent) });

    let column_defs = columns.iter().map(|column| &column.column);

    let setters = columns.iter().enumerate().map(|(idx, column)| {
        let ident = column.ident;
        quote! {
            record.set_value(
                #idx,
                self.#ident.clone().map(crate::schema::ColumnValue::into_value),
            );
        }
    });

    let getters = columns.iter().enumerate().map(|(idx, column)| {
        let ident = column.ident;
        quote! { #ident: record.typed(#idx)?, }
    });

    Ok(quote! {
        impl crate::schema::FormTable for #struct_name {
            fn definition() -> &'static crate::schema::TableDefinition {
                static DEFINITION: ::std::sync::OnceLock<crate::schema::TableDefinition> =
                    ::std::sync::OnceLock::new();
                DEFINITION.get_or_init(|| {
                    crate::schema::TableDefinition::builder(
                        #table_name,
                        crate::schema::FormKind::#form,
                    )
                    #part
                    #description
                    #group
                    #parent
                    .columns(vec![#(#column_defs),*])
                    .build()
                })
            }

            fn key(&self) -> crate::schema::FilingKey {
                crate::schema::FilingKey::new(self.object_id.clone(), self.ein.clone())
            }

            fn to_record(&self) -> crate::schema::Record {
                let mut record = crate::schema::Record::new(Self::definition(), self.key());
                #(#setters)*
                record
            }

            fn from_record(record: &crate::schema::Record) -> crate::error::Result<Self> {
                record.ensure_table(Self::definition())?;
                Ok(Self {
                    object_id: record.key().object_id.clone(),
                    ein: record.key().ein.clone(),
                    #(#getters)*
                })
            }
        }
    })
}

/// Validate one data field and build its `ColumnDefinition` expression
fn data_column(field: &FormFieldReceiver) -> darling::Result<DataColumn<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| darling::Error::custom("form tables need named fields"))?;

    let Some(xpath) = field.xpath.as_ref() else {
        return Err(darling::Error::missing_field("xpath").with_span(ident));
    };

    let Some(inner) = utils::option_inner_type(&field.ty) else {
        return Err(
            darling::Error::custom("form table fields must be `Option<T>`").with_span(&field.ty)
        );
    };

    let Some(kind) = utils::infer_column_kind(inner, field.long, field.date) else {
        return Err(darling::Error::custom(
            "unsupported column type; use String, i32, i64 or f64",
        )
        .with_span(inner));
    };

    if field.max_length.is_some() && kind != ColumnKind::ShortText {
        return Err(
            darling::Error::custom("`max_length` only applies to short text columns")
                .with_span(ident),
        );
    }

    let variant = syn::Ident::new(kind.variant_name(), Span::call_site());
    let description = utils::doc_string(&field.attrs).map(|doc| quote! { .with_description(#doc) });
    let line = field.line.as_ref().map(|line| quote! { .with_line(#line) });
    let name = field.name.as_ref().map(|name| quote! { .with_name(#name) });
    let max_length = field
        .max_length
        .map(|max_length| quote! { .with_max_length(#max_length) });
    let aliases = field.aliases.iter().map(|alias| quote! { .with_alias(#alias) });

    let column = quote! {
        crate::schema::ColumnDefinition::new(#xpath, crate::schema::FieldType::#variant)
            #name
            #line
            #description
            #max_length
            #(#aliases)*
    };

    Ok(DataColumn { ident, column })
}
