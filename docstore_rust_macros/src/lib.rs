use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Record)]
/// #[record(container = "Orders")]
/// struct Order {
///     #[record(id)]
///     pub id: String,
///     #[record(partition_key)]
///     pub tenant_id: String,
///     pub total: u32,
/// }
/// ```
///
/// - `#[record(container = "...")]` sets the container name.
///   If omitted, defaults to the struct name itself.
/// - `#[record(id)]` marks the field used as the unique identifier.
///   If omitted, defaults to a field named `id`.
/// - `#[record(partition_key)]` marks the field used to route reads and
///   deletes. If omitted, the record partitions by its id.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    // Extract #[record(container = "...")] from struct-level attributes
    let container = extract_container(&input);

    // Extract the field marked with #[record(id)] or default to "id"
    let id_field = extract_id_field(&input);

    // Extract the optional field marked with #[record(partition_key)]
    let partition_key_field = extract_partition_key_field(&input);

    let partition_key_impl = match &partition_key_field {
        Some(field) => {
            let field_name = field.to_string();
            quote! {
                const PARTITION_KEY_FIELD: &'static str = #field_name;

                fn partition_key(&self) -> &str {
                    &self.#field
                }
            }
        }
        // No marker: trait defaults route by id
        None => quote! {},
    };

    let expanded = quote! {
        impl docstore_rust::Record for #name {
            const CONTAINER: &'static str = #container;

            fn id(&self) -> &str {
                &self.#id_field
            }

            #partition_key_impl
        }
    };

    TokenStream::from(expanded)
}

fn extract_container(input: &DeriveInput) -> String {
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        let mut container = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("container") {
                let value: LitStr = meta.value()?.parse()?;
                container = Some(value.value());
            }
            Ok(())
        });

        if let Some(c) = container {
            return c;
        }
    }

    // Default: the container is named after the type itself
    input.ident.to_string()
}

fn extract_id_field(input: &DeriveInput) -> syn::Ident {
    if let Some(field) = find_marked_field(input, "id") {
        return field;
    }

    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            // Default: look for a field named "id"
            for field in &fields.named {
                if let Some(ident) = &field.ident {
                    if ident == "id" {
                        return ident.clone();
                    }
                }
            }
        }
    }

    panic!("Record derive: no field marked with #[record(id)] and no field named `id`");
}

fn extract_partition_key_field(input: &DeriveInput) -> Option<syn::Ident> {
    find_marked_field(input, "partition_key")
}

fn find_marked_field(input: &DeriveInput, marker: &str) -> Option<syn::Ident> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            for field in &fields.named {
                for attr in &field.attrs {
                    if attr.path().is_ident("record") {
                        let mut is_marked = false;
                        let _ = attr.parse_nested_meta(|meta| {
                            if meta.path.is_ident(marker) {
                                is_marked = true;
                            }
                            Ok(())
                        });
                        if is_marked {
                            return field.ident.clone();
                        }
                    }
                }
            }
        }
    }

    None
}
