//! Field-type inspection for code generation

use syn::{GenericArgument, PathArguments, Type};

/// If `ty` is `Option<T>` (by path), return `T`
///
/// Detection is syntactic, like every derive: a type alias hiding an
/// `Option` is treated as a plain type.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// The type an example companion field uses for `ty`
///
/// `Option<T>` flattens to `T` so the companion field is `Option<T>`
/// either way; `None` always means "not filtered", never "equals NULL".
pub fn example_inner(ty: &Type) -> &Type {
    option_inner(ty).unwrap_or(ty)
}
