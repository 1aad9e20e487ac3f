use std::fmt::{Error, Write as _};

use super::FieldDef;

/// Format field definitions one per line, in declaration order:
///
/// ```text
/// foo: { tag: 1, type: i32, default: 5 }
/// ```
pub fn format_field_defs(
    fields: impl AsRef<[FieldDef]>,
) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        writeln!(
            out,
            "{}: {{ tag: {}, type: {}, default: {} }}",
            field.name,
            field.tag,
            field.data_type.type_name(),
            field.default
        )?;
    }

    Ok(out)
}
