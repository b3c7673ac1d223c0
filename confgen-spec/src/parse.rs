//! Specification parser.

use confgen_core::{capitalize, decapitalize};
use tracing::debug;

use crate::{
    Field, Result,
    error::SpecSource,
    field::{is_ident, rust_ident},
};

/// Separator between two fields of a specification.
pub const FIELD_SEPARATOR: char = '|';

/// Parse a `name Type|name Type|...` specification into fields.
///
/// Fields come back in specification order. The first malformed field
/// aborts parsing; nothing is skipped.
pub fn parse_fields(spec: &str) -> Result<Vec<Field>> {
    let source = SpecSource::new(spec);
    let mut fields: Vec<Field> = Vec::new();
    let mut offset = 0;

    for (index, raw) in spec.split(FIELD_SEPARATOR).enumerate() {
        debug!(index, field = raw, "parsing field");
        let field = parse_field(&source, index, raw, offset)?;

        if let Some(first) = fields.iter().find(|f| {
            f.public_name() == field.public_name() || f.private_name() == field.private_name()
        }) {
            return Err(source.duplicate_field(field.public_name(), first.span(), field.span()));
        }

        debug!(
            index,
            public_name = field.public_name(),
            private_name = field.private_name(),
            ty = field.ty(),
            "parsed field"
        );
        fields.push(field);
        offset += raw.len() + FIELD_SEPARATOR.len_utf8();
    }

    Ok(fields)
}

fn parse_field(source: &SpecSource, index: usize, raw: &str, offset: usize) -> Result<Field> {
    let span = offset..offset + raw.len();

    let Some((name, ty)) = raw.split_once(' ') else {
        return Err(source.missing_type(index, raw, span));
    };
    let name_span = offset..offset + name.len();
    let ty_span = name_span.end + 1..span.end;

    if let Err(err) = syn::parse_str::<syn::Type>(ty) {
        return Err(source.invalid_type(index, raw, err.to_string(), ty_span));
    }

    let Some(public_name) = capitalize(name) else {
        return Err(source.invalid_name(index, raw, name, "the field name is empty", name_span));
    };
    if !is_ident(&public_name) {
        return Err(source.invalid_name(
            index,
            raw,
            name,
            format!("'{}' is not a valid Rust identifier", public_name),
            name_span,
        ));
    }
    let Some(private_name) = decapitalize(&public_name) else {
        return Err(source.invalid_name(index, raw, name, "the field name is empty", name_span));
    };

    Ok(Field::new(
        public_name,
        rust_ident(&private_name),
        ty.trim(),
        span,
    ))
}
