//! Native type name -> logical type lookup table
//!
//! Lowercase is the canonical case; input is normalized here at the
//! boundary. Precision/scale suffixes (`decimal(10,2)`) and generic type
//! parameters (`array<int>`, `map<string,string>`) are stripped before
//! lookup so parameterized spellings hit the same table entry.

use crate::types::LogicalType;

/// Normalizes a raw engine type name for table lookup.
pub fn normalize_type_name(native_type: &str) -> String {
    let lowered = native_type.trim().to_ascii_lowercase();
    let base = lowered
        .split_once('(')
        .map(|(head, _)| head)
        .unwrap_or(&lowered);
    let base = base.split_once('<').map(|(head, _)| head).unwrap_or(base);
    base.trim().to_string()
}

/// Maps a ClickZetta type name to the host's logical type taxonomy.
///
/// Total over all inputs: names outside the closed table return
/// [`LogicalType::Unknown`].
pub fn map_type(native_type: &str) -> LogicalType {
    match normalize_type_name(native_type).as_str() {
        "decimal" | "numeric" => LogicalType::Decimal,
        "tinyint" | "smallint" | "int" | "integer" => LogicalType::Integer,
        "bigint" => LogicalType::BigInteger,
        "float" | "double" => LogicalType::Float,
        "char" | "varchar" | "string" => LogicalType::Text,
        "boolean" => LogicalType::Boolean,
        "date" => LogicalType::Date,
        "timestamp" | "timestamp_ltz" | "timestamp_ntz" | "datetime" => LogicalType::DateTime,
        "map" | "json" => LogicalType::Dictionary,
        "array" => LogicalType::Array,
        "struct" => LogicalType::Struct,
        "binary" => LogicalType::Binary,
        _ => LogicalType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_known_name() {
        let cases = [
            ("decimal", LogicalType::Decimal),
            ("numeric", LogicalType::Decimal),
            ("tinyint", LogicalType::Integer),
            ("smallint", LogicalType::Integer),
            ("int", LogicalType::Integer),
            ("integer", LogicalType::Integer),
            ("bigint", LogicalType::BigInteger),
            ("float", LogicalType::Float),
            ("double", LogicalType::Float),
            ("char", LogicalType::Text),
            ("varchar", LogicalType::Text),
            ("string", LogicalType::Text),
            ("boolean", LogicalType::Boolean),
            ("date", LogicalType::Date),
            ("timestamp", LogicalType::DateTime),
            ("timestamp_ltz", LogicalType::DateTime),
            ("timestamp_ntz", LogicalType::DateTime),
            ("datetime", LogicalType::DateTime),
            ("map", LogicalType::Dictionary),
            ("json", LogicalType::Dictionary),
            ("array", LogicalType::Array),
            ("struct", LogicalType::Struct),
            ("binary", LogicalType::Binary),
        ];
        for (name, expected) in cases {
            assert_eq!(map_type(name), expected, "type {name}");
        }
    }

    #[test]
    fn unknown_names_never_fail() {
        assert_eq!(map_type("hyperloglog"), LogicalType::Unknown);
        assert_eq!(map_type(""), LogicalType::Unknown);
        assert_eq!(map_type("interval day to second"), LogicalType::Unknown);
    }

    #[test]
    fn normalizes_case_and_parameters() {
        assert_eq!(map_type("VARCHAR(255)"), LogicalType::Text);
        assert_eq!(map_type("Decimal(10, 2)"), LogicalType::Decimal);
        assert_eq!(map_type("ARRAY<int>"), LogicalType::Array);
        assert_eq!(map_type("map<string,string>"), LogicalType::Dictionary);
        assert_eq!(map_type("struct<a:int,b:string>"), LogicalType::Struct);
        assert_eq!(map_type("  TIMESTAMP_LTZ  "), LogicalType::DateTime);
    }

    #[test]
    fn normalize_strips_suffixes_only() {
        assert_eq!(normalize_type_name("decimal(38,18)"), "decimal");
        assert_eq!(normalize_type_name("array<struct<a:int>>"), "array");
        assert_eq!(normalize_type_name("string"), "string");
    }
}
