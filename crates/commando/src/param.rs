//! Declared parameter types and the coerced values that flow into handlers.

use std::fmt;

/// Primitive type a handler declares for one positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    String,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    /// A type no coercion strategy knows about. Registering it is allowed;
    /// invoking a handler that declares it is a wiring defect.
    Custom(&'static str),
}

impl ParamType {
    /// Name shown in usage text and type mismatch errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One argument after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
}

impl Value {
    /// The parameter type this value satisfies.
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::String(_) => ParamType::String,
            Self::Bool(_) => ParamType::Bool,
            Self::Int(_) => ParamType::Int,
            Self::Int8(_) => ParamType::Int8,
            Self::Int16(_) => ParamType::Int16,
            Self::Int32(_) => ParamType::Int32,
            Self::Int64(_) => ParamType::Int64,
            Self::Uint(_) => ParamType::Uint,
            Self::Uint8(_) => ParamType::Uint8,
            Self::Uint16(_) => ParamType::Uint16,
            Self::Uint32(_) => ParamType::Uint32,
            Self::Uint64(_) => ParamType::Uint64,
            Self::Float32(_) => ParamType::Float32,
            Self::Float64(_) => ParamType::Float64,
        }
    }
}

/// A native type a handler may take as a parameter.
///
/// Implemented for the primitive set the coercion engine understands. Other
/// crates can implement it with a [`ParamType::Custom`] tag, which compiles and
/// registers but panics on first dispatch.
pub trait Param: Sized + 'static {
    const TYPE: ParamType;

    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_param {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl Param for $native {
                const TYPE: ParamType = ParamType::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_param! {
    String => String,
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_primitive_spelling() {
        assert_eq!(ParamType::Int.name(), "int");
        assert_eq!(ParamType::Uint8.name(), "uint8");
        assert_eq!(ParamType::Float32.to_string(), "float32");
        assert_eq!(ParamType::Custom("Point").name(), "Point");
    }

    #[test]
    fn test_param_extracts_matching_variant_only() {
        assert_eq!(u8::from_value(Value::Uint8(7)), Some(7));
        assert_eq!(u8::from_value(Value::Uint16(7)), None);
        assert_eq!(String::from_value(Value::from("hi".to_string())), Some("hi".to_string()));
    }

    #[test]
    fn test_value_reports_its_type() {
        assert_eq!(Value::from(-3i16).param_type(), ParamType::Int16);
        assert_eq!(Value::from(true).param_type(), <bool as Param>::TYPE);
    }
}
