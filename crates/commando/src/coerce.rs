//! String-to-value coercion as an ordered chain of strategies.
//!
//! Each strategy first says whether it claims a declared type; only the
//! claiming strategy parses. A strategy that claims a type and fails to parse
//! ends the search with a [`CoercionFailure`].

use std::fmt;

use crate::param::{ParamType, Value};

/// A claimed type whose raw text did not parse or did not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionFailure {
    pub expected: ParamType,
    pub raw: String,
}

impl CoercionFailure {
    fn new(expected: ParamType, raw: &str) -> Self {
        Self {
            expected,
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {:?} as {}", self.raw, self.expected)
    }
}

impl std::error::Error for CoercionFailure {}

pub trait CoercionStrategy: Send + Sync {
    fn claims(&self, ty: ParamType) -> bool;

    /// Only called for types this strategy claims.
    fn coerce(&self, ty: ParamType, raw: &str) -> Result<Value, CoercionFailure>;
}

const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];
const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

/// `string` and `bool`.
pub struct BaseStrategy;

impl CoercionStrategy for BaseStrategy {
    fn claims(&self, ty: ParamType) -> bool {
        matches!(ty, ParamType::String | ParamType::Bool)
    }

    fn coerce(&self, ty: ParamType, raw: &str) -> Result<Value, CoercionFailure> {
        match ty {
            ParamType::String => Ok(Value::String(raw.to_string())),
            ParamType::Bool if TRUE_LITERALS.contains(&raw) => Ok(Value::Bool(true)),
            ParamType::Bool if FALSE_LITERALS.contains(&raw) => Ok(Value::Bool(false)),
            _ => Err(CoercionFailure::new(ty, raw)),
        }
    }
}

/// `float32` and `float64`, parsed at double precision.
pub struct FloatStrategy;

impl FloatStrategy {
    fn parse(raw: &str) -> Option<f64> {
        let value: f64 = raw.parse().ok()?;
        // "1e400" parses to infinity; only an explicit spelling may.
        if value.is_infinite() && !raw.to_ascii_lowercase().contains("inf") {
            return None;
        }
        Some(value)
    }
}

impl CoercionStrategy for FloatStrategy {
    fn claims(&self, ty: ParamType) -> bool {
        matches!(ty, ParamType::Float32 | ParamType::Float64)
    }

    fn coerce(&self, ty: ParamType, raw: &str) -> Result<Value, CoercionFailure> {
        let fail = || CoercionFailure::new(ty, raw);
        let wide = Self::parse(raw).ok_or_else(fail)?;
        match ty {
            ParamType::Float64 => Ok(Value::Float64(wide)),
            ParamType::Float32 => {
                let narrow = wide as f32;
                if narrow.is_infinite() && wide.is_finite() {
                    return Err(fail());
                }
                Ok(Value::Float32(narrow))
            }
            _ => Err(fail()),
        }
    }
}

/// `int` and `int8` through `int64`.
pub struct SignedStrategy;

impl CoercionStrategy for SignedStrategy {
    fn claims(&self, ty: ParamType) -> bool {
        matches!(
            ty,
            ParamType::Int
                | ParamType::Int8
                | ParamType::Int16
                | ParamType::Int32
                | ParamType::Int64
        )
    }

    fn coerce(&self, ty: ParamType, raw: &str) -> Result<Value, CoercionFailure> {
        let fail = || CoercionFailure::new(ty, raw);
        let wide: i64 = raw.parse().map_err(|_| fail())?;
        let value = match ty {
            ParamType::Int => Value::Int(isize::try_from(wide).map_err(|_| fail())?),
            ParamType::Int8 => Value::Int8(i8::try_from(wide).map_err(|_| fail())?),
            ParamType::Int16 => Value::Int16(i16::try_from(wide).map_err(|_| fail())?),
            ParamType::Int32 => Value::Int32(i32::try_from(wide).map_err(|_| fail())?),
            ParamType::Int64 => Value::Int64(wide),
            _ => return Err(fail()),
        };
        Ok(value)
    }
}

/// `uint` and `uint8` through `uint64`.
pub struct UnsignedStrategy;

impl CoercionStrategy for UnsignedStrategy {
    fn claims(&self, ty: ParamType) -> bool {
        matches!(
            ty,
            ParamType::Uint
                | ParamType::Uint8
                | ParamType::Uint16
                | ParamType::Uint32
                | ParamType::Uint64
        )
    }

    fn coerce(&self, ty: ParamType, raw: &str) -> Result<Value, CoercionFailure> {
        let fail = || CoercionFailure::new(ty, raw);
        let wide: u64 = raw.parse().map_err(|_| fail())?;
        let value = match ty {
            ParamType::Uint => Value::Uint(usize::try_from(wide).map_err(|_| fail())?),
            ParamType::Uint8 => Value::Uint8(u8::try_from(wide).map_err(|_| fail())?),
            ParamType::Uint16 => Value::Uint16(u16::try_from(wide).map_err(|_| fail())?),
            ParamType::Uint32 => Value::Uint32(u32::try_from(wide).map_err(|_| fail())?),
            ParamType::Uint64 => Value::Uint64(wide),
            _ => return Err(fail()),
        };
        Ok(value)
    }
}

/// The strategy chain, tried in order.
pub struct CoercionEngine {
    strategies: Vec<Box<dyn CoercionStrategy>>,
}

impl CoercionEngine {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(BaseStrategy),
                Box::new(FloatStrategy),
                Box::new(SignedStrategy),
                Box::new(UnsignedStrategy),
            ],
        }
    }

    /// Append a strategy after the built-in ones.
    pub fn with_strategy<S: CoercionStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// `None` when no strategy claims `ty`.
    pub fn coerce(&self, ty: ParamType, raw: &str) -> Option<Result<Value, CoercionFailure>> {
        self.strategies
            .iter()
            .find(|s| s.claims(ty))
            .map(|s| s.coerce(ty, raw))
    }

    pub fn supports(&self, ty: ParamType) -> bool {
        self.strategies.iter().any(|s| s.claims(ty))
    }
}

impl Default for CoercionEngine {
    fn default() -> Self {
        Self::new()
    }
}
