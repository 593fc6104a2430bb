//! Handlers stored in a single normalized shape.
//!
//! Every registered callable becomes a [`Handler`]: its declared parameter
//! types plus an adapter closure taking the ordered list of coerced values.
//! [`IntoHandler`] generates that adapter for plain closures and functions
//! whose parameters implement [`Param`].

use std::fmt;
use std::sync::Arc;

use crate::param::{Param, ParamType, Value};

type Call = Arc<dyn Fn(Vec<Value>) + Send + Sync>;

#[derive(Clone)]
pub struct Handler {
    signature: Vec<ParamType>,
    call: Call,
}

impl Handler {
    /// Build a handler from an explicit signature and a raw adapter.
    ///
    /// The adapter receives exactly `signature.len()` values, each of the
    /// declared type, in declaration order.
    pub fn new<F>(signature: Vec<ParamType>, call: F) -> Self
    where
        F: Fn(Vec<Value>) + Send + Sync + 'static,
    {
        Self {
            signature,
            call: Arc::new(call),
        }
    }

    pub fn from_fn<F, Marker>(f: F) -> Self
    where
        F: IntoHandler<Marker>,
    {
        f.into_handler()
    }

    pub fn signature(&self) -> &[ParamType] {
        &self.signature
    }

    pub fn arity(&self) -> usize {
        self.signature.len()
    }

    pub(crate) fn invoke(&self, values: Vec<Value>) {
        (self.call)(values)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Conversion from a native callable into a [`Handler`].
///
/// `Marker` is the tuple of parameter types; it only exists so one impl per
/// arity can coexist.
pub trait IntoHandler<Marker>: Send + Sync + 'static {
    fn into_handler(self) -> Handler;
}

impl IntoHandler<Handler> for Handler {
    fn into_handler(self) -> Handler {
        self
    }
}

fn take<T: Param>(values: &mut std::vec::IntoIter<Value>, position: usize) -> T {
    match values.next().and_then(T::from_value) {
        Some(v) => v,
        None => panic!(
            "handler parameter {} expected a {} value",
            position,
            T::TYPE.name()
        ),
    }
}

macro_rules! impl_into_handler {
    ($($arg:ident: $ty:ident),*) => {
        impl<F, $($ty,)*> IntoHandler<($($ty,)*)> for F
        where
            F: Fn($($ty),*) + Send + Sync + 'static,
            $($ty: Param,)*
        {
            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn into_handler(self) -> Handler {
                let signature = vec![$(<$ty as Param>::TYPE),*];
                Handler::new(signature, move |values: Vec<Value>| {
                    let mut values = values.into_iter();
                    let mut position = 0;
                    $(
                        let $arg: $ty = take(&mut values, position);
                        position += 1;
                    )*
                    (self)($($arg),*);
                })
            }
        }
    };
}

impl_into_handler!();
impl_into_handler!(a: A);
impl_into_handler!(a: A, b: B);
impl_into_handler!(a: A, b: B, c: C);
impl_into_handler!(a: A, b: B, c: C, d: D);
impl_into_handler!(a: A, b: B, c: C, d: D, e: E);
impl_into_handler!(a: A, b: B, c: C, d: D, e: E, f: G);
impl_into_handler!(a: A, b: B, c: C, d: D, e: E, f: G, g: H);
impl_into_handler!(a: A, b: B, c: C, d: D, e: E, f: G, g: H, h: I);
