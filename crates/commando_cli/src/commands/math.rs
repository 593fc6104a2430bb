//! Numeric demo commands.

use commando::Dispatcher;
use serde_json::json;

use crate::output;

pub fn register(dispatcher: &Dispatcher) {
    dispatcher.register("add a", "Adds two integers", |a: isize, b: isize| {
        let sum = a.checked_add(b);
        match sum {
            Some(sum) => output::result("add", &sum.to_string(), json!({ "value": sum })),
            None => output::error(&format!("{a} + {b} overflows")),
        }
    });

    dispatcher.register("scale", "Multiplies a value by a factor", |value: f64, factor: f32| {
        let product = value * f64::from(factor);
        output::result("scale", &product.to_string(), json!({ "value": product }));
    });
}
