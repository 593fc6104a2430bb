//! Text and flag demo commands.

use commando::Dispatcher;
use serde_json::json;

use crate::output;

pub fn register(dispatcher: &Dispatcher) {
    dispatcher.register("echo say", "Prints its argument", |text: String| {
        output::result("echo", &text, json!({ "value": text }));
    });

    dispatcher.register("repeat", "Prints a string N times", |text: String, times: u8| {
        let lines = vec![text; usize::from(times)];
        output::result("repeat", &lines.join("\n"), json!({ "value": lines }));
    });

    dispatcher.register("flag", "Reports a boolean switch", |on: bool| {
        let state = if on { "on" } else { "off" };
        output::result("flag", state, json!({ "value": on }));
    });
}
