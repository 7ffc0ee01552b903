//! Minimal counter application.
//!
//! Run with: cargo run --example counter
//!
//! Up/down arrows (or j/k) change the count; escape or ctrl+c quits.

use tiller::{Cmd, Component, Program, RuntimeConfig, SystemEvent, TextRenderer};

struct Counter;

#[derive(Debug)]
enum Msg {
    Increment,
    Decrement,
}

impl Component for Counter {
    type Model = i64;
    type Msg = Msg;
    type View = String;

    fn init(&self) -> (i64, Vec<Cmd<Msg>>) {
        (0, Vec::new())
    }

    fn update(&self, msg: Msg, model: &i64) -> (i64, Vec<Cmd<Msg>>) {
        let next = match msg {
            Msg::Increment => model + 1,
            Msg::Decrement => model - 1,
        };
        (next, Vec::new())
    }

    fn view(&self, model: &i64) -> String {
        format!("count: {model}\n\nup/k to increment, down/j to decrement, escape or ctrl+c to quit")
    }

    fn system(&self, event: SystemEvent<'_>) -> Option<Msg> {
        match event {
            SystemEvent::Key(key) => match key.key.as_str() {
                "up" | "k" => Some(Msg::Increment),
                "down" | "j" => Some(Msg::Decrement),
                _ => None,
            },
            _ => None,
        }
    }
}

fn main() -> tiller::Result<()> {
    let config = RuntimeConfig::default().with_fps(30).with_quit_on_escape();
    Program::new(Counter)
        .with_config(config)
        .run(TextRenderer::new())
}
