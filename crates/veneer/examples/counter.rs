//! Example: a counter component with a stylesheet gate and a state cell

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use veneer::{Component, ComponentDescriptor, Host, RenderContext, StateCell};

struct Counter {
    label: StateCell<Counter, String>,
}

impl Counter {
    fn render_label(&mut self, cx: &mut RenderContext<'_, Self>) {
        let label = self.label.value().clone();
        cx.set_text("label", &label);
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            label: StateCell::new("Clicks".to_string(), Some(Counter::render_label)),
        }
    }
}

impl Component for Counter {
    type State = u32;

    fn state_eq(current: &u32, new: &u32) -> bool {
        current == new
    }

    fn render(&mut self, cx: &mut RenderContext<'_, Self>) {
        let count = cx.state().to_string();
        cx.set_text("count", &count);
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("veneer=debug".parse()?))
        .init();

    let mut host = Host::default();
    let class = host.define::<Counter>(
        ComponentDescriptor::new("x-counter")
            .template(r#"<span id="label"></span>: <b id="count">0</b>"#)
            .style_sheet_paths("counter.css")
            .style_sheet(":host { font-family: sans-serif; }")
            .light_dom_style_sheet("x-counter { margin: 4px; }"),
    )?;

    let mut counter = host.create_default(&class)?;
    println!("hidden after construction: {}", counter.is_hidden());

    counter.connected_callback();
    for _ in 0..3 {
        let next = counter.state() + 1;
        counter.set_state(next);
    }
    counter.mutate(|c| &mut c.label, "Presses".to_string());

    host.run_until_idle();
    println!("hidden after stylesheets settled: {}", counter.is_hidden());

    if let Some(shadow) = counter.shadow_root() {
        println!("shadow: {}", shadow.inner_html());
    }
    println!("head: {}", host.document().head_html());
    println!("veneer v{}", veneer::VERSION);

    Ok(())
}
