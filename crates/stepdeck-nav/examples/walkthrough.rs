//! Example: click through a presentation from start to end
//!
//! Run with a page of your own, or without arguments for a built-in demo:
//!
//! ```sh
//! RUST_LOG=stepdeck_nav=debug cargo run --example walkthrough -- deck.html
//! ```

use stepdeck_nav::html::HtmlParser;
use stepdeck_nav::{Control, DeckConfig, Presentation};
use tracing_subscriber::EnvFilter;

const DEMO: &str = r#"<!DOCTYPE html>
<html><head><title>Demo deck</title></head><body>
<div class="slide"><h1>Intro</h1></div>
<div class="slide">
    <h1>Pipeline</h1>
    <p class="step" step_index="2">Deploy</p>
    <p class="step" step_index="0">Build</p>
    <p class="step" step_index="1">Test</p>
</div>
<div class="slide"><h1>Questions?</h1></div>
<button id="prev-button">Previous</button>
<button id="next-button">Next</button>
</body></html>"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let parser = HtmlParser::new();
    let document = match std::env::args().nth(1) {
        Some(path) => parser.parse_file(path)?,
        None => parser.parse(DEMO),
    };

    let mut deck = Presentation::load(document, DeckConfig::default())?;
    println!("stepdeck v{}: {} positions", stepdeck_nav::VERSION, deck.navigator().position_count());

    loop {
        report(&deck);
        if !deck.click_control(Control::Next) {
            break;
        }
    }

    while deck.click_control(Control::Previous) {}
    println!("back at {}", deck.position());
    Ok(())
}

fn report(deck: &Presentation) {
    let doc = deck.document();
    let config = deck.navigator().surface().config();

    let text: Vec<String> = deck
        .visible_slides()
        .into_iter()
        .flat_map(|slide| {
            let mut parts = Vec::new();
            for child in doc.tree().descendants(slide) {
                let hidden_step = doc.tree().has_class(child, &config.step_class)
                    && doc.display(child).is_some_and(|d| !d.is_visible());
                if !hidden_step && doc.tree().get(child).is_some_and(|n| n.is_element()) {
                    let own = doc.tree().text_content(child);
                    if !own.trim().is_empty() && doc.tree().children(child).all(|(_, n)| n.is_text()) {
                        parts.push(own.trim().to_string());
                    }
                }
            }
            parts
        })
        .collect();

    let buttons = deck.button_states();
    println!(
        "{:<16} {:<30} prev:{} next:{}",
        deck.position().to_string(),
        text.join(" / "),
        if buttons.previous_disabled { "off" } else { "on" },
        if buttons.next_disabled { "off" } else { "on" },
    );
}
