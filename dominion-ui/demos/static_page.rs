//! Render the complete site to a standalone HTML file.
//!
//! ```sh
//! cargo run --example static_page
//! open dominion.html
//! ```

fn main() -> std::io::Result<()> {
    let html = dominion_ui::render_page("https://dominion.example");
    std::fs::write("dominion.html", &html)?;
    println!("wrote dominion.html ({} bytes)", html.len());
    Ok(())
}
