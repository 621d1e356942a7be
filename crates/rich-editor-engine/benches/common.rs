// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markup(paragraphs: usize) -> String {
    let base = "<p>Notes on #rust and <b>#wasm</b> for today<br>todo: check the <i>bridge</i> queue</p>";
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn generate_highlighted_markup(paragraphs: usize) -> String {
    let base = r#"<p>Notes on <span class="hashtag">#rust</span> and <b><span class="hashtag">#wasm</span></b><br><span class="hashtag">todo</span>: done</p>"#;
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn highlight_words() -> Vec<String> {
    vec!["todo".to_string(), "queue".to_string()]
}
