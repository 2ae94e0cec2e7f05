// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_content(size: usize) -> String {
    let base = "## Section\n\n**Objectives**\n- First goal with *emphasis*\n- Second goal with `code`\n\nParagraph with some **bold** content.\nA second line.\n\n```python\nprint(\"hello\")\n```\n\n> A quote.\nNote: remember this.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_quiz(questions: usize) -> String {
    let mut content = String::new();
    for n in 1..=questions {
        content.push_str(&format!(
            "{n}. What is {n} + {n}?\n- A) {}\n- B) {}\n- C) {}\n- D) {}\n\n**Correct Answer: B) {}**\n\n",
            n,
            n * 2,
            n * 3,
            n * 4,
            n * 2
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_slides(slides: usize) -> String {
    let mut content = String::new();
    for n in 1..=slides {
        content.push_str(&format!(
            "Slide {n}: Topic {n}\n- Point one\n- Point two\n- Point three\n\n"
        ));
    }
    content
}
