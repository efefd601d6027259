// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline_content(size: usize) -> String {
    let base = "# Title\n\n- Bullet with *emphasis*\n  - Nested ==highlight==\n    - Deeper `*code*`\n- Another item\n\n**Label**\n- under label\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_outline(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {}\n", section));
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{}- item at level {}\n", indent, level));
        }
        content.push('\n');
    }

    content
}
