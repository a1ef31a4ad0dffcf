// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use linkmark_engine::{DocumentRef, ProjectContext};

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section [[Note 3]]\n\nParagraph with **bold**, *em* and `code`, see [[Note 1|the first note]].\n\n- Bullet with [a link](https://example.com)\n* Another item [[missing]]\n\n```rust\nfn example() {\n    println!(\"[[not a link]]\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_link_heavy_line(links: usize) -> String {
    (0..links)
        .map(|i| format!("[[Note {i}|label {i}]] __x__"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(dead_code)]
pub fn generate_project(documents: usize) -> ProjectContext {
    let docs = (0..documents)
        .map(|i| DocumentRef::new(format!("notes/note-{i}.md"), format!("Note {i}")))
        .collect();
    ProjectContext::new("bench", docs)
}
