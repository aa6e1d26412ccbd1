use lexto_rs::Chunker;

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ภาษาไทย<b>Thai</b> 2567 ปี, ok?".to_string());
    println!("Input: {}", input);

    let chunker = Chunker::new(&input);
    let chunks = chunker.make_chunks();

    println!("\nRuns:");
    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "  {}: {:?} - type: {:?}, bytes: {:?}",
            i,
            &input[chunk.span()],
            chunk.kind,
            chunk.span()
        );
    }

    let thai_runs = chunks.iter().filter(|c| c.kind == lexto_rs::TokenKind::Thai).count();
    println!("\nThai runs count: {}", thai_runs);
}
