use seqbuf::SeqVec;

fn main() -> Result<(), seqbuf::Error> {
    let mut seq = SeqVec::new();
    let mut growth_steps = SeqVec::new();

    for i in 0..64u64 {
        if seq.capacity() == seq.len() {
            growth_steps.push(seq.capacity())?;
        }
        seq.push(i)?;
    }

    // The capacity doubles every time the buffer fills up
    println!("growth steps: {growth_steps:?}");
    assert_eq!(growth_steps, [0, 1, 2, 4, 8, 16, 32]);

    seq.truncate(3);
    seq.shrink_to_fit()?;
    assert_eq!(seq.capacity(), 3);
    assert_eq!(seq.as_slice(), &[0, 1, 2]);

    println!("Example 3 passed: growth and shrink work!");
    Ok(())
}
