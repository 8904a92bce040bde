use seqbuf::SeqVec;

fn main() -> Result<(), seqbuf::Error> {
    // A fixed-size array: capacity and length coincide, elements can
    // only be read, written and iterated
    let fruits = ["apple", "orange", "peach", "berry"];
    println!("{} length {}", fruits[0], fruits.len());

    for fruit in fruits {
        println!("{fruit}");
    }

    // The growable sequence tracks capacity apart from length
    let mut basket = SeqVec::from_slice(&fruits)?;
    basket.push("mango")?;
    assert_eq!(basket.len(), 5);
    assert!(basket.capacity() >= basket.len());

    // Room for insertion and deletion at any index
    basket.insert(0, "lychee")?;
    let eaten = basket.remove(3)?;
    println!("ate the {eaten}");
    println!("{basket:?}");

    println!("Example 2 passed: fixed and growable sequences behave!");
    Ok(())
}
