use seqbuf::SeqVec;

fn main() -> Result<(), seqbuf::Error> {
    let mut cars = SeqVec::new();

    cars.push("Land Rover")?;
    cars.push("Lexus")?;
    cars.push("BMW")?;
    cars.push("Chevy")?;
    println!("{cars:?}");
    println!("{}", cars.get(0)?);

    // Overwrite by index, then cut one out of the middle
    cars.set(0, "Land Rover Discovery Sport")?;
    cars.remove(2)?;
    println!("Num cars: {}", cars.len());

    for car in &cars {
        println!("{car}");
    }

    cars.sort();
    assert_eq!(cars, ["Chevy", "Land Rover Discovery Sport", "Lexus"]);
    for car in &cars {
        println!("{car}");
    }

    println!("Example 1 passed: Basic sequence operations work!");
    Ok(())
}
