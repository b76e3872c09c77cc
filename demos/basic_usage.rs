use vector_math::{
    utils::{cosine_similarity, euclidean_distance, generate_random_vectors},
    Vector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Euclidean Vector Demo");
    println!("========================\n");

    // Construction and display
    let a = Vector::new(vec![1.0, 2.0, 2.0])?;
    let b = Vector::new(vec![3.0, 0.0, 4.0])?;
    println!("a = {}", a);
    println!("b = {}", b);
    println!("dimension: {}\n", a.dimension());

    // Arithmetic
    println!("➕ Arithmetic");
    println!("  a + b = {}", a.add(&b)?);
    println!("  a - b = {}", a.sub(&b)?);
    println!("  a * 2 = {}\n", a.scale(2.0));

    // Geometry
    println!("📐 Geometry");
    println!("  |a| = {}", a.magnitude());
    println!("  unit(a) = {}", a.normalize()?);
    println!("  a . b = {}", a.dot(&b)?);
    println!("  angle(a, b) = {:.4}°", a.angle_degrees(&b)?);
    println!("  a x b = {}\n", a.cross(&b)?);

    // Predicates
    println!("❓ Predicates");
    let x_axis = Vector::new(vec![1.0, 0.0, 0.0])?;
    let y_axis = Vector::new(vec![0.0, 1.0, 0.0])?;
    println!("  x ⟂ y: {}", x_axis.is_orthogonal(&y_axis)?);
    println!("  x ∥ -2x: {}", x_axis.is_parallel(&x_axis.scale(-2.0))?);
    println!("  zeros(3) is zero: {}\n", Vector::zeros(3)?.is_zero());

    // Distance helpers over a random batch
    println!("🔎 Comparing 5 random 64-dimensional vectors against the first...");
    let vectors = generate_random_vectors(64, 5)?;
    for (i, vector) in vectors.iter().enumerate().skip(1) {
        println!(
            "  #{} distance: {:.4}, cosine similarity: {:.4}",
            i,
            euclidean_distance(&vectors[0], vector)?,
            cosine_similarity(&vectors[0], vector)?
        );
    }

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
