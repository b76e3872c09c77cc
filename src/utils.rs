use crate::{vector::Vector, Result};
use rand::Rng;

pub fn cosine_similarity(a: &Vector, b: &Vector) -> Result<f64> {
    let dot_product = a.dot(b)?;
    let norm_a = a.magnitude();
    let norm_b = b.magnitude();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

pub fn euclidean_distance(a: &Vector, b: &Vector) -> Result<f64> {
    Ok(a.sub(b)?.magnitude())
}

pub fn generate_random_vectors(dimension: usize, count: usize) -> Result<Vec<Vector>> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            Vector::new(
                (0..dimension)
                    .map(|_| rng.gen_range(-1.0..1.0))
                    .collect(),
            )
        })
        .collect()
}
