use anyhow::Result;
use qubit_linalg::math::{c64, Matrix};
use qubit_linalg::ops::{act, norm, scale, subtract};
use qubit_linalg::{eigen, is_hermitian};

fn main() -> Result<()> {
    env_logger::init();

    let m = Matrix::from_rows(&[
        [c64(3.0, 0.0), c64(2.0, 1.0)],
        [c64(2.0, -1.0), c64(1.0, 0.0)],
    ])?;

    println!("M = {}", m);
    println!("Hermitian: {}", is_hermitian(&m));

    for pair in eigen(&m)? {
        let residual = subtract(&act(&m, &pair.vector)?, &scale(pair.value, &pair.vector))?;
        println!(
            "λ = {:.8}  v = {}  |Mv - λv| = {:e}",
            pair.value.re,
            pair.vector,
            norm(&residual)?
        );
    }

    Ok(())
}
