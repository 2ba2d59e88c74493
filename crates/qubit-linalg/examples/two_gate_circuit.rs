use anyhow::Result;
use qubit_linalg::gates::{hadamard, ket_zero, pauli_x};
use qubit_linalg::ops::{act, norm};

fn main() -> Result<()> {
    env_logger::init();

    // |0> -> H -> X -> H
    let v0 = ket_zero();
    let h = hadamard();
    let x = pauli_x();

    let v1 = act(&h, &v0)?;
    println!("H|0>      = {}", v1);

    let v2 = act(&x, &v1)?;
    println!("XH|0>     = {}", v2);

    let v3 = act(&h, &v2)?;
    println!("HXH|0>    = {}", v3);
    println!("norm      = {}", norm(&v3)?);

    Ok(())
}
