use std::hint::black_box;

/// Computes `n³` by counting every cell of an `n × n × n` cube.
///
/// Runtime grows with the cube of `n`, which is the whole point: the demo needs
/// a computation whose latency is visible and scales with the input.
pub fn cube_brute_force(n: u32) -> u64 {
    let mut result: u64 = 0;
    for _ in 0..n {
        for _ in 0..n {
            for _ in 0..n {
                // keeps the loops from being folded into a multiplication
                result = black_box(result) + 1;
            }
        }
    }
    result
}
