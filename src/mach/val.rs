use num_bigint::BigInt;

/// Runtime value. All arithmetic is arbitrary precision, so numeric
/// overflow is impossible by construction.
pub type Val = BigInt;
